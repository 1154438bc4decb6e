use crate::models::common::{Duration, Location, Schedule, TimeWindow};

/// Specifies activity place.
#[derive(Clone, Debug)]
pub struct Place {
    /// Location where activity is performed.
    pub location: Location,

    /// Specifies activity's service duration.
    pub duration: Duration,

    /// Specifies a one time preparation effort spent on the first visit to the location only.
    pub preparation: Duration,

    /// Specifies activity's time window: an interval when activity is allowed to be started.
    pub time: TimeWindow,
}

/// Represents activity which is needed to be performed.
pub struct Activity {
    /// Specifies activity details.
    pub place: Place,

    /// Specifies activity's schedule: actual arrival and departure time.
    pub schedule: Schedule,
}

impl Activity {
    /// Creates an activity performed at given place.
    pub fn new(place: Place) -> Self {
        Self { place, schedule: Schedule::new(0., 0.) }
    }

    /// Creates a synthetic activity which marks the start or the end of a tour at given
    /// location: it takes no time and accepts any operation start.
    pub fn new_terminal(location: Location) -> Self {
        Self::new(Place { location, duration: 0., preparation: 0., time: TimeWindow::max() })
    }
}
