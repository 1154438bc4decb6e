#[cfg(test)]
#[path = "../../../tests/unit/models/problem/costs_test.rs"]
mod costs_test;

use crate::models::common::{Cost, Duration, Timestamp};
use crate::models::problem::{Driver, Vehicle};
use crate::models::solution::Activity;

/// Named arrival time markers which flag a non-physical arrival context: tour start,
/// tour end or no known context at all. Markers carry no clock meaning: they are
/// compared by value and must never take part in time window arithmetic.
pub mod arrival_time {
    use super::Timestamp;

    /// Marks an arrival at the synthetic start activity of a tour.
    pub const TOUR_START: Timestamp = -1.;

    /// Marks an arrival at the synthetic end activity of a tour.
    pub const TOUR_END: Timestamp = -2.;

    /// Marks an arrival with no defined context.
    pub const UNDEFINED: Timestamp = -3.;

    /// Checks whether given arrival time is one of the markers rather than a real clock value.
    pub fn is_marker(arrival: Timestamp) -> bool {
        arrival == TOUR_START || arrival == TOUR_END || arrival == UNDEFINED
    }
}

/// A cost of an activity which cannot be conducted within its own time window, no matter
/// the arrival time. Keeps comparison of candidate routes total instead of failing on
/// the hot path.
pub const INFEASIBLE_COST: Cost = f64::INFINITY;

/// Settings shared read-only by activity cost models. Immutable after construction.
pub struct ActivityCostSettings {
    missed_window_penalty: Cost,
}

impl ActivityCostSettings {
    /// Creates a new instance of `ActivityCostSettings` with given penalty rate applied
    /// per unit of lateness against a missed time window.
    pub fn new(missed_window_penalty: Cost) -> Result<Self, String> {
        if !missed_window_penalty.is_finite() || missed_window_penalty < 0. {
            return Err(format!("invalid missed time window penalty: {}", missed_window_penalty));
        }

        Ok(Self { missed_window_penalty })
    }

    /// Returns the penalty rate applied per unit of lateness.
    pub fn missed_window_penalty(&self) -> Cost {
        self.missed_window_penalty
    }
}

/// Provides the way to get cost and duration information for specific activities done by
/// specific vehicle and driver.
///
/// Implementations hold no mutable state: a single instance is shared between concurrent
/// callers and identical inputs yield identical results.
pub trait ActivityCost {
    /// Returns cost to perform activity at given arrival time.
    ///
    /// `arrival` is the arrival time at the activity, which is not necessarily the
    /// operation start time: when it is before the earliest allowed start, the driver
    /// waits there. Real arrival times are expected to be non negative; values from
    /// [`arrival_time`] mark non-physical contexts and contribute no waiting or lateness.
    fn cost(&self, vehicle: &Vehicle, driver: &Driver, activity: &Activity, arrival: Timestamp) -> Cost;

    /// Returns operation time spent to perform activity without previous activity
    /// context. The operation starts at the later of `arrival` and the earliest allowed
    /// start, so waiting does not count towards the result.
    fn duration(&self, vehicle: &Vehicle, driver: &Driver, activity: &Activity, arrival: Timestamp) -> Duration;

    /// Returns operation time spent to perform activity given the previous activity on
    /// the tour, `None` when the activity is the first one after the tour start.
    ///
    /// Implementations may refine the estimate using the previous activity, but whenever
    /// the context gives nothing to refine, the result must be equal to the context free
    /// [`ActivityCost::duration`], which is also the default behavior.
    fn duration_with_prev(
        &self,
        _prev: Option<&Activity>,
        vehicle: &Vehicle,
        driver: &Driver,
        activity: &Activity,
        arrival: Timestamp,
    ) -> Duration {
        self.duration(vehicle, driver, activity, arrival)
    }
}

/// An activity cost model which charges waiting and service time at driver and vehicle
/// rates and penalizes operation starts after the latest allowed one.
///
/// The service term is derived from the same duration the duration estimation reports,
/// while the rates turning time into cost stay on [`Costs`](crate::models::problem::Costs)
/// and the lateness penalty on [`ActivityCostSettings`]: both sides are configured
/// independently from each other.
pub struct TimeWindowActivityCost {
    settings: ActivityCostSettings,
}

impl TimeWindowActivityCost {
    /// Creates a new instance of `TimeWindowActivityCost` with given settings.
    pub fn new(settings: ActivityCostSettings) -> Self {
        Self { settings }
    }
}

impl ActivityCost for TimeWindowActivityCost {
    fn cost(&self, vehicle: &Vehicle, driver: &Driver, activity: &Activity, arrival: Timestamp) -> Cost {
        let time = &activity.place.time;

        if time.start > time.end {
            return INFEASIBLE_COST;
        }

        let service = self.duration(vehicle, driver, activity, arrival);
        let mut cost = service * (driver.costs.per_service_time + vehicle.costs.per_service_time);

        if !arrival_time::is_marker(arrival) {
            let waiting = (time.start - arrival).max(0.);
            let lateness = (arrival - time.end).max(0.);

            cost += waiting * (driver.costs.per_waiting_time + vehicle.costs.per_waiting_time);
            cost += lateness * self.settings.missed_window_penalty();
        }

        cost
    }

    fn duration(&self, _: &Vehicle, _: &Driver, activity: &Activity, _: Timestamp) -> Duration {
        activity.place.duration + activity.place.preparation
    }

    fn duration_with_prev(
        &self,
        prev: Option<&Activity>,
        vehicle: &Vehicle,
        driver: &Driver,
        activity: &Activity,
        arrival: Timestamp,
    ) -> Duration {
        match prev {
            // NOTE preparation is a one time effort: a revisit of the same location skips it
            Some(prev) if prev.place.location == activity.place.location => activity.place.duration,
            _ => self.duration(vehicle, driver, activity, arrival),
        }
    }
}
