use crate::models::problem::{ActivityCost, ActivityCostSettings, TimeWindowActivityCost};
use std::sync::Arc;

pub fn test_settings(missed_window_penalty: f64) -> ActivityCostSettings {
    ActivityCostSettings::new(missed_window_penalty).unwrap()
}

pub fn test_activity_cost() -> TimeWindowActivityCost {
    test_activity_cost_with_penalty(1.)
}

pub fn test_activity_cost_with_penalty(missed_window_penalty: f64) -> TimeWindowActivityCost {
    TimeWindowActivityCost::new(test_settings(missed_window_penalty))
}

pub fn test_shared_activity_cost() -> Arc<dyn ActivityCost + Send + Sync> {
    Arc::new(test_activity_cost())
}
