use super::*;
use crate::helpers::models::problem::*;
use crate::models::common::IdDimension;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn get_hash(costs: &Costs) -> u64 {
    let mut hasher = DefaultHasher::default();
    costs.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn can_compare_costs() {
    assert_eq!(test_costs(), test_costs());
    assert_ne!(test_costs(), empty_costs());
}

#[test]
fn can_hash_equal_costs_identically() {
    assert_eq!(get_hash(&test_costs()), get_hash(&test_costs()));
    assert_ne!(get_hash(&test_costs()), get_hash(&empty_costs()));
}

#[test]
fn can_set_and_get_vehicle_id() {
    let vehicle = test_vehicle_with_id("v1");

    assert_eq!(get_vehicle_id(&vehicle), "v1");
}

#[test]
fn can_keep_driver_dimensions() {
    let mut driver = test_driver();
    driver.dimens.set_id("d1");

    assert_eq!(driver.dimens.get_id(), Some(&"d1".to_string()));
}
