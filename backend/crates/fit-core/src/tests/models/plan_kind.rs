use crate::PlanKind;

use std::str::FromStr;

#[test]
fn test_plan_kind_as_str() {
    assert_eq!(PlanKind::Workout.as_str(), "workout");
    assert_eq!(PlanKind::Diet.as_str(), "diet");
}

#[test]
fn test_plan_kind_from_str() {
    assert_eq!(PlanKind::from_str("workout").unwrap(), PlanKind::Workout);
    assert_eq!(PlanKind::from_str("diet").unwrap(), PlanKind::Diet);
    assert!(PlanKind::from_str("Workout").is_err());
    assert!(PlanKind::from_str("meal").is_err());
}

#[test]
fn test_plan_kind_display_matches_as_str() {
    assert_eq!(PlanKind::Diet.to_string(), "diet");
}
