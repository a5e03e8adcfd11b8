use crate::{CoreError, Exercise, Meal, PlanEntry, WorkoutDay};

use std::collections::BTreeMap;

use chrono::NaiveDate;
use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_exercise_with_details_when_serialized_then_details_are_flattened() {
    // Given
    let exercise = Exercise::new("Push-ups")
        .with_detail("sets", "3")
        .with_detail("reps", "12")
        .with_detail("rest_period", "60s");

    // When
    let value = serde_json::to_value(&exercise).unwrap();

    // Then
    assert_that!(
        value,
        eq(&json!({"name": "Push-ups", "sets": "3", "reps": "12", "rest_period": "60s"}))
    );
}

#[test]
fn given_model_output_when_deserialized_then_unknown_descriptors_are_kept() {
    // Given
    let raw = json!({
        "day": "Day 1",
        "exercises": [{"name": "Plank", "sets": 3, "hold": "30s"}],
        "duration": "45 minutes",
        "intensity": "moderate"
    });

    // When
    let day: WorkoutDay = serde_json::from_value(raw).unwrap();

    // Then
    assert_that!(day.exercises, len(eq(1)));
    assert_that!(day.exercises[0].name, eq("Plank"));
    assert_that!(day.exercises[0].details.get("sets"), some(eq(&json!(3))));
    assert_that!(day.exercises[0].details.get("hold"), some(eq(&json!("30s"))));
}

#[test]
fn given_entry_without_required_field_when_deserialized_then_fails() {
    let raw = json!({"day": "Day 1", "exercises": [], "duration": "30 minutes"});

    let result = serde_json::from_value::<WorkoutDay>(raw);

    assert_that!(result, err(anything()));
}

#[test]
fn test_default_plan_names() {
    assert_eq!(WorkoutDay::default_plan_name(5), "5-Day Workout Plan");
    let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    assert_eq!(Meal::default_plan_name(date), "Diet Plan (2025-03-14)");
}

#[test]
fn given_detail_named_name_when_validating_day_then_rejected() {
    // Given
    let day = WorkoutDay {
        day: "Day 1".to_string(),
        exercises: vec![
            Exercise::new("Squat").with_detail("sets", 3),
            Exercise::new("Row").with_detail("name", "Bent-over row"),
        ],
        duration: "40 minutes".to_string(),
        intensity: "moderate".to_string(),
    };

    // When
    let result = day.validate();

    // Then
    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_non_finite_macro_when_validating_meal_then_rejected() {
    let mut macros = BTreeMap::from([("protein".to_string(), 30.0)]);
    let valid = Meal {
        meal_type: "lunch".to_string(),
        foods: vec!["rice".to_string()],
        calories: 600,
        macros: macros.clone(),
    };
    macros.insert("fiber".to_string(), f64::NAN);
    let invalid = Meal { macros, ..valid.clone() };

    assert_that!(valid.validate(), ok(anything()));
    assert!(matches!(invalid.validate(), Err(CoreError::Validation { .. })));
}
