use fit_core::{Exercise, Meal, ProfileAttributes, WorkoutDay};

use std::collections::BTreeMap;

use serde_json::json;

/// Creates a profile document like the ones the chat layer collects
pub fn create_test_profile(age: u32, goals: &str) -> ProfileAttributes {
    match json!({ "age": age, "goals": goals }) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

/// Creates one workout day with the usual bodyweight circuit
pub fn create_test_workout_day(label: &str) -> WorkoutDay {
    WorkoutDay {
        day: label.to_string(),
        exercises: vec![
            Exercise::new("Push-ups")
                .with_detail("sets", "3")
                .with_detail("reps", "12")
                .with_detail("rest_period", "60s"),
            Exercise::new("Squats")
                .with_detail("sets", "3")
                .with_detail("reps", "15")
                .with_detail("rest_period", "60s"),
            Exercise::new("Plank")
                .with_detail("sets", "3")
                .with_detail("reps", "30s")
                .with_detail("rest_period", "60s"),
        ],
        duration: "45 minutes".to_string(),
        intensity: "moderate".to_string(),
    }
}

/// Creates a workout plan document of `days` entries labelled "Day 1".."Day N"
pub fn create_test_workout_plan(days: usize) -> Vec<WorkoutDay> {
    (1..=days)
        .map(|i| create_test_workout_day(&format!("Day {}", i)))
        .collect()
}

/// Creates a meal with sensible defaults
pub fn create_test_meal(meal_type: &str, calories: u32) -> Meal {
    Meal {
        meal_type: meal_type.to_string(),
        foods: vec!["chicken breast".to_string(), "rice".to_string()],
        calories,
        macros: BTreeMap::from([
            ("protein".to_string(), 40.0),
            ("carbs".to_string(), 55.0),
            ("fat".to_string(), 12.5),
        ]),
    }
}

/// Creates a three-meal diet plan document
pub fn create_test_diet_plan() -> Vec<Meal> {
    vec![
        create_test_meal("breakfast", 450),
        create_test_meal("lunch", 700),
        create_test_meal("dinner", 650),
    ]
}
