use crate::{DietPlan, Meal, PlanId, PlanKind, UserId, WorkoutPlan};

use std::collections::BTreeMap;

use chrono::Utc;
use googletest::prelude::*;

fn breakfast() -> Meal {
    Meal {
        meal_type: "breakfast".to_string(),
        foods: vec!["oats".to_string(), "banana".to_string()],
        calories: 450,
        macros: BTreeMap::from([
            ("protein".to_string(), 15.0),
            ("carbs".to_string(), 70.0),
            ("fat".to_string(), 9.5),
        ]),
    }
}

#[test]
fn given_diet_plan_when_kind_queried_then_diet() {
    let plan = DietPlan {
        id: PlanId(1),
        user_id: UserId(7),
        name: "Cut".to_string(),
        created_at: Utc::now(),
        entries: vec![breakfast()],
    };

    assert_that!(plan.kind(), eq(PlanKind::Diet));
    assert_that!(plan.len(), eq(1));
    assert_that!(plan.is_empty(), eq(false));
}

#[test]
fn given_workout_plan_when_serialized_then_ids_are_plain_integers() {
    let plan = WorkoutPlan {
        id: PlanId(3),
        user_id: UserId(9),
        name: "Week1".to_string(),
        created_at: Utc::now(),
        entries: vec![],
    };

    let value = serde_json::to_value(&plan).unwrap();

    assert_that!(value["id"].as_i64(), some(eq(3)));
    assert_that!(value["user_id"].as_i64(), some(eq(9)));
    assert_that!(plan.kind(), eq(PlanKind::Workout));
}
