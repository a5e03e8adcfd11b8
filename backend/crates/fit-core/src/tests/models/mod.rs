mod plan_kind;
mod saved_plan;
mod workout;
