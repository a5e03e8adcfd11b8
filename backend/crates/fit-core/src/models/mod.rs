pub mod diet;
pub mod ids;
pub mod plan_kind;
pub mod profile;
pub mod saved_plan;
pub mod user;
pub mod workout;
