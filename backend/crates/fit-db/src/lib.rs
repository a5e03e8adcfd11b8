pub mod connection;
pub mod error;
pub mod plan_store;
pub mod repositories;

pub use connection::pool::{connect, run_migrations};
pub use connection::store_options::StoreOptions;
pub use error::{DbError, Result};
pub use plan_store::PlanStore;
pub use repositories::plan_repository::PlanRepository;
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::user_repository::UserRepository;

/// Embedded schema migrations for the store
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
