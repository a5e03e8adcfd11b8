use fit_core::UserId;
use fit_db::{MIGRATOR, PlanStore, StoreOptions, connect};

use std::path::PathBuf;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    // Create in-memory database connection options
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    // Create pool
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    // Run migrations
    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Creates a store over a fresh in-memory database
pub async fn create_test_store() -> PlanStore {
    PlanStore::new(create_test_pool().await)
}

/// Creates a store backed by a database file with several pooled
/// connections, for tests that exercise real concurrency.
/// Keep the returned `TempDir` alive for the duration of the test.
pub async fn create_file_store(max_connections: u32) -> (TempDir, PlanStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let options = StoreOptions::new(file_store_path(&dir)).max_connections(max_connections);

    let store = PlanStore::open(&options)
        .await
        .expect("Failed to open file-backed store");

    (dir, store)
}

/// Database file used by `create_file_store`
pub fn file_store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("data").join("fitness.db")
}

/// Opens a second pool on the database file of a `create_file_store` store,
/// for assertions that read tables directly
pub async fn open_file_pool(dir: &TempDir) -> SqlitePool {
    connect(&StoreOptions::new(file_store_path(dir)))
        .await
        .expect("Failed to open file pool")
}

/// Inserts a user directly, bypassing the store
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> UserId {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (username, created_at) VALUES (?, strftime('%s', 'now')) RETURNING id",
    )
    .bind(username)
    .fetch_one(pool)
    .await
    .expect("Failed to create test user");

    UserId(id)
}
