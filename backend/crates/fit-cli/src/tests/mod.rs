
use fit_db::{PlanStore, StoreOptions};

use tempfile::TempDir;

/// Open a migrated store backed by a file in a fresh temp directory
pub(crate) async fn open_temp_store() -> (TempDir, PlanStore) {
    let temp = TempDir::new().unwrap();
    let options = StoreOptions::new(temp.path().join("fitness.db"));
    let store = PlanStore::open(&options).await.unwrap();
    (temp, store)
}
