pub mod store_options;
pub mod pool;
