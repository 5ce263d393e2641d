//! Repository implementations for post storage
//!
//! Every route goes through the `PostStore` trait:
//! - `PgPostStore` for PostgreSQL
//! - `MemoryPostStore` for tests and database-free runs

pub mod memory;
pub mod posts;

pub use memory::MemoryPostStore;
pub use posts::{PgPostStore, PostStore, StoreError};
