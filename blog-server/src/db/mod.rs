//! Database layer - connection pool, schema bootstrap, and post stores
//!
//! The pool is built once at startup and handed to the router as state.
//! All statements are parameterized; user input never reaches SQL text.

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
