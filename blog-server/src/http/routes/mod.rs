//! Route handlers, one module per concern:
//! - pages: the landing page
//! - posts: everything that reads or writes the posts table

pub mod pages;
pub mod posts;
