//! Domain models for the blog

pub mod post;

pub use post::{NewPost, Post, PostForm, PostId};
