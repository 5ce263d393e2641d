//! HTML views rendered with minijinja
//!
//! Sources are compiled into the binary and registered once at startup.
//! Names end in `.html`, so minijinja's default auto-escaping applies.

use std::sync::Arc;

use minijinja::{context, Environment};
use serde::Serialize;

use crate::models::Post;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("create.html", include_str!("../templates/create.html")),
    ("details.html", include_str!("../templates/details.html")),
    ("edit.html", include_str!("../templates/edit.html")),
];

/// Compiled template set, cheap to clone
#[derive(Clone)]
pub struct Templates {
    env: Arc<Environment<'static>>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        Ok(Self { env: Arc::new(env) })
    }

    fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }

    pub fn index(&self) -> Result<String, minijinja::Error> {
        self.render("index.html", context! {})
    }

    pub fn home(&self, posts: &[Post]) -> Result<String, minijinja::Error> {
        self.render("home.html", context! { posts })
    }

    pub fn create_form(&self) -> Result<String, minijinja::Error> {
        self.render("create.html", context! {})
    }

    pub fn details(&self, post: &Post) -> Result<String, minijinja::Error> {
        self.render("details.html", context! { post })
    }

    pub fn edit_form(&self, post: &Post) -> Result<String, minijinja::Error> {
        self.render("edit.html", context! { post })
    }
}
