//! Post entity and the form payload used to create or edit one

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a post, assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct PostId(i32);

impl PostId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A stored blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub description: String,
    pub author: String,
}

/// Field values for an insert or an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub author: String,
}

/// Urlencoded body submitted by the create and edit forms.
///
/// Missing fields become empty strings; nothing else is checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostForm {
    #[serde(rename = "blogTitle", default)]
    pub title: String,
    #[serde(rename = "blogDes", default)]
    pub description: String,
    #[serde(rename = "blogAut", default)]
    pub author: String,
}

impl From<PostForm> for NewPost {
    fn from(form: PostForm) -> Self {
        Self {
            title: form.title,
            description: form.description,
            author: form.author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_id_parses_integers_only() {
        assert_eq!("42".parse::<PostId>().unwrap(), PostId::new(42));
        assert!("abc".parse::<PostId>().is_err());
        assert!("".parse::<PostId>().is_err());
        assert!("99999999999".parse::<PostId>().is_err());
    }

    #[test]
    fn form_keeps_values_verbatim() {
        let form = PostForm {
            title: "  spaced  ".into(),
            description: String::new(),
            author: "<b>me</b>".into(),
        };
        let post = NewPost::from(form);
        assert_eq!(post.title, "  spaced  ");
        assert_eq!(post.description, "");
        assert_eq!(post.author, "<b>me</b>");
    }
}
