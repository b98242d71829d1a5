//! Post domain type and trailing-tag extraction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single feed post.
///
/// `content` and `tag` are the two fields layout cares about; `author`
/// and `created_at` are opaque payload fields carried through untouched.
///
/// # Invariants
/// - Once split, `content` + `tag` concatenated reconstruct the text the
///   post carried before the split.
/// - A post is split at most once per content value: a post that already
///   carries a tag is never re-split, and [`set_content`] re-arms the
///   split by clearing the tag.
///
/// [`set_content`]: Post::set_content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post body. After a split this is the text before the last `#`.
    content: String,

    /// Trailing hashtag, including the `#`. Derived; absent until a
    /// split happens and absent forever for content without `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tag: Option<String>,

    /// Display name of the post's author. Opaque to layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<String>,

    /// Creation timestamp. Opaque to layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a post from raw content, with no tag and no opaque fields.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tag: None,
            author: None,
            created_at: None,
        }
    }

    /// Create a post with an author attached.
    pub fn with_author(content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            ..Self::new(content)
        }
    }

    /// Post body text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Extracted trailing tag (including the leading `#`), if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Author display name, if the payload carried one.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Creation timestamp, if the payload carried one.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Replace the post's content with a new value.
    ///
    /// Clears any extracted tag: the new content value is a fresh text
    /// and eligible for splitting again on the next layout pass.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.tag = None;
    }

    /// Split a trailing hashtag off the content, at most once.
    ///
    /// Splits at the **last** `#` in the content: everything before it
    /// stays as `content`, the `#` and everything after become `tag`.
    /// Returns `true` if a split happened. No-ops (returning `false`)
    /// when the content has no `#` or when a tag was already extracted
    /// for the current content value, so repeated layout passes leave
    /// the post untouched.
    pub fn split_trailing_tag(&mut self) -> bool {
        if self.tag.is_some() {
            return false;
        }
        let Some(hash) = self.content.rfind('#') else {
            return false;
        };
        self.tag = Some(self.content.split_off(hash));
        true
    }

    /// Content length in characters, the height proxy the shortest-column
    /// heuristic scores with.
    pub fn content_weight(&self) -> usize {
        self.content.chars().count()
    }
}
