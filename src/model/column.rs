//! Column: an ordered subset of posts assigned to one vertical lane.

use super::post::Post;
use super::types::PostIndex;

/// One vertical lane of the computed layout.
///
/// A column is a derived value: it holds validated indices into the
/// caller's post sequence, never owned posts, and is rebuilt from
/// scratch on every layout pass. Posts appear in relative input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    posts: Vec<PostIndex>,
}

impl Column {
    /// Create an empty column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a post to the bottom of the column.
    pub fn push(&mut self, index: PostIndex) {
        self.posts.push(index);
    }

    /// Number of posts in the column.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the column holds no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Post indices in top-to-bottom order.
    pub fn post_indices(&self) -> &[PostIndex] {
        &self.posts
    }

    /// Resolve the column's indices against the post sequence the layout
    /// pass consumed. Indices that fall outside the slice are skipped.
    pub fn resolve<'a>(&'a self, posts: &'a [Post]) -> impl Iterator<Item = &'a Post> + 'a {
        self.posts.iter().filter_map(|index| posts.get(index.get()))
    }
}
