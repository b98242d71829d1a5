//! The column layout engine and its update protocol.

use tracing::debug;

use super::breakpoints::column_count_for_width;
use super::heuristic::approximate_shortest_column;
use crate::model::{Column, ColumnCount, FeedRevision, Post, PostIndex, ViewportWidth};

/// Result of a [`ColumnLayoutEngine::recompute`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutOutcome {
    /// A full layout pass ran; the column set was replaced.
    Recomputed,
    /// The feed revision matched the last completed pass; the prior
    /// column set was kept untouched.
    Skipped,
}

/// Arranges a post feed into columns of approximately equal height.
///
/// The engine is a leaf component driven by two external change
/// signals, both answered with a full recompute that discards the prior
/// column set:
/// - the post sequence changed — the data source bumps its
///   [`FeedRevision`] and calls [`recompute`];
/// - the viewport width changed — [`set_viewport_width`] records it and
///   invalidates the last pass so the next [`recompute`] runs even under
///   an unchanged revision.
///
/// Recompute is synchronous and runs to completion; the engine holds no
/// locks and owns no posts, only indices into the caller's sequence.
///
/// [`recompute`]: ColumnLayoutEngine::recompute
/// [`set_viewport_width`]: ColumnLayoutEngine::set_viewport_width
#[derive(Debug)]
pub struct ColumnLayoutEngine {
    viewport_width: ViewportWidth,
    authenticated: bool,
    columns: Vec<Column>,
    last_pass: Option<FeedRevision>,
}

impl ColumnLayoutEngine {
    /// Create an engine for the given viewport width.
    ///
    /// `authenticated` is the capability read once from the external
    /// authentication collaborator; it is stored and surfaced but plays
    /// no part in layout.
    pub fn new(viewport_width: ViewportWidth, authenticated: bool) -> Self {
        debug!(%viewport_width, authenticated, "layout engine initialized");
        Self {
            viewport_width,
            authenticated,
            columns: Vec::new(),
            last_pass: None,
        }
    }

    /// Whether the current user was authenticated at initialization.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Viewport width the next layout pass will use.
    pub fn viewport_width(&self) -> ViewportWidth {
        self.viewport_width
    }

    /// The current column set: empty before the first pass, otherwise
    /// the output of the last completed one.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Record a viewport width change.
    ///
    /// A real change invalidates the last pass, so the next
    /// [`recompute`] runs a full layout even if the feed revision is
    /// unchanged. Passing the current width is a no-op. Returns whether
    /// the width actually changed.
    ///
    /// [`recompute`]: ColumnLayoutEngine::recompute
    pub fn set_viewport_width(&mut self, width: ViewportWidth) -> bool {
        if width == self.viewport_width {
            return false;
        }
        debug!(old = %self.viewport_width, new = %width, "viewport width changed");
        self.viewport_width = width;
        self.last_pass = None;
        true
    }

    /// Run a layout pass over `posts`, unless `revision` matches the
    /// last completed pass.
    ///
    /// A full pass splits each post's trailing tag (idempotently),
    /// derives the column count from the current viewport width, and
    /// assigns posts to columns in input order, each appended to the
    /// approximately shortest column at that moment. The new column set
    /// fully replaces the prior one.
    pub fn recompute(&mut self, posts: &mut [Post], revision: FeedRevision) -> LayoutOutcome {
        if self.last_pass == Some(revision) {
            debug!(revision = revision.get(), "recompute skipped: revision unchanged");
            return LayoutOutcome::Skipped;
        }

        for post in posts.iter_mut() {
            post.split_trailing_tag();
        }

        let count = column_count_for_width(self.viewport_width);
        self.columns = distribute(posts, count);
        self.last_pass = Some(revision);

        debug!(
            revision = revision.get(),
            posts = posts.len(),
            columns = self.columns.len(),
            "layout recomputed"
        );
        LayoutOutcome::Recomputed
    }
}

/// Assign posts to `count` columns in input order, each appended to the
/// approximately shortest column at the moment of assignment.
///
/// This is a greedy streaming assignment, not a globally optimal
/// partition. Every post lands in exactly one column, and posts sharing
/// a column keep their relative input order.
pub fn distribute(posts: &[Post], count: ColumnCount) -> Vec<Column> {
    let mut columns: Vec<Column> = (0..count.get()).map(|_| Column::new()).collect();

    for index in 0..posts.len() {
        let Some(target) = approximate_shortest_column(&columns, posts) else {
            // Unreachable: ColumnCount guarantees at least one column.
            break;
        };
        columns[target.get()].push(PostIndex::new(index));
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(contents: &[&str]) -> Vec<Post> {
        contents.iter().copied().map(Post::new).collect()
    }

    fn column_contents<'a>(column: &'a Column, posts: &'a [Post]) -> Vec<&'a str> {
        column.resolve(posts).map(Post::content).collect()
    }

    mod distribute_fn {
        use super::*;

        #[test]
        fn single_column_takes_everything_in_input_order() {
            let posts = feed(&["one", "two", "three"]);
            let columns = distribute(&posts, ColumnCount::ONE);
            assert_eq!(columns.len(), 1);
            assert_eq!(column_contents(&columns[0], &posts), vec!["one", "two", "three"]);
        }

        #[test]
        fn empty_feed_yields_empty_columns() {
            let columns = distribute(&[], ColumnCount::FOUR);
            assert_eq!(columns.len(), 4);
            assert!(columns.iter().all(Column::is_empty));
        }

        #[test]
        fn first_posts_fan_out_across_empty_columns() {
            // Empty columns score 0, so each of the first N posts lands
            // in the leftmost still-empty column.
            let posts = feed(&["aa", "bb", "cc"]);
            let columns = distribute(&posts, ColumnCount::THREE);
            assert_eq!(column_contents(&columns[0], &posts), vec!["aa"]);
            assert_eq!(column_contents(&columns[1], &posts), vec!["bb"]);
            assert_eq!(column_contents(&columns[2], &posts), vec!["cc"]);
        }

        #[test]
        fn later_posts_prefer_the_lowest_scoring_column() {
            // After "aaaa" (score 4) and "b" (score 1) the second column
            // is shortest, so "cc" joins it.
            let posts = feed(&["aaaa", "b", "cc"]);
            let columns = distribute(&posts, ColumnCount::TWO);
            assert_eq!(column_contents(&columns[0], &posts), vec!["aaaa"]);
            assert_eq!(column_contents(&columns[1], &posts), vec!["b", "cc"]);
        }

        #[test]
        fn every_post_lands_in_exactly_one_column() {
            let posts = feed(&["a", "bb", "ccc", "dddd", "ee", "f", "gg"]);
            let columns = distribute(&posts, ColumnCount::THREE);
            let total: usize = columns.iter().map(Column::len).sum();
            assert_eq!(total, posts.len());

            let mut seen: Vec<usize> = columns
                .iter()
                .flat_map(|c| c.post_indices().iter().map(|i| i.get()))
                .collect();
            seen.sort_unstable();
            assert_eq!(seen, (0..posts.len()).collect::<Vec<_>>());
        }
    }

    mod engine {
        use super::*;

        #[test]
        fn recompute_runs_on_first_call() {
            let mut engine = ColumnLayoutEngine::new(ViewportWidth::new(1300), false);
            let mut posts = feed(&["hello"]);
            let outcome = engine.recompute(&mut posts, FeedRevision::new(1));
            assert_eq!(outcome, LayoutOutcome::Recomputed);
            assert_eq!(engine.columns().len(), 4);
        }

        #[test]
        fn recompute_skips_unchanged_revision_and_keeps_columns() {
            let mut engine = ColumnLayoutEngine::new(ViewportWidth::new(500), false);
            let mut posts = feed(&["a", "b"]);
            engine.recompute(&mut posts, FeedRevision::new(1));
            let before = engine.columns().to_vec();

            let outcome = engine.recompute(&mut posts, FeedRevision::new(1));
            assert_eq!(outcome, LayoutOutcome::Skipped);
            assert_eq!(engine.columns(), before.as_slice());
        }

        #[test]
        fn recompute_runs_again_for_a_new_revision() {
            let mut engine = ColumnLayoutEngine::new(ViewportWidth::new(500), false);
            let mut posts = feed(&["a"]);
            engine.recompute(&mut posts, FeedRevision::new(1));

            posts.push(Post::new("b"));
            let outcome = engine.recompute(&mut posts, FeedRevision::new(2));
            assert_eq!(outcome, LayoutOutcome::Recomputed);
            let total: usize = engine.columns().iter().map(Column::len).sum();
            assert_eq!(total, 2);
        }

        #[test]
        fn width_change_forces_recompute_under_same_revision() {
            let mut engine = ColumnLayoutEngine::new(ViewportWidth::new(500), false);
            let mut posts = feed(&["a", "b", "c"]);
            engine.recompute(&mut posts, FeedRevision::new(1));
            assert_eq!(engine.columns().len(), 1);

            assert!(engine.set_viewport_width(ViewportWidth::new(1300)));
            let outcome = engine.recompute(&mut posts, FeedRevision::new(1));
            assert_eq!(outcome, LayoutOutcome::Recomputed);
            assert_eq!(engine.columns().len(), 4);
        }

        #[test]
        fn unchanged_width_is_a_no_op() {
            let mut engine = ColumnLayoutEngine::new(ViewportWidth::new(800), false);
            let mut posts = feed(&["a"]);
            engine.recompute(&mut posts, FeedRevision::new(1));

            assert!(!engine.set_viewport_width(ViewportWidth::new(800)));
            let outcome = engine.recompute(&mut posts, FeedRevision::new(1));
            assert_eq!(outcome, LayoutOutcome::Skipped);
        }

        #[test]
        fn recompute_splits_tags_exactly_once() {
            let mut engine = ColumnLayoutEngine::new(ViewportWidth::new(500), false);
            let mut posts = feed(&["multi#hash#tail", "plain"]);

            engine.recompute(&mut posts, FeedRevision::new(1));
            assert_eq!(posts[0].content(), "multi#hash");
            assert_eq!(posts[0].tag(), Some("#tail"));
            assert_eq!(posts[1].content(), "plain");
            assert_eq!(posts[1].tag(), None);

            // A later pass over the same posts must not split again even
            // though the remaining content still contains '#'.
            engine.recompute(&mut posts, FeedRevision::new(2));
            assert_eq!(posts[0].content(), "multi#hash");
            assert_eq!(posts[0].tag(), Some("#tail"));
        }

        #[test]
        fn authenticated_capability_is_stored_and_exposed() {
            let engine = ColumnLayoutEngine::new(ViewportWidth::new(1024), true);
            assert!(engine.is_authenticated());
            let engine = ColumnLayoutEngine::new(ViewportWidth::new(1024), false);
            assert!(!engine.is_authenticated());
        }

        #[test]
        fn columns_are_empty_before_first_pass() {
            let engine = ColumnLayoutEngine::new(ViewportWidth::new(1024), false);
            assert!(engine.columns().is_empty());
        }
    }
}
