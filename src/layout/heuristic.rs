//! Approximate shortest-column scoring.
//!
//! The score of a column is the sum of its posts' content lengths
//! multiplied by the number of posts in it. The multiplication
//! deliberately over-penalizes columns that already hold many posts, so
//! the heuristic balances post count as well as total content length: a
//! column with many short posts can score higher than a column with one
//! long post. "Approximate" is part of the contract; this is not a
//! standard bin-packing objective and must not be normalized into one.

use crate::model::{Column, ColumnIndex, Post};

/// Score a column: total content length (in chars) times post count.
///
/// An empty column scores zero.
pub fn column_score(column: &Column, posts: &[Post]) -> usize {
    let total_length: usize = column.resolve(posts).map(Post::content_weight).sum();
    total_length * column.len()
}

/// Index of the approximately shortest column.
///
/// Scans left to right and keeps the first column achieving the minimum
/// score, so ties always resolve to the lowest index. Returns `None` for
/// an empty column set — the heuristic has no defined result there, and
/// callers must guarantee at least one column (the breakpoint table
/// always yields one or more).
pub fn approximate_shortest_column(columns: &[Column], posts: &[Post]) -> Option<ColumnIndex> {
    // Explicit scan: Iterator::min_by_key keeps the *last* minimum on
    // ties, and the contract requires the first.
    let mut best: Option<(usize, usize)> = None;
    for (index, column) in columns.iter().enumerate() {
        let score = column_score(column, posts);
        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| ColumnIndex::new(index))
}
