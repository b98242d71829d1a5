//! Postwall
//!
//! Masonry-style column layout engine for post feeds.
//!
//! The library core is [`layout::ColumnLayoutEngine`]: given an ordered
//! post sequence and a viewport width, it partitions the posts into 1-4
//! columns of approximately equal visual height and extracts a trailing
//! hashtag from each post's content on the way. The CLI binary is a thin
//! shell that loads a posts payload, drives the engine, and renders the
//! resulting columns.

pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod source;
pub mod view;

#[cfg(test)]
mod tests;
