//! Rendering adapter for a computed layout.
//!
//! Stands in for the external rendering collaborator: turns the
//! engine's column set into plain-text lanes for a terminal, or into a
//! JSON document for downstream tooling. No layout decisions happen
//! here — columns arrive fully computed.

use unicode_width::UnicodeWidthChar;

use crate::model::{Column, Post};

/// Default lane width in terminal cells for plain-text output.
pub const DEFAULT_LANE_WIDTH: usize = 28;

/// Render columns side by side as fixed-width text lanes.
///
/// Each post occupies one row of its lane, showing content followed by
/// the extracted tag, truncated to `lane_width` display cells with an
/// ellipsis. Lanes are separated by ` | `.
pub fn render_columns(columns: &[Column], posts: &[Post], lane_width: usize) -> String {
    let lane_width = lane_width.max(4);
    let rows = columns.iter().map(Column::len).max().unwrap_or(0);

    let mut out = String::new();
    for row in 0..rows {
        let mut cells: Vec<String> = columns
            .iter()
            .map(|column| {
                let cell = column
                    .post_indices()
                    .get(row)
                    .and_then(|index| posts.get(index.get()))
                    .map(cell_text)
                    .unwrap_or_default();
                pad_to_width(&cell, lane_width)
            })
            .collect();
        // Drop empty tail lanes so rows don't end in a bare separator
        while cells.last().is_some_and(|cell| cell.trim().is_empty()) {
            cells.pop();
        }
        let line = cells.join(" | ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Serialize the resolved layout as pretty-printed JSON: an array of
/// columns, each an array of post objects.
pub fn layout_to_json(columns: &[Column], posts: &[Post]) -> Result<String, serde_json::Error> {
    let resolved: Vec<Vec<&Post>> = columns
        .iter()
        .map(|column| column.resolve(posts).collect())
        .collect();
    serde_json::to_string_pretty(&resolved)
}

/// One-line cell for a post: content, then the tag if one was split off.
fn cell_text(post: &Post) -> String {
    match post.tag() {
        Some(tag) => format!("{} {}", post.content(), tag),
        None => post.content().to_string(),
    }
}

/// Truncate to `width` display cells (ellipsis on overflow) and pad
/// with spaces up to exactly `width`.
fn pad_to_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|ch| ch.width().unwrap_or(0)).sum();
    let mut out = String::new();
    let mut used = 0usize;
    if total <= width {
        out.push_str(text);
        used = total;
    } else {
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width - 1 {
                break;
            }
            out.push(ch);
            used += w;
        }
        out.push('…');
        used += 1;
    }
    while used < width {
        out.push(' ');
        used += 1;
    }
    out
}
