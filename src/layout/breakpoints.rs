//! Fixed responsive breakpoint table.
//!
//! Width thresholds follow the Bootstrap-style grid the feed renders
//! into. The table is part of the engine's contract, not configuration.

use crate::model::{ColumnCount, ViewportWidth};

/// Minimum viewport width for a four-column layout.
pub const FOUR_COLUMN_MIN_WIDTH: u16 = 1200;

/// Minimum viewport width for a three-column layout.
pub const THREE_COLUMN_MIN_WIDTH: u16 = 992;

/// Minimum viewport width for a two-column layout.
pub const TWO_COLUMN_MIN_WIDTH: u16 = 768;

/// Number of columns for a given viewport width.
///
/// Pure function of width, no side effects: >= 1200px yields four
/// columns, >= 992px three, >= 768px two, anything narrower one.
/// Monotonically non-decreasing in width and never zero.
pub fn column_count_for_width(width: ViewportWidth) -> ColumnCount {
    let px = width.get();
    if px >= FOUR_COLUMN_MIN_WIDTH {
        ColumnCount::FOUR
    } else if px >= THREE_COLUMN_MIN_WIDTH {
        ColumnCount::THREE
    } else if px >= TWO_COLUMN_MIN_WIDTH {
        ColumnCount::TWO
    } else {
        ColumnCount::ONE
    }
}
