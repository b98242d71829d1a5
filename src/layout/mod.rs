//! Column layout: breakpoint table, scoring heuristic, and the engine.

pub mod breakpoints;
pub mod engine;
pub mod heuristic;

pub use breakpoints::column_count_for_width;
pub use engine::{distribute, ColumnLayoutEngine, LayoutOutcome};
pub use heuristic::{approximate_shortest_column, column_score};
