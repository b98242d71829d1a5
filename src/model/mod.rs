//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors. The
//! layout engine never owns posts; it hands out validated indices into
//! the caller's post sequence.

pub mod column;
pub mod error;
pub mod post;
pub mod types;

// Re-export for convenience
pub use column::Column;
pub use error::{AppError, InputError, ParseError};
pub use post::Post;
pub use types::{
    ColumnCount, ColumnIndex, FeedRevision, InvalidColumnCount, PostIndex, ViewportWidth,
};
