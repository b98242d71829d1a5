//! Core layout newtypes.

/// Viewport width in pixels, as measured by the external collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewportWidth(u16);

impl ViewportWidth {
    /// Create a viewport width from a raw pixel value.
    pub fn new(pixels: u16) -> Self {
        Self(pixels)
    }

    /// Get the raw pixel value.
    pub fn get(&self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ViewportWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Error returned when attempting to create a [`ColumnCount`] of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("ColumnCount must be >= 1 (got {0})")]
pub struct InvalidColumnCount(pub usize);

/// Number of layout columns. Always >= 1.
///
/// The shortest-column heuristic has no defined result over an empty
/// column set, so a zero count is unrepresentable: the smart constructor
/// rejects it and the breakpoint table only produces the named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnCount(usize);

impl ColumnCount {
    /// Single column (narrow viewports).
    pub const ONE: Self = Self(1);
    /// Two columns.
    pub const TWO: Self = Self(2);
    /// Three columns.
    pub const THREE: Self = Self(3);
    /// Four columns (wide viewports).
    pub const FOUR: Self = Self(4);

    /// Smart constructor that validates the count is >= 1.
    pub fn new(count: usize) -> Result<Self, InvalidColumnCount> {
        if count == 0 {
            Err(InvalidColumnCount(count))
        } else {
            Ok(Self(count))
        }
    }

    /// Get the raw count.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for ColumnCount {
    fn default() -> Self {
        Self::ONE
    }
}

/// Index of a column within a layout. 0-indexed internally, 1-based for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ColumnIndex(usize);

impl ColumnIndex {
    /// Create a column index from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Get the 1-based index for display purposes.
    pub fn display(&self) -> usize {
        self.0 + 1
    }
}

/// Index of a post within the caller's post sequence.
///
/// # Invariants
/// - Valid for exactly one [`FeedRevision`]: the one the layout pass that
///   produced it consumed. The revision protocol guarantees a recompute
///   happens before indices go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PostIndex(usize);

impl PostIndex {
    /// Create a post index from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for PostIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Monotonic token identifying the current value of the post sequence.
///
/// The external data source bumps the revision whenever the sequence
/// structurally changes (posts added, removed or reordered) and passes it
/// to [`recompute`]. An unchanged revision means an unchanged sequence,
/// which the engine answers with a no-op.
///
/// [`recompute`]: crate::layout::ColumnLayoutEngine::recompute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FeedRevision(u64);

impl FeedRevision {
    /// Create a revision from a raw value.
    pub fn new(revision: u64) -> Self {
        Self(revision)
    }

    /// Get the raw value.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// The revision following this one.
    pub fn next(&self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
