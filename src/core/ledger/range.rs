use std::fmt;

/// Closed interval of addresses `[start, end]`. A range always
/// holds at least one address, so `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Range {
    /// First address of the range.
    pub start: usize,
    /// Last address of the range (inclusive).
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "empty range [{start}:{end}]");
        Self { start, end }
    }

    /// Range of `size` addresses beginning at `start`. `size`
    /// must be positive.
    pub fn with_size(start: usize, size: usize) -> Self {
        Self::new(start, start + size - 1)
    }

    /// Number of addresses covered by the range.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether `other` starts right after this range ends.
    pub fn precedes(&self, other: &Range) -> bool {
        self.end + 1 == other.start
    }

    pub fn overlaps(&self, other: &Range) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.start, self.end)
    }
}

/// Range of addresses currently assigned to a named process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub range: Range,
    pub owner: String,
}
