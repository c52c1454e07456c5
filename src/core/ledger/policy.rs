use std::{cmp::Reverse, fmt, str::FromStr};

use super::range::Range;
use crate::core::error::Error;

/// Placement strategy used to pick the hole a request is
/// carved from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Take the first hole that is large enough.
    First,
    /// Take the smallest hole that is large enough.
    Best,
    /// Take the largest hole.
    Worst,
}

impl Policy {
    /// Returns the index of the hole chosen for a request of
    /// `size` addresses, or `None` if no hole can hold it.
    /// Ties are broken in favor of the hole that comes first
    /// in `holes`.
    pub fn select(self, holes: &[Range], size: usize) -> Option<usize> {
        // Only holes with enough room are candidates. We keep
        // the index alongside the hole so the caller can
        // update the free set in place.
        let mut candidates = holes
            .iter()
            .enumerate()
            .filter(|(_, hole)| hole.len() >= size);

        let chosen = match self {
            // The iterator is lazy, so this stops at the first
            // candidate without looking at the rest of the
            // free set.
            Policy::First => candidates.next(),
            // `min_by_key` already keeps the first of several
            // equal minimums.
            Policy::Best => candidates.min_by_key(|(_, hole)| hole.len()),
            // `max_by_key` keeps the *last* of several equal
            // maximums, so the index is reversed into the key
            // to make the earliest hole win instead.
            Policy::Worst => candidates.max_by_key(|(index, hole)| (hole.len(), Reverse(*index))),
        };

        chosen.map(|(index, _)| index)
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "F" => Ok(Policy::First),
            "B" => Ok(Policy::Best),
            "W" => Ok(Policy::Worst),
            other => Err(Error::InvalidRequest(format!(
                "unknown strategy '{other}' (expected F, B or W)"
            ))),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::First => "first-fit",
            Policy::Best => "best-fit",
            Policy::Worst => "worst-fit",
        };
        f.write_str(name)
    }
}
