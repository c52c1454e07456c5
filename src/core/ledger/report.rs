use std::fmt;

use super::range::{Block, Range};

/// Read-only snapshot of the ledger, with blocks and holes in
/// the order the ledger stores them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub capacity: usize,
    pub blocks: Vec<Block>,
    pub holes: Vec<Range>,
}

impl Report {
    /// Total number of addresses held by processes.
    pub fn allocated(&self) -> usize {
        self.blocks.iter().map(|block| block.range.len()).sum()
    }

    /// Total number of unused addresses.
    pub fn free(&self) -> usize {
        self.holes.iter().map(Range::len).sum()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Memory status:")?;
        for block in &self.blocks {
            writeln!(f, "Addresses {} Process {}", block.range, block.owner)?;
        }
        for hole in &self.holes {
            writeln!(f, "Addresses {} Unused", hole)?;
        }
        Ok(())
    }
}
