mod policy;
mod range;
mod report;

pub use policy::Policy;
pub use range::{Block, Range};
pub use report::Report;

use crate::core::error::{Error, Result};
use log::*;

/// Largest address space the simulator accepts.
pub const MAX_CAPACITY: usize = 1_048_576;

/// Bookkeeping for a single simulated address space
/// `[0, capacity)`. Every address belongs either to exactly
/// one block or to exactly one hole.
#[derive(Clone, Debug)]
pub struct Ledger {
    /// Number of addresses in the space.
    capacity: usize,
    /// Free set. Holes never overlap and never touch each
    /// other: adjacent holes are always merged.
    holes: Vec<Range>,
    /// Allocated set, at most one block per owner.
    blocks: Vec<Block>,
}

impl Ledger {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidRequest("memory size must be positive".into()));
        }
        if capacity > MAX_CAPACITY {
            return Err(Error::CapacityExceeded {
                requested: capacity,
                max: MAX_CAPACITY,
            });
        }

        // At first nothing is allocated, so the free set is a
        // single hole spanning the whole space.
        Ok(Self {
            capacity,
            holes: vec![Range::new(0, capacity - 1)],
            blocks: Vec::new(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Carves a block of `size` addresses for `owner` out of
    /// the hole chosen by `policy`, and returns its range.
    pub fn allocate(&mut self, owner: &str, size: usize, policy: Policy) -> Result<Range> {
        // Validate everything before touching the sets, so a
        // rejected request leaves the ledger as it was.
        if owner.is_empty() {
            return Err(Error::InvalidRequest("process name must not be empty".into()));
        }
        if size == 0 {
            return Err(Error::InvalidRequest("size must be positive".into()));
        }
        if self.find_block(owner).is_some() {
            return Err(Error::OwnerExists(owner.to_string()));
        }

        let index = policy
            .select(&self.holes, size)
            .ok_or_else(|| Error::InsufficientMemory {
                owner: owner.to_string(),
                size,
            })?;
        let hole = &mut self.holes[index];
        debug!("{policy} picked hole {hole} for {owner} ({size} addresses)");

        // The block always comes from the low end of the hole.
        // Whatever is left stays a single hole right after it;
        // if nothing is left, the hole disappears.
        let range = Range::with_size(hole.start, size);
        if range.end == hole.end {
            self.holes.remove(index);
        } else {
            hole.start = range.end + 1;
        }

        self.blocks.push(Block {
            range,
            owner: owner.to_string(),
        });
        info!("Allocated {owner} {range}");

        Ok(range)
    }

    /// Frees the block held by `owner` and returns its range.
    /// The freed addresses are merged with any hole on either
    /// side of them.
    pub fn release(&mut self, owner: &str) -> Result<Range> {
        let index = self
            .find_block(owner)
            .ok_or_else(|| Error::UnknownOwner(owner.to_string()))?;

        // The last block takes the place of the removed one,
        // which changes the storage order compaction uses.
        let block = self.blocks.swap_remove(index);
        let freed = block.range;

        // Absorb neighbouring holes until there are none left:
        // one may sit right before the freed range and another
        // right after it, and both must go in this release.
        let mut merged = freed;
        while let Some(index) = self
            .holes
            .iter()
            .position(|hole| hole.precedes(&merged) || merged.precedes(hole))
        {
            let neighbour = self.holes.remove(index);
            debug!("Coalescing {merged} with {neighbour}");
            merged = Range::new(merged.start.min(neighbour.start), merged.end.max(neighbour.end));
        }
        self.holes.push(merged);
        info!("Released {owner} {freed}, hole is now {merged}");

        Ok(freed)
    }

    /// Packs every block against address 0, keeping their
    /// current storage order and sizes, and gathers all free
    /// space into one trailing hole.
    pub fn compact(&mut self) {
        let mut next = 0;
        for block in &mut self.blocks {
            block.range = Range::with_size(next, block.range.len());
            next += block.range.len();
        }

        // If the blocks fill the whole space there is nothing
        // left to describe as a hole.
        self.holes.clear();
        if next < self.capacity {
            self.holes.push(Range::new(next, self.capacity - 1));
        }
        info!("Memory compacted, {} addresses free", self.capacity - next);
    }

    pub fn report(&self) -> Report {
        Report {
            capacity: self.capacity,
            blocks: self.blocks.clone(),
            holes: self.holes.clone(),
        }
    }

    fn find_block(&self, owner: &str) -> Option<usize> {
        self.blocks.iter().position(|block| block.owner == owner)
    }
}
