//! Interactive world containers and their sequential-reveal contract.
//!
//! Chests and breakable objects hand out their contents one entry at a
//! time, in original list order, through an explicit step iterator driven
//! by the host loop. The host owns pacing; the core guarantees ordering and
//! that no two steps of one container resolve concurrently (there is only
//! one cursor). Once a reveal has started the claim is committed: it cannot
//! be cancelled, and the terminal state is reached exactly once.

mod breakable;
mod chest;

pub use breakable::{Breakable, BreakableState, DamageOutcome};
pub use chest::{Chest, ChestState, OpenError, OpenKind};

use crate::catalog::ItemType;
use crate::resolve::Resolution;

/// One item entry inside a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerEntry {
    pub item_type: ItemType,
    pub amount: u32,
}

impl ContainerEntry {
    pub fn new(item_type: ItemType, amount: u32) -> Self {
        Self { item_type, amount }
    }
}

/// Contained entries plus the reveal cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loot {
    entries: Vec<ContainerEntry>,
    cursor: usize,
}

impl Loot {
    pub fn new(entries: Vec<ContainerEntry>) -> Self {
        Self { entries, cursor: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advances the cursor and returns the next entry in list order.
    pub fn next(&mut self) -> Option<ContainerEntry> {
        let entry = self.entries.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(entry)
    }
}

/// Result of one reveal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    /// One entry was resolved; more may follow.
    Revealed {
        entry: ContainerEntry,
        resolution: Resolution,
    },
    /// The container reached its terminal state; further steps are no-ops.
    Done,
}
