//! Chest state machine: `Unclaimed → Opening → Claimed`.

use crate::env::{Env, EnvError};
use crate::inventory::Inventory;
use crate::resolve::resolve;
use crate::world::{ContainerEntry, Loot, RevealStep};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChestState {
    /// Closed, contents unclaimed.
    Unclaimed,
    /// Reveal sequence in progress; the claim is already committed.
    Opening,
    /// Terminal. Opening again yields nothing.
    Claimed,
}

/// How the chest opened, used to pick the open animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenKind {
    Full,
    Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OpenError {
    #[error("player is not in range of the chest")]
    OutOfRange,
    #[error("chest is already being opened")]
    AlreadyOpening,
    #[error("chest has already been claimed")]
    AlreadyClaimed,
}

/// A closed container opened by an explicit player command.
///
/// Proximity is tracked via [`Chest::set_player_nearby`]; the one-shot
/// input edge (open must not re-trigger while the key is held) is the
/// host's duty, since raw input never reaches the core.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chest {
    state: ChestState,
    loot: Loot,
    player_nearby: bool,
}

impl Chest {
    pub fn new(entries: Vec<ContainerEntry>) -> Self {
        Self {
            state: ChestState::Unclaimed,
            loot: Loot::new(entries),
            player_nearby: false,
        }
    }

    pub fn state(&self) -> ChestState {
        self.state
    }

    /// Whether the contents are spoken for. The claim commits the moment
    /// opening starts, so this is true from `Opening` onward.
    pub fn is_claimed(&self) -> bool {
        self.state != ChestState::Unclaimed
    }

    pub fn is_empty(&self) -> bool {
        self.loot.is_empty()
    }

    pub fn player_nearby(&self) -> bool {
        self.player_nearby
    }

    pub fn set_player_nearby(&mut self, nearby: bool) {
        self.player_nearby = nearby;
    }

    /// Starts the reveal sequence.
    ///
    /// An empty chest still passes through `Opening` (the host plays the
    /// empty-open acknowledgement) and reaches `Claimed` on the first step
    /// with zero resolutions.
    pub fn open(&mut self) -> Result<OpenKind, OpenError> {
        match self.state {
            ChestState::Opening => return Err(OpenError::AlreadyOpening),
            ChestState::Claimed => return Err(OpenError::AlreadyClaimed),
            ChestState::Unclaimed => {}
        }
        if !self.player_nearby {
            return Err(OpenError::OutOfRange);
        }

        self.state = ChestState::Opening;
        Ok(if self.loot.is_empty() {
            OpenKind::Empty
        } else {
            OpenKind::Full
        })
    }

    /// Resolves the next contained entry, in original list order.
    ///
    /// Returns [`RevealStep::Done`] (and transitions to `Claimed`) once the
    /// entries are exhausted. Outside of `Opening` this is a no-op.
    pub fn next_step(
        &mut self,
        inventory: &mut Inventory,
        env: &mut Env<'_>,
    ) -> Result<RevealStep, EnvError> {
        if self.state != ChestState::Opening {
            return Ok(RevealStep::Done);
        }

        match self.loot.next() {
            Some(entry) => {
                let resolution = resolve(env, inventory, entry.item_type, entry.amount)?;
                Ok(RevealStep::Revealed { entry, resolution })
            }
            None => {
                self.state = ChestState::Claimed;
                Ok(RevealStep::Done)
            }
        }
    }
}
