//! Inventory store: ordered stacks of owned items.
//!
//! Insertion order is preserved for display. Stackable types keep at most
//! one stack; non-stackable types get one stack per world pickup, each with
//! its own [`StackId`] so a specific instance can be removed. No stack ever
//! survives an operation with amount zero.

use arrayvec::ArrayVec;

use crate::catalog::{ItemOracle, ItemType};
use crate::config::GameConfig;
use crate::env::{Env, EnvError};
use crate::resolve::{OneShot, one_shot};

/// Identity of one stack instance, unique for the life of the inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackId(pub u64);

/// One inventory entry.
///
/// `stackable` is copied from the catalog when the stack is created and
/// cached for the stack's lifetime, so later catalog edits cannot split or
/// merge existing stacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub id: StackId,
    pub item_type: ItemType,
    pub amount: u32,
    pub stackable: bool,
}

/// Result of [`Inventory::add`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// Merged into the existing stack of this type; `total` is its new amount.
    Stacked { id: StackId, total: u32 },
    /// Appended as a new stack.
    Added(StackId),
    /// No free slot for a new stack; nothing changed.
    Full,
    /// Zero amount or `ItemType::None`; nothing changed.
    Ignored,
}

impl AddOutcome {
    pub fn mutated(&self) -> bool {
        matches!(self, Self::Stacked { .. } | Self::Added(_))
    }
}

/// Result of the removal operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Stack survives with `remaining` units.
    Reduced { id: StackId, remaining: u32 },
    /// Stack dropped to zero (or below) and was deleted.
    Deleted(StackId),
    /// No matching stack.
    Missing,
    /// Zero amount; nothing changed.
    Ignored,
}

impl RemoveOutcome {
    pub fn mutated(&self) -> bool {
        matches!(self, Self::Reduced { .. } | Self::Deleted(_))
    }
}

/// Result of [`Inventory::use_stack`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UseOutcome {
    /// Effect applied and one unit removed.
    Used { item_type: ItemType, effect: OneShot },
    /// The type has no defined use action; nothing changed.
    NoAction(ItemType),
    /// No stack with that id.
    Missing,
}

impl UseOutcome {
    pub fn mutated(&self) -> bool {
        matches!(self, Self::Used { .. })
    }
}

/// Ordered collection of owned item stacks.
///
/// Mutated only from the single gameplay tick; there is no interior
/// locking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    stacks: ArrayVec<ItemStack, { GameConfig::MAX_INVENTORY_SLOTS }>,
    next_id: u64,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot in insertion order.
    pub fn stacks(&self) -> &[ItemStack] {
        &self.stacks
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.stacks.is_full()
    }

    pub fn stack(&self, id: StackId) -> Option<&ItemStack> {
        self.stacks.iter().find(|stack| stack.id == id)
    }

    /// Total units held of one type, across all stacks.
    pub fn amount_of(&self, item_type: ItemType) -> u32 {
        self.stacks
            .iter()
            .filter(|stack| stack.item_type == item_type)
            .map(|stack| stack.amount)
            .sum()
    }

    /// Adds `amount` units of `item_type`, merging into the existing stack
    /// when the catalog marks the type stackable.
    pub fn add(&mut self, items: &dyn ItemOracle, item_type: ItemType, amount: u32) -> AddOutcome {
        if amount == 0 || item_type == ItemType::None {
            return AddOutcome::Ignored;
        }

        let stackable = items.stackable(item_type);
        if stackable {
            // At most one stack per stackable type, so the first match is
            // the only match.
            if let Some(stack) = self.stacks.iter_mut().find(|s| s.item_type == item_type) {
                stack.amount = stack.amount.saturating_add(amount);
                return AddOutcome::Stacked {
                    id: stack.id,
                    total: stack.amount,
                };
            }
        }

        if self.stacks.is_full() {
            return AddOutcome::Full;
        }

        let id = self.allocate_id();
        self.stacks.push(ItemStack {
            id,
            item_type,
            amount,
            stackable,
        });
        AddOutcome::Added(id)
    }

    /// Removes `amount` units from the first stack of `item_type`.
    ///
    /// A result at or below zero deletes the stack; the amount is clamped,
    /// never left negative. For non-stackable types with several coexisting
    /// stacks prefer [`Inventory::remove_stack`], which targets a specific
    /// instance.
    pub fn remove(&mut self, item_type: ItemType, amount: u32) -> RemoveOutcome {
        if amount == 0 {
            return RemoveOutcome::Ignored;
        }

        match self.stacks.iter().position(|s| s.item_type == item_type) {
            Some(index) => self.reduce_at(index, amount),
            None => RemoveOutcome::Missing,
        }
    }

    /// Removes `amount` units from the stack identified by `id`.
    pub fn remove_from(&mut self, id: StackId, amount: u32) -> RemoveOutcome {
        if amount == 0 {
            return RemoveOutcome::Ignored;
        }

        match self.stacks.iter().position(|s| s.id == id) {
            Some(index) => self.reduce_at(index, amount),
            None => RemoveOutcome::Missing,
        }
    }

    /// Deletes one specific stack instance outright.
    pub fn remove_stack(&mut self, id: StackId) -> RemoveOutcome {
        match self.stacks.iter().position(|s| s.id == id) {
            Some(index) => {
                self.stacks.remove(index);
                RemoveOutcome::Deleted(id)
            }
            None => RemoveOutcome::Missing,
        }
    }

    /// Applies the one-shot effect of the stack's type, then removes exactly
    /// one unit.
    ///
    /// A type with no defined action (or an unknown type) is reported as
    /// [`UseOutcome::NoAction`] with no state change; the host logs it as a
    /// warning, never as a fault.
    pub fn use_stack(&mut self, env: &mut Env<'_>, id: StackId) -> Result<UseOutcome, EnvError> {
        let Some(stack) = self.stack(id) else {
            return Ok(UseOutcome::Missing);
        };
        let item_type = stack.item_type;

        // Zero custom amount: a used coin grants the catalog default value.
        match one_shot(env, item_type, 0)? {
            Some(effect) => {
                self.remove_from(id, 1);
                Ok(UseOutcome::Used { item_type, effect })
            }
            None => Ok(UseOutcome::NoAction(item_type)),
        }
    }

    fn reduce_at(&mut self, index: usize, amount: u32) -> RemoveOutcome {
        let stack = &mut self.stacks[index];
        if stack.amount > amount {
            stack.amount -= amount;
            RemoveOutcome::Reduced {
                id: stack.id,
                remaining: stack.amount,
            }
        } else {
            let id = stack.id;
            self.stacks.remove(index);
            RemoveOutcome::Deleted(id)
        }
    }

    fn allocate_id(&mut self) -> StackId {
        let id = StackId(self.next_id);
        self.next_id += 1;
        id
    }
}
