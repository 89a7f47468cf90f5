//! Interaction resolver: turns a pickup event into a store mutation or an
//! immediate effect.
//!
//! A resolved item first raises its pickup notification, then either lands
//! in the inventory (persistent types) or applies its one-shot effect
//! (everything else). Callers that reveal several items from one container
//! must resolve them one at a time, in list order; see [`crate::world`].

use crate::catalog::ItemType;
use crate::env::{Env, EnvError};
use crate::inventory::{AddOutcome, Inventory};

/// An immediate effect the resolver asked the effect sink to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OneShot {
    Currency(i64),
    Healed(u32),
    Damaged(u32),
}

/// What became of one resolved pickup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Persistent item; stored (or reported full/ignored) by the inventory.
    Stored(AddOutcome),
    /// Non-persistent item; effect applied through the sink.
    Applied(OneShot),
    /// Type with no catalog action; nothing happened.
    Ignored(ItemType),
}

impl Resolution {
    pub fn mutated_inventory(&self) -> bool {
        matches!(self, Self::Stored(outcome) if outcome.mutated())
    }
}

/// Resolves one `(item_type, amount)` pickup.
///
/// The notification fires once per resolved item regardless of branch, and
/// before the effect, so the display order matches the effect order. A
/// positive `amount` overrides the catalog's coin value; zero falls back to
/// the default.
pub fn resolve(
    env: &mut Env<'_>,
    inventory: &mut Inventory,
    item_type: ItemType,
    amount: u32,
) -> Result<Resolution, EnvError> {
    let items = env.items()?;
    let sprite = items.sprite(item_type);
    let persistent = items.persistent(item_type);

    if let Ok(notifications) = env.notifications() {
        notifications.notify_pickup(sprite, &item_type.to_string(), amount);
    }

    if persistent {
        let outcome = inventory.add(env.items()?, item_type, amount);
        return Ok(Resolution::Stored(outcome));
    }

    match one_shot(env, item_type, amount)? {
        Some(effect) => Ok(Resolution::Applied(effect)),
        None => Ok(Resolution::Ignored(item_type)),
    }
}

/// Applies the type-specific one-shot action, or `None` when the type has
/// no defined action.
///
/// `custom_amount` only matters for coins: an explicit positive amount
/// overrides the catalog default, zero means "use the default".
pub(crate) fn one_shot(
    env: &mut Env<'_>,
    item_type: ItemType,
    custom_amount: u32,
) -> Result<Option<OneShot>, EnvError> {
    let items = env.items()?;

    let effect = match item_type {
        ItemType::Coin => {
            let value = if custom_amount > 0 {
                custom_amount
            } else {
                items.value(ItemType::Coin)
            };
            env.effects()?.apply_currency(value as i64);
            OneShot::Currency(value as i64)
        }
        ItemType::PoisonPotion => {
            let damage = items.value(ItemType::PoisonPotion);
            env.effects()?.apply_damage(damage);
            OneShot::Damaged(damage)
        }
        ItemType::HealthPotion => {
            let heal = items.value(ItemType::HealthPotion);
            env.effects()?.apply_heal(heal);
            OneShot::Healed(heal)
        }
        ItemType::None | ItemType::Chest | ItemType::BreakableObject => return Ok(None),
    };

    Ok(Some(effect))
}
