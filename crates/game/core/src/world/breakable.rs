//! Breakable container state machine: `Alive → Breaking → Destroyed`.

use crate::env::{Env, EnvError};
use crate::inventory::Inventory;
use crate::resolve::resolve;
use crate::world::{ContainerEntry, Loot, RevealStep};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BreakableState {
    Alive,
    /// Integrity reached zero; reveal sequence in progress.
    Breaking,
    /// Terminal. The host removes the entity from the world.
    Destroyed,
}

/// Result of one damage application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Still alive with `remaining` integrity.
    Damaged { remaining: u32 },
    /// Transitioned to `Breaking`; the host drives the reveal steps.
    Broken,
    /// Not breakable, or already breaking/destroyed.
    Ignored,
}

/// A world object broken by accumulated damage, spilling its contents.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakable {
    state: BreakableState,
    integrity: u32,
    can_break: bool,
    loot: Loot,
}

impl Breakable {
    pub fn new(integrity: u32, entries: Vec<ContainerEntry>) -> Self {
        Self {
            state: BreakableState::Alive,
            integrity,
            can_break: true,
            loot: Loot::new(entries),
        }
    }

    /// Scenery variant that absorbs all damage without ever breaking.
    pub fn unbreakable() -> Self {
        Self {
            state: BreakableState::Alive,
            integrity: 0,
            can_break: false,
            loot: Loot::default(),
        }
    }

    pub fn state(&self) -> BreakableState {
        self.state
    }

    pub fn integrity(&self) -> u32 {
        self.integrity
    }

    pub fn is_destroyed(&self) -> bool {
        self.state == BreakableState::Destroyed
    }

    /// Applies damage while alive.
    ///
    /// The transition to `Breaking` fires exactly once, even when the final
    /// blow overshoots the remaining integrity. Later damage calls are
    /// ignored so the contents never resolve twice.
    pub fn damage(&mut self, amount: u32) -> DamageOutcome {
        if !self.can_break || self.state != BreakableState::Alive {
            return DamageOutcome::Ignored;
        }

        self.integrity = self.integrity.saturating_sub(amount);
        if self.integrity == 0 {
            self.state = BreakableState::Breaking;
            DamageOutcome::Broken
        } else {
            DamageOutcome::Damaged {
                remaining: self.integrity,
            }
        }
    }

    /// Resolves the next contained entry, in original list order.
    ///
    /// Returns [`RevealStep::Done`] (and transitions to `Destroyed`) once
    /// the entries are exhausted. Outside of `Breaking` this is a no-op.
    pub fn next_step(
        &mut self,
        inventory: &mut Inventory,
        env: &mut Env<'_>,
    ) -> Result<RevealStep, EnvError> {
        if self.state != BreakableState::Breaking {
            return Ok(RevealStep::Done);
        }

        match self.loot.next() {
            Some(entry) => {
                let resolution = resolve(env, inventory, entry.item_type, entry.amount)?;
                Ok(RevealStep::Revealed { entry, resolution })
            }
            None => {
                self.state = BreakableState::Destroyed;
                Ok(RevealStep::Done)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemType;
    use crate::testkit::{RecordingEffects, RecordingNotifications, sample_catalog};

    #[test]
    fn survives_damage_above_zero_integrity() {
        let mut object = Breakable::new(10, Vec::new());

        assert_eq!(object.damage(4), DamageOutcome::Damaged { remaining: 6 });
        assert_eq!(object.state(), BreakableState::Alive);
    }

    #[test]
    fn breaks_exactly_once_even_on_overshoot() {
        let mut object = Breakable::new(10, Vec::new());

        object.damage(4);
        assert_eq!(object.damage(20), DamageOutcome::Broken);
        assert_eq!(object.state(), BreakableState::Breaking);

        // Further damage is ignored; no second break.
        assert_eq!(object.damage(50), DamageOutcome::Ignored);
        assert_eq!(object.state(), BreakableState::Breaking);
    }

    #[test]
    fn unbreakable_object_ignores_damage() {
        let mut object = Breakable::unbreakable();
        assert_eq!(object.damage(100), DamageOutcome::Ignored);
        assert_eq!(object.state(), BreakableState::Alive);
    }

    #[test]
    fn contents_spill_in_order_then_object_is_destroyed() {
        let catalog = sample_catalog();
        let mut inventory = Inventory::new();
        let mut effects = RecordingEffects::default();
        let mut notifications = RecordingNotifications::default();
        let mut env = Env::with_all(&catalog, &mut effects, &mut notifications);

        let mut object = Breakable::new(
            5,
            vec![
                ContainerEntry::new(ItemType::HealthPotion, 2),
                ContainerEntry::new(ItemType::Coin, 3),
            ],
        );
        object.damage(5);

        let mut steps = 0;
        while object.next_step(&mut inventory, &mut env).unwrap() != RevealStep::Done {
            steps += 1;
        }

        assert_eq!(steps, 2);
        assert_eq!(object.state(), BreakableState::Destroyed);

        // Destroyed is terminal: no re-resolution.
        assert_eq!(
            object.next_step(&mut inventory, &mut env),
            Ok(RevealStep::Done)
        );
        drop(env);

        let names: Vec<_> = notifications.pickups.iter().map(|p| p.1.as_str()).collect();
        assert_eq!(names, vec!["HealthPotion", "Coin"]);
        assert_eq!(inventory.amount_of(ItemType::HealthPotion), 2);
        assert_eq!(effects.coins, 3);
    }
}
