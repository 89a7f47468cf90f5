//! Recording collaborators shared by the unit tests.

use crate::catalog::{ItemCatalog, ItemDefinition, ItemType, SpriteHandle};
use crate::env::{EffectSink, NotificationSink};

#[derive(Debug, Default)]
pub(crate) struct RecordingEffects {
    pub coins: i64,
    pub healed: Vec<u32>,
    pub damaged: Vec<u32>,
}

impl EffectSink for RecordingEffects {
    fn apply_currency(&mut self, delta: i64) {
        self.coins += delta;
    }

    fn apply_heal(&mut self, amount: u32) {
        self.healed.push(amount);
    }

    fn apply_damage(&mut self, amount: u32) {
        self.damaged.push(amount);
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingNotifications {
    pub pickups: Vec<(Option<SpriteHandle>, String, u32)>,
    pub hints: Vec<String>,
    pub hidden: u32,
}

impl NotificationSink for RecordingNotifications {
    fn notify_pickup(&mut self, sprite: Option<SpriteHandle>, name: &str, amount: u32) {
        self.pickups.push((sprite, name.to_owned(), amount));
    }

    fn show_hint(&mut self, text: &str) {
        self.hints.push(text.to_owned());
    }

    fn hide_hint(&mut self) {
        self.hidden += 1;
    }
}

pub(crate) fn sample_catalog() -> ItemCatalog {
    ItemCatalog::from_definitions([
        ItemDefinition::new(ItemType::Coin, SpriteHandle(1), true, false, 10),
        ItemDefinition::new(ItemType::HealthPotion, SpriteHandle(2), true, true, 25),
        ItemDefinition::new(ItemType::PoisonPotion, SpriteHandle(3), false, false, 15),
        ItemDefinition::new(ItemType::Chest, SpriteHandle(4), false, false, 0),
        ItemDefinition::new(ItemType::BreakableObject, SpriteHandle(5), false, false, 0),
    ])
}
