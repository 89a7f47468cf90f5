//! Item catalog: static behavioural attributes keyed by item type.
//!
//! The catalog is loaded once at startup (see `rogue-content`) and is
//! read-only afterwards. Lookups never fail: an unregistered type resolves
//! to safe defaults (not stackable, not persistent, zero value, no sprite)
//! so callers do not need null checks beyond existence.

use std::collections::BTreeMap;

/// Enumerated category of a game item.
///
/// `None` marks an unset/invalid type and never carries behaviour. `Chest`
/// and `BreakableObject` identify world containers; they have catalog
/// entries (sprite) but no pickup action of their own.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemType {
    #[default]
    None,
    Coin,
    PoisonPotion,
    HealthPotion,
    Chest,
    BreakableObject,
}

/// Reference to a sprite asset stored outside the core (resolved by the
/// display layer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteHandle(pub u32);

/// Behavioural attributes of one item type.
///
/// `value` is the type-specific numeric: coin worth for `Coin`, heal amount
/// for `HealthPotion`, poison damage for `PoisonPotion`. At most one of
/// those meanings applies per type; the rest leave it at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub item_type: ItemType,
    pub sprite: SpriteHandle,
    /// Multiple units collapse into one inventory stack.
    pub stackable: bool,
    /// Goes into the inventory on pickup instead of applying immediately.
    pub persistent: bool,
    pub value: u32,
}

impl ItemDefinition {
    pub fn new(
        item_type: ItemType,
        sprite: SpriteHandle,
        stackable: bool,
        persistent: bool,
        value: u32,
    ) -> Self {
        Self {
            item_type,
            sprite,
            stackable,
            persistent,
            value,
        }
    }
}

/// Read-only access to item definitions.
///
/// The provided accessors fold missing entries into safe defaults, so the
/// inventory and resolver never special-case unregistered types.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, item_type: ItemType) -> Option<ItemDefinition>;

    fn stackable(&self, item_type: ItemType) -> bool {
        self.definition(item_type).is_some_and(|d| d.stackable)
    }

    fn persistent(&self, item_type: ItemType) -> bool {
        self.definition(item_type).is_some_and(|d| d.persistent)
    }

    fn value(&self, item_type: ItemType) -> u32 {
        self.definition(item_type).map_or(0, |d| d.value)
    }

    fn sprite(&self, item_type: ItemType) -> Option<SpriteHandle> {
        self.definition(item_type).map(|d| d.sprite)
    }
}

/// Map-backed [`ItemOracle`], populated once from configuration.
///
/// At most one definition per type: a later definition for the same type
/// replaces the earlier one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    definitions: BTreeMap<ItemType, ItemDefinition>,
}

impl ItemCatalog {
    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let definitions = definitions
            .into_iter()
            .map(|definition| (definition.item_type, definition))
            .collect();

        Self { definitions }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.definitions.values()
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, item_type: ItemType) -> Option<ItemDefinition> {
        self.definitions.get(&item_type).copied()
    }
}
