//! Deterministic item and interaction logic shared across clients.
//!
//! `rogue-core` defines the canonical rules for how world pickups resolve
//! into inventory mutations or one-shot effects, and exposes pure APIs that
//! can be reused by both the runtime and offline tools. External
//! collaborators (item catalog, effect application, notification display)
//! are injected through [`env::Env`] rather than reached as globals, so the
//! whole crate is testable without a host engine.
pub mod catalog;
pub mod config;
pub mod env;
pub mod inventory;
pub mod resolve;
pub mod world;

#[cfg(test)]
mod testkit;

pub use catalog::{ItemCatalog, ItemDefinition, ItemOracle, ItemType, SpriteHandle};
pub use config::GameConfig;
pub use env::{EffectSink, Env, EnvError, NotificationSink};
pub use inventory::{AddOutcome, Inventory, ItemStack, RemoveOutcome, StackId, UseOutcome};
pub use resolve::{OneShot, Resolution, resolve};
pub use world::{
    Breakable, BreakableState, Chest, ChestState, ContainerEntry, DamageOutcome, Loot, OpenError,
    OpenKind, RevealStep,
};
