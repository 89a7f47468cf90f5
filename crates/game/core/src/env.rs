//! Traits describing the core's external collaborators.
//!
//! Collaborators are injected explicitly rather than reached as scene-wide
//! globals. [`Env`] bundles them so the resolver and inventory can access
//! everything they need without hard coupling to concrete implementations,
//! and so a missing collaborator degrades the dependent feature instead of
//! crashing.

use crate::catalog::{ItemOracle, SpriteHandle};

/// Applies one-shot gameplay effects to player/game state.
///
/// The core only issues the request; clamping and bookkeeping live with the
/// implementor (see the runtime's player state).
pub trait EffectSink {
    fn apply_currency(&mut self, delta: i64);
    fn apply_heal(&mut self, amount: u32);
    fn apply_damage(&mut self, amount: u32);
}

/// Receives display requests: per-item pickup toasts and interaction hints.
pub trait NotificationSink {
    fn notify_pickup(&mut self, sprite: Option<SpriteHandle>, name: &str, amount: u32);
    fn show_hint(&mut self, text: &str);
    fn hide_hint(&mut self);
}

/// A collaborator the current operation needs was not provided.
///
/// This is the configuration-missing error class: callers log it and leave
/// the dependent feature inert rather than aborting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    #[error("item catalog not available")]
    CatalogNotAvailable,
    #[error("effect sink not available")]
    EffectsNotAvailable,
    #[error("notification sink not available")]
    NotificationsNotAvailable,
}

/// Aggregates the collaborators required by resolution and item use.
///
/// Every slot is optional; accessors surface [`EnvError`] for the ones an
/// operation actually touches. Notification emission is best-effort and is
/// skipped when no sink was provided.
pub struct Env<'a> {
    items: Option<&'a dyn ItemOracle>,
    effects: Option<&'a mut dyn EffectSink>,
    notifications: Option<&'a mut dyn NotificationSink>,
}

impl<'a> Env<'a> {
    pub fn new(
        items: Option<&'a dyn ItemOracle>,
        effects: Option<&'a mut dyn EffectSink>,
        notifications: Option<&'a mut dyn NotificationSink>,
    ) -> Self {
        Self {
            items,
            effects,
            notifications,
        }
    }

    pub fn with_all(
        items: &'a dyn ItemOracle,
        effects: &'a mut dyn EffectSink,
        notifications: &'a mut dyn NotificationSink,
    ) -> Self {
        Self::new(Some(items), Some(effects), Some(notifications))
    }

    pub fn empty() -> Self {
        Self {
            items: None,
            effects: None,
            notifications: None,
        }
    }

    /// Returns the item oracle, or an error if not available.
    pub fn items(&self) -> Result<&'a dyn ItemOracle, EnvError> {
        self.items.ok_or(EnvError::CatalogNotAvailable)
    }

    /// Returns the effect sink, or an error if not available.
    pub fn effects(&mut self) -> Result<&mut (dyn EffectSink + 'a), EnvError> {
        self.effects.as_deref_mut().ok_or(EnvError::EffectsNotAvailable)
    }

    /// Returns the notification sink, or an error if not available.
    pub fn notifications(&mut self) -> Result<&mut (dyn NotificationSink + 'a), EnvError> {
        self.notifications
            .as_deref_mut()
            .ok_or(EnvError::NotificationsNotAvailable)
    }
}
