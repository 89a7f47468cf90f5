//! The gameplay session: world objects, inventory, player and pacing.
//!
//! A `Session` is driven by the host loop: discrete interaction events
//! (`pickup`, `interact`, `damage_object`, `use_item`) plus `tick` for time.
//! Container reveals are paced: at most one reveal step per configured
//! interval, strictly in list order, one container at a time.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use rogue_core::{
    AddOutcome, Breakable, BreakableState, Chest, ChestState, ContainerEntry, DamageOutcome, Env,
    GameConfig, Inventory, ItemCatalog, ItemStack, ItemType, NotificationSink, OpenKind,
    RemoveOutcome, Resolution, RevealStep, StackId, UseOutcome, resolve,
};

use crate::error::{Result, RuntimeError};
use crate::events::{BusNotificationSink, Event, EventBus, InventoryEvent, Topic, WorldEvent};
use crate::input::InteractButton;
use crate::player::PlayerState;

/// Identity of a spawned world object (chest or breakable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u32);

const CHEST_HINT: &str = "Press E to interact with chest";
const CHEST_CLAIMED_HINT: &str = "Chest already claimed";

/// Session tuning, usually converted from a loaded [`GameConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub reveal_delay: Duration,
    pub player_max_health: u32,
    pub starting_coins: i64,
}

impl From<GameConfig> for SessionConfig {
    fn from(config: GameConfig) -> Self {
        Self {
            reveal_delay: Duration::from_millis(config.reveal_delay_ms),
            player_max_health: config.player_max_health,
            starting_coins: config.starting_coins,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        GameConfig::default().into()
    }
}

/// Single-threaded gameplay session.
///
/// All mutation happens from the one gameplay tick in direct response to
/// discrete interaction events; there is no locking discipline beyond
/// ordinary sequencing.
pub struct Session {
    catalog: Arc<ItemCatalog>,
    inventory: Inventory,
    player: PlayerState,
    bus: EventBus,
    notifier: BusNotificationSink,

    chests: HashMap<ObjectId, Chest>,
    breakables: HashMap<ObjectId, Breakable>,
    next_object: u32,

    interact_button: InteractButton,
    reveals: VecDeque<ObjectId>,
    reveal_delay: Duration,
    since_step: Duration,
}

impl Session {
    pub fn new(catalog: Arc<ItemCatalog>, config: SessionConfig) -> Self {
        let bus = EventBus::new();
        Self {
            catalog,
            inventory: Inventory::new(),
            player: PlayerState::new(config.player_max_health, config.starting_coins),
            notifier: BusNotificationSink::new(bus.clone()),
            bus,
            chests: HashMap::new(),
            breakables: HashMap::new(),
            next_object: 0,
            interact_button: InteractButton::new(),
            reveals: VecDeque::new(),
            reveal_delay: config.reveal_delay,
            since_step: Duration::ZERO,
        }
    }

    // ------------------------------------------------------------------
    // queries
    // ------------------------------------------------------------------

    pub fn inventory(&self) -> &[ItemStack] {
        self.inventory.stacks()
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn subscribe(&self, topic: Topic) -> tokio::sync::broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    pub fn chest_state(&self, id: ObjectId) -> Option<ChestState> {
        self.chests.get(&id).map(|chest| chest.state())
    }

    pub fn breakable_state(&self, id: ObjectId) -> Option<BreakableState> {
        self.breakables.get(&id).map(|object| object.state())
    }

    // ------------------------------------------------------------------
    // world object lifecycle
    // ------------------------------------------------------------------

    pub fn spawn_chest(&mut self, entries: Vec<ContainerEntry>) -> ObjectId {
        let id = self.allocate_object();
        self.chests.insert(id, Chest::new(entries));
        id
    }

    pub fn spawn_breakable(&mut self, integrity: u32, entries: Vec<ContainerEntry>) -> ObjectId {
        let id = self.allocate_object();
        self.breakables.insert(id, Breakable::new(integrity, entries));
        id
    }

    // ------------------------------------------------------------------
    // interaction events
    // ------------------------------------------------------------------

    /// Loose world pickup: resolves immediately (trigger-enter).
    pub fn pickup(&mut self, item_type: ItemType, amount: u32) -> Result<Resolution> {
        let resolution = {
            let mut env = Env::with_all(
                self.catalog.as_ref(),
                &mut self.player,
                &mut self.notifier,
            );
            resolve(&mut env, &mut self.inventory, item_type, amount)?
        };
        self.report_resolution(&resolution);
        Ok(resolution)
    }

    /// Player walked into a chest's interaction range.
    pub fn approach_chest(&mut self, id: ObjectId) -> Result<()> {
        let chest = self
            .chests
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownObject(id))?;
        chest.set_player_nearby(true);

        // Claim commits at opening start, so an Opening chest already
        // shows the claimed hint.
        let hint = if chest.is_claimed() {
            CHEST_CLAIMED_HINT
        } else {
            CHEST_HINT
        };
        self.notifier.show_hint(hint);
        Ok(())
    }

    /// Player left a chest's interaction range.
    pub fn leave_chest(&mut self, id: ObjectId) -> Result<()> {
        let chest = self
            .chests
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownObject(id))?;
        chest.set_player_nearby(false);
        self.notifier.hide_hint();
        Ok(())
    }

    /// Feeds the interact key state; on the press edge, attempts to open
    /// the chest. A rejected open (out of range, already claimed) is a
    /// logged no-op, not an error.
    pub fn interact(&mut self, id: ObjectId, button_held: bool) -> Result<Option<OpenKind>> {
        let edge = self.interact_button.update(button_held);
        if !edge {
            return Ok(None);
        }

        let chest = self
            .chests
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownObject(id))?;

        match chest.open() {
            Ok(kind) => {
                self.bus
                    .publish(Event::World(WorldEvent::ChestOpened { id, kind }));
                self.reveals.push_back(id);
                Ok(Some(kind))
            }
            Err(reason) => {
                tracing::debug!(?id, %reason, "chest open rejected");
                Ok(None)
            }
        }
    }

    /// Applies damage to a breakable; on break, queues its reveal sequence.
    pub fn damage_object(&mut self, id: ObjectId, amount: u32) -> Result<DamageOutcome> {
        let object = self
            .breakables
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownObject(id))?;

        let outcome = object.damage(amount);
        if outcome == DamageOutcome::Broken {
            self.bus
                .publish(Event::World(WorldEvent::ObjectBroken { id }));
            self.reveals.push_back(id);
        }
        Ok(outcome)
    }

    // ------------------------------------------------------------------
    // inventory events
    // ------------------------------------------------------------------

    pub fn use_item(&mut self, id: StackId) -> Result<UseOutcome> {
        let outcome = {
            let mut env = Env::with_all(
                self.catalog.as_ref(),
                &mut self.player,
                &mut self.notifier,
            );
            self.inventory.use_stack(&mut env, id)?
        };

        match outcome {
            UseOutcome::NoAction(item_type) => {
                tracing::warn!(%item_type, "item has no use action");
            }
            UseOutcome::Missing => tracing::debug!(?id, "use on unknown stack"),
            UseOutcome::Used { .. } => {}
        }
        if outcome.mutated() {
            self.publish_inventory();
        }
        Ok(outcome)
    }

    pub fn remove_item(&mut self, item_type: ItemType, amount: u32) -> RemoveOutcome {
        let outcome = self.inventory.remove(item_type, amount);
        if outcome.mutated() {
            self.publish_inventory();
        }
        outcome
    }

    pub fn remove_stack(&mut self, id: StackId) -> RemoveOutcome {
        let outcome = self.inventory.remove_stack(id);
        if outcome.mutated() {
            self.publish_inventory();
        }
        outcome
    }

    // ------------------------------------------------------------------
    // tick
    // ------------------------------------------------------------------

    /// Advances time. Pending container reveals advance by at most one step
    /// per reveal interval, front container first.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.reveals.is_empty() {
            self.since_step = Duration::ZERO;
            return;
        }

        self.since_step += elapsed;
        while self.since_step >= self.reveal_delay && !self.reveals.is_empty() {
            self.since_step -= self.reveal_delay;
            self.step_front_reveal();
        }
        if self.reveals.is_empty() {
            self.since_step = Duration::ZERO;
        }
    }

    fn step_front_reveal(&mut self) {
        let Some(&id) = self.reveals.front() else {
            return;
        };

        let step = if let Some(chest) = self.chests.get_mut(&id) {
            let mut env = Env::with_all(
                self.catalog.as_ref(),
                &mut self.player,
                &mut self.notifier,
            );
            chest.next_step(&mut self.inventory, &mut env)
        } else if let Some(object) = self.breakables.get_mut(&id) {
            let mut env = Env::with_all(
                self.catalog.as_ref(),
                &mut self.player,
                &mut self.notifier,
            );
            object.next_step(&mut self.inventory, &mut env)
        } else {
            Ok(RevealStep::Done)
        };

        let step = match step {
            Ok(step) => step,
            Err(error) => {
                tracing::error!(%error, ?id, "reveal aborted: missing collaborator");
                self.reveals.pop_front();
                return;
            }
        };

        match step {
            RevealStep::Revealed { resolution, .. } => self.report_resolution(&resolution),
            RevealStep::Done => {
                self.reveals.pop_front();
                if self.chests.contains_key(&id) {
                    self.bus
                        .publish(Event::World(WorldEvent::ChestClaimed { id }));
                } else if self
                    .breakables
                    .get(&id)
                    .is_some_and(Breakable::is_destroyed)
                {
                    self.breakables.remove(&id);
                    self.bus
                        .publish(Event::World(WorldEvent::ObjectDestroyed { id }));
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // helpers
    // ------------------------------------------------------------------

    fn report_resolution(&self, resolution: &Resolution) {
        match resolution {
            Resolution::Ignored(item_type) => {
                tracing::warn!(%item_type, "pickup had no defined action");
            }
            Resolution::Stored(AddOutcome::Full) => {
                tracing::warn!("inventory full; pickup dropped");
            }
            _ => {}
        }
        if resolution.mutated_inventory() {
            self.publish_inventory();
        }
    }

    fn publish_inventory(&self) {
        self.bus.publish(Event::Inventory(InventoryEvent::Changed {
            stacks: self.inventory.stacks().to_vec(),
        }));
    }

    fn allocate_object(&mut self) -> ObjectId {
        let id = ObjectId(self.next_object);
        self.next_object += 1;
        id
    }
}
