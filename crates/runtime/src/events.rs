//! Topic-based event bus.
//!
//! Display layers subscribe to the topics they care about and render from
//! events; the session publishes synchronously from the gameplay tick.
//! Publishing is best-effort: a topic with no subscribers drops its events.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::broadcast;

use rogue_core::{ItemStack, NotificationSink, OpenKind, SpriteHandle};

use crate::session::ObjectId;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Topic {
    /// Inventory content changes
    Inventory,
    /// Pickup toasts and interaction hints
    Notification,
    /// World object transitions (chests, breakables)
    World,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone)]
pub enum Event {
    Inventory(InventoryEvent),
    Notification(NotificationEvent),
    World(WorldEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Inventory(_) => Topic::Inventory,
            Event::Notification(_) => Topic::Notification,
            Event::World(_) => Topic::World,
        }
    }
}

/// Inventory store changed; carries the new ordered slot snapshot so the
/// display can redraw without querying back.
#[derive(Debug, Clone)]
pub enum InventoryEvent {
    Changed { stacks: Vec<ItemStack> },
}

/// Display requests from the notification sink.
#[derive(Debug, Clone)]
pub enum NotificationEvent {
    Pickup {
        sprite: Option<SpriteHandle>,
        name: String,
        amount: u32,
    },
    Hint(String),
    HintCleared,
}

/// World object transitions the host reacts to (animations, despawns).
#[derive(Debug, Clone)]
pub enum WorldEvent {
    ChestOpened { id: ObjectId, kind: OpenKind },
    ChestClaimed { id: ObjectId },
    ObjectBroken { id: ObjectId },
    ObjectDestroyed { id: ObjectId },
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Cheap to clone; clones share the channels.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<Event>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let mut channels = HashMap::new();

        channels.insert(Topic::Inventory, broadcast::channel(capacity).0);
        channels.insert(Topic::Notification, broadcast::channel(capacity).0);
        channels.insert(Topic::World, broadcast::channel(capacity).0);

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels
            .get(&topic)
            .expect("Topic channel not initialized")
            .subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// [`NotificationSink`] implementation that forwards display requests to
/// the bus's notification topic.
#[derive(Clone)]
pub struct BusNotificationSink {
    bus: EventBus,
}

impl BusNotificationSink {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl NotificationSink for BusNotificationSink {
    fn notify_pickup(&mut self, sprite: Option<SpriteHandle>, name: &str, amount: u32) {
        self.bus.publish(Event::Notification(NotificationEvent::Pickup {
            sprite,
            name: name.to_owned(),
            amount,
        }));
    }

    fn show_hint(&mut self, text: &str) {
        self.bus
            .publish(Event::Notification(NotificationEvent::Hint(text.to_owned())));
    }

    fn hide_hint(&mut self) {
        self.bus
            .publish(Event::Notification(NotificationEvent::HintCleared));
    }
}
