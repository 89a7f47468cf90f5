//! Host-side session wiring for the loot core.
//!
//! The runtime owns everything the pure core refuses to: the event bus the
//! UI subscribes to, tracing for degraded operations, input edge detection,
//! the player's health/currency state, and the pacing of sequential
//! container reveals. It is driven from a single gameplay tick; nothing in
//! here spawns tasks or threads.

pub mod error;
pub mod events;
pub mod input;
pub mod player;
pub mod session;

pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, InventoryEvent, NotificationEvent, Topic, WorldEvent};
pub use input::InteractButton;
pub use player::{HealthMeter, PlayerState};
pub use session::{ObjectId, Session, SessionConfig};
