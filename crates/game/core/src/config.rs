/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Delay between two reveals of a multi-item container, in milliseconds.
    /// Pacing is a presentation concern; the core only guarantees ordering.
    pub reveal_delay_ms: u64,

    /// Maximum health of the player's health pool.
    pub player_max_health: u32,

    /// Coins the player starts a session with.
    pub starting_coins: i64,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of stacks the inventory can hold.
    pub const MAX_INVENTORY_SLOTS: usize = 24;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_REVEAL_DELAY_MS: u64 = 250;
    pub const DEFAULT_PLAYER_MAX_HEALTH: u32 = 100;
    pub const DEFAULT_STARTING_COINS: i64 = 0;

    pub fn new() -> Self {
        Self {
            reveal_delay_ms: Self::DEFAULT_REVEAL_DELAY_MS,
            player_max_health: Self::DEFAULT_PLAYER_MAX_HEALTH,
            starting_coins: Self::DEFAULT_STARTING_COINS,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
