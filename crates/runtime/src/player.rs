//! Player-facing game state the core's effects mutate.

use rogue_core::EffectSink;

/// Bounded health pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealthMeter {
    pub current: u32,
    pub maximum: u32,
}

impl HealthMeter {
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub fn heal(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.maximum);
    }

    pub fn damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }
}

/// Health pool plus currency; the session's [`EffectSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerState {
    health: HealthMeter,
    coins: i64,
}

impl PlayerState {
    pub fn new(max_health: u32, starting_coins: i64) -> Self {
        Self {
            health: HealthMeter::full(max_health),
            coins: starting_coins,
        }
    }

    pub fn health(&self) -> HealthMeter {
        self.health
    }

    pub fn coins(&self) -> i64 {
        self.coins
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }
}

impl EffectSink for PlayerState {
    fn apply_currency(&mut self, delta: i64) {
        self.coins += delta;
    }

    fn apply_heal(&mut self, amount: u32) {
        self.health.heal(amount);
    }

    fn apply_damage(&mut self, amount: u32) {
        self.health.damage(amount);
    }
}
