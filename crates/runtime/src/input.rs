//! One-shot input edge detection.

/// Tracks the interact key so holding it triggers a single open command.
///
/// The core's chest machine requires the open command to be edge-gated;
/// feeding it raw key state would re-open on every tick the key is held.
#[derive(Clone, Copy, Debug, Default)]
pub struct InteractButton {
    held: bool,
}

impl InteractButton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the current key state; returns true only on the press edge.
    pub fn update(&mut self, held: bool) -> bool {
        let edge = held && !self.held;
        self.held = held;
        edge
    }
}
