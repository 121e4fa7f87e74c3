//! Built-in key simulation used when no custom press handler is configured.
//!
//! Only key-down events are ever produced. Releasing the stick does not
//! synthesize a matching key-up; hosts that need one must install a custom
//! release handler.

use std::collections::VecDeque;

use crate::direction::Direction;

/// The four fixed keys the fallback can press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl LogicalKey {
    /// Key name as browsers report it in both `key` and `code`.
    pub fn name(&self) -> &'static str {
        match self {
            LogicalKey::ArrowUp => "ArrowUp",
            LogicalKey::ArrowDown => "ArrowDown",
            LogicalKey::ArrowLeft => "ArrowLeft",
            LogicalKey::ArrowRight => "ArrowRight",
        }
    }

    /// Legacy numeric key code.
    pub fn key_code(&self) -> u32 {
        match self {
            LogicalKey::ArrowLeft => 37,
            LogicalKey::ArrowUp => 38,
            LogicalKey::ArrowRight => 39,
            LogicalKey::ArrowDown => 40,
        }
    }
}

impl From<Direction> for LogicalKey {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => LogicalKey::ArrowUp,
            Direction::Down => LogicalKey::ArrowDown,
            Direction::Left => LogicalKey::ArrowLeft,
            Direction::Right => LogicalKey::ArrowRight,
        }
    }
}

/// A synthesized keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatedKey {
    Down(LogicalKey),
}

/// Queue of synthesized key events waiting for the host to consume them.
#[derive(Debug, Default)]
pub struct SimulatedKeyboard {
    pending: VecDeque<SimulatedKey>,
}

impl SimulatedKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: LogicalKey) {
        self.pending.push_back(SimulatedKey::Down(key));
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = SimulatedKey> + '_ {
        self.pending.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_map_to_arrow_keys() {
        assert_eq!(LogicalKey::from(Direction::Up).name(), "ArrowUp");
        assert_eq!(LogicalKey::from(Direction::Down).key_code(), 40);
        assert_eq!(LogicalKey::from(Direction::Left).key_code(), 37);
        assert_eq!(LogicalKey::from(Direction::Right).name(), "ArrowRight");
    }

    #[test]
    fn drain_empties_queue_in_order() {
        let mut keyboard = SimulatedKeyboard::new();
        keyboard.key_down(LogicalKey::ArrowUp);
        keyboard.key_down(LogicalKey::ArrowLeft);

        let events: Vec<_> = keyboard.drain().collect();
        assert_eq!(
            events,
            vec![
                SimulatedKey::Down(LogicalKey::ArrowUp),
                SimulatedKey::Down(LogicalKey::ArrowLeft),
            ]
        );
        assert!(keyboard.is_empty());
    }
}
