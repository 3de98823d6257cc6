//! Keyboard abstraction
//!
//! The core never polls hardware. The host fills a [`KeyState`] (or its own
//! [`InputState`] implementation) once per frame.

use std::collections::BTreeSet;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// 's'
    Start,
    /// 'p'
    Pause,
    /// 'c'
    Continue,
    Left,
    Right,
    /// Spacebar
    Fire,
}

impl Key {
    /// Map a host key name to a game key
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "s" => Some(Key::Start),
            "p" => Some(Key::Pause),
            "c" => Some(Key::Continue),
            "left" | "arrowleft" => Some(Key::Left),
            "right" | "arrowright" => Some(Key::Right),
            "spacebar" | "space" | " " => Some(Key::Fire),
            _ => None,
        }
    }
}

/// Read-only view of the keyboard for one frame
pub trait InputState {
    /// Number of keys currently held, including ones the game ignores
    fn key_count(&self) -> usize;
    /// Whether `key` is currently held
    fn is_key_down(&self, key: Key) -> bool;
}

/// Simple per-frame key snapshot
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: BTreeSet<Key>,
    /// Held keys with no game meaning (still count toward `key_count`)
    other: usize,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with exactly these keys held
    pub fn with(keys: &[Key]) -> Self {
        Self {
            held: keys.iter().copied().collect(),
            other: 0,
        }
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Press a key by host name; unknown names count as held but ignored
    pub fn press_name(&mut self, name: &str) {
        match Key::from_name(name) {
            Some(key) => self.press(key),
            None => self.other += 1,
        }
    }

    pub fn clear(&mut self) {
        self.held.clear();
        self.other = 0;
    }
}

impl InputState for KeyState {
    fn key_count(&self) -> usize {
        self.held.len() + self.other
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("S"), Some(Key::Start));
        assert_eq!(Key::from_name("spacebar"), Some(Key::Fire));
        assert_eq!(Key::from_name("left"), Some(Key::Left));
        assert_eq!(Key::from_name("m"), None);
    }

    #[test]
    fn test_unknown_keys_count_but_do_nothing() {
        let mut keys = KeyState::new();
        keys.press_name("q");
        keys.press(Key::Fire);
        assert_eq!(keys.key_count(), 2);
        assert!(keys.is_key_down(Key::Fire));
        assert!(!keys.is_key_down(Key::Start));

        keys.clear();
        assert_eq!(keys.key_count(), 0);
    }
}
