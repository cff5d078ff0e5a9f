//! Held-key bookkeeping between key events and ticks.
use std::collections::HashMap;

use sage_core::{Direction, HeldInput, Key, KeyPress, Millis, Modifiers};

/// Something that can be held down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Held {
    Key(Key),
    /// A single modifier flag.
    Modifier(Modifiers),
}

/// Expiry windows for terminals that never report releases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoldTimeout {
    /// Covers the OS delay before auto-repeat starts.
    pub initial_ms: u64,
    /// Gap allowed between two auto-repeats.
    pub repeat_ms: u64,
}

#[derive(Clone, Copy, Debug)]
struct Seen {
    at: Millis,
    repeating: bool,
}

/// Tracks which keys are currently down.
///
/// With release reporting every entry lives until its release. Without it
/// (`timeout` is set) an entry expires once nothing refreshed it within the
/// initial window, or within the repeat window after repeats began.
#[derive(Clone, Debug)]
pub struct HeldKeys {
    timeout: Option<HoldTimeout>,
    entries: HashMap<Held, Seen>,
}

impl HeldKeys {
    pub fn new(timeout: Option<HoldTimeout>) -> Self {
        Self {
            timeout,
            entries: HashMap::new(),
        }
    }

    fn touch(&mut self, held: Held, now: Millis) {
        self.entries
            .entry(held)
            .and_modify(|seen| {
                seen.at = now;
                seen.repeating = true;
            })
            .or_insert(Seen {
                at: now,
                repeating: false,
            });
    }

    pub fn press(&mut self, press: KeyPress, now: Millis) {
        self.touch(Held::Key(press.key), now);
        self.sync_modifiers(press.modifiers, now);
    }

    pub fn release(&mut self, key: Key) {
        self.entries.remove(&Held::Key(key));
    }

    pub fn press_modifier(&mut self, modifier: Modifiers, now: Millis) {
        for flag in modifier.iter() {
            self.touch(Held::Modifier(flag), now);
        }
    }

    pub fn release_modifier(&mut self, modifier: Modifiers) {
        for flag in modifier.iter() {
            self.entries.remove(&Held::Modifier(flag));
        }
    }

    /// Every key event carries the authoritative modifier set.
    pub fn sync_modifiers(&mut self, modifiers: Modifiers, now: Millis) {
        for flag in [Modifiers::CONTROL, Modifiers::SHIFT] {
            if modifiers.contains(flag) {
                self.press_modifier(flag, now);
            } else {
                self.release_modifier(flag);
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drops expired entries and returns what the next tick sees.
    pub fn snapshot(&mut self, now: Millis) -> HeldInput {
        if let Some(timeout) = self.timeout {
            self.entries.retain(|_, seen| {
                let window = if seen.repeating {
                    timeout.repeat_ms
                } else {
                    timeout.initial_ms
                };
                now.since(seen.at) <= window
            });
        }

        let mut held = HeldInput::default();
        for entry in self.entries.keys() {
            match *entry {
                Held::Key(key) => {
                    if let Some(direction) = Direction::from_key(key) {
                        held.directions |= direction.flag();
                    }
                }
                Held::Modifier(flag) => held.modifiers |= flag,
            }
        }
        held
    }
}
