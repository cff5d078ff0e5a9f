//! Per-tick movement of the player dot.
//!
//! Holding control or shift consumes the tick: no movement is applied while
//! a modifier is down, whatever movement keys are also held. Otherwise every
//! held direction adds a fixed step on its axis. Diagonals are not
//! normalised and the position is never clamped to the canvas.
use bitflags::bitflags;
use strum::IntoEnumIterator;

use crate::input::{Key, Modifiers};
use crate::state::PlayerState;

bitflags! {
    /// Movement keys held during a tick.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Directions: u8 {
        const UP    = 1 << 0;
        const DOWN  = 1 << 1;
        const LEFT  = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// WASD layout.
    pub const fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char('w') => Some(Self::Up),
            Key::Char('s') => Some(Self::Down),
            Key::Char('a') => Some(Self::Left),
            Key::Char('d') => Some(Self::Right),
            _ => None,
        }
    }

    pub const fn flag(self) -> Directions {
        match self {
            Self::Up => Directions::UP,
            Self::Down => Directions::DOWN,
            Self::Left => Directions::LEFT,
            Self::Right => Directions::RIGHT,
        }
    }

    /// Unit offset in canvas coordinates (y grows downwards).
    pub const fn delta(self) -> (f32, f32) {
        match self {
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }
}

/// Live held-key snapshot the host samples once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldInput {
    pub modifiers: Modifiers,
    pub directions: Directions,
}

impl HeldInput {
    pub const fn new(modifiers: Modifiers, directions: Directions) -> Self {
        Self {
            modifiers,
            directions,
        }
    }

    pub fn holding(directions: Directions) -> Self {
        Self::new(Modifiers::empty(), directions)
    }

    pub fn is_suppressed(&self) -> bool {
        !self.modifiers.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementIntegrator {
    step: f32,
}

impl MovementIntegrator {
    pub const fn new(step: f32) -> Self {
        Self { step }
    }

    /// Offset for one tick under `held`.
    pub fn delta(&self, held: HeldInput) -> (f32, f32) {
        if held.is_suppressed() {
            return (0.0, 0.0);
        }

        Direction::iter()
            .filter(|direction| held.directions.contains(direction.flag()))
            .map(Direction::delta)
            .fold((0.0, 0.0), |(x, y), (dx, dy)| {
                (x + dx * self.step, y + dy * self.step)
            })
    }

    /// Applies one tick of movement and returns the updated player.
    pub fn tick(&self, held: HeldInput, player: &mut PlayerState) -> PlayerState {
        let (dx, dy) = self.delta(held);
        player.position = player.position.offset(dx, dy);
        *player
    }
}

impl Default for MovementIntegrator {
    fn default() -> Self {
        Self::new(crate::config::SketchConfig::DEFAULT_MOVE_STEP)
    }
}
