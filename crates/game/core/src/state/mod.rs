//! Session state shared by the resolver, the cooldown tracker and the
//! movement integrator.
//!
//! Everything the sketch mutates lives in [`SketchState`], which the host
//! owns and lends to [`SketchEngine`](crate::engine::SketchEngine). There
//! are no module-level singletons.
use std::fmt;

use crate::config::SketchConfig;
use crate::cooldown::Cooldown;
use crate::input::{Ability, EnhancedMode};

/// Monotonic host time in milliseconds since the session started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Self = Self(0);

    /// Milliseconds elapsed since `earlier`; zero if the clock went backwards.
    #[inline]
    pub const fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Continuous position in canvas units; y grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// The player dot. Only the movement integrator writes to it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub position: Position,
}

impl PlayerState {
    pub const fn at(position: Position) -> Self {
        Self { position }
    }
}

/// Last resolved ability plus the one-shot enhanced toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityState {
    pub current: Ability,
    pub enhanced: EnhancedMode,
}

impl AbilityState {
    pub fn is_enhanced(&self) -> bool {
        self.enhanced.is_armed()
    }
}

/// Whether the host should keep scheduling ticks.
///
/// `Frozen` is terminal; nothing transitions out of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SchedulerState {
    #[default]
    Running,
    Frozen,
}

impl SchedulerState {
    pub const fn is_frozen(self) -> bool {
        matches!(self, Self::Frozen)
    }
}

/// Complete mutable state of one sketch session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SketchState {
    pub player: PlayerState,
    pub ability: AbilityState,
    pub cooldown: Cooldown,
    pub scheduler: SchedulerState,
    /// Number of ticks processed so far.
    pub frame_count: u64,
}

impl SketchState {
    /// Initial state: player centred on the canvas, cooldown started at `now`.
    pub fn new(config: &SketchConfig, now: Millis) -> Self {
        let centre = Position::new(
            (config.canvas.width / 2.0) as f32,
            (config.canvas.height / 2.0) as f32,
        );
        Self {
            player: PlayerState::at(centre),
            ability: AbilityState::default(),
            cooldown: Cooldown::new(config.gcd_ms, now),
            scheduler: SchedulerState::Running,
            frame_count: 0,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.scheduler.is_frozen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_centres_player() {
        let state = SketchState::new(&SketchConfig::default(), Millis::ZERO);
        assert_eq!(state.player.position, Position::new(300.0, 150.0));
        assert_eq!(state.ability.current, Ability::None);
        assert!(!state.ability.is_enhanced());
        assert!(!state.is_frozen());
        assert_eq!(state.frame_count, 0);
    }

    #[test]
    fn millis_since_saturates() {
        assert_eq!(Millis(300).since(Millis(100)), 200);
        assert_eq!(Millis(100).since(Millis(300)), 0);
    }
}
