//! Key handling and per-frame ticking over a [`SketchState`].
//!
//! The [`SketchEngine`] is the authoritative reducer for the sketch. The host
//! calls [`SketchEngine::on_key_press`] for every discrete key-down event and
//! [`SketchEngine::tick`] once per rendered frame. Both run to completion and
//! never overlap, so the state needs no synchronisation.
//!
//! Freezing is terminal: after the stop key every key press is ignored and
//! every tick is refused, so nothing observable changes any more.
use crate::config::SketchConfig;
use crate::cooldown::Recharge;
use crate::input::{InputResolver, Key, KeyPress, Resolution, Resolved};
use crate::movement::{HeldInput, MovementIntegrator};
use crate::state::{Millis, Position, SchedulerState, SketchState};

/// Receives keys the binding table knows nothing about.
pub trait DiagnosticSink {
    fn unmapped_key(&mut self, key: Key);
}

impl DiagnosticSink for () {
    fn unmapped_key(&mut self, _key: Key) {}
}

impl DiagnosticSink for Vec<Key> {
    fn unmapped_key(&mut self, key: Key) {
        self.push(key);
    }
}

/// Result of a single key press as seen by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The sketch is frozen; the press had no effect.
    Ignored,
    /// The stop key froze the sketch.
    Frozen,
    Resolved(Resolved),
    Unbound(KeyPress),
    Unmapped(Key),
}

impl KeyOutcome {
    pub fn suppress_default(&self) -> bool {
        matches!(self, Self::Resolved(resolved) if resolved.suppress_default)
    }
}

/// Observations from one tick, for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    /// Frame counter after this tick.
    pub frame: u64,
    pub position: Position,
    pub recharge: Recharge,
    /// Readiness sampled before the recharge loop restarted the timer.
    pub gcd_ready: bool,
}

pub struct SketchEngine<'a> {
    state: &'a mut SketchState,
    resolver: InputResolver,
    movement: MovementIntegrator,
}

impl<'a> SketchEngine<'a> {
    /// Creates an engine over `state` using the default Sage bindings.
    pub fn new(state: &'a mut SketchState, config: &SketchConfig) -> Self {
        Self::with_resolver(state, config, InputResolver::default())
    }

    pub fn with_resolver(
        state: &'a mut SketchState,
        config: &SketchConfig,
        resolver: InputResolver,
    ) -> Self {
        Self {
            state,
            resolver,
            movement: MovementIntegrator::new(config.move_step),
        }
    }

    pub fn state(&self) -> &SketchState {
        self.state
    }

    /// Handles one discrete key-down event.
    ///
    /// GCD abilities restart the cooldown at `now` without checking
    /// readiness; unmapped keys are forwarded to `sink`.
    pub fn on_key_press(
        &mut self,
        press: KeyPress,
        now: Millis,
        sink: &mut impl DiagnosticSink,
    ) -> KeyOutcome {
        if self.state.is_frozen() {
            return KeyOutcome::Ignored;
        }

        if press.key == Key::STOP {
            self.state.scheduler = SchedulerState::Frozen;
            return KeyOutcome::Frozen;
        }

        match self.resolver.on_key_press(&mut self.state.ability, press) {
            Resolution::Resolved(resolved) => {
                if resolved.ability.is_gcd() {
                    self.state.cooldown.activate(now);
                }
                KeyOutcome::Resolved(resolved)
            }
            Resolution::Unbound(press) => KeyOutcome::Unbound(press),
            Resolution::Unmapped(key) => {
                sink.unmapped_key(key);
                KeyOutcome::Unmapped(key)
            }
        }
    }

    /// Runs movement and the cooldown for one frame.
    ///
    /// Returns `None` once frozen; the state is left untouched.
    pub fn tick(&mut self, held: HeldInput, now: Millis) -> Option<FrameReport> {
        if self.state.is_frozen() {
            return None;
        }

        self.state.frame_count += 1;
        let player = self.movement.tick(held, &mut self.state.player);
        let gcd_ready = self.state.cooldown.is_ready(now);
        let recharge = self.state.cooldown.tick(now);

        Some(FrameReport {
            frame: self.state.frame_count,
            position: player.position,
            recharge,
            gcd_ready,
        })
    }
}
