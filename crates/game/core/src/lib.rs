//! Deterministic rules for the Sage action-bar sketch.
//!
//! `sage-core` defines the canonical rules (key bindings, ability resolution,
//! cooldown recharge, movement) and exposes pure APIs that any frontend can
//! drive. All state lives in one [`SketchState`] record and every mutation
//! flows through [`engine::SketchEngine`]; time is supplied by the host as
//! [`Millis`] so the rules stay testable without a real clock.
pub mod config;
pub mod cooldown;
pub mod engine;
pub mod error;
pub mod input;
pub mod movement;
pub mod state;

pub use config::{CanvasSize, SketchConfig};
pub use cooldown::{Cooldown, Recharge};
pub use engine::{DiagnosticSink, FrameReport, KeyOutcome, SketchEngine};
pub use error::ConfigError;
pub use input::{
    Ability, Binding, BindingTable, Branch, EnhancedMode, InputResolver, Key, KeyPress, Modifiers,
    Resolution, Resolved,
};
pub use movement::{Direction, Directions, HeldInput, MovementIntegrator};
pub use state::{AbilityState, Millis, PlayerState, Position, SchedulerState, SketchState};
