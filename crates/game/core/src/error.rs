//! Error types for sage-core.
//!
//! The interactive rules themselves cannot fail: out-of-range input is either
//! ignored or reported to a [`DiagnosticSink`](crate::engine::DiagnosticSink).
//! The only fallible surface is configuration, validated once at startup.

/// Invalid [`SketchConfig`](crate::config::SketchConfig) values.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("cooldown duration must be at least 1ms")]
    ZeroCooldown,

    #[error("movement step {0} is not a finite number")]
    InvalidMoveStep(f32),

    #[error("canvas size {width}x{height} must be positive and finite")]
    InvalidCanvas { width: f64, height: f64 },
}
