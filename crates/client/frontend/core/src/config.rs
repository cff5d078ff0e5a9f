//! Frontend configuration structures and loaders.
//!
//! This module contains settings shared across frontend implementations
//! (CLI, GUI, etc.): the sketch rules and the debug overlay.

use std::env;

use sage_core::{CanvasSize, SketchConfig};

use crate::debug::MAX_DEBUG_SLOTS;

/// Frontend-wide configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub sketch: SketchConfig,
    pub debug: DebugConfig,
}

impl FrontendConfig {
    pub const fn new(sketch: SketchConfig, debug: DebugConfig) -> Self {
        Self { sketch, debug }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SAGE_GCD_MS` - Global cooldown in milliseconds (default: 2500, min: 1)
    /// - `SAGE_MOVE_STEP` - Movement per tick per direction (default: 1.0)
    /// - `SAGE_CANVAS_WIDTH` - Logical canvas width (default: 600)
    /// - `SAGE_CANVAS_HEIGHT` - Logical canvas height (default: 300)
    /// - `SAGE_DEBUG_SLOTS` - Debug corner lines (default: 5, range: 1-8)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(gcd_ms) = read_var::<u64>(&lookup, "SAGE_GCD_MS") {
            config.sketch.gcd_ms = gcd_ms.max(1);
        }
        if let Some(step) = read_var::<f32>(&lookup, "SAGE_MOVE_STEP")
            && step.is_finite()
        {
            config.sketch.move_step = step;
        }

        let width = read_var::<f64>(&lookup, "SAGE_CANVAS_WIDTH");
        let height = read_var::<f64>(&lookup, "SAGE_CANVAS_HEIGHT");
        if width.is_some() || height.is_some() {
            let canvas = CanvasSize::new(
                positive_or(width, config.sketch.canvas.width),
                positive_or(height, config.sketch.canvas.height),
            );
            config.sketch.canvas = canvas;
        }

        if let Some(slots) = read_var::<usize>(&lookup, "SAGE_DEBUG_SLOTS") {
            config.debug.slots = slots.clamp(1, MAX_DEBUG_SLOTS);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Number of debug-corner text lines.
    pub slots: usize,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self { slots: 5 }
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn positive_or(value: Option<f64>, fallback: f64) -> f64 {
    value
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(fallback)
}
