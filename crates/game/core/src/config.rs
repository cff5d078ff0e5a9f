use crate::error::ConfigError;

/// Logical drawing surface size in canvas units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(SketchConfig::DEFAULT_CANVAS_WIDTH, SketchConfig::DEFAULT_CANVAS_HEIGHT)
    }
}

/// Sketch configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SketchConfig {
    /// Global cooldown length in milliseconds.
    pub gcd_ms: u64,
    /// Position increment applied per tick for each held direction.
    pub move_step: f32,
    /// Drawing surface the player starts centred on.
    pub canvas: CanvasSize,
}

impl SketchConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GCD_MS: u64 = 2500;
    pub const DEFAULT_MOVE_STEP: f32 = 1.0;
    pub const DEFAULT_CANVAS_WIDTH: f64 = 600.0;
    pub const DEFAULT_CANVAS_HEIGHT: f64 = 300.0;

    pub fn new() -> Self {
        Self {
            gcd_ms: Self::DEFAULT_GCD_MS,
            move_step: Self::DEFAULT_MOVE_STEP,
            canvas: CanvasSize::default(),
        }
    }

    pub fn with_gcd_ms(mut self, gcd_ms: u64) -> Self {
        self.gcd_ms = gcd_ms;
        self
    }

    pub fn with_move_step(mut self, move_step: f32) -> Self {
        self.move_step = move_step;
        self
    }

    pub fn with_canvas(mut self, canvas: CanvasSize) -> Self {
        self.canvas = canvas;
        self
    }

    /// Rejects values the rules cannot operate on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gcd_ms == 0 {
            return Err(ConfigError::ZeroCooldown);
        }
        if !self.move_step.is_finite() {
            return Err(ConfigError::InvalidMoveStep(self.move_step));
        }
        let CanvasSize { width, height } = self.canvas;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidCanvas { width, height });
        }
        Ok(())
    }
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SketchConfig::default();
        assert_eq!(config.gcd_ms, 2500);
        assert_eq!(config.canvas, CanvasSize::new(600.0, 300.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_values() {
        assert_eq!(
            SketchConfig::new().with_gcd_ms(0).validate(),
            Err(ConfigError::ZeroCooldown)
        );
        assert!(matches!(
            SketchConfig::new().with_move_step(f32::NAN).validate(),
            Err(ConfigError::InvalidMoveStep(_))
        ));
        assert!(matches!(
            SketchConfig::new()
                .with_canvas(CanvasSize::new(0.0, 300.0))
                .validate(),
            Err(ConfigError::InvalidCanvas { .. })
        ));
    }
}
