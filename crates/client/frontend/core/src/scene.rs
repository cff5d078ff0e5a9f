//! Frontend-agnostic draw list for one frame.
//!
//! Coordinates are canvas units with the origin in the top-left corner and
//! y growing downwards, matching [`Position`](sage_core::Position).
use sage_core::CanvasSize;

use crate::view_model::FrameView;

/// Palette roles; each frontend maps them onto its own colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Paint {
    Player,
    BarTrack,
    BarFill,
    BarReady,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Circle {
        x: f64,
        y: f64,
        diameter: f64,
        paint: Paint,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        filled: bool,
        paint: Paint,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub canvas: CanvasSize,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub const PLAYER_DIAMETER: f64 = 20.0;
    pub const BAR_WIDTH: f64 = 200.0;
    pub const BAR_HEIGHT: f64 = 10.0;
    /// Distance from the top edge to the recharge bar.
    pub const BAR_TOP: f64 = 20.0;

    /// Background is implied; commands paint player then the recharge bar.
    pub fn compose(view: &FrameView, canvas: CanvasSize) -> Self {
        let bar_x = (canvas.width - Self::BAR_WIDTH) / 2.0;
        let fill = f64::from(view.recharge_fraction.clamp(0.0, 1.0)) * Self::BAR_WIDTH;

        let mut commands = vec![
            DrawCommand::Circle {
                x: f64::from(view.position.x),
                y: f64::from(view.position.y),
                diameter: Self::PLAYER_DIAMETER,
                paint: Paint::Player,
            },
            DrawCommand::Rect {
                x: bar_x,
                y: Self::BAR_TOP,
                width: Self::BAR_WIDTH,
                height: Self::BAR_HEIGHT,
                filled: false,
                paint: Paint::BarTrack,
            },
        ];
        if fill > 0.0 {
            commands.push(DrawCommand::Rect {
                x: bar_x,
                y: Self::BAR_TOP,
                width: fill,
                height: Self::BAR_HEIGHT,
                filled: true,
                paint: if view.gcd_ready {
                    Paint::BarReady
                } else {
                    Paint::BarFill
                },
            });
        }

        Self { canvas, commands }
    }
}
