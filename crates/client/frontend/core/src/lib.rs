//! Cross-frontend primitives for presenting the sketch.
//!
//! Houses configuration, the debug-corner overlay, the frame view model and
//! the draw-command scene that both the terminal client and any future
//! graphical client can reuse.
pub mod config;
pub mod debug;
pub mod fps;
pub mod frontend;
pub mod scene;
pub mod view_model;

pub use config::{DebugConfig, FrontendConfig};
pub use debug::DebugCorner;
pub use fps::FpsCounter;
pub use frontend::Frontend;
pub use scene::{DrawCommand, Paint, Scene};
pub use view_model::{FrameView, Instructions};
