//! Event handling for the CLI client.
//!
//! This module contains the event loop that owns the sketch session and the
//! handlers that feed it keyboard input, ticks and redraws.

mod diagnostics;
mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
