//! Terminal UI frontend for the Sage sketch.
//!
//! This crate provides a terminal-based host for the sketch: it maps
//! crossterm key events onto sketch key presses, tracks held keys for
//! movement, drives the engine from a frame timer and draws the canvas with
//! ratatui. It implements the `client_frontend_core::Frontend` trait.

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
