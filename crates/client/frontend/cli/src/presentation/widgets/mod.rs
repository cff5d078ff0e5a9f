//! Widgets composing the sketch screen.
pub mod canvas;
pub mod instructions;
