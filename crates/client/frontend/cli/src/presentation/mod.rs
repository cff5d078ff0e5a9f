//! Rendering for the terminal host.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
