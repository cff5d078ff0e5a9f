//! Ratatui colours for the sketch palette.

use client_frontend_core::Paint;
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme mapping [`Paint`] roles onto terminal colours.
pub struct SketchTheme;

impl SketchTheme {
    pub fn paint(&self, paint: Paint) -> Color {
        match paint {
            Paint::Player => Color::White,
            Paint::BarTrack => Color::DarkGray,
            Paint::BarFill => Color::Cyan,
            Paint::BarReady => Color::LightGreen,
        }
    }

    pub fn debug_text(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn instructions(&self, stopped: bool) -> Style {
        if stopped {
            Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }
}
