//! UI rendering entry point composing the sketch widgets.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::presentation::{terminal::Tui, theme::SketchTheme, widgets};
use client_frontend_core::{DebugCorner, FrameView, Scene};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view: &'a FrameView,
    pub scene: &'a Scene,
    pub debug: &'a DebugCorner,
    pub instructions: &'a [String],
    pub instructions_height: u16,
}

/// Render the instruction panel above the canvas.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = SketchTheme;

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(ctx.instructions_height),
                Constraint::Min(0),
            ])
            .split(frame.area());

        widgets::instructions::render(
            frame,
            chunks[0],
            ctx.view.instructions,
            ctx.instructions,
            &theme,
        );
        widgets::canvas::render(frame, chunks[1], ctx.scene, ctx.debug, &theme);
    })?;

    Ok(())
}
