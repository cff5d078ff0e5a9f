//! Instruction panel above the canvas.

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::SketchTheme;
use client_frontend_core::Instructions;

/// Render the instruction panel.
///
/// Lists the stop key and the bindings while running; once frozen only the
/// stopped notice remains.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    instructions: Instructions,
    lines: &[String],
    theme: &SketchTheme,
) {
    let style = theme.instructions(instructions == Instructions::Stopped);
    let text: Vec<Line> = lines
        .iter()
        .map(|line| Line::styled(line.as_str(), style))
        .collect();

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::styled("Sage", theme.title())),
    );

    frame.render_widget(paragraph, area);
}
