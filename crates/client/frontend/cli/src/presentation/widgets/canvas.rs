//! Sketch canvas: player dot, recharge bar and the debug corner.
//!
//! Scene coordinates have y growing downwards; the ratatui canvas grows
//! upwards, so every y is flipped against the canvas height.

use ratatui::{
    Frame,
    layout::Rect,
    symbols::Marker,
    text::Line,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Circle, Context, Line as CanvasLine, Rectangle},
    },
};

use crate::presentation::theme::SketchTheme;
use client_frontend_core::{DebugCorner, DrawCommand, Scene};

/// Canvas units between scanlines of a filled shape.
const FILL_STEP: f64 = 1.0;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    scene: &Scene,
    debug: &DebugCorner,
    theme: &SketchTheme,
) {
    let width = scene.canvas.width;
    let height = scene.canvas.height;
    let inner_rows = f64::from(area.height.saturating_sub(2).max(1));
    let line_height = height / inner_rows;
    let debug_style = theme.debug_text();

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title("Canvas"))
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for command in &scene.commands {
                draw(ctx, command, height, theme);
            }

            ctx.layer();
            for (slot, text) in debug.lines().enumerate() {
                let y = line_height * 0.5 + line_height * slot as f64;
                ctx.print(2.0, y, Line::styled(text.to_string(), debug_style));
            }
        });

    frame.render_widget(canvas, area);
}

fn draw(ctx: &mut Context<'_>, command: &DrawCommand, height: f64, theme: &SketchTheme) {
    match *command {
        DrawCommand::Circle {
            x,
            y,
            diameter,
            paint,
        } => {
            let color = theme.paint(paint);
            let radius = diameter / 2.0;
            let mut r = radius;
            while r > 0.0 {
                ctx.draw(&Circle {
                    x,
                    y: height - y,
                    radius: r,
                    color,
                });
                r -= FILL_STEP;
            }
        }
        DrawCommand::Rect {
            x,
            y,
            width,
            height: rect_height,
            filled,
            paint,
        } => {
            let color = theme.paint(paint);
            let bottom = height - (y + rect_height);
            if filled {
                let mut row = bottom;
                while row <= bottom + rect_height {
                    ctx.draw(&CanvasLine {
                        x1: x,
                        y1: row,
                        x2: x + width,
                        y2: row,
                        color,
                    });
                    row += FILL_STEP;
                }
            } else {
                ctx.draw(&Rectangle {
                    x,
                    y: bottom,
                    width,
                    height: rect_height,
                    color,
                });
            }
        }
    }
}
