//! Input handling (keyboard and held keys).

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent};
use sage_core::{KeyOutcome, KeyPress, Millis, SketchEngine};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};
use client_frontend_core::Instructions;

/// What the loop should do after a key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::event) enum Flow {
    Continue,
    Redraw,
    Quit,
}

impl EventLoop {
    /// Drain pending terminal events without blocking.
    ///
    /// Returns `true` when the user asked to quit.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            match term_event::read()? {
                TermEvent::Key(key) => match self.on_key(key, self.clock.now()) {
                    Flow::Quit => return Ok(true),
                    Flow::Redraw => self.render(terminal)?,
                    Flow::Continue => {}
                },
                TermEvent::FocusLost => self.held.clear(),
                TermEvent::Resize(_, _) => self.render(terminal)?,
                _ => {}
            }
        }
        Ok(false)
    }

    /// Applies one key event at `now`.
    pub(in crate::event) fn on_key(&mut self, key: KeyEvent, now: Millis) -> Flow {
        match self.input.handle_key(key) {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                Flow::Quit
            }
            KeyAction::Press(press) => {
                self.held.press(press, now);
                let outcome = SketchEngine::new(&mut self.state, &self.sketch_config)
                    .on_key_press(press, now, &mut self.diagnostics);
                self.on_outcome(press, outcome)
            }
            KeyAction::Repeat(press) => {
                self.held.press(press, now);
                Flow::Continue
            }
            KeyAction::Release(press) => {
                self.held.sync_modifiers(press.modifiers, now);
                self.held.release(press.key);
                Flow::Continue
            }
            KeyAction::Modifier { modifier, pressed } => {
                if pressed {
                    self.held.press_modifier(modifier, now);
                } else {
                    self.held.release_modifier(modifier);
                }
                Flow::Continue
            }
        }
    }

    fn on_outcome(&mut self, press: KeyPress, outcome: KeyOutcome) -> Flow {
        match outcome {
            KeyOutcome::Frozen => {
                tracing::info!(frame = self.state.frame_count, "Stop key pressed; sketch frozen");
                self.held.clear();
                self.view.instructions = Instructions::Stopped;
                self.instructions =
                    Instructions::Stopped.lines(&self.table, self.input.stop_label());
                Flow::Redraw
            }
            KeyOutcome::Resolved(resolved) => {
                tracing::debug!(
                    key = %press.key,
                    branch = %resolved.branch,
                    ability = %resolved.ability,
                    armed = resolved.enhanced.is_armed(),
                    "resolved"
                );
                if resolved.suppress_default {
                    // Terminals have no host default for these combinations.
                    tracing::debug!(key = %press.key, "default action suppressed");
                }
                Flow::Continue
            }
            KeyOutcome::Unbound(press) => {
                tracing::debug!(key = %press.key, "no ability on this modifier branch");
                Flow::Continue
            }
            KeyOutcome::Unmapped(_) | KeyOutcome::Ignored => Flow::Continue,
        }
    }
}
