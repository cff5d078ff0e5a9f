//! Event loop orchestrating user input, engine ticks and rendering.
//!
//! This module coordinates three main concerns:
//! - Keyboard input processing (discrete presses and held keys)
//! - Frame ticks driving movement and the recharge loop
//! - Rendering through the frame view and scene

use anyhow::Result;
use tokio::time::{self, Duration, Instant, Interval, MissedTickBehavior};

use crate::{
    config::CliConfig,
    input::{HeldKeys, InputHandler},
    presentation::terminal::Tui,
};
use client_frontend_core::{DebugCorner, FpsCounter, FrameView, FrontendConfig, Instructions};
use sage_core::{BindingTable, Millis, SketchConfig, SketchState};

use super::diagnostics::TracingSink;

const INPUT_POLL_MS: u64 = 4;

/// Milliseconds since the session started.
#[derive(Clone, Copy, Debug)]
pub struct SessionClock {
    started: Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn now(&self) -> Millis {
        Millis(u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX))
    }
}

/// Event loop owning the sketch session.
///
/// This is the main orchestrator that:
/// - Owns the [`SketchState`] and drives it through the engine
/// - Tracks held keys between events for movement ticks
/// - Keeps the [`FrameView`] the widgets render from
pub struct EventLoop {
    pub(crate) state: SketchState,
    pub(crate) sketch_config: SketchConfig,
    pub(crate) cli_config: CliConfig,
    pub(crate) input: InputHandler,
    pub(crate) held: HeldKeys,
    pub(crate) clock: SessionClock,
    pub(crate) fps: FpsCounter,
    pub(crate) debug: DebugCorner,
    pub(crate) view: FrameView,
    pub(crate) table: BindingTable,
    /// Cached instruction panel text.
    pub(crate) instructions: Vec<String>,
    pub(crate) diagnostics: TracingSink,
}

impl EventLoop {
    /// `keyboard_enhanced` tells whether the terminal reports key releases
    /// and keypad digits. Without it held keys expire after the configured
    /// timeout and the top-row `1` doubles as the stop key.
    pub fn new(
        frontend_config: &FrontendConfig,
        cli_config: CliConfig,
        keyboard_enhanced: bool,
    ) -> Self {
        let sketch_config = frontend_config.sketch.clone();
        let state = SketchState::new(&sketch_config, Millis::ZERO);
        let view = FrameView::capture(&state, None, Millis::ZERO, 0.0);
        let table = BindingTable::default();
        let hold_timeout = (!keyboard_enhanced).then(|| cli_config.hold_timeout());
        let input = InputHandler::new(!keyboard_enhanced);

        Self {
            state,
            sketch_config,
            input,
            held: HeldKeys::new(hold_timeout),
            clock: SessionClock::start(),
            fps: FpsCounter::new(),
            debug: DebugCorner::new(frontend_config.debug.slots),
            view,
            instructions: Instructions::Running.lines(&table, input.stop_label()),
            table,
            diagnostics: TracingSink,
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<SketchState> {
        self.render(terminal)?;

        let mut ticker = Some(frame_interval(self.cli_config.frame_interval_ms));
        let mut input_poll = time::interval(Duration::from_millis(INPUT_POLL_MS));
        input_poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = next_tick(&mut ticker) => {
                    if self.advance(self.clock.now()) {
                        self.render(terminal)?;
                    }
                }
                _ = input_poll.tick() => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                    if self.state.is_frozen() && ticker.take().is_some() {
                        tracing::info!("Tick loop stopped");
                    }
                }
            }
        }

        Ok(self.state)
    }
}

fn frame_interval(period_ms: u64) -> Interval {
    let mut interval = time::interval(Duration::from_millis(period_ms.max(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

/// Waits for the next frame, or forever once the ticker was dropped.
async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::handlers::Flow;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use sage_core::{Ability, Position};

    fn session() -> EventLoop {
        EventLoop::new(&FrontendConfig::default(), CliConfig::default(), true)
    }

    /// A terminal without release or keypad reporting.
    fn legacy_session() -> EventLoop {
        EventLoop::new(&FrontendConfig::default(), CliConfig::default(), false)
    }

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn press(ch: char) -> KeyEvent {
        key(KeyCode::Char(ch), KeyModifiers::empty(), KeyEventKind::Press)
    }

    #[test]
    fn key_presses_reach_the_engine() {
        let mut session = session();
        assert_eq!(session.on_key(press('x'), Millis(10)), Flow::Continue);
        assert_eq!(session.on_key(press('e'), Millis(20)), Flow::Continue);
        assert!(session.advance(Millis(36)));

        assert_eq!(session.view.ability, Ability::EukrasianDosis);
        assert!(!session.view.enhanced);
        assert_eq!(session.state.cooldown.last_activation(), Millis(20));
    }

    #[test]
    fn held_movement_key_moves_until_released() {
        let mut session = session();
        session.on_key(press('d'), Millis(0));
        session.advance(Millis(16));
        session.advance(Millis(32));
        assert_eq!(session.view.position, Position::new(302.0, 150.0));

        session.on_key(
            key(KeyCode::Char('d'), KeyModifiers::empty(), KeyEventKind::Release),
            Millis(40),
        );
        session.advance(Millis(48));
        assert_eq!(session.view.position, Position::new(302.0, 150.0));
    }

    #[test]
    fn stop_key_freezes_and_ticks_stop() {
        let mut session = session();
        assert_eq!(session.instructions[0], "numpad 1 → freeze sketch");
        session.advance(Millis(16));

        let mut stop = press('1');
        stop.state = KeyEventState::KEYPAD;
        assert_eq!(session.on_key(stop, Millis(20)), Flow::Redraw);
        assert_eq!(session.view.instructions, Instructions::Stopped);
        assert_eq!(session.instructions, ["sketch stopped"]);

        assert!(!session.advance(Millis(32)));
        assert_eq!(session.state.frame_count, 1);
    }

    #[test]
    fn top_row_one_freezes_legacy_terminals() {
        let mut session = legacy_session();
        assert_eq!(session.instructions[0], "1 → freeze sketch");
        session.advance(Millis(16));

        assert_eq!(session.on_key(press('1'), Millis(20)), Flow::Redraw);
        assert!(session.state.is_frozen());
        assert_eq!(session.instructions, ["sketch stopped"]);
        assert!(!session.advance(Millis(32)));
    }

    #[test]
    fn legacy_hold_outlasts_auto_repeat_delay() {
        let mut session = legacy_session();
        session.on_key(press('d'), Millis(0));
        session.advance(Millis(400));
        assert_eq!(session.view.position, Position::new(301.0, 150.0));

        session.on_key(press('d'), Millis(500));
        session.advance(Millis(516));
        assert_eq!(session.view.position, Position::new(302.0, 150.0));

        session.advance(Millis(700));
        assert_eq!(session.view.position, Position::new(302.0, 150.0));
    }

    #[test]
    fn keys_without_a_code_leave_the_sketch_alone() {
        let mut session = session();
        session.on_key(press('x'), Millis(10));
        let before = session.state.clone();

        let null = key(KeyCode::Null, KeyModifiers::empty(), KeyEventKind::Press);
        assert_eq!(session.on_key(null, Millis(20)), Flow::Continue);
        assert_eq!(session.state, before);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut session = session();
        assert_eq!(
            session.on_key(
                key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press),
                Millis(0)
            ),
            Flow::Quit
        );
    }
}
