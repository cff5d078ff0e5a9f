//! Per-frame presentation snapshot.
//!
//! A [`FrameView`] is captured after each tick from the session state and
//! the engine's [`FrameReport`]; widgets render from it and never touch the
//! state directly.
use sage_core::{Ability, BindingTable, Branch, FrameReport, Millis, Position, SketchState};

/// Instruction panel contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Instructions {
    #[default]
    Running,
    Stopped,
}

impl Instructions {
    /// `stop_key` names the key that freezes the sketch on this host.
    pub fn lines(self, table: &BindingTable, stop_key: &str) -> Vec<String> {
        match self {
            Self::Running => {
                let mut lines = vec![
                    format!("{stop_key} → freeze sketch"),
                    "wasd → move".to_string(),
                ];
                lines.extend(table.iter().map(|binding| {
                    let combos: Vec<String> = [
                        (Branch::None, ""),
                        (Branch::Shift, "shift+"),
                        (Branch::Control, "ctrl+"),
                        (Branch::ControlShift, "ctrl+shift+"),
                    ]
                    .into_iter()
                    .filter_map(|(branch, prefix)| {
                        binding
                            .slot(branch)
                            .map(|ability| format!("{prefix}{} → {ability}", binding.key))
                    })
                    .collect();
                    combos.join(", ")
                }));
                lines
            }
            Self::Stopped => vec!["sketch stopped".to_string()],
        }
    }
}

/// Everything a frontend needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameView {
    pub position: Position,
    pub ability: Ability,
    pub enhanced: bool,
    /// Recharge bar fill in `[0, 1]`.
    pub recharge_fraction: f32,
    /// Elapsed cooldown clamped to `[0, gcd_ms]`.
    pub gcd_elapsed_ms: u64,
    pub gcd_ms: u64,
    pub gcd_ready: bool,
    pub frame: u64,
    pub fps: f32,
    pub instructions: Instructions,
}

impl FrameView {
    /// Captures the state after a tick. Without a report (before the first
    /// tick) the cooldown is sampled at `now` without advancing it.
    pub fn capture(
        state: &SketchState,
        report: Option<&FrameReport>,
        now: Millis,
        fps: f32,
    ) -> Self {
        let cooldown = &state.cooldown;
        let (recharge_fraction, gcd_ready) = match report {
            Some(report) => (report.recharge.fraction, report.gcd_ready),
            None => (cooldown.fraction(now), cooldown.is_ready(now)),
        };

        Self {
            position: state.player.position,
            ability: state.ability.current,
            enhanced: state.ability.is_enhanced(),
            recharge_fraction,
            gcd_elapsed_ms: cooldown.display_elapsed(now),
            gcd_ms: cooldown.duration_ms(),
            gcd_ready,
            frame: state.frame_count,
            fps,
            instructions: if state.is_frozen() {
                Instructions::Stopped
            } else {
                Instructions::Running
            },
        }
    }

    /// Writes the standard debug lines, slot 0 first.
    pub fn write_debug(&self, corner: &mut crate::debug::DebugCorner) {
        corner.set_text(format!("ability: {}", self.ability), 0);
        corner.set_text(format!("fps: {:.0}", self.fps), 1);
        corner.set_text(format!("frameCount: {}", self.frame), 2);
        corner.set_text(
            format!("gcd: {}/{}ms", self.gcd_elapsed_ms, self.gcd_ms),
            3,
        );
        corner.set_text(
            format!(
                "eukrasia: {}",
                if self.enhanced { "armed" } else { "idle" }
            ),
            4,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::DebugCorner;
    use sage_core::{HeldInput, Key, KeyPress, SketchConfig, SketchEngine};

    #[test]
    fn capture_reflects_engine_state() {
        let config = SketchConfig::default();
        let mut state = SketchState::new(&config, Millis::ZERO);
        let mut engine = SketchEngine::new(&mut state, &config);
        engine.on_key_press(KeyPress::plain(Key::char('x')), Millis(10), &mut ());
        let report = engine.tick(HeldInput::default(), Millis(1250)).unwrap();

        let view = FrameView::capture(&state, Some(&report), Millis(1250), 60.0);
        assert_eq!(view.ability, Ability::Eukrasia);
        assert!(view.enhanced);
        assert!((view.recharge_fraction - 0.5).abs() < 1e-6);
        assert_eq!(view.gcd_elapsed_ms, 1250);
        assert_eq!(view.frame, 1);
        assert_eq!(view.instructions, Instructions::Running);
    }

    #[test]
    fn debug_lines_fill_all_slots() {
        let config = SketchConfig::default();
        let state = SketchState::new(&config, Millis::ZERO);
        let view = FrameView::capture(&state, None, Millis(100), 59.6);

        let mut corner = DebugCorner::new(5);
        view.write_debug(&mut corner);
        let lines: Vec<_> = corner.lines().collect();
        assert_eq!(
            lines,
            [
                "ability: none",
                "fps: 60",
                "frameCount: 0",
                "gcd: 100/2500ms",
                "eukrasia: idle",
            ]
        );
    }

    #[test]
    fn small_corner_surfaces_overflow_notice() {
        let config = SketchConfig::default();
        let state = SketchState::new(&config, Millis::ZERO);
        let view = FrameView::capture(&state, None, Millis::ZERO, 0.0);

        let mut corner = DebugCorner::new(3);
        view.write_debug(&mut corner);
        assert_eq!(corner.line(0), Some("4 ← index>3 not supported"));
        assert_eq!(corner.line(2), Some("frameCount: 0"));
    }

    #[test]
    fn instructions_list_bindings_until_stopped() {
        let table = BindingTable::default();
        let running = Instructions::Running.lines(&table, "numpad 1");
        assert_eq!(running[0], "numpad 1 → freeze sketch");
        assert!(running.contains(
            &"e → dosis, shift+e → diagnosis, ctrl+e → prognosis, ctrl+shift+e → zoe".to_string()
        ));
        assert!(running.contains(&"ctrl+d → swiftcast".to_string()));

        assert_eq!(
            Instructions::Stopped.lines(&table, "numpad 1"),
            ["sketch stopped"]
        );
        assert_eq!(
            Instructions::Running.lines(&table, "1")[0],
            "1 → freeze sketch"
        );
    }
}
