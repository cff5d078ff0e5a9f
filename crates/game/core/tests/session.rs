use sage_core::{
    Ability, Directions, HeldInput, Key, KeyOutcome, KeyPress, Millis, Modifiers, Position,
    SketchConfig, SketchEngine, SketchState,
};

const FRAME_MS: u64 = 16;

/// Minimal host: schedules ticks while the sketch is running and counts them.
struct Host {
    state: SketchState,
    config: SketchConfig,
    now: Millis,
    ticks: u64,
}

impl Host {
    fn new() -> Self {
        let config = SketchConfig::default();
        Self {
            state: SketchState::new(&config, Millis::ZERO),
            config,
            now: Millis::ZERO,
            ticks: 0,
        }
    }

    fn frames(&mut self, count: u64, held: HeldInput) {
        for _ in 0..count {
            self.now = Millis(self.now.0 + FRAME_MS);
            if self.state.is_frozen() {
                continue;
            }
            self.ticks += 1;
            SketchEngine::new(&mut self.state, &self.config).tick(held, self.now);
        }
    }

    fn press(&mut self, key: Key, modifiers: Modifiers) -> KeyOutcome {
        SketchEngine::new(&mut self.state, &self.config).on_key_press(
            KeyPress::new(key, modifiers),
            self.now,
            &mut (),
        )
    }
}

#[test]
fn freeze_stops_tick_invocations() {
    let mut host = Host::new();
    host.frames(10, HeldInput::default());
    assert_eq!(host.ticks, 10);

    assert_eq!(host.press(Key::STOP, Modifiers::empty()), KeyOutcome::Frozen);
    host.frames(50, HeldInput::holding(Directions::RIGHT));

    assert_eq!(host.ticks, 10);
    assert_eq!(host.state.frame_count, 10);
    assert_eq!(host.state.player.position, Position::new(300.0, 150.0));
    assert_eq!(host.press(Key::char('e'), Modifiers::empty()), KeyOutcome::Ignored);
    assert_eq!(host.state.ability.current, Ability::None);
}

#[test]
fn movement_resumes_after_modifier_release() {
    let mut host = Host::new();
    let all = Directions::RIGHT | Directions::DOWN;

    host.frames(5, HeldInput::new(Modifiers::CONTROL, all));
    assert_eq!(host.state.player.position, Position::new(300.0, 150.0));

    host.frames(5, HeldInput::holding(all));
    assert_eq!(host.state.player.position, Position::new(305.0, 155.0));
}

#[test]
fn recharge_loops_every_gcd() {
    let mut host = Host::new();
    // 157 frames * 16ms = 2512ms: the timer restarts on frame 157
    host.frames(156, HeldInput::default());
    assert_eq!(host.state.cooldown.last_activation(), Millis::ZERO);

    host.frames(1, HeldInput::default());
    assert_eq!(host.state.cooldown.last_activation(), Millis(2512));
    assert!(host.state.cooldown.fraction(host.now) < 0.01);
}

#[test]
fn eukrasian_cast_through_host() {
    let mut host = Host::new();
    host.frames(3, HeldInput::default());

    host.press(Key::char('x'), Modifiers::empty());
    assert!(host.state.ability.is_enhanced());
    host.frames(3, HeldInput::default());

    host.press(Key::char('E'), Modifiers::SHIFT);
    assert_eq!(host.state.ability.current, Ability::EukrasianDiagnosis);
    assert!(!host.state.ability.is_enhanced());
    assert_eq!(host.state.cooldown.last_activation(), host.now);
}
