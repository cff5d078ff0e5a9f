//! Global cooldown recharge timer.
//!
//! The timer free-runs: every tick measures the time since the last
//! activation, and once a full duration has elapsed it restarts from the
//! tick's own timestamp. The rendered bar therefore fills up and snaps back
//! to empty instead of holding at full. Activating an ability restarts it
//! unconditionally; there is no readiness guard and nothing is queued.
use crate::state::Millis;

/// Recharge timer with reset-on-expiry semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cooldown {
    last_activation: Millis,
    duration_ms: u64,
}

/// What a single [`Cooldown::tick`] observed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recharge {
    /// Raw elapsed time measured before the restart check. May exceed the
    /// duration on the tick that restarts the timer.
    pub elapsed_ms: u64,
    /// Bar fill in `[0, 1)`, measured after the restart check.
    pub fraction: f32,
    /// True when this tick hit the duration and restarted the timer.
    pub restarted: bool,
}

impl Cooldown {
    /// Creates a timer of `duration_ms` that starts counting at `started_at`.
    ///
    /// A zero duration is bumped to 1ms; [`SketchConfig::validate`] rejects
    /// it upstream.
    ///
    /// [`SketchConfig::validate`]: crate::config::SketchConfig::validate
    pub fn new(duration_ms: u64, started_at: Millis) -> Self {
        Self {
            last_activation: started_at,
            duration_ms: duration_ms.max(1),
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn last_activation(&self) -> Millis {
        self.last_activation
    }

    /// Records an activation at `now`. Last write wins.
    pub fn activate(&mut self, now: Millis) {
        self.last_activation = now;
    }

    /// Unclamped time since the last activation.
    pub fn elapsed(&self, now: Millis) -> u64 {
        now.since(self.last_activation)
    }

    pub fn is_ready(&self, now: Millis) -> bool {
        self.elapsed(now) >= self.duration_ms
    }

    /// Elapsed time clamped to `[0, duration]` for display.
    pub fn display_elapsed(&self, now: Millis) -> u64 {
        self.elapsed(now).min(self.duration_ms)
    }

    /// Bar fill for `now` without advancing the timer.
    pub fn fraction(&self, now: Millis) -> f32 {
        self.display_elapsed(now) as f32 / self.duration_ms as f32
    }

    /// Advances the recharge loop to `now`.
    pub fn tick(&mut self, now: Millis) -> Recharge {
        let elapsed_ms = self.elapsed(now);
        let restarted = elapsed_ms >= self.duration_ms;
        if restarted {
            self.last_activation = now;
        }

        Recharge {
            elapsed_ms,
            fraction: self.fraction(now),
            restarted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GCD: u64 = 2500;

    #[test]
    fn fraction_increases_monotonically_before_expiry() {
        let mut cooldown = Cooldown::new(GCD, Millis::ZERO);
        let mut previous = -1.0_f32;

        for now in (0..GCD).step_by(100) {
            let recharge = cooldown.tick(Millis(now));
            assert!(!recharge.restarted);
            assert!(recharge.fraction > previous);
            assert!((0.0..1.0).contains(&recharge.fraction));
            previous = recharge.fraction;
        }
        assert_eq!(cooldown.last_activation(), Millis::ZERO);
    }

    #[test]
    fn restarts_from_tick_time_once_elapsed() {
        let mut cooldown = Cooldown::new(GCD, Millis::ZERO);
        assert!(!cooldown.tick(Millis(2499)).restarted);

        let recharge = cooldown.tick(Millis(2516));
        assert!(recharge.restarted);
        assert_eq!(recharge.elapsed_ms, 2516);
        assert_eq!(cooldown.last_activation(), Millis(2516));
        assert!(recharge.fraction < 0.01);

        let next = cooldown.tick(Millis(2532));
        assert!(!next.restarted);
        assert_eq!(next.elapsed_ms, 16);
    }

    #[test]
    fn restarts_exactly_at_duration() {
        let mut cooldown = Cooldown::new(GCD, Millis(1000));
        let recharge = cooldown.tick(Millis(3500));
        assert!(recharge.restarted);
        assert_eq!(recharge.fraction, 0.0);
    }

    #[test]
    fn activation_while_not_ready_restarts_timer() {
        let mut cooldown = Cooldown::new(GCD, Millis::ZERO);
        cooldown.activate(Millis(1000));
        assert!(!cooldown.is_ready(Millis(1200)));

        cooldown.activate(Millis(1500));
        assert_eq!(cooldown.last_activation(), Millis(1500));
        assert_eq!(cooldown.elapsed(Millis(2000)), 500);
        assert!(cooldown.is_ready(Millis(4000)));
    }

    #[test]
    fn display_clamps_but_timestamp_does_not() {
        let cooldown = Cooldown::new(GCD, Millis(100));
        assert_eq!(cooldown.elapsed(Millis(10_000)), 9_900);
        assert_eq!(cooldown.display_elapsed(Millis(10_000)), GCD);
        assert_eq!(cooldown.fraction(Millis(10_000)), 1.0);
        assert_eq!(cooldown.display_elapsed(Millis(50)), 0);
        assert_eq!(cooldown.last_activation(), Millis(100));
    }
}
