use std::collections::VecDeque;

use sage_core::Millis;

const WINDOW_MS: u64 = 1000;

/// Frame rate over a sliding one second window.
#[derive(Clone, Debug, Default)]
pub struct FpsCounter {
    frames: VecDeque<Millis>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frame at `now` and returns the current rate.
    pub fn record(&mut self, now: Millis) -> f32 {
        self.frames.push_back(now);
        while let Some(&oldest) = self.frames.front() {
            if now.since(oldest) < WINDOW_MS {
                break;
            }
            self.frames.pop_front();
        }
        self.rate()
    }

    pub fn rate(&self) -> f32 {
        match (self.frames.front(), self.frames.back()) {
            (Some(first), Some(last)) if self.frames.len() > 1 => {
                let span = last.since(*first).max(1) as f32;
                (self.frames.len() - 1) as f32 * 1000.0 / span
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_sixty_fps() {
        let mut fps = FpsCounter::new();
        let mut rate = 0.0;
        for frame in 0..120 {
            rate = fps.record(Millis(frame * 1000 / 60));
        }
        assert!((rate - 60.0).abs() < 1.5, "rate was {rate}");
    }

    #[test]
    fn single_frame_has_no_rate() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.record(Millis(5)), 0.0);
    }

    #[test]
    fn old_frames_fall_out_of_window() {
        let mut fps = FpsCounter::new();
        for frame in 0..10 {
            fps.record(Millis(frame * 10));
        }
        fps.record(Millis(5000));
        assert_eq!(fps.rate(), 0.0);
    }
}
