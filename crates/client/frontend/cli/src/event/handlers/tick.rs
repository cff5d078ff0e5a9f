//! Per-frame ticks.

use sage_core::{Millis, SketchEngine};

use super::super::EventLoop;
use client_frontend_core::FrameView;

impl EventLoop {
    /// Runs one engine tick at `now` and refreshes the frame view.
    ///
    /// Returns `false` once the sketch is frozen; nothing changes then.
    pub(in crate::event) fn advance(&mut self, now: Millis) -> bool {
        let held = self.held.snapshot(now);
        let Some(report) = SketchEngine::new(&mut self.state, &self.sketch_config).tick(held, now)
        else {
            return false;
        };

        if report.recharge.restarted {
            tracing::debug!(
                frame = report.frame,
                elapsed_ms = report.recharge.elapsed_ms,
                "gcd recharge restarted"
            );
        }

        let fps = self.fps.record(now);
        self.view = FrameView::capture(&self.state, Some(&report), now, fps);
        true
    }
}
