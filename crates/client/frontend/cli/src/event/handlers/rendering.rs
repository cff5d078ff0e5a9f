//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};
use client_frontend_core::Scene;

impl EventLoop {
    /// Render the current frame view.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        self.view.write_debug(&mut self.debug);
        let scene = Scene::compose(&self.view, self.sketch_config.canvas);

        let ctx = ui::RenderContext {
            view: &self.view,
            scene: &scene,
            debug: &self.debug,
            instructions: &self.instructions,
            instructions_height: self.cli_config.ui.instructions_height,
        };

        ui::render(terminal, &ctx)
    }
}
