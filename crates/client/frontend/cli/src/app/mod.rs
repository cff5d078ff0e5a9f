//! Glue code tying the sketch session and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;
use client_frontend_core::{Frontend, FrontendConfig};

/// Terminal frontend running one sketch session.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }

    pub async fn execute(&mut self) -> Result<()> {
        tracing::info!("CLI client starting...");

        let mut terminal = terminal::init()?;
        let mut guard = terminal::TerminalGuard {
            keyboard_enhanced: false,
        };
        guard.keyboard_enhanced = terminal::enable_keyboard_enhancement()?;
        if !guard.keyboard_enhanced {
            tracing::info!(
                hold_initial_ms = self.cli_config.hold_initial_ms,
                hold_timeout_ms = self.cli_config.hold_timeout_ms,
                "Terminal does not report key releases; held keys expire and 1 stops"
            );
        }

        let event_loop = EventLoop::new(
            &self.frontend_config,
            self.cli_config.clone(),
            guard.keyboard_enhanced,
        );
        let state = event_loop.run(&mut terminal).await?;

        tracing::info!(
            frames = state.frame_count,
            frozen = state.is_frozen(),
            "CLI client exiting"
        );

        Ok(())
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self) -> Result<()> {
        self.execute().await
    }
}
