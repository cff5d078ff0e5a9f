//! CLI-specific configuration for terminal UI.
use std::env;
use std::path::PathBuf;

use crate::input::HoldTimeout;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal host, separate from the
/// cross-frontend [`FrontendConfig`](client_frontend_core::FrontendConfig).
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Tick period in milliseconds.
    pub frame_interval_ms: u64,
    /// How long a fresh press counts as held before the first auto-repeat,
    /// for terminals that never report releases.
    pub hold_initial_ms: u64,
    /// How long a key counts as held between auto-repeats once they began.
    pub hold_timeout_ms: u64,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
    pub ui: UiConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            hold_initial_ms: 600,
            hold_timeout_ms: 120,
            log_dir: None,
            ui: UiConfig::default(),
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SAGE_FRAME_INTERVAL_MS` - Tick period (default: 16, min: 1)
    /// - `SAGE_HOLD_INITIAL_MS` - Held-key expiry before auto-repeat starts (default: 600)
    /// - `SAGE_HOLD_TIMEOUT_MS` - Held-key expiry between auto-repeats (default: 120)
    /// - `SAGE_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `CLI_INSTRUCTIONS_HEIGHT` - Instruction panel height in lines (default: 9)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(interval) = read_var::<u64>(&lookup, "SAGE_FRAME_INTERVAL_MS") {
            config.frame_interval_ms = interval.max(1);
        }
        if let Some(initial) = read_var::<u64>(&lookup, "SAGE_HOLD_INITIAL_MS") {
            config.hold_initial_ms = initial;
        }
        if let Some(timeout) = read_var::<u64>(&lookup, "SAGE_HOLD_TIMEOUT_MS") {
            config.hold_timeout_ms = timeout;
        }
        config.log_dir = lookup("SAGE_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);
        if let Some(height) = read_var::<u16>(&lookup, "CLI_INSTRUCTIONS_HEIGHT") {
            config.ui.instructions_height = height.max(3);
        }

        config
    }

    /// Expiry windows for held keys; the initial window never undercuts the
    /// repeat window.
    pub fn hold_timeout(&self) -> HoldTimeout {
        HoldTimeout {
            initial_ms: self.hold_initial_ms.max(self.hold_timeout_ms),
            repeat_ms: self.hold_timeout_ms,
        }
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of the instruction panel in lines (including borders).
    pub instructions_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            instructions_height: 9,
        }
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_variables() {
        let config = CliConfig::from_lookup(|_: &str| None);
        assert_eq!(config.frame_interval_ms, 16);
        assert_eq!(
            config.hold_timeout(),
            HoldTimeout {
                initial_ms: 600,
                repeat_ms: 120,
            }
        );
        assert!(config.log_dir.is_none());
        assert_eq!(config.ui.instructions_height, 9);
    }

    #[test]
    fn reads_and_clamps_overrides() {
        let config = CliConfig::from_lookup(|key: &str| match key {
            "SAGE_FRAME_INTERVAL_MS" => Some("0".to_string()),
            "SAGE_HOLD_INITIAL_MS" => Some("50".to_string()),
            "SAGE_HOLD_TIMEOUT_MS" => Some(" 200 ".to_string()),
            "SAGE_LOG_DIR" => Some("/tmp/sage-logs".to_string()),
            "CLI_INSTRUCTIONS_HEIGHT" => Some("1".to_string()),
            _ => None,
        });
        assert_eq!(config.frame_interval_ms, 1);
        assert_eq!(config.hold_timeout_ms, 200);
        assert_eq!(config.hold_timeout().initial_ms, 200);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/sage-logs")));
        assert_eq!(config.ui.instructions_height, 3);
    }
}
