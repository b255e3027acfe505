//! General application configuration.

use gemba_core::stats::TimeWindow;
use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default time window for `stats` and window-filtered listings.
    #[serde(default)]
    pub default_window: TimeWindow,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_window: TimeWindow::All,
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_window, TimeWindow::All);
        assert_eq!(config.default_limit, 20);
    }
}
