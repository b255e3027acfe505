//! Database configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    String::from(".gemba/audits.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DbConfig {
    /// Path to the libSQL database file. `:memory:` is accepted for tests.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
