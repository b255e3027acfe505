use anyhow::Context;

use gemba_config::GembaConfig;

/// Load layered configuration, including a workspace `.env` if present.
pub fn load_config() -> anyhow::Result<GembaConfig> {
    GembaConfig::load_with_dotenv().context("failed to load gemba configuration")
}
