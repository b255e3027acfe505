use anyhow::Context;

use gemba_config::GembaConfig;
use gemba_core::wire::HealthResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HealthArgs;
use crate::output::output;

/// Probe a running API server's health endpoint.
pub async fn run(args: &HealthArgs, config: &GembaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let base = args
        .url
        .clone()
        .unwrap_or_else(|| format!("http://{}", config.server.addr()));
    let url = format!("{}/api/health", base.trim_end_matches('/'));

    let response = reqwest::get(&url)
        .await
        .with_context(|| format!("no server reachable at {url}"))?;
    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("health check at {url} returned {status}");
    }

    let health: HealthResponse = response
        .json()
        .await
        .with_context(|| format!("unexpected health response from {url}"))?;

    output(&health, flags.format)
}
