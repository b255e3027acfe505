use anyhow::Context;

use gemba_config::GembaConfig;
use gemba_db::AuditStore;

/// Everything a command handler needs: the loaded config and an open store.
pub struct AppContext {
    pub config: GembaConfig,
    pub store: AuditStore,
}

impl AppContext {
    /// Open the configured database and assemble the context.
    ///
    /// Creates the parent directory of the database file if it does not
    /// exist yet, so a fresh checkout works without a setup step.
    pub async fn init(config: GembaConfig) -> anyhow::Result<Self> {
        let path = &config.db.path;
        if path != ":memory:"
            && let Some(parent) = std::path::Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create database directory {}", parent.display()))?;
        }

        let store = AuditStore::new_local(path)
            .await
            .with_context(|| format!("failed to open audit database at {path}"))?;

        Ok(Self { config, store })
    }
}
