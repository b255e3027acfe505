//! Integration tests for environment variable overrides.
//!
//! `GEMBA_*` env vars win over TOML values; `__` separates nested sections.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use gemba_config::GembaConfig;

#[test]
fn env_vars_override_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
port = 8080

[db]
path = "from-toml.db"
"#,
        )?;
        jail.set_env("GEMBA_SERVER__PORT", "9001");
        jail.set_env("GEMBA_DB__PATH", "from-env.db");

        let config: GembaConfig = Figment::from(Serialized::defaults(GembaConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("GEMBA_").split("__"))
            .extract()?;

        assert_eq!(config.server.port, 9001);
        assert_eq!(config.db.path, "from-env.db");
        Ok(())
    });
}

#[test]
fn env_vars_apply_without_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("GEMBA_SERVER__FRONTEND_ORIGIN", "http://localhost:4000");
        jail.set_env("GEMBA_GENERAL__DEFAULT_LIMIT", "5");

        let config: GembaConfig = Figment::from(Serialized::defaults(GembaConfig::default()))
            .merge(Env::prefixed("GEMBA_").split("__"))
            .extract()?;

        assert_eq!(config.server.frontend_origin, "http://localhost:4000");
        assert_eq!(config.general.default_limit, 5);
        // untouched sections keep defaults
        assert_eq!(config.server.port, 5000);
        Ok(())
    });
}
