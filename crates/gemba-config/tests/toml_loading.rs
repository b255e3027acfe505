//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use gemba_config::GembaConfig;

#[test]
fn loads_db_and_server_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[db]
path = "/var/lib/gemba/audits.db"

[server]
bind = "0.0.0.0"
port = 8080
frontend_origin = "https://audits.example.com"
"#,
        )?;

        let config: GembaConfig = Figment::from(Serialized::defaults(GembaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.db.path, "/var/lib/gemba/audits.db");
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert_eq!(config.server.frontend_origin, "https://audits.example.com");
        Ok(())
    });
}

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_window = "last30_days"
default_limit = 50
"#,
        )?;

        let config: GembaConfig = Figment::from(Serialized::defaults(GembaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 50);
        assert_eq!(
            config.general.default_window,
            gemba_core::stats::TimeWindow::Last30Days
        );
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults_for_missing_sections() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
port = 9999
"#,
        )?;

        let config: GembaConfig = Figment::from(Serialized::defaults(GembaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.port, 9999);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.db.path, ".gemba/audits.db");
        Ok(())
    });
}
