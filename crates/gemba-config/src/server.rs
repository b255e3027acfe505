//! API server configuration.

use serde::{Deserialize, Serialize};

fn default_bind() -> String {
    String::from("127.0.0.1")
}

/// Default port, matching the original backend's `PORT || 5000`.
const fn default_port() -> u16 {
    5000
}

/// Default allowed origin, the Vite dev server the original frontend runs on.
fn default_frontend_origin() -> String {
    String::from("http://localhost:5173")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address to bind the API server to.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origin allowed by CORS headers.
    #[serde(default = "default_frontend_origin")]
    pub frontend_origin: String,
}

impl ServerConfig {
    /// `host:port` string for binding and for the health probe.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            frontend_origin: default_frontend_origin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "127.0.0.1:5000");
        assert_eq!(config.frontend_origin, "http://localhost:5173");
    }
}
