//! Server configuration
//!
//! 読み込み順（後勝ち）:
//! 1. `ServerConfig::default()`
//! 2. TOML ファイル（指定された場合のみ）
//! 3. `COURIER_` で始まる環境変数（例: `COURIER_BIND_ADDR`）

use std::net::SocketAddr;
use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "COURIER_";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid bind_addr '{addr}': {source}")]
    InvalidBindAddr {
        addr: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// `host:port` to listen on
    pub bind_addr: String,
    /// EnvFilter directives, used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(ServerConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config: ServerConfig = Self::figment(path).extract().map_err(Box::new)?;
        // 起動前に検証しておく
        config.socket_addr()?;
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                addr: self.bind_addr.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_apply_without_sources() {
        Jail::expect_with(|_jail| {
            let config = ServerConfig::load(None).unwrap();
            assert_eq!(config, ServerConfig::default());
            assert_eq!(config.socket_addr().unwrap().port(), 8080);
            Ok(())
        });
    }

    #[test]
    fn toml_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "courier.toml",
                r#"
                bind_addr = "0.0.0.0:9000"
                log_filter = "debug"
                "#,
            )?;
            jail.set_env("COURIER_LOG_FILTER", "courier_core=trace");

            let config = ServerConfig::load(Some(Path::new("courier.toml"))).unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:9000");
            assert_eq!(config.log_filter, "courier_core=trace");
            Ok(())
        });
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("COURIER_BIND_ADDR", "not-an-addr");

            let err = ServerConfig::load(None).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
            Ok(())
        });
    }
}
