//! Server configuration.
//!
//! Layers, later ones winning:
//! 1. built-in defaults
//! 2. YAML file, if one is given
//! 3. `CALENDAR_*` environment variables (`CALENDAR_ENVIRONMENT`,
//!    `CALENDAR_BIND_ADDR`, `CALENDAR_WORKERS`)
//!
//! CLI overrides are applied by the binary on top of the result.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Prefix of environment variables read into [`ServerConfig`].
pub const ENV_PREFIX: &str = "CALENDAR_";

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_WORKERS: usize = 4;

/// Deployment environment; selects the default log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    #[display(fmt = "development")]
    Development,
    #[display(fmt = "production")]
    Production,
}

impl Environment {
    /// Log level used when neither `RUST_LOG` nor `-v` is given
    pub const fn default_log_level(self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Production => "info",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    #[error(transparent)]
    Load(#[from] Box<figment::Error>),

    #[error("workers must be at least 1")]
    NoWorkers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default)]
    pub environment: Environment,

    /// Address the HTTP server listens on.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,

    /// Tokio worker threads.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

const fn default_bind_addr() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT)
}

const fn default_workers() -> usize {
    DEFAULT_WORKERS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            bind_addr: default_bind_addr(),
            workers: default_workers(),
        }
    }
}

impl ServerConfig {
    /// Layered figment for an optional YAML file.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads and checks the configuration.
    ///
    /// # Errors
    /// Returns `ConfigError` if `path` is missing, a layer fails to parse, or
    /// the result is unusable.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(missing) = path.filter(|p| !p.is_file()) {
            return Err(ConfigError::MissingFile(missing.to_path_buf()));
        }

        let config: Self = Self::figment(path).extract().map_err(Box::new)?;
        config.check()?;
        Ok(config)
    }

    /// Rejects values that cannot run a server.
    ///
    /// # Errors
    /// Returns `ConfigError::NoWorkers` if `workers` is zero.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        Ok(())
    }

    /// Replaces the listening port, keeping the address.
    pub fn with_port(mut self, port: u16) -> Self {
        self.bind_addr.set_port(port);
        self
    }
}
