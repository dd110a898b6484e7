//! Server configuration.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Directive, LevelFilter};

use crate::BOOTUP_TARGET;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Listener and logging settings.
///
/// The listener always binds `0.0.0.0:3000`; the environment is consulted
/// only for `RUST_LOG` (tracing filter directive, default `"info"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_level: lookup("RUST_LOG").unwrap_or_else(|| defaults.log_level.clone()),
            ..defaults
        }
    }

    /// Returns the `"host:port"` bind address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Tracing filter from `log_level`, with the startup line pinned to `info`.
    ///
    /// An unparsable level falls back to `info`.
    pub fn log_filter(&self) -> EnvFilter {
        let filter = EnvFilter::try_new(&self.log_level)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
        filter.add_directive(bootup_directive())
    }
}

fn bootup_directive() -> Directive {
    format!("{BOOTUP_TARGET}=info")
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
