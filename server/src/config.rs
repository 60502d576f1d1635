//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`: expected an integer in 1..=65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    ///
    /// The Leptos site layout (`site-root`, `site-pkg-dir`, bundle name) comes
    /// from `[workspace.metadata.leptos]` or the `LEPTOS_*` variables set by
    /// `cargo leptos`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self { port: parse_port(std::env::var("PORT").ok().as_deref())? })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_owned())),
    }
}
