pub mod app_config;
pub mod auth_config;
pub mod checkout_config;
pub mod cors_config;
pub mod database_config;
pub mod notifier_config;
pub mod server_config;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    Missing(&'static str),
    #[error("config.invalid_variable: {name}={value}")]
    Invalid { name: &'static str, value: String },
}

/// Reads a variable, treating an empty value as unset.
pub fn read_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn require_var(name: &'static str) -> Result<String, ConfigError> {
    read_var(name).ok_or(ConfigError::Missing(name))
}

/// Parses `value` when present, otherwise returns `default`.
pub fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        None => Ok(default),
    }
}
