use business::domain::order::confirmation::{
    CheckoutConfig, DEFAULT_CODE_LENGTH, DEFAULT_CODE_TTL_MINUTES,
};
use chrono::Duration;

use super::{ConfigError, parse_or, read_var};

/// Load confirmation-code settings
///
/// Environment variables:
/// - CHECKOUT_CODE_TTL_MINUTES: code lifetime in minutes (default: 15)
/// - CHECKOUT_CODE_LENGTH: number of digits (default: 6)
pub fn from_env() -> Result<CheckoutConfig, ConfigError> {
    from_values(
        read_var("CHECKOUT_CODE_TTL_MINUTES"),
        read_var("CHECKOUT_CODE_LENGTH"),
    )
}

fn from_values(
    ttl_minutes: Option<String>,
    code_length: Option<String>,
) -> Result<CheckoutConfig, ConfigError> {
    let ttl = parse_or(
        "CHECKOUT_CODE_TTL_MINUTES",
        ttl_minutes,
        DEFAULT_CODE_TTL_MINUTES,
    )?;
    if ttl < 1 {
        return Err(ConfigError::Invalid {
            name: "CHECKOUT_CODE_TTL_MINUTES",
            value: ttl.to_string(),
        });
    }

    let length = parse_or("CHECKOUT_CODE_LENGTH", code_length, DEFAULT_CODE_LENGTH)?;
    if length == 0 {
        return Err(ConfigError::Invalid {
            name: "CHECKOUT_CODE_LENGTH",
            value: length.to_string(),
        });
    }

    let code_ttl = Duration::try_minutes(ttl).ok_or_else(|| ConfigError::Invalid {
        name: "CHECKOUT_CODE_TTL_MINUTES",
        value: ttl.to_string(),
    })?;

    Ok(CheckoutConfig {
        code_length: length,
        code_ttl,
    })
}
