use super::{ConfigError, require_var};

/// Shared secret of the identity provider that signs bearer tokens (HS256).
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt_secret: require_var("AUTH_JWT_SECRET")?,
        })
    }
}
