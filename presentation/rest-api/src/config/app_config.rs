use super::{
    ConfigError, auth_config::AuthConfig, checkout_config, cors_config,
    notifier_config::NotifierConfig, server_config::ServerConfig,
};
use business::domain::order::confirmation::CheckoutConfig;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub auth: AuthConfig,
    pub checkout: CheckoutConfig,
    pub notifier: NotifierConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            auth: AuthConfig::from_env()?,
            checkout: checkout_config::from_env()?,
            notifier: NotifierConfig::from_env(),
        })
    }
}
