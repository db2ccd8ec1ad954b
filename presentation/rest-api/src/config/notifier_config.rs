use super::read_var;

/// Outbound mail relay settings
///
/// Environment variables:
/// - NOTIFIER_RELAY_URL: relay endpoint; unset means notifications are only logged
/// - NOTIFIER_API_KEY: bearer key sent to the relay
pub struct NotifierConfig {
    pub relay_url: Option<String>,
    pub api_key: Option<String>,
}

impl NotifierConfig {
    pub fn from_env() -> Self {
        Self {
            relay_url: read_var("NOTIFIER_RELAY_URL"),
            api_key: read_var("NOTIFIER_API_KEY"),
        }
    }
}
