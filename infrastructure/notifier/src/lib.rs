mod email_relay;
mod log_notifier;

pub use email_relay::EmailRelayNotifier;
pub use log_notifier::LogNotifier;
