use async_trait::async_trait;
use serde_json::Value;

/// Template keys understood by the outbound mail relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTemplate {
    OrderConfirmationRequest,
}

impl std::fmt::Display for NotificationTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationTemplate::OrderConfirmationRequest => {
                write!(f, "order_confirmation_request")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub template: NotificationTemplate,
    pub recipient: String,
    pub payload: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification.delivery_failed")]
    DeliveryFailed(String),
}

/// Fire-and-forget delivery port. Callers log failures and carry on.
#[async_trait]
pub trait OrderNotifier: Send + Sync {
    async fn notify(&self, notification: Notification) -> Result<(), NotificationError>;
}
