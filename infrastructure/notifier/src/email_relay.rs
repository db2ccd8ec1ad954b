use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use business::domain::order::services::{Notification, NotificationError, OrderNotifier};

/// Body accepted by the outbound mail relay.
#[derive(Debug, Serialize)]
struct RelayMessage<'a> {
    template: String,
    to: &'a str,
    payload: &'a Value,
}

impl<'a> From<&'a Notification> for RelayMessage<'a> {
    fn from(notification: &'a Notification) -> Self {
        Self {
            template: notification.template.to_string(),
            to: &notification.recipient,
            payload: &notification.payload,
        }
    }
}

/// Sends notifications as JSON to an HTTP mail relay.
pub struct EmailRelayNotifier {
    client: Client,
    relay_url: String,
    api_key: Option<String>,
}

impl EmailRelayNotifier {
    pub fn new(relay_url: String, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            client,
            relay_url,
            api_key,
        }
    }
}

#[async_trait]
impl OrderNotifier for EmailRelayNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), NotificationError> {
        let mut request = self
            .client
            .post(&self.relay_url)
            .json(&RelayMessage::from(&notification));
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| NotificationError::DeliveryFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotificationError::DeliveryFailed(format!(
                "relay answered {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::order::services::NotificationTemplate;
    use serde_json::json;

    #[test]
    fn should_serialize_relay_message() {
        let notification = Notification {
            template: NotificationTemplate::OrderConfirmationRequest,
            recipient: "buyer@example.com".to_string(),
            payload: json!({"order_id": 7, "confirmation_code": "042917"}),
        };

        let body = serde_json::to_value(RelayMessage::from(&notification)).unwrap();

        assert_eq!(
            body,
            json!({
                "template": "order_confirmation_request",
                "to": "buyer@example.com",
                "payload": {"order_id": 7, "confirmation_code": "042917"},
            })
        );
    }

    #[tokio::test]
    async fn should_report_unreachable_relay() {
        let notifier = EmailRelayNotifier::new("http://127.0.0.1:9/send".to_string(), None);

        let result = notifier
            .notify(Notification {
                template: NotificationTemplate::OrderConfirmationRequest,
                recipient: "buyer@example.com".to_string(),
                payload: json!({}),
            })
            .await;

        assert!(matches!(result, Err(NotificationError::DeliveryFailed(_))));
    }
}
