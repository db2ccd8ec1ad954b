use std::sync::Arc;

use async_trait::async_trait;

use business::domain::logger::Logger;
use business::domain::order::services::{Notification, NotificationError, OrderNotifier};

/// Fallback used when no relay is configured. Records that a message would have
/// been sent; the payload is left out since it carries the confirmation code.
pub struct LogNotifier {
    logger: Arc<dyn Logger>,
}

impl LogNotifier {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

#[async_trait]
impl OrderNotifier for LogNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), NotificationError> {
        self.logger.info(&format!(
            "No mail relay configured, dropping '{}' for {} (order {})",
            notification.template, notification.recipient, notification.payload["order_id"]
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::order::services::NotificationTemplate;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLogger {
        lines: Mutex<Vec<String>>,
    }

    impl Logger for RecordingLogger {
        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
        fn warn(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
        fn error(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
        fn debug(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
    }

    #[tokio::test]
    async fn should_log_without_leaking_code() {
        let logger = Arc::new(RecordingLogger::default());
        let notifier = LogNotifier::new(logger.clone());

        let result = notifier
            .notify(Notification {
                template: NotificationTemplate::OrderConfirmationRequest,
                recipient: "buyer@example.com".to_string(),
                payload: json!({"order_id": 31, "confirmation_code": "042917"}),
            })
            .await;

        assert!(result.is_ok());
        let lines = logger.lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("order 31"));
        assert!(!lines[0].contains("042917"));
    }
}
