//! Log-backed mail delivery for development and testing.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use pl_core::services::verification::MailServiceTrait;

/// Mail service that logs verification codes instead of sending them.
///
/// Stands in for a real provider in development and automated tests. The
/// plaintext code lands in the logs, so this must never back a production
/// deployment.
#[derive(Default)]
pub struct LogMailService {
    sent_count: AtomicU64,
}

impl LogMailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages dispatched since construction.
    pub fn sent_count(&self) -> u64 {
        self.sent_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl MailServiceTrait for LogMailService {
    async fn deliver_code(&self, email: &str, code: &str) -> Result<String, String> {
        let message_id = format!("mock-mail-{}", Uuid::new_v4());
        let count = self.sent_count.fetch_add(1, Ordering::Relaxed) + 1;

        tracing::info!(
            email = %email,
            code = %code,
            message_id = %message_id,
            total_sent = count,
            event = "mock_mail_delivery",
            "[MOCK MAIL] Verification code delivery"
        );

        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delivery_returns_message_id_and_counts() {
        let mailer = LogMailService::new();

        let id = mailer
            .deliver_code("fern@plantera.dev", "482913")
            .await
            .unwrap();

        assert!(id.starts_with("mock-mail-"));
        assert_eq!(mailer.sent_count(), 1);

        mailer
            .deliver_code("ivy@plantera.dev", "123456")
            .await
            .unwrap();
        assert_eq!(mailer.sent_count(), 2);
    }
}
