use super::{ISmsProvider, SmsMessage};
use anyhow::anyhow;
use std::sync::Mutex;
use tracing::info;

/// Keeps every delivered message in memory so tests can inspect them.
/// Nothing is ever released, the server uses `LogSmsProvider` instead.
#[derive(Default)]
pub struct InMemorySmsProvider {
    sent: Mutex<Vec<SmsMessage>>,
    failing_numbers: Mutex<Vec<String>>,
}

impl InMemorySmsProvider {
    pub fn new() -> Self {
        Default::default()
    }

    /// Every following message to `phone` fails
    pub fn fail_for(&self, phone: &str) {
        if let Ok(mut numbers) = self.failing_numbers.lock() {
            numbers.push(phone.to_string());
        }
    }

    pub fn sent(&self) -> Vec<SmsMessage> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl ISmsProvider for InMemorySmsProvider {
    async fn send(&self, message: &SmsMessage) -> anyhow::Result<()> {
        let failing = self
            .failing_numbers
            .lock()
            .map_err(|_| anyhow!("In-memory sms provider lock was poisoned"))?
            .contains(&message.to);
        if failing {
            return Err(anyhow!("Unable to deliver message to {}", message.to));
        }

        info!("Recorded SMS to {} in memory", message.to);
        self.sent
            .lock()
            .map_err(|_| anyhow!("In-memory sms provider lock was poisoned"))?
            .push(message.clone());
        Ok(())
    }
}
