mod inmemory;
mod logging;
mod twilio;

pub use inmemory::InMemorySmsProvider;
pub use logging::LogSmsProvider;
pub use twilio::TwilioSmsProvider;

/// A single text message to a phone number
#[derive(Debug, Clone, PartialEq)]
pub struct SmsMessage {
    pub to: String,
    pub body: String,
}

/// An outbound messaging provider. One call delivers one message,
/// failures are returned and never retried.
#[async_trait::async_trait]
pub trait ISmsProvider: Send + Sync {
    async fn send(&self, message: &SmsMessage) -> anyhow::Result<()>;
}
