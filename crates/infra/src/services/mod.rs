mod sms;

pub use sms::{ISmsProvider, InMemorySmsProvider, LogSmsProvider, SmsMessage, TwilioSmsProvider};
