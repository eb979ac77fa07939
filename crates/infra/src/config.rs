use std::time::Duration;
use tracing::{info, warn};

const DEFAULT_PORT: usize = 5000;
const DEFAULT_TWILIO_API_BASE_URL: &str = "https://api.twilio.com/2010-04-01";
const DEFAULT_SMS_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Number of records returned by the list endpoints when the client
    /// does not provide a `limit`
    pub default_page_size: usize,
    /// Upper bound for the `limit` a client can ask for
    pub max_page_size: usize,
    /// Settings for the SMS provider. `None` when the credentials are not configured,
    /// in that case SOS alerts are only recorded in memory.
    pub sms: Option<SmsConfig>,
}

#[derive(Clone)]
pub struct SmsConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// The number SOS alerts are sent from
    pub from_number: String,
    pub api_base_url: String,
    /// Maximum time spent on delivering a single message
    pub timeout: Duration,
}

impl std::fmt::Debug for SmsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("from_number", &self.from_number)
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn new() -> Self {
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, DEFAULT_PORT
                    );
                    DEFAULT_PORT
                }
            },
            Err(_) => DEFAULT_PORT,
        };

        Self {
            port,
            default_page_size: 10,
            max_page_size: 100,
            sms: SmsConfig::from_env(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl SmsConfig {
    fn from_env() -> Option<Self> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID").ok();
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN").ok();
        let from_number = std::env::var("TWILIO_FROM_NUMBER").ok();
        let (account_sid, auth_token, from_number) = match (account_sid, auth_token, from_number) {
            (Some(sid), Some(token), Some(from)) => (sid, token, from),
            _ => {
                info!("Did not find TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN and TWILIO_FROM_NUMBER environment variables. SOS alerts will not be sent by SMS.");
                return None;
            }
        };

        let api_base_url = std::env::var("TWILIO_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_TWILIO_API_BASE_URL.to_string());
        let timeout = match std::env::var("SMS_TIMEOUT_SECS") {
            Ok(secs) => match secs.parse::<u64>() {
                Ok(secs) => secs,
                Err(_) => {
                    warn!(
                        "The given SMS_TIMEOUT_SECS: {} is not valid, falling back to the default: {}.",
                        secs, DEFAULT_SMS_TIMEOUT_SECS
                    );
                    DEFAULT_SMS_TIMEOUT_SECS
                }
            },
            Err(_) => DEFAULT_SMS_TIMEOUT_SECS,
        };

        Some(Self {
            account_sid,
            auth_token,
            from_number,
            api_base_url,
            timeout: Duration::from_secs(timeout),
        })
    }
}
