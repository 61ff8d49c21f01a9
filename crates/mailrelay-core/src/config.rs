/// Configuration - loaded once from environment variables at startup
use crate::constants::{
    ENV_ACCESS_KEY_ID, ENV_REGION, ENV_SECRET_ACCESS_KEY, ENV_SENT_FROM_ADDRESS,
};
use crate::error::MailrelayError;
use std::fmt;

/// Process-wide settings. Immutable once loaded.
#[derive(Clone)]
pub struct Config {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub sent_from_address: String,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, MailrelayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Every required variable is checked before failing so the error names
    /// all of the missing ones at once. Whitespace-only values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MailrelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut required = |key: &'static str| {
            let value = lookup(key)
                .map(|v| v.trim().to_string())
                .unwrap_or_default();
            if value.is_empty() {
                missing.push(key);
            }
            value
        };

        let access_key_id = required(ENV_ACCESS_KEY_ID);
        let secret_access_key = required(ENV_SECRET_ACCESS_KEY);
        let region = required(ENV_REGION);
        let sent_from_address = required(ENV_SENT_FROM_ADDRESS);

        if !missing.is_empty() {
            return Err(MailrelayError::Config(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        tracing::debug!(region = %region, "Configuration loaded");

        Ok(Self {
            access_key_id,
            secret_access_key,
            region,
            sent_from_address,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .field("region", &self.region)
            .field("sent_from_address", &self.sent_from_address)
            .finish()
    }
}
