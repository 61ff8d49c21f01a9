/// Error types for Mailrelay
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailrelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("SES error: {0}")]
    Ses(String),
}

#[cfg(test)]
impl MailrelayError {
    /// The bare message without the category prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Config(msg) | Self::Validation(msg) | Self::Ses(msg) => msg,
        }
    }
}
