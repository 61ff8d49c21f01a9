/// Outbound email model
use crate::constants::{
    INVALID_BASE64_MESSAGE, RECIPIENT_REQUIRED_MESSAGE, SUBJECT_REQUIRED_MESSAGE,
};
use crate::error::MailrelayError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// A validated plain-text message addressed to a single recipient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text_body: String,
}

impl OutboundEmail {
    /// Build a message from a base64-encoded body.
    ///
    /// Checks run in order: recipient, subject, then body decoding. Nothing
    /// is constructed unless all three pass.
    pub fn from_encoded(
        from: impl Into<String>,
        to: &str,
        subject: &str,
        base64_content: &str,
    ) -> Result<Self, MailrelayError> {
        if to.trim().is_empty() {
            return Err(MailrelayError::Validation(
                RECIPIENT_REQUIRED_MESSAGE.to_string(),
            ));
        }
        if subject.trim().is_empty() {
            return Err(MailrelayError::Validation(
                SUBJECT_REQUIRED_MESSAGE.to_string(),
            ));
        }

        Ok(Self {
            from: from.into(),
            to: to.to_string(),
            subject: subject.to_string(),
            text_body: decode_body(base64_content)?,
        })
    }
}

/// Decode a standard base64 body into text.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn decode_body(base64_content: &str) -> Result<String, MailrelayError> {
    let bytes = STANDARD
        .decode(base64_content)
        .map_err(|_| MailrelayError::Validation(INVALID_BASE64_MESSAGE.to_string()))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
