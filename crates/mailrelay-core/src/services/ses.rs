/// SES email sending service
use crate::config::Config;
use crate::constants::{CONTENT_CHARSET, CREDENTIALS_PROVIDER_NAME};
use crate::error::MailrelayError;
use crate::models::OutboundEmail;
use async_trait::async_trait;
use aws_sdk_ses::config::{Credentials, Region};
use aws_sdk_ses::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ses::types::{Body, Content, Destination, Message};

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send one message, returning the provider's message id
    async fn send_email(&self, email: &OutboundEmail) -> Result<String, MailrelayError>;
}

pub struct SesEmailSender {
    client: aws_sdk_ses::Client,
}

impl SesEmailSender {
    pub fn new(client: aws_sdk_ses::Client) -> Self {
        Self { client }
    }

    /// Build a client bound to the configured region and key pair
    pub async fn from_config(config: &Config) -> Self {
        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );

        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        Self::new(aws_sdk_ses::Client::new(&sdk_config))
    }
}

#[async_trait]
impl EmailSender for SesEmailSender {
    async fn send_email(&self, email: &OutboundEmail) -> Result<String, MailrelayError> {
        let (destination, message) = build_request(email)?;

        // Single attempt: failures go straight back to the caller
        let response = self
            .client
            .send_email()
            .source(email.from.as_str())
            .destination(destination)
            .message(message)
            .send()
            .await
            .map_err(|e| MailrelayError::Ses(provider_error_message(&e)))?;

        Ok(response.message_id().to_string())
    }
}

/// Map an outbound email onto SES destination and message shapes
pub fn build_request(email: &OutboundEmail) -> Result<(Destination, Message), MailrelayError> {
    let destination = Destination::builder()
        .to_addresses(email.to.as_str())
        .build();

    let message = Message::builder()
        .subject(content(&email.subject)?)
        .body(Body::builder().text(content(&email.text_body)?).build())
        .build();

    Ok((destination, message))
}

fn content(data: &str) -> Result<Content, MailrelayError> {
    Content::builder()
        .data(data)
        .charset(CONTENT_CHARSET)
        .build()
        .map_err(|e| MailrelayError::Ses(format!("Failed to build content: {}", e)))
}

/// Text surfaced to callers when an SES call fails.
///
/// Service errors render as `Code: message`; transport and other
/// failures render their full source chain.
pub fn provider_error_message<E, R>(err: &SdkError<E, R>) -> String
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let Some(service_err) = err.as_service_error() else {
        return DisplayErrorContext(err).to_string();
    };

    match (service_err.code(), service_err.message()) {
        (Some(code), Some(message)) => format!("{}: {}", code, message),
        (None, Some(message)) => message.to_string(),
        (Some(code), None) => code.to_string(),
        (None, None) => DisplayErrorContext(err).to_string(),
    }
}
