/// Mock SES sender for integration testing
use async_trait::async_trait;
use mailrelay_core::MailrelayError;
use mailrelay_core::models::OutboundEmail;
use mailrelay_core::services::EmailSender;
use std::sync::{Arc, Mutex};

/// Records every message it is asked to send. Fails every call with the
/// given provider text when constructed through [`MockSes::failing`].
#[derive(Clone, Default)]
pub struct MockSes {
    pub sent: Arc<Mutex<Vec<OutboundEmail>>>,
    pub failure: Option<String>,
}

impl MockSes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            sent: Arc::default(),
            failure: Some(message.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailSender for MockSes {
    async fn send_email(&self, email: &OutboundEmail) -> Result<String, MailrelayError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());

        match &self.failure {
            Some(message) => Err(MailrelayError::Ses(message.clone())),
            None => Ok(format!("mock-message-{}", sent.len())),
        }
    }
}

/// Panics on every call, for exercising panic recovery in the router
#[derive(Clone, Default)]
pub struct PanickingSes;

#[async_trait]
impl EmailSender for PanickingSes {
    async fn send_email(&self, _email: &OutboundEmail) -> Result<String, MailrelayError> {
        panic!("SES client exploded");
    }
}
