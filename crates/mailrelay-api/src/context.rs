/// API Context - shared state for all API handlers
use mailrelay_core::Config;
use mailrelay_core::services::{EmailSender, SesEmailSender};
use std::sync::Arc;

/// API Context contains shared resources for API handlers
#[derive(Clone)]
pub struct ApiContext {
    /// Email provider client, shared across concurrent requests
    pub sender: Arc<dyn EmailSender>,

    /// `From` address applied to every message
    pub sent_from_address: String,
}

impl ApiContext {
    /// Create a new API context backed by SES
    pub async fn new(config: &Config) -> Arc<Self> {
        let sender = SesEmailSender::from_config(config).await;
        Self::with_sender(Arc::new(sender), config.sent_from_address.clone())
    }

    /// Create a context around an existing sender
    pub fn with_sender(
        sender: Arc<dyn EmailSender>,
        sent_from_address: impl Into<String>,
    ) -> Arc<Self> {
        Arc::new(Self {
            sender,
            sent_from_address: sent_from_address.into(),
        })
    }
}
