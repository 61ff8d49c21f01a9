/// Email send endpoint
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use mailrelay_core::constants::SEND_SUCCESS_MESSAGE;
use mailrelay_core::models::OutboundEmail;
use mailrelay_core::utils::logging::{redact_address, subject_preview};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::{context::ApiContext, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct SendRequest {
    pub recipient: String,
    pub subject: String,
    pub base64_content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SendResponse {
    pub message: String,
}

/// Relay one email through the provider.
///
/// The body is decoded by hand instead of through the `Json` extractor so
/// every malformed payload maps to a 400 carrying the parser's message,
/// whatever the content type header says.
pub async fn handler(
    State(ctx): State<Arc<ApiContext>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SendResponse>, ApiError> {
    let body = body.map_err(ApiError::from)?;
    let req = parse_request(&body)?;

    let email = OutboundEmail::from_encoded(
        ctx.sent_from_address.as_str(),
        &req.recipient,
        &req.subject,
        &req.base64_content,
    )?;

    info!(
        to = %redact_address(&email.to),
        subject = %subject_preview(&email.subject),
        body_bytes = email.text_body.len(),
        "Sending email"
    );

    let message_id = ctx.sender.send_email(&email).await.map_err(|e| {
        error!(to = %redact_address(&email.to), error = %e, "Email send failed");
        ApiError::from(e)
    })?;

    info!(
        to = %redact_address(&email.to),
        message_id = %message_id,
        "Email accepted by provider"
    );

    Ok(Json(SendResponse {
        message: SEND_SUCCESS_MESSAGE.to_string(),
    }))
}

/// Decode the body as a JSON object carrying the three request fields.
///
/// Serde's derived struct visitor also accepts a positional JSON array, so
/// the top-level shape is checked before conversion.
fn parse_request(body: &[u8]) -> Result<SendRequest, ApiError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if !value.is_object() {
        return Err(ApiError::BadRequest(
            "request body must be a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| ApiError::BadRequest(e.to_string()))
}
