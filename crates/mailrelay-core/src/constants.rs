/// Application constants
///
/// Hardcoded values shared by the core library and the API binary,
/// organized by category.
// ============================================================================
// Environment Variables
// ============================================================================
/// AWS access key used to sign SES requests
pub const ENV_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";

/// AWS secret key paired with the access key
pub const ENV_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";

/// AWS region hosting the SES endpoint
pub const ENV_REGION: &str = "AWS_REGION";

/// Fixed `From` address for every outgoing message
pub const ENV_SENT_FROM_ADDRESS: &str = "SENT_FROM_ADDRESS";

// ============================================================================
// Server
// ============================================================================
/// Address the HTTP server binds to
pub const LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Maximum accepted request body (10 MB)
pub const MAX_REQUEST_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// ============================================================================
// Email
// ============================================================================
/// Charset declared on SES subject and body content
pub const CONTENT_CHARSET: &str = "UTF-8";

/// Provider name attached to the static credentials
pub const CREDENTIALS_PROVIDER_NAME: &str = "mailrelay-environment";

// ============================================================================
// Response Messages
// ============================================================================
pub const SEND_SUCCESS_MESSAGE: &str = "Email sent successfully";
pub const INVALID_BASE64_MESSAGE: &str = "Invalid base64 content";
pub const RECIPIENT_REQUIRED_MESSAGE: &str = "recipient is required";
pub const SUBJECT_REQUIRED_MESSAGE: &str = "subject is required";
