/// Utility modules
///
/// `logging` holds redaction helpers: addresses keep their domain, while the
/// local part and message content never reach the logs.
pub mod logging;
