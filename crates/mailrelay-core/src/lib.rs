/// Mailrelay Core - Shared library for the Mailrelay email relay
///
/// This crate contains the configuration loader, error types, the outbound
/// email model and the SES sender used by the HTTP front end.
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::MailrelayError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
