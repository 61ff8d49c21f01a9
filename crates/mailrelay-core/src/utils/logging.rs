/// Redacts the local part of an address
///
/// # Examples
/// ```
/// use mailrelay_core::utils::logging::redact_address;
///
/// assert_eq!(redact_address("user@example.com"), "***@example.com");
/// assert_eq!(redact_address("not-an-address"), "***");
/// ```
pub fn redact_address(address: &str) -> String {
    match address.rsplit_once('@') {
        Some((_, domain)) if !domain.is_empty() => format!("***@{}", domain),
        _ => "***".to_string(),
    }
}

/// Shows the first few characters of a subject plus its length
///
/// # Examples
/// ```
/// use mailrelay_core::utils::logging::subject_preview;
///
/// assert_eq!(subject_preview("Confidential Document"), "Con...[21 chars]");
/// assert_eq!(subject_preview("Hi"), "Hi");
/// ```
pub fn subject_preview(subject: &str) -> String {
    const VISIBLE_CHARS: usize = 3;
    const MIN_CHARS_TO_REDACT: usize = 6;

    let len = subject.chars().count();
    if len < MIN_CHARS_TO_REDACT {
        return subject.to_string();
    }

    let visible: String = subject.chars().take(VISIBLE_CHARS).collect();
    format!("{}...[{} chars]", visible, len)
}
