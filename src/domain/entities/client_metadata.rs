/// Value recorded when a request carries no usable IP or user agent header.
pub const UNKNOWN: &str = "unknown";

/// Acquisition metadata captured from the inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientMetadata {
    pub ip_address: String,
    pub user_agent: String,
    pub referrer: Option<String>,
}

impl Default for ClientMetadata {
    fn default() -> Self {
        Self {
            ip_address: UNKNOWN.to_string(),
            user_agent: UNKNOWN.to_string(),
            referrer: None,
        }
    }
}
