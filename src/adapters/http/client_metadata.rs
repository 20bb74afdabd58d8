use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

use crate::domain::entities::client_metadata::{ClientMetadata, UNKNOWN};

/// Extracts IP, user agent and referrer from the request headers.
pub struct RequestClient(pub ClientMetadata);

impl<S> FromRequestParts<S> for RequestClient
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestClient(client_metadata(&parts.headers)))
    }
}

pub fn client_metadata(headers: &HeaderMap) -> ClientMetadata {
    ClientMetadata {
        ip_address: forwarded_ip(headers).unwrap_or_else(|| UNKNOWN.to_string()),
        user_agent: header_value(headers, header::USER_AGENT.as_str())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        referrer: header_value(headers, header::REFERER.as_str()),
    }
}

fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    // Extract IP from X-Forwarded-For or X-Real-IP headers
    if let Some(forwarded) = headers.get("x-forwarded-for")
        && let Ok(val) = forwarded.to_str()
        && let Some(first) = val.split(',').next()
    {
        let trimmed = first.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }
    header_value(headers, "x-real-ip")
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
