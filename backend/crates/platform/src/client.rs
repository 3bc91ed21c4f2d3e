//! Client identification utilities
//!
//! Reads caller-supplied identity from HTTP headers. Authentication itself
//! happens upstream; by the time a request reaches this service the header
//! carries an already-authenticated user id.

use http::HeaderMap;

/// Error when extracting a client header
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientHeaderError {
    #[error("Missing required header: {0}")]
    MissingHeader(String),
    #[error("Header {0} is not valid visible ASCII")]
    InvalidHeader(String),
}

/// Extract a required, non-blank header value
///
/// ## Returns
/// * `Ok(String)` - trimmed header value
/// * `Err(ClientHeaderError::MissingHeader)` - header absent or blank
/// * `Err(ClientHeaderError::InvalidHeader)` - header present but not representable as text
pub fn extract_header(headers: &HeaderMap, name: &str) -> Result<String, ClientHeaderError> {
    let value = headers
        .get(name)
        .ok_or_else(|| ClientHeaderError::MissingHeader(name.to_string()))?;

    let value = value
        .to_str()
        .map_err(|_| ClientHeaderError::InvalidHeader(name.to_string()))?
        .trim();

    if value.is_empty() {
        return Err(ClientHeaderError::MissingHeader(name.to_string()));
    }

    Ok(value.to_string())
}
