use crate::providers::dnsimple::types::DnsimpleError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DnsimpleProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),
}

impl DnsimpleProviderError {
    pub fn from_status(status: StatusCode, err: DnsimpleError) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                DnsimpleProviderError::Unauthorized(err.message)
            }
            StatusCode::NOT_FOUND => DnsimpleProviderError::NotFound(err.message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                DnsimpleProviderError::InvalidInput(err.message)
            }
            StatusCode::TOO_MANY_REQUESTS => DnsimpleProviderError::RateLimited(err.message),
            _ => DnsimpleProviderError::Provider(format!("{status}: {}", err.message)),
        }
    }
}

use crate::error::Error;

/// Every provider failure reaches the core as a transport error, message intact.
pub fn map_error(e: DnsimpleProviderError) -> Error {
    Error::Transport(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn body(message: &str) -> DnsimpleError {
        DnsimpleError {
            message: message.to_string(),
        }
    }

    #[test]
    fn test_from_status_variants() {
        use DnsimpleProviderError::*;

        assert_matches!(
            DnsimpleProviderError::from_status(StatusCode::UNAUTHORIZED, body("bad token")),
            Unauthorized(msg) if msg == "bad token"
        );
        assert_matches!(
            DnsimpleProviderError::from_status(StatusCode::NOT_FOUND, body("Zone `x` not found")),
            NotFound(_)
        );
        assert_matches!(
            DnsimpleProviderError::from_status(StatusCode::BAD_REQUEST, body("invalid")),
            InvalidInput(_)
        );
        assert_matches!(
            DnsimpleProviderError::from_status(StatusCode::UNPROCESSABLE_ENTITY, body("invalid")),
            InvalidInput(_)
        );
        assert_matches!(
            DnsimpleProviderError::from_status(StatusCode::TOO_MANY_REQUESTS, body("slow down")),
            RateLimited(msg) if msg == "slow down"
        );
        assert_matches!(
            DnsimpleProviderError::from_status(StatusCode::BAD_GATEWAY, body("upstream")),
            Provider(msg) if msg.contains("502") && msg.contains("upstream")
        );
    }

    #[test]
    fn test_map_error_keeps_message() {
        let err = map_error(DnsimpleProviderError::NotFound(
            "Zone `nope.com` not found".into(),
        ));
        assert_matches!(
            err,
            Error::Transport(msg) if msg == "Not found: Zone `nope.com` not found"
        );
        let err = map_error(DnsimpleProviderError::RateLimited(
            "API rate limit exceeded".into(),
        ));
        assert_matches!(
            err,
            Error::Transport(msg) if msg == "Rate limited: API rate limit exceeded"
        );
    }
}
