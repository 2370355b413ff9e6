use thiserror::Error;

/// Failures raised by the client itself.
///
/// Remote rejections (403, 404, bad credentials) are not errors: they come back
/// as ordinary responses for the caller to assert on.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ClientError {
    /// True for connection-level failures (DNS, refused, reset, timeout).
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_is_not_transport() {
        let err: ClientError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(!err.is_transport());
        assert!(err.to_string().starts_with("Failed to decode response body"));
    }
}
