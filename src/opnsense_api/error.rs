use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong talking to the firewall. Callers only see a
/// failure; the variant is kept for logs and metrics.
#[derive(Debug, Error)]
pub enum FirewallError {
    #[error("failed to send request to firewall: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("firewall responded with status {0}")]
    Status(StatusCode),

    #[error("failed to read firewall response: {0}")]
    Body(#[source] reqwest::Error),

    #[error("failed to decode firewall response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FirewallError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(err) if err.is_timeout() => "timeout",
            Self::Transport(_) => "transport",
            Self::Status(_) => "status",
            Self::Body(_) => "body",
            Self::Decode(_) => "decode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FirewallError;
    use reqwest::StatusCode;

    #[test]
    fn status_error_kind() {
        let err = FirewallError::Status(StatusCode::BAD_GATEWAY);
        assert_eq!(err.kind(), "status");
        assert_eq!(err.to_string(), "firewall responded with status 502 Bad Gateway");
    }

    #[test]
    fn decode_error_kind() {
        let err: FirewallError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), "decode");
    }
}
