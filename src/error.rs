use thiserror::Error as ThisError;

/// Failure taxonomy for a single provider call.
///
/// Every kind is absorbed at the call site that hit it: a failed probe or
/// symbol contributes nothing to the enclosing operation. None of the data
/// functions propagate these to their callers.
#[derive(ThisError, Debug)]
pub enum ProviderError {
    /// Transport-level failure: connect error, timeout, TLS, DNS.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// The provider answered but has no record for the symbol.
    #[error("not found: {0}")]
    NotFound(String),

    /// The provider returned a record missing required fields
    /// (display name, resolved symbol) or too little session history.
    #[error("incomplete record: {0}")]
    IncompleteRecord(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_status() {
            let status = err.status().map(|s| s.as_u16()).unwrap_or(0);
            if status == 404 {
                ProviderError::NotFound(err.to_string())
            } else {
                ProviderError::Unavailable(format!("HTTP {}: {}", status, err))
            }
        } else {
            // timeout, connect, body, decode all mean the provider was unusable
            ProviderError::Unavailable(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;

// Alias for convenience
pub type Error = ProviderError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProviderError::NotFound("ZZZZ".to_string());
        assert_eq!(err.to_string(), "not found: ZZZZ");

        let err = ProviderError::IncompleteRecord("missing longName".to_string());
        assert!(err.to_string().starts_with("incomplete record"));
    }
}
