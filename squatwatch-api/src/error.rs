use serde::{Deserialize, Serialize};

/// Unified error type for all watchlist API operations.
///
/// All variants are serializable for structured error reporting.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError) — network connectivity issues
/// - [`Timeout`](Self::Timeout) — request timed out
/// - [`RateLimited`](Self::RateLimited) — API rate limit exceeded
///
/// The built-in HTTP client automatically retries these with exponential backoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    ///
    /// This is a transient error and is automatically retried.
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    ///
    /// This is a transient error and is automatically retried.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    ///
    /// This is a transient error; the request should succeed after waiting.
    RateLimited {
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The specified flagged domain was not found (already whitelisted or never flagged).
    DomainNotFound {
        /// Identifier of the domain that was not found.
        domain_id: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized failure status from the API.
    ///
    /// This is a catch-all for statuses not yet mapped to a specific variant.
    Unexpected {
        /// HTTP status code returned by the API.
        status: u16,
        /// Raw response body, if any.
        raw_message: String,
    },
}

impl ApiError {
    /// Whether this is expected behavior (resource already gone, operator input)
    /// rather than a fault, used for log level classification.
    ///
    /// Returns `true` for `warn`-level logging, `false` for `error`-level.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::DomainNotFound { .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::RateLimited { retry_after, .. } => {
                if let Some(secs) = retry_after {
                    write!(f, "Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "Rate limited")
                }
            }
            Self::DomainNotFound {
                domain_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Flagged domain '{domain_id}' not found: {msg}")
                } else {
                    write!(f, "Flagged domain '{domain_id}' not found")
                }
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
            Self::Unexpected {
                status,
                raw_message,
            } => {
                if raw_message.is_empty() {
                    write!(f, "Unexpected API response (HTTP {status})")
                } else {
                    write!(f, "Unexpected API response (HTTP {status}): {raw_message}")
                }
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ApiError::NetworkError {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = ApiError::Timeout {
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "Request timeout: 30s elapsed");
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = ApiError::RateLimited {
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "Rate limited (retry after 30s)");
    }

    #[test]
    fn display_rate_limited_without_retry() {
        let e = ApiError::RateLimited {
            retry_after: None,
            raw_message: None,
        };
        assert_eq!(e.to_string(), "Rate limited");
    }

    #[test]
    fn display_domain_not_found_with_message() {
        let e = ApiError::DomainNotFound {
            domain_id: "42".to_string(),
            raw_message: Some("no such row".to_string()),
        };
        assert_eq!(e.to_string(), "Flagged domain '42' not found: no such row");
    }

    #[test]
    fn display_domain_not_found_without_message() {
        let e = ApiError::DomainNotFound {
            domain_id: "42".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "Flagged domain '42' not found");
    }

    #[test]
    fn display_parse_error() {
        let e = ApiError::ParseError {
            detail: "bad json".to_string(),
        };
        assert_eq!(e.to_string(), "Parse error: bad json");
    }

    #[test]
    fn display_unexpected_with_body() {
        let e = ApiError::Unexpected {
            status: 500,
            raw_message: "boom".to_string(),
        };
        assert_eq!(e.to_string(), "Unexpected API response (HTTP 500): boom");
    }

    #[test]
    fn display_unexpected_without_body() {
        let e = ApiError::Unexpected {
            status: 500,
            raw_message: String::new(),
        };
        assert_eq!(e.to_string(), "Unexpected API response (HTTP 500)");
    }

    #[test]
    fn expected_variants() {
        assert!(
            ApiError::DomainNotFound {
                domain_id: "1".into(),
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            !ApiError::NetworkError {
                detail: "x".into(),
            }
            .is_expected()
        );
        assert!(
            !ApiError::Unexpected {
                status: 500,
                raw_message: String::new(),
            }
            .is_expected()
        );
    }

    #[test]
    fn serialize_json_tagged_by_code() {
        let e = ApiError::RateLimited {
            retry_after: Some(60),
            raw_message: Some("too many requests".to_string()),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"RateLimited\""));
        assert!(json.contains("\"retry_after\":60"));
    }

    #[test]
    fn deserialize_all_variants() {
        let variants: Vec<ApiError> = vec![
            ApiError::NetworkError {
                detail: "d".into(),
            },
            ApiError::Timeout {
                detail: "30s".into(),
            },
            ApiError::RateLimited {
                retry_after: Some(30),
                raw_message: None,
            },
            ApiError::DomainNotFound {
                domain_id: "1".into(),
                raw_message: None,
            },
            ApiError::ParseError {
                detail: "bad".into(),
            },
            ApiError::Unexpected {
                status: 500,
                raw_message: "oops".into(),
            },
        ];

        for v in &variants {
            let json = serde_json::to_string(v).unwrap();
            let back: ApiError = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), v.to_string());
        }
    }
}
