//! Generic HTTP request handling.
//!
//! Unified request execution for the API client: logging, status
//! classification, and retry with exponential backoff. Response parsing is
//! provided as a separate tool function so callers keep control over the
//! expected shape.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ApiError;

/// Maximum number of characters of a response body to include in debug logs.
const LOG_BODY_LIMIT: usize = 256;

/// HTTP tool function set.
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response status and body.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, method, headers, body)
    /// * `method_name` - request method name ("GET", "PATCH", for logging)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` on success
    /// * `Err(ApiError::Timeout)` when the request timed out
    /// * `Err(ApiError::RateLimited)` on HTTP 429
    /// * `Err(ApiError::NetworkError)` on connection failures and HTTP 502-504
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        // Extract Retry-After before consuming the response body.
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ApiError::RateLimited {
                retry_after,
                raw_message: Some(body),
            });
        }

        // 502/503/504 are treated as transient and retried.
        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Server error (HTTP {status_code})");
            return Err(ApiError::NetworkError {
                detail: format!("HTTP {status_code}: {body}"),
            });
        }

        let response_text = response.text().await.map_err(|e| ApiError::NetworkError {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Parses a JSON response body into `T`.
    pub fn parse_json<T>(response_text: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ApiError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Performs an HTTP request with automatic retries.
    ///
    /// Transient failures (network error, timeout, rate limit) are retried
    /// with exponential backoff; other errors return immediately.
    ///
    /// # Arguments
    /// * `request_builder` - configured request
    /// * `method_name` - request method name (for logging)
    /// * `url` - request URL (for logging)
    /// * `max_retries` - maximum number of retries (0 means no retries)
    ///
    /// # Retry strategy
    /// - Exponential backoff: 100ms, 200ms, 400ms, 800ms, ... (capped at 10s)
    /// - `RateLimited` with a `retry_after` hint waits that long instead
    ///   (capped at 30s)
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<(u16, String), ApiError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, method_name, url).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder can only be consumed once; clone per attempt.
            let Some(req) = request_builder.try_clone() else {
                // Unclonable body stream, fall back to a single attempt.
                log::warn!("Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, method_name, url).await;
            };

            match Self::execute_request(req, method_name, url).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries && is_retryable(&e) => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ApiError::NetworkError {
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Whether an error is worth retrying.
///
/// Network errors, timeouts and rate limiting are transient; everything else
/// (missing records, parse failures) is not.
fn is_retryable(error: &ApiError) -> bool {
    matches!(
        error,
        ApiError::NetworkError { .. } | ApiError::Timeout { .. } | ApiError::RateLimited { .. }
    )
}

/// Computes the delay before the next retry.
///
/// Uses the server-provided `retry_after` (capped at 30s) for `RateLimited`,
/// exponential backoff otherwise.
fn retry_delay(error: &ApiError, attempt: u32) -> Duration {
    if let ApiError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// Exponential backoff delay: 100ms, 200ms, 400ms, 800ms, ... capped at 10s.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // keep 2^attempt from overflowing
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    let delay_ms = delay_ms.min(10_000);
    Duration::from_millis(delay_ms)
}

/// Truncates a response body for log output.
fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        s.to_string()
    } else {
        let mut end = LOG_BODY_LIMIT;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // ---- is_retryable ----

    #[test]
    fn retryable_network_error() {
        let e = ApiError::NetworkError {
            detail: "err".into(),
        };
        assert!(is_retryable(&e));
    }

    #[test]
    fn retryable_timeout() {
        let e = ApiError::Timeout {
            detail: "err".into(),
        };
        assert!(is_retryable(&e));
    }

    #[test]
    fn retryable_rate_limited() {
        let e = ApiError::RateLimited {
            retry_after: None,
            raw_message: None,
        };
        assert!(is_retryable(&e));
    }

    #[test]
    fn not_retryable_domain_not_found() {
        let e = ApiError::DomainNotFound {
            domain_id: "1".into(),
            raw_message: None,
        };
        assert!(!is_retryable(&e));
    }

    #[test]
    fn not_retryable_parse_error() {
        let e = ApiError::ParseError {
            detail: "err".into(),
        };
        assert!(!is_retryable(&e));
    }

    #[test]
    fn not_retryable_unexpected() {
        let e = ApiError::Unexpected {
            status: 500,
            raw_message: String::new(),
        };
        assert!(!is_retryable(&e));
    }

    // ---- retry_delay ----

    #[test]
    fn rate_limit_hint_wins_over_backoff() {
        let e = ApiError::RateLimited {
            retry_after: Some(5),
            raw_message: None,
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(5));
    }

    #[test]
    fn rate_limit_hint_capped_at_30s() {
        let e = ApiError::RateLimited {
            retry_after: Some(300),
            raw_message: None,
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(30));
    }

    // ---- backoff_delay ----

    #[test]
    fn backoff_attempt_0() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
    }

    #[test]
    fn backoff_attempt_1() {
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
    }

    #[test]
    fn backoff_attempt_3() {
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_capped_at_10s() {
        // attempt 7: 100 * 2^7 = 12800ms, capped to 10000ms
        assert_eq!(backoff_delay(7), Duration::from_millis(10_000));
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ApiError> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ApiError> = HttpUtils::parse_json("not json");
        assert!(
            matches!(&result, Err(ApiError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    // ---- truncate_for_log ----

    #[test]
    fn short_body_unchanged() {
        assert_eq!(truncate_for_log("hello"), "hello");
    }

    #[test]
    fn long_body_truncated() {
        let s = "a".repeat(LOG_BODY_LIMIT + 100);
        let out = truncate_for_log(&s);
        assert!(out.contains("... [truncated, total"));
        assert!(out.contains(&format!("{} bytes]", LOG_BODY_LIMIT + 100)));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // Cyrillic characters are two bytes each; boundary 256 may split one.
        let s = "й".repeat(LOG_BODY_LIMIT);
        let out = truncate_for_log(&s);
        assert!(out.starts_with("й"));
        assert!(out.contains("[truncated"));
    }
}
