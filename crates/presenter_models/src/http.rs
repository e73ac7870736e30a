//! Shared HTTP plumbing for OpenAI-compatible endpoints.

use presenter_error::{LlmError, LlmErrorKind, PresenterResult};
use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::error;

/// Map an unsuccessful HTTP status to an error kind.
///
/// 429 is a rate limit, 5xx a server fault (both transient); any other
/// failure is a permanent API error.
///
/// ```
/// use presenter_models::classify_status;
/// use presenter_error::LlmErrorKind;
/// use reqwest::StatusCode;
///
/// let kind = classify_status(StatusCode::TOO_MANY_REQUESTS, String::new());
/// assert_eq!(kind, LlmErrorKind::RateLimited);
/// assert!(kind.is_transient());
/// ```
pub fn classify_status(status: StatusCode, body: String) -> LlmErrorKind {
    if status == StatusCode::TOO_MANY_REQUESTS {
        LlmErrorKind::RateLimited
    } else if status.is_server_error() {
        LlmErrorKind::Server {
            status: status.as_u16(),
            message: body,
        }
    } else {
        LlmErrorKind::Api {
            status: status.as_u16(),
            message: body,
        }
    }
}

/// Send a request and return the response if its status is a success.
pub(crate) async fn send_checked(request: RequestBuilder) -> PresenterResult<Response> {
    let response = request.send().await.map_err(|e| {
        error!(error = ?e, "HTTP request failed");
        LlmError::new(LlmErrorKind::Transport(e.to_string()))
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!(status = %status, error = %body, "API error");
        return Err(LlmError::new(classify_status(status, body)).into());
    }

    Ok(response)
}

/// Read an API key from the named environment variable.
pub(crate) fn api_key_from_env(var: &str) -> PresenterResult<String> {
    std::env::var(var).map_err(|e| {
        LlmError::new(LlmErrorKind::MissingCredentials(format!("{} not set: {}", var, e))).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_server_error_is_transient() {
        let kind = classify_status(StatusCode::BAD_GATEWAY, "upstream".to_string());
        assert!(kind.is_transient());
        assert!(matches!(kind, LlmErrorKind::Server { status: 502, .. }));
    }

    #[test]
    fn test_classify_client_error_is_permanent() {
        let kind = classify_status(StatusCode::UNAUTHORIZED, "bad key".to_string());
        assert!(!kind.is_transient());
        assert!(matches!(kind, LlmErrorKind::Api { status: 401, .. }));
    }

    #[test]
    fn test_missing_api_key() {
        let result = api_key_from_env("PRESENTER_TEST_KEY_THAT_IS_NEVER_SET");
        assert!(result.is_err());
    }
}
