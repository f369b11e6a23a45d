use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::error::ChatError;

/// Minimal HTTP POST request representation handed to the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Builds a POST request with a JSON request body.
    ///
    /// The helper sets the `Content-Type` header to `application/json` and stores the
    /// provided buffer as the body, making it ideal for serialized payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use kaiwa::http::HttpRequest;
    ///
    /// let request = HttpRequest::post_json("https://example.com", br"{}".to_vec());
    /// assert_eq!(request.headers.get("Content-Type"), Some(&"application/json".to_string()));
    /// ```
    pub fn post_json(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::from([("Content-Type".to_string(), "application/json".to_string())]),
            body,
            timeout: None,
        }
    }

    /// Overrides the request headers after construction.
    ///
    /// This is useful when the client needs to stamp authorization metadata
    /// before dispatching the request.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use kaiwa::http::HttpRequest;
    ///
    /// let request = HttpRequest::post_json("https://example.com", br"{}".to_vec())
    ///     .with_headers(HashMap::from([("Authorization".into(), "Bearer test".into())]));
    /// assert_eq!(request.headers.get("Authorization"), Some(&"Bearer test".to_string()));
    /// ```
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Sets the per-request timeout enforced by the transport.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Minimal HTTP response representation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Converts the body into a UTF-8 string.
    ///
    /// The method consumes the response and returns the decoded string or a
    /// [`ChatError::Transport`] if the payload contains invalid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use kaiwa::http::HttpResponse;
    ///
    /// let response = HttpResponse { status: 200, headers: Default::default(), body: b"ok".to_vec() };
    /// assert_eq!(response.into_string().unwrap(), "ok");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Transport`] when the body cannot be interpreted as UTF-8.
    pub fn into_string(self) -> Result<String, ChatError> {
        String::from_utf8(self.body).map_err(|err| ChatError::transport(err.to_string()))
    }
}

/// Transport abstraction used to decouple the client from the concrete HTTP stack.
///
/// One blocking round trip per call: implementations send the request and do
/// not return until the full response is available or the request failed.
pub trait HttpTransport: Send + Sync {
    /// Issues the POST request and resolves when the full response is available.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kaiwa::http::{HttpTransport, HttpRequest, HttpResponse};
    /// # use kaiwa::error::ChatError;
    /// struct MemoryTransport;
    ///
    /// impl HttpTransport for MemoryTransport {
    ///     fn post(&self, request: HttpRequest) -> Result<HttpResponse, ChatError> {
    ///         Ok(HttpResponse { status: 200, headers: request.headers, body: b"ok".to_vec() })
    ///     }
    /// }
    ///
    /// let response = MemoryTransport
    ///     .post(HttpRequest::post_json("https://example.com", br"{}".to_vec()))
    ///     .unwrap();
    /// assert_eq!(response.status, 200);
    /// ```
    ///
    /// # Errors
    ///
    /// Implementations should map connection and timeout failures to
    /// [`ChatError::Transport`]. HTTP error statuses are not errors at this
    /// layer; they are returned as ordinary responses for the caller to
    /// classify.
    fn post(&self, request: HttpRequest) -> Result<HttpResponse, ChatError>;
}

/// Thread-safe handle to a transport implementation.
pub type DynHttpTransport = Arc<dyn HttpTransport>;

/// Serializes a body to JSON, attaches headers, and issues a POST request.
///
/// This helper centralizes JSON serialization so the client can reuse the same
/// logic without duplicating header or error handling.
///
/// # Errors
///
/// Returns [`ChatError::Validation`] if serialization fails or forwards the
/// error raised by [`HttpTransport::post`].
pub fn post_json_with_headers<T: Serialize>(
    transport: &dyn HttpTransport,
    url: impl Into<String>,
    headers: HashMap<String, String>,
    timeout: Option<Duration>,
    body: &T,
) -> Result<HttpResponse, ChatError> {
    let payload = serde_json::to_vec(body).map_err(|err| ChatError::Validation {
        message: format!("failed to serialize request: {err}"),
    })?;
    let mut request = HttpRequest::post_json(url, payload).with_headers(headers);
    request.timeout = timeout;
    transport.post(request)
}

pub mod reqwest;
