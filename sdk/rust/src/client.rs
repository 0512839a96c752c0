use std::fmt;
use std::sync::{Arc, Mutex};

use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

/// Where the caller's bearer token lives.
///
/// The relay never stores tokens; the calling layer owns them (browser
/// storage, keychain, a test fixture) and injects this capability.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: String);
    fn clear(&self);
}

/// In-memory token store for tests and CLI callers.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: String) {
        *self.token.lock().unwrap() = Some(token);
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

/// Error type for relay calls.
#[derive(Debug)]
pub enum ApiError {
    /// The relay returned 401; the stored token has been cleared.
    AuthExpired,
    /// Non-2xx status with the most specific message the body offered.
    Status { status: StatusCode, message: String },
    /// Transport failure talking to the relay.
    Transport(reqwest::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::AuthExpired => write!(f, "session expired, please sign in again"),
            ApiError::Status { status, message } => {
                write!(f, "API error {}: {}", status, message)
            }
            ApiError::Transport(e) => write!(f, "transport error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Transport(error)
    }
}

/// Client for the relay's `/api` surface.
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// `base_url` is the relay's root (no trailing slash, no `/api`).
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::DELETE, path, None).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let mut request = self
            .client
            .request(method, format!("{}{}", self.base_url, path))
            .header("Content-Type", "application/json");

        if let Some(token) = self.tokens.get() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status == StatusCode::UNAUTHORIZED {
            self.tokens.clear();
            return Err(ApiError::AuthExpired);
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                message: extract_message(&text),
            });
        }

        // The relay passes non-JSON upstream bodies through verbatim; wrap
        // them so callers always get a Value.
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Ok(value),
            Err(_) => Ok(serde_json::json!({ "text": text })),
        }
    }
}

/// Pull the most specific error message out of a failure body.
///
/// Checks `message`, then `error`, then falls back to the raw text.
fn extract_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| value.get("error").and_then(Value::as_str))
            .map(str::to_owned)
            .unwrap_or_else(|| body.to_string()),
        Err(_) => body.to_string(),
    }
}
