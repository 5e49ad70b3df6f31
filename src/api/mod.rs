//! HTTP boundary to the storefront REST API.
//!
//! [`ApiClient`] centralizes request setup (base URL, user agent, timeout and
//! the optional bearer token) and turns every failure into an [`ApiError`]
//! whose message is fit for the user. Service modules stay thin wrappers
//! around one endpoint each. Tokens and passwords are never logged.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod envelope;
pub mod errors;
pub mod orders;
pub mod wishlist;

pub use self::envelope::{ApiResponse, ErrorMessages};
pub use self::errors::{user_message, ApiError};

use reqwest::{Client, Method};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Default request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// API root used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5122/api/";

pub(crate) type Query<'a> = &'a [(&'a str, String)];

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    bearer: Option<SecretString>,
}

impl ApiClient {
    /// Build a client for `base_url`.
    ///
    /// # Errors
    /// Returns an error if the URL is not an absolute http(s) URL or the HTTP
    /// client cannot be created.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(base_url)?;
        let http = Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url,
            bearer: None,
        })
    }

    /// Attach (or drop) the bearer token sent with every request.
    #[must_use]
    pub fn with_bearer(mut self, token: Option<&str>) -> Self {
        self.bearer = token.map(|token| SecretString::from(token.to_string()));
        self
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim().trim_start_matches('/'))
            .map_err(|err| ApiError::Config(format!("Invalid endpoint {path}: {err}")))
    }

    /// Send a request and return the raw body of a successful response.
    #[instrument(skip(self, query, body), fields(base = %self.base_url))]
    async fn fetch(
        &self,
        method: Method,
        path: &str,
        query: Query<'_>,
        body: Option<&Value>,
    ) -> Result<Vec<u8>, ApiError> {
        let url = self.endpoint(path)?;
        let mut request = self.http.request(method, url).query(query);

        if let Some(token) = &self.bearer {
            request = request.bearer_auth(token.expose_secret());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from_transport)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiError::from_transport)?;
        debug!(%status, len = bytes.len(), "response received");

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes);
            return Err(ApiError::Http {
                status,
                message: user_message(status, &text),
            });
        }
        Ok(bytes.to_vec())
    }

    /// Send a request and decode the JSON body of a successful response.
    /// An empty successful body decodes as JSON `null`.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Query<'_>,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let bytes = self.fetch(method, path, query, body).await?;
        let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &bytes
        };
        serde_json::from_slice(bytes)
            .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
    }

    /// Send a request whose successful body may be plain text rather than JSON.
    pub(crate) async fn send_text(
        &self,
        method: Method,
        path: &str,
        query: Query<'_>,
        body: Option<&Value>,
    ) -> Result<String, ApiError> {
        let bytes = self.fetch(method, path, query, body).await?;
        String::from_utf8(bytes)
            .map_err(|err| ApiError::Parse(format!("Response is not valid UTF-8: {err}")))
    }

    /// Call an enveloped endpoint and return its `result`. An empty body or
    /// an empty `result` yields JSON `null`.
    pub(crate) async fn call(
        &self,
        method: Method,
        path: &str,
        query: Query<'_>,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let envelope: Option<ApiResponse<Value>> = self.send(method, path, query, body).await?;
        match envelope {
            Some(envelope) => Ok(envelope.into_optional()?.unwrap_or(Value::Null)),
            None => Ok(Value::Null),
        }
    }
}

/// Serialize a typed request body.
pub(crate) fn to_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(body)?)
}

/// Empty JSON object, sent by endpoints that take their input as query parameters.
pub(crate) fn empty_body() -> Value {
    Value::Object(serde_json::Map::new())
}

fn normalize_base_url(base_url: &str) -> Result<Url, ApiError> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Config("API base URL is not configured.".to_string()));
    }

    // Url::join drops the last segment unless the base ends with a slash.
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash)
        .map_err(|err| ApiError::Config(format!("Invalid API base URL {trimmed}: {err}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ApiError::Config(format!(
            "Unsupported API base URL scheme: {scheme}"
        ))),
    }
}
