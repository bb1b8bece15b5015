//! Fleet backend HTTP client
//!
//! Every endpoint funnels through [`FleetClient::request`], which owns the
//! whole request/response convention: bearer auth from the credential store,
//! credential wipe on 401/403, and decoding of the `detail` error envelope.
//! Calls are fire-once; there are no retries.

mod endpoints;

use std::sync::Arc;

use reqwest::{Client as HttpClient, Method, StatusCode, Url};
use serde::{Serialize, de::DeserializeOwned};

use super::envelope::decode_error;
use crate::cache::ResponseCache;
use crate::error::{ApiError, ConfigError, Error, Result};
use crate::session::CredentialStore;

/// Fleet backend API client
pub struct FleetClient {
    http: HttpClient,
    base_url: Url,
    credentials: Arc<dyn CredentialStore>,
    stats_cache: Option<ResponseCache>,
}

impl FleetClient {
    /// Create a client for `base_url` (including the `/api/v1` prefix).
    pub fn new(base_url: impl Into<String>, credentials: Arc<dyn CredentialStore>) -> Result<Self> {
        let raw = base_url.into();
        let base_url = Url::parse(raw.trim_end_matches('/'))
            .map_err(|e| ConfigError::Invalid(format!("Invalid API URL {}: {}", raw, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!("Invalid API URL {}", raw)).into());
        }

        let http = HttpClient::builder()
            .user_agent(concat!("fleetop/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            credentials,
            stats_cache: None,
        })
    }

    /// Memoize `vehicle_stats` in the given cache.
    pub fn with_stats_cache(mut self, cache: ResponseCache) -> Self {
        self.stats_cache = Some(cache);
        self
    }

    /// The stored access token, or `Unauthenticated` when there is none
    fn access_token(&self) -> Result<String> {
        Ok(self
            .credentials
            .access_token()?
            .ok_or(ApiError::Unauthenticated)?)
    }

    /// Resolve path segments under the base URL, percent-encoding each one.
    ///
    /// Empty, `.` and `..` segments are rejected so an identifier can never
    /// move the request to another resource.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|segment| segment.is_empty() || **segment == "." || **segment == "..")
        {
            return Err(Error::Other(format!("Invalid identifier '{}'", bad)));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ConfigError::Invalid(format!("Invalid API URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue one authenticated request and normalize its outcome.
    async fn request<T, B>(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        // Checked before any I/O
        let token = self.access_token()?;
        let url = self.endpoint(segments)?;
        let path = url.path().to_string();
        log::debug!("{} {}", method, url);

        let mut builder = self.http.request(method, url).bearer_auth(&token);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await.map_err(ApiError::from)?;
            return parse_body(&bytes);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            log::warn!(
                "{} returned {}, clearing stored credentials",
                path,
                status.as_u16()
            );
            self.credentials.clear()?;
            return Err(ApiError::AuthenticationFailed(status.as_u16()).into());
        }

        // An unreadable body is treated like an unparsable one
        let text = response.text().await.unwrap_or_default();
        let err = decode_error(status.as_u16(), &text);
        log::debug!("{} {} failed: {}", status.as_u16(), path, err);
        Err(err.into())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T> {
        self.request(Method::GET, segments, query, None::<&()>).await
    }

    async fn send_json<T, B>(&self, method: Method, segments: &[&str], body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        self.request(method, segments, &[], Some(body)).await
    }

    /// POST to an action endpoint that takes no body
    async fn post_action<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.request(Method::POST, segments, &[], None::<&()>).await
    }

    async fn delete(&self, segments: &[&str]) -> Result<()> {
        let _: serde_json::Value = self
            .request(Method::DELETE, segments, &[], None::<&()>)
            .await?;
        Ok(())
    }
}

/// Parse a 2xx body; an empty body reads as JSON `null`.
fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        bytes
    };

    serde_json::from_slice(bytes).map_err(|e| {
        ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
    })
}
