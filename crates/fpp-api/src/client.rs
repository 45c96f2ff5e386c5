// FPP API HTTP client
//
// Wraps `reqwest::Client` with URL resolution against the device origin and
// a single response-handling path shared by every endpoint. Endpoint
// families (overlays, playlists, schedule, ...) are implemented as inherent
// methods in `resources/` to keep this module focused on transport mechanics.

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::context::CallContext;
use crate::error::Error;
use crate::transport::TransportConfig;

/// Async client for a single FPP device.
///
/// Immutable after construction and safe to share between tasks; each call
/// is one independent HTTP round trip.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for `base_url` with the default transport
    /// (10 second timeout).
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_transport(base_url, &TransportConfig::default())
    }

    /// Build a client from a transport config.
    pub fn with_transport(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let base_url = Self::parse_base_url(base_url)?;
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller owns timeouts, proxies,
    /// middleware-ish concerns).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::parse_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    fn parse_base_url(raw: &str) -> Result<Url, Error> {
        let url = Url::parse(raw)?;
        if url.cannot_be_a_base() {
            return Err(Error::UnsupportedBaseUrl { url: raw.to_owned() });
        }
        Ok(url)
    }

    /// The configured device endpoint.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL resolver ─────────────────────────────────────────────────

    /// Resolve an absolute resource path (e.g. `/api/playlists`) against the
    /// device origin. Any path, query or fragment on the base URL is
    /// replaced; characters that are not valid in a path (spaces, `?`, `#`)
    /// are percent-encoded, and a literal `%` is sent as `%25`.
    pub fn url(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        // `set_path` passes existing `%XX` sequences through untouched.
        url.set_path(&path.replace('%', "%25"));
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        ctx: &CallContext,
        path: &str,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let request = self.http.get(url);
        ctx.run(Self::execute(request)).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        ctx: &CallContext,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        self.submit(ctx, Method::PUT, path, body).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        ctx: &CallContext,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        self.submit(ctx, Method::POST, path, body).await
    }

    async fn submit<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        ctx: &CallContext,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let payload = serde_json::to_vec(body).map_err(Error::Serialization)?;
        let url = self.url(path);
        debug!("{method} {url}");
        trace!(bytes = payload.len(), "request body encoded");

        let request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(payload);
        ctx.run(Self::execute(request)).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn execute<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, Error> {
        let resp = request.send().await?;
        Self::handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        mut resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status != StatusCode::OK {
            // Read the body to the end so the connection can be reused.
            let mut drained = 0;
            while let Ok(Some(chunk)) = resp.chunk().await {
                drained += chunk.len();
            }
            trace!(%status, drained, "discarded error response body");
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_owned(),
            });
        }

        let body = resp.bytes().await?;
        trace!(bytes = body.len(), "decoding response body");
        serde_json::from_slice(&body).map_err(|source| Error::Deserialization {
            source,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}
