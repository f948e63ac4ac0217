//! Client layer: builds signed requests, drives the retry loop, and hands the
//! raw response body back to the caller.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use encoding_rs::{Encoding, UTF_8};
use serde::de::DeserializeOwned;

use crate::domain::{
    ApiKey, Params, Platform, RequestContext, ValidationError, detect_client_ip, method,
};
use crate::transport::{bzip2_compress, flatten, normalize_to_utf8, serialize_form};

const DEFAULT_API_HOST: &str = "https://api.unisender.com/en/api/";
const DEFAULT_RETRY_COUNT: u32 = 4;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(
                    reqwest::header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Outcome of a single POST attempt inside the retry loop.
pub enum AttemptError {
    /// HTTP client / transport failure (DNS, TLS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-2xx HTTP status, retried the same way as a connection error.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`UnisenderClient`].
///
/// A remote application error inside a 2xx body (for example an `"error"`
/// field in the JSON envelope) is NOT an error at this layer; the body is
/// returned verbatim for the caller to interpret.
pub enum UnisenderError {
    /// Every attempt failed; carries the attempt count and the last failure.
    #[error("all {attempts} attempts failed: {last}")]
    Exhausted { attempts: u32, last: AttemptError },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to construct HTTP client: {0}")]
    Http(#[source] Box<dyn StdError + Send + Sync>),

    /// Compressing the request body failed.
    #[error("request compression error: {0}")]
    Compression(#[source] io::Error),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Raw response body from a UniSender call.
///
/// The client never parses the JSON envelope; [`ApiResponse::json`] is an
/// optional convenience for callers that want a decoded value.
pub struct ApiResponse {
    body: String,
}

impl ApiResponse {
    /// Borrow the raw response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Take ownership of the raw response body.
    pub fn into_body(self) -> String {
        self.body
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[derive(Debug, Clone)]
/// Builder for [`UnisenderClient`].
///
/// Use this to set the source encoding, retry count, timeout, compression
/// mode, or platform label.
pub struct UnisenderClientBuilder {
    api_key: ApiKey,
    api_host: String,
    encoding: Option<String>,
    retry_count: u32,
    timeout: Option<Duration>,
    compression: bool,
    platform: Option<String>,
    user_agent: Option<String>,
}

impl UnisenderClientBuilder {
    /// Create a builder with the default host, UTF-8 encoding, four attempts,
    /// no timeout, and compression off.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            api_host: DEFAULT_API_HOST.to_owned(),
            encoding: None,
            retry_count: DEFAULT_RETRY_COUNT,
            timeout: None,
            compression: false,
            platform: None,
            user_agent: None,
        }
    }

    /// Override the API host base URL.
    pub fn api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = api_host.into();
        self
    }

    /// Name the encoding your parameter byte values are in, for example
    /// `ISO-8859-1`. An empty label keeps the UTF-8 default.
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Total attempts per call. Zero is silently ignored and the previous
    /// (or default) value is kept.
    pub fn retry_count(mut self, count: u32) -> Self {
        if count > 0 {
            self.retry_count = count;
        }
        self
    }

    /// Set an HTTP client timeout applied to each attempt.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enable bzip2 request compression.
    pub fn compression(mut self, compression: bool) -> Self {
        self.compression = compression;
        self
    }

    /// Product label sent as the `platform` parameter with every call,
    /// for example `My E-commerce product v1.0`. Whitespace is trimmed; an
    /// empty label means no platform.
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`UnisenderClient`].
    pub fn build(self) -> Result<UnisenderClient, UnisenderError> {
        let encoding = resolve_encoding(self.encoding.as_deref())?;
        let platform = match self.platform.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(label) => Some(Platform::new(label)?),
        };

        let mut builder =
            reqwest::Client::builder().min_tls_version(reqwest::tls::Version::TLS_1_2);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| UnisenderError::Http(Box::new(err)))?;

        Ok(UnisenderClient {
            api_key: self.api_key,
            api_host: self.api_host,
            encoding,
            retry_count: self.retry_count,
            compression: self.compression,
            platform,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn resolve_encoding(label: Option<&str>) -> Result<&'static Encoding, ValidationError> {
    match label.map(str::trim) {
        Some("") | None => Ok(UTF_8),
        Some(label) => {
            Encoding::for_label(label.as_bytes()).ok_or_else(|| ValidationError::UnknownEncoding {
                label: label.to_owned(),
            })
        }
    }
}

#[derive(Clone)]
/// UniSender HTTP API client.
///
/// One generic [`UnisenderClient::call`] reaches any endpoint; the method
/// alias table in [`crate::domain::method`] maps snake_case names to remote
/// identifiers, and unknown names pass through verbatim. [`subscribe`] is the
/// one endpoint with extra behavior (client-IP auto-fill).
///
/// [`subscribe`]: UnisenderClient::subscribe
pub struct UnisenderClient {
    api_key: ApiKey,
    api_host: String,
    encoding: &'static Encoding,
    retry_count: u32,
    compression: bool,
    platform: Option<Platform>,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for UnisenderClient {
    // Hand-written: the transport object is opaque and the API key is a
    // secret that must not leak through debug logging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnisenderClient")
            .field("api_host", &self.api_host)
            .field("encoding", &self.encoding.name())
            .field("retry_count", &self.retry_count)
            .field("compression", &self.compression)
            .field("platform", &self.platform)
            .finish_non_exhaustive()
    }
}

impl UnisenderClient {
    /// Create a client with default settings.
    ///
    /// For more customization, use [`UnisenderClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            api_host: DEFAULT_API_HOST.to_owned(),
            encoding: UTF_8,
            retry_count: DEFAULT_RETRY_COUNT,
            compression: false,
            platform: None,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> UnisenderClientBuilder {
        UnisenderClientBuilder::new(api_key)
    }

    /// Current API host base URL.
    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    /// Point the client at a different API host, for example the Russian
    /// endpoint `https://api.unisender.com/ru/api/`.
    pub fn set_api_host(&mut self, api_host: impl Into<String>) {
        self.api_host = api_host.into();
    }

    /// Call any UniSender method.
    ///
    /// `method` is either a snake_case name from the alias table or a raw
    /// endpoint identifier forwarded verbatim. The pipeline: attach the
    /// platform label, normalize parameter bytes to UTF-8, serialize the form
    /// body (bzip2-compressed when compression is on, with the API key moved
    /// to the query string), then POST with up to `retry_count` attempts and
    /// no backoff. A 2xx body is returned unparsed.
    ///
    /// Errors:
    /// - [`UnisenderError::Exhausted`] when every attempt failed,
    /// - [`UnisenderError::Compression`] when the bzip2 encoder failed.
    pub async fn call(
        &self,
        method: &str,
        mut params: Params,
    ) -> Result<ApiResponse, UnisenderError> {
        let endpoint = method::resolve(method);

        if let Some(platform) = self.platform.as_ref() {
            params.insert(Platform::FIELD, platform.as_str());
        }
        let params = normalize_to_utf8(self.encoding, params);
        let mut pairs = flatten(&params);

        let (url, body) = if self.compression {
            let encoded_key: String =
                url::form_urlencoded::byte_serialize(self.api_key.as_str().as_bytes()).collect();
            let url = format!(
                "{}{}?format=json&{}={}&request_compression=bzip2",
                self.api_host,
                endpoint,
                ApiKey::FIELD,
                encoded_key,
            );
            let body = bzip2_compress(serialize_form(&pairs).as_bytes())
                .map_err(UnisenderError::Compression)?;
            (url, body)
        } else {
            pairs.push((ApiKey::FIELD.to_owned(), self.api_key.as_str().to_owned()));
            let url = format!("{}{}?format=json", self.api_host, endpoint);
            (url, serialize_form(&pairs).into_bytes())
        };

        let mut attempts = 0;
        loop {
            attempts += 1;
            let last = match self.http.post_form(&url, body.clone()).await {
                Ok(response) if (200..=299).contains(&response.status) => {
                    tracing::debug!(endpoint, attempts, "call succeeded");
                    return Ok(ApiResponse {
                        body: response.body,
                    });
                }
                Ok(response) => {
                    let body = if response.body.trim().is_empty() {
                        None
                    } else {
                        Some(response.body)
                    };
                    AttemptError::HttpStatus {
                        status: response.status,
                        body,
                    }
                }
                Err(err) => AttemptError::Transport(err),
            };

            tracing::warn!(endpoint, attempt = attempts, error = %last, "attempt failed");
            if attempts >= self.retry_count {
                return Err(UnisenderError::Exhausted { attempts, last });
            }
        }
    }

    /// Subscribe a contact to one or more lists.
    ///
    /// When the caller did not supply a non-empty `request_ip`, it is filled
    /// in from `context` via [`detect_client_ip`]. An explicit `request_ip`
    /// is never overridden.
    pub async fn subscribe(
        &self,
        mut params: Params,
        context: &RequestContext,
    ) -> Result<ApiResponse, UnisenderError> {
        if !params.has_non_empty("request_ip") {
            params.insert("request_ip", detect_client_ip(context));
        }
        self.call("subscribe", params).await
    }
}
