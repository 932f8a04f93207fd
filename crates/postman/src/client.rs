//! Postman API client.

use crate::errors::{Failure, translate};
use crate::middleware::{AcceptHeader, LogRequest, RequestHook};
use crate::{Error, Result};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Request, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default Postman API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.getpostman.com";

/// Timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Options for building a [`PostmanClient`].
#[derive(Clone, Default)]
pub struct ClientOptions {
    base_url: Option<String>,
    accept_header: Option<String>,
    danger_accept_invalid_certs: bool,
    hooks: Vec<Arc<dyn RequestHook>>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API origin.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Force this `Accept` header on every request.
    pub fn accept_header(mut self, accept: impl Into<String>) -> Self {
        self.accept_header = Some(accept.into());
        self
    }

    /// Skip TLS certificate verification.
    ///
    /// Only for networks behind an intercepting proxy. Off unless set here.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.danger_accept_invalid_certs = accept;
        self
    }

    /// Append a hook to run after the built-in ones.
    pub fn hook(mut self, hook: impl RequestHook + 'static) -> Self {
        self.hooks.push(Arc::new(hook));
        self
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("base_url", &self.base_url)
            .field("accept_header", &self.accept_header)
            .field(
                "danger_accept_invalid_certs",
                &self.danger_accept_invalid_certs,
            )
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

/// A request to the Postman API, relative to the client's base URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// HTTP client bound to one Postman account.
///
/// Cloning is cheap: clones share the connection pool and the hook chain.
#[derive(Clone)]
pub struct PostmanClient {
    http: reqwest::Client,
    base_url: String,
    accept_header: Option<AcceptHeader>,
    hooks: Arc<[Arc<dyn RequestHook>]>,
}

impl PostmanClient {
    /// Resolve the client a tool should use.
    ///
    /// An existing client is reused as-is and `api_key`/`options` are
    /// ignored. Otherwise a new client is built, which requires an API key.
    pub fn provision(
        api_key: Option<&str>,
        existing: Option<PostmanClient>,
        options: ClientOptions,
    ) -> Result<Self> {
        if let Some(client) = existing {
            debug!(base_url = %client.base_url, "reusing existing Postman client");
            return Ok(client);
        }

        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config("Postman API key is required".into()))?;
        Self::new(api_key, options)
    }

    /// Build a new client authenticated with `api_key`.
    pub fn new(api_key: &str, options: ClientOptions) -> Result<Self> {
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|_| Error::Config("API key is not a valid header value".into()))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(DEFAULT_TIMEOUT);
        if options.danger_accept_invalid_certs {
            warn!("TLS certificate verification is disabled for the Postman client");
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build().map_err(Error::Build)?;

        let accept_header = match options.accept_header.as_deref() {
            Some(value) => Some(
                AcceptHeader::new(value)
                    .ok_or_else(|| Error::Config(format!("invalid accept header: {value:?}")))?,
            ),
            None => None,
        };

        let mut hooks: Vec<Arc<dyn RequestHook>> = vec![Arc::new(LogRequest)];
        if let Some(accept) = &accept_header {
            hooks.push(Arc::new(accept.clone()));
        }
        hooks.extend(options.hooks);

        Ok(Self {
            http,
            base_url: options
                .base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            accept_header,
            hooks: hooks.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn accept_header(&self) -> Option<&str> {
        self.accept_header
            .as_ref()
            .and_then(|accept| accept.value().to_str().ok())
    }

    /// Send a request and return the response body as JSON.
    ///
    /// An empty body yields `Value::Null`; a body that is not JSON is
    /// returned as a JSON string.
    pub async fn send(&self, request: ApiRequest) -> mcp::Result<Value> {
        let response = self.execute(request).await?;
        let text = response
            .text()
            .await
            .map_err(|e| translate(&Failure::NoResponse(e)))?;

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }

    /// Send a request and deserialize the response body into `T`.
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> mcp::Result<T> {
        let response = self.execute(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| translate(&Failure::Decode(e.to_string())))
    }

    pub async fn get(&self, path: &str) -> mcp::Result<Value> {
        self.send(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn get_with_query(&self, path: &str, query: &[(&str, &str)]) -> mcp::Result<Value> {
        let request = query
            .iter()
            .fold(ApiRequest::new(Method::GET, path), |req, (k, v)| {
                req.query(*k, *v)
            });
        self.send(request).await
    }

    pub async fn post(&self, path: &str, body: Value) -> mcp::Result<Value> {
        self.send(ApiRequest::new(Method::POST, path).json(body))
            .await
    }

    pub async fn put(&self, path: &str, body: Value) -> mcp::Result<Value> {
        self.send(ApiRequest::new(Method::PUT, path).json(body)).await
    }

    pub async fn patch(&self, path: &str, body: Value) -> mcp::Result<Value> {
        self.send(ApiRequest::new(Method::PATCH, path).json(body))
            .await
    }

    pub async fn delete(&self, path: &str) -> mcp::Result<Value> {
        self.send(ApiRequest::new(Method::DELETE, path)).await
    }

    /// Run the hook chain, dispatch, and translate any failure.
    async fn execute(&self, request: ApiRequest) -> mcp::Result<Response> {
        let mut req = self.build_request(request).map_err(|f| translate(&f))?;
        for hook in self.hooks.iter() {
            hook.on_request(&mut req);
        }

        let response = self
            .http
            .execute(req)
            .await
            .map_err(|e| translate(&Failure::NoResponse(e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .bytes()
            .await
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok());
        Err(translate(&Failure::Status { status, body }))
    }

    fn build_request(&self, request: ApiRequest) -> std::result::Result<Request, Failure> {
        let path = request.path.trim_start_matches('/');
        let mut url = Url::parse(&format!("{}/{path}", self.base_url))
            .map_err(|e| Failure::NotSent(e.to_string()))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }

        let mut builder = self.http.request(request.method, url);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        builder.build().map_err(|e| Failure::NotSent(e.to_string()))
    }
}

impl fmt::Debug for PostmanClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostmanClient")
            .field("base_url", &self.base_url)
            .field("accept_header", &self.accept_header)
            .field("hooks", &self.hooks.len())
            .finish_non_exhaustive()
    }
}
