//! Pre-request hooks.
//!
//! Every outgoing request passes through the client's hook chain in
//! registration order just before it is sent. The chain is fixed when the
//! client is built.

use reqwest::Request;
use reqwest::header::{ACCEPT, HeaderValue};
use std::fmt;

/// A hook run on each outgoing request before dispatch.
pub trait RequestHook: Send + Sync {
    fn on_request(&self, request: &mut Request);
}

impl<F> RequestHook for F
where
    F: Fn(&mut Request) + Send + Sync,
{
    fn on_request(&self, request: &mut Request) {
        self(request)
    }
}

/// Logs `METHOD URL` for every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRequest;

impl RequestHook for LogRequest {
    fn on_request(&self, request: &mut Request) {
        tracing::info!("{} {}", request.method(), request.url());
    }
}

/// Overwrites the `Accept` header on every request.
#[derive(Clone)]
pub struct AcceptHeader(HeaderValue);

impl AcceptHeader {
    /// Returns `None` if `value` is not a legal header value.
    pub fn new(value: &str) -> Option<Self> {
        HeaderValue::from_str(value).ok().map(Self)
    }

    pub fn value(&self) -> &HeaderValue {
        &self.0
    }
}

impl fmt::Debug for AcceptHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AcceptHeader").field(&self.0).finish()
    }
}

impl RequestHook for AcceptHeader {
    fn on_request(&self, request: &mut Request) {
        request.headers_mut().insert(ACCEPT, self.0.clone());
    }
}
