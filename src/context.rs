//! The low-level HTTP context embedded in every dispatched request.
//!
//! Handlers are written against the framework-generic [`Request`]; the few
//! that need protocol access (inspecting the method, forcing a status code)
//! retrieve the [`HttpContext`] attached to the request via [`http_context`].

use std::sync::{Arc, Mutex};

use http::Method;

use crate::transport::Request;

#[derive(Debug, Default)]
struct ResponseOverride {
    status: Option<u16>,
    body: Option<Vec<u8>>,
}

/// Connection-level context for a single in-flight request.
///
/// Carries the raw method and path, plus a side channel the handler or the
/// error handler may use to set the response status and body directly. The
/// dispatcher applies these overrides after the handler returns; a payload
/// returned by the handler takes precedence over a body set here.
#[derive(Debug)]
pub struct HttpContext {
    method: Method,
    path: String,
    response: Mutex<ResponseOverride>,
}

impl HttpContext {
    /// Create a context for a request with the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            response: Mutex::new(ResponseOverride::default()),
        }
    }

    /// The request's HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request path, without the query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this is an OPTIONS request.
    pub fn is_options(&self) -> bool {
        self.method == Method::OPTIONS
    }

    /// Set the response status code directly, bypassing the dispatcher's
    /// default of 200.
    pub fn set_status(&self, status: u16) {
        self.response.lock().unwrap().status = Some(status);
    }

    /// Set the response body directly. Ignored when the handler also returns
    /// a payload.
    pub fn set_body(&self, body: Vec<u8>) {
        self.response.lock().unwrap().body = Some(body);
    }

    /// Status override set on this context, if any.
    pub fn status(&self) -> Option<u16> {
        self.response.lock().unwrap().status
    }

    /// Body override set on this context, if any.
    pub fn body(&self) -> Option<Vec<u8>> {
        self.response.lock().unwrap().body.clone()
    }
}

/// Extract the embedded HTTP context from a transport request.
///
/// Returns `None` when the request carries no context attachment. This is
/// the single lookup signature used everywhere: a missing attachment and a
/// mistyped one are indistinguishable to callers, both are `None`.
pub fn http_context(req: &Request) -> Option<Arc<HttpContext>> {
    req.extensions.get::<Arc<HttpContext>>().cloned()
}
