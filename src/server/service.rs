use std::collections::HashMap;
use std::io;
use std::io::Read;
use std::sync::Arc;

use http::Method;
use may_minihttp::{HttpService, Request as HttpRequest, Response};
use tracing::{debug, error};

use crate::context::HttpContext;
use crate::methods::RouteKey;
use crate::server::response::write_response;
use crate::transport::{ErrorHandler, HandlerFn, Request};

/// Outcome of dispatching one request: the status and body to write back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl DispatchResponse {
    fn empty(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }
}

/// Immutable snapshot of a transporter's routing configuration, wired into
/// the HTTP server as its per-connection service.
///
/// Built by [`crate::transport::HttpTransporter::service`]; route lookup and
/// verb handling are synchronous, in-memory operations, so the service is
/// cheap to clone per connection.
#[derive(Clone)]
pub struct TransportService {
    routes: Arc<HashMap<RouteKey, HandlerFn>>,
    error_handler: Option<ErrorHandler>,
    ok_options: bool,
}

impl TransportService {
    /// Assemble a service from a route table, an optional error handler and
    /// the OPTIONS short-circuit flag.
    pub fn new(
        routes: Arc<HashMap<RouteKey, HandlerFn>>,
        error_handler: Option<ErrorHandler>,
        ok_options: bool,
    ) -> Self {
        Self {
            routes,
            error_handler,
            ok_options,
        }
    }

    /// Dispatch one request through the route table.
    ///
    /// The sequencing is fixed: OPTIONS short-circuit (when enabled), route
    /// lookup, handler invocation, then error-handler recovery on failure.
    /// Unknown method tokens and unregistered (path, method) pairs both
    /// yield an empty 404.
    pub fn dispatch(&self, method: &str, path: &str, data: Vec<u8>) -> DispatchResponse {
        debug!(method, path, "request received");

        let method = match method.parse::<Method>() {
            Ok(m) => m,
            Err(_) => {
                debug!(method, "unrecognized method token");
                return DispatchResponse::empty(404);
            }
        };

        // Answer every OPTIONS request with an empty 200 before route
        // lookup when the transporter was configured with ok_options.
        if self.ok_options && method == Method::OPTIONS {
            return DispatchResponse::empty(200);
        }

        let key = RouteKey {
            route: path.to_string(),
            method: method.clone(),
        };
        let func = match self.routes.get(&key) {
            Some(f) => f.clone(),
            None => {
                debug!(%method, path, "no handler registered for route");
                return DispatchResponse::empty(404);
            }
        };

        let ctx = Arc::new(HttpContext::new(method, path));
        let mut req = Request::new(data);
        req.extensions.insert(ctx.clone());

        match func(&req) {
            Ok(payload) => {
                let status = ctx.status().unwrap_or(200);
                let body = match payload {
                    Some(bytes) => bytes,
                    None => ctx.body().unwrap_or_default(),
                };
                DispatchResponse { status, body }
            }
            Err(err) => {
                error!(error = %err, path, "handler failed");
                match &self.error_handler {
                    None => DispatchResponse::empty(500),
                    Some(error_handler) => match error_handler(&err, &req) {
                        Some(body) => DispatchResponse { status: 500, body },
                        // The error handler owns the response: keep whatever
                        // it set on the http context.
                        None => DispatchResponse {
                            status: ctx.status().unwrap_or(200),
                            body: ctx.body().unwrap_or_default(),
                        },
                    },
                }
            }
        }
    }
}

impl HttpService for TransportService {
    fn call(&mut self, req: HttpRequest, res: &mut Response) -> io::Result<()> {
        let method = req.method().to_string();
        let raw_path = req.path().to_string();
        let path = raw_path.split('?').next().unwrap_or("/").to_string();

        let mut data = Vec::new();
        req.body().read_to_end(&mut data)?;

        let out = self.dispatch(&method, &path, data);
        write_response(res, out.status, out.body);
        Ok(())
    }
}
