use std::collections::HashMap;
use std::sync::mpsc::{channel, Sender};
use std::sync::{Arc, Mutex};

use tracing::{debug, error, info};

use crate::error::TransportError;
use crate::methods::{Methods, RouteKey};
use crate::server::{HttpServer, ServerHandle, TransportService};
use crate::transport::{ErrorHandler, Handler, HandlerFn, HandlerOptName, Transporter};

struct RunningServer {
    handle: ServerHandle,
    shutdown_tx: Sender<()>,
}

/// HTTP implementation of the [`Transporter`] contract, backed by
/// `may_minihttp`.
///
/// Routes are plain (path, method) keys with at most one handler per key.
/// `run` snapshots the route table into a [`TransportService`] and starts
/// the server; registrations made afterwards are not observed by a running
/// instance.
pub struct HttpTransporter {
    addr: String,
    ok_options: bool,
    routes: HashMap<RouteKey, HandlerFn>,
    error_handler: Option<ErrorHandler>,
    running: Mutex<Option<RunningServer>>,
}

impl HttpTransporter {
    /// Create a transporter that will listen on `addr`.
    ///
    /// When `ok_options` is set, every OPTIONS request is answered with an
    /// empty 200 before route lookup, regardless of what is registered.
    pub fn new(addr: impl Into<String>, ok_options: bool) -> Self {
        Self {
            addr: addr.into(),
            ok_options,
            routes: HashMap::new(),
            error_handler: None,
            running: Mutex::new(None),
        }
    }

    /// Snapshot the current configuration into a request-handling service.
    ///
    /// `run` uses this internally; it is public so the dispatch pipeline can
    /// be exercised without binding a socket.
    pub fn service(&self) -> TransportService {
        TransportService::new(
            Arc::new(self.routes.clone()),
            self.error_handler.clone(),
            self.ok_options,
        )
    }
}

impl Transporter for HttpTransporter {
    fn register(&mut self, route: &str, handler: Handler) -> Result<(), TransportError> {
        let methods = match handler.opts.get::<Methods>(HandlerOptName::HttpMethods) {
            Some(m) => *m,
            None if handler.opts.contains(HandlerOptName::HttpMethods) => {
                error!(route, "methods option is not of type Methods");
                return Err(TransportError::InvalidMethodsOpt {
                    route: route.to_string(),
                });
            }
            None => {
                error!(route, "missing http methods option");
                return Err(TransportError::MissingMethodsOpt {
                    route: route.to_string(),
                });
            }
        };

        // Keys inserted before a collision stay in place; there is no
        // rollback within a single register call.
        for key in methods.route_keys(route) {
            if self.routes.contains_key(&key) {
                error!(
                    route = %key.route,
                    method = %key.method,
                    "a handler is already associated with this route"
                );
                return Err(TransportError::DuplicateRoute {
                    route: key.route,
                    method: key.method,
                });
            }

            debug!(route = %key.route, method = %key.method, "route registered");
            self.routes.insert(key, handler.func.clone());
        }

        Ok(())
    }

    fn set_error_handler(&mut self, error_handler: ErrorHandler) -> Result<(), TransportError> {
        if self.error_handler.is_some() {
            error!("an error handler has already been set");
            return Err(TransportError::ErrorHandlerAlreadySet);
        }

        self.error_handler = Some(error_handler);
        Ok(())
    }

    fn run(&self) -> Result<(), TransportError> {
        let shutdown_rx = {
            let mut running = self.running.lock().unwrap();
            if running.is_some() {
                return Err(TransportError::AlreadyRunning);
            }

            let handle = HttpServer(self.service())
                .start(self.addr.as_str())
                .map_err(TransportError::Bind)?;

            // Only report the instance as running once it accepts
            // connections.
            if let Err(err) = handle.wait_ready() {
                handle.stop();
                return Err(TransportError::Bind(err));
            }

            info!(
                addr = %self.addr,
                routes = self.routes.len(),
                "http transporter listening"
            );

            let (shutdown_tx, shutdown_rx) = channel();
            *running = Some(RunningServer {
                handle,
                shutdown_tx,
            });
            shutdown_rx
        };

        // Blocks until close() signals or the sender is dropped.
        let _ = shutdown_rx.recv();
        Ok(())
    }

    fn close(&self) -> Result<(), TransportError> {
        let running = self.running.lock().unwrap().take();
        match running {
            Some(RunningServer {
                handle,
                shutdown_tx,
            }) => {
                handle.stop();
                let _ = shutdown_tx.send(());
                info!(addr = %self.addr, "http transporter stopped");
                Ok(())
            }
            None => Err(TransportError::NotRunning),
        }
    }
}
