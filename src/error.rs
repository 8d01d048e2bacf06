use std::fmt;
use std::io;

use http::Method;

/// Errors surfaced by the HTTP transport.
///
/// Registration and lifecycle misuse is reported synchronously to the
/// offending caller and never recovered automatically. Handler failures do
/// not appear here; the dispatcher converts them into 500 responses (see
/// [`crate::server::TransportService`]).
#[derive(Debug)]
pub enum TransportError {
    /// No value was registered under [`HandlerOptName::HttpMethods`].
    ///
    /// [`HandlerOptName::HttpMethods`]: crate::transport::HandlerOptName
    MissingMethodsOpt {
        /// The route whose handler is missing the option
        route: String,
    },
    /// The methods option is present but is not a [`Methods`] value.
    ///
    /// [`Methods`]: crate::methods::Methods
    InvalidMethodsOpt {
        /// The route whose handler carries the mistyped option
        route: String,
    },
    /// A handler is already associated with this (route, method) pair.
    ///
    /// Keys expanded earlier in the same `register` call stay inserted;
    /// there is no rollback.
    DuplicateRoute {
        /// The colliding route path
        route: String,
        /// The colliding HTTP method
        method: Method,
    },
    /// An error handler has already been set on this transport.
    ErrorHandlerAlreadySet,
    /// `run` was called while the transport is already serving.
    AlreadyRunning,
    /// `close` was called while the transport is not serving.
    NotRunning,
    /// Binding or starting the underlying HTTP server failed.
    Bind(io::Error),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::MissingMethodsOpt { route } => {
                write!(f, "missing http methods option for route: {}", route)
            }
            TransportError::InvalidMethodsOpt { route } => {
                write!(
                    f,
                    "option associated with HandlerOptName::HttpMethods is not of type Methods \
                    (route: {})",
                    route
                )
            }
            TransportError::DuplicateRoute { route, method } => {
                write!(
                    f,
                    "a handler is already associated with this route: {} {}",
                    method, route
                )
            }
            TransportError::ErrorHandlerAlreadySet => {
                write!(f, "an error handler has already been set")
            }
            TransportError::AlreadyRunning => {
                write!(f, "the http transporter is already running")
            }
            TransportError::NotRunning => {
                write!(f, "the http transporter is not running")
            }
            TransportError::Bind(err) => {
                write!(f, "failed to start the http server: {}", err)
            }
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Bind(err) => Some(err),
            _ => None,
        }
    }
}
