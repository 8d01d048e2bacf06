use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use http::Extensions;

use crate::error::TransportError;
use crate::methods::Methods;

/// Result of a handler invocation: an optional response payload.
///
/// `Ok(None)` means the handler produced no payload and the response body
/// stays empty (unless the handler set one through the HTTP context).
pub type HandlerResult = Result<Option<Vec<u8>>, anyhow::Error>;

/// A registered unit of user logic.
pub type HandlerFn = Arc<dyn Fn(&Request) -> HandlerResult + Send + Sync>;

/// Callback invoked when a handler fails.
///
/// Returning `Some(body)` (even an empty one) makes the dispatcher respond
/// with status 500 and that body. Returning `None` leaves the response to
/// whatever the callback set directly on the request's HTTP context.
pub type ErrorHandler = Arc<dyn Fn(&anyhow::Error, &Request) -> Option<Vec<u8>> + Send + Sync>;

/// Framework-generic request handed to handlers.
///
/// `data` is the raw request body. `extensions` is a typed attachment map;
/// the HTTP binding stores an `Arc<HttpContext>` there, retrievable with
/// [`crate::context::http_context`].
pub struct Request {
    /// Raw request body bytes
    pub data: Vec<u8>,
    /// Typed attachments carried alongside the body
    pub extensions: Extensions,
}

impl Request {
    /// Create a request around raw body bytes, with no attachments.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            extensions: Extensions::new(),
        }
    }
}

/// Well-known keys for handler options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerOptName {
    /// The [`Methods`] set a handler responds to. Required by the HTTP
    /// transporter for every registration.
    HttpMethods,
}

/// Typed option bag attached to a handler at registration time.
///
/// Values are stored type-erased and extracted with an explicit type check;
/// [`HandlerOpts::get`] returns `None` for both a missing key and a value of
/// the wrong type, and [`HandlerOpts::contains`] tells the two apart.
#[derive(Default)]
pub struct HandlerOpts {
    values: HashMap<HandlerOptName, Box<dyn Any + Send + Sync>>,
}

impl HandlerOpts {
    /// Create an empty option bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under the given option key, replacing any previous one.
    pub fn insert<T: Any + Send + Sync>(&mut self, name: HandlerOptName, value: T) {
        self.values.insert(name, Box::new(value));
    }

    /// Whether any value (of any type) is stored under the key.
    pub fn contains(&self, name: HandlerOptName) -> bool {
        self.values.contains_key(&name)
    }

    /// Type-checked extraction: `None` when the key is absent or the stored
    /// value is not a `T`.
    pub fn get<T: Any>(&self, name: HandlerOptName) -> Option<&T> {
        self.values.get(&name).and_then(|v| v.downcast_ref::<T>())
    }
}

/// A handler function together with its registration options.
pub struct Handler {
    /// The user logic invoked on dispatch
    pub func: HandlerFn,
    /// Options consumed at registration time
    pub opts: HandlerOpts,
}

impl Handler {
    /// Build a handler responding to the given method set.
    pub fn new<F>(func: F, methods: Methods) -> Self
    where
        F: Fn(&Request) -> HandlerResult + Send + Sync + 'static,
    {
        let mut opts = HandlerOpts::new();
        opts.insert(HandlerOptName::HttpMethods, methods);
        Self {
            func: Arc::new(func),
            opts,
        }
    }

    /// Build a handler from an explicit option bag.
    ///
    /// Registration fails unless the bag carries a [`Methods`] value under
    /// [`HandlerOptName::HttpMethods`].
    pub fn with_opts<F>(func: F, opts: HandlerOpts) -> Self
    where
        F: Fn(&Request) -> HandlerResult + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            opts,
        }
    }

    /// Handler responding to GET requests.
    pub fn get<F>(func: F) -> Self
    where
        F: Fn(&Request) -> HandlerResult + Send + Sync + 'static,
    {
        Self::new(
            func,
            Methods {
                get: true,
                ..Methods::default()
            },
        )
    }

    /// Handler responding to POST requests.
    pub fn post<F>(func: F) -> Self
    where
        F: Fn(&Request) -> HandlerResult + Send + Sync + 'static,
    {
        Self::new(
            func,
            Methods {
                post: true,
                ..Methods::default()
            },
        )
    }

    /// Handler responding to PUT requests.
    pub fn put<F>(func: F) -> Self
    where
        F: Fn(&Request) -> HandlerResult + Send + Sync + 'static,
    {
        Self::new(
            func,
            Methods {
                put: true,
                ..Methods::default()
            },
        )
    }

    /// Handler responding to PATCH requests.
    pub fn patch<F>(func: F) -> Self
    where
        F: Fn(&Request) -> HandlerResult + Send + Sync + 'static,
    {
        Self::new(
            func,
            Methods {
                patch: true,
                ..Methods::default()
            },
        )
    }

    /// Handler responding to DELETE requests.
    pub fn delete<F>(func: F) -> Self
    where
        F: Fn(&Request) -> HandlerResult + Send + Sync + 'static,
    {
        Self::new(
            func,
            Methods {
                delete: true,
                ..Methods::default()
            },
        )
    }

    /// Handler responding to HEAD requests.
    pub fn head<F>(func: F) -> Self
    where
        F: Fn(&Request) -> HandlerResult + Send + Sync + 'static,
    {
        Self::new(
            func,
            Methods {
                head: true,
                ..Methods::default()
            },
        )
    }

    /// Handler responding to OPTIONS requests.
    pub fn options<F>(func: F) -> Self
    where
        F: Fn(&Request) -> HandlerResult + Send + Sync + 'static,
    {
        Self::new(
            func,
            Methods {
                options: true,
                ..Methods::default()
            },
        )
    }

    /// Handler responding to every request verb.
    pub fn all<F>(func: F) -> Self
    where
        F: Fn(&Request) -> HandlerResult + Send + Sync + 'static,
    {
        Self::new(
            func,
            Methods {
                all: true,
                ..Methods::default()
            },
        )
    }
}

/// The transporter capability a pluggable microservice host expects.
///
/// `register` and `set_error_handler` configure the instance and must
/// complete before `run`; `run` blocks until `close` is called from another
/// thread (or binding fails).
pub trait Transporter {
    /// Associate a handler with a route for every method in its option bag.
    fn register(&mut self, route: &str, handler: Handler) -> Result<(), TransportError>;

    /// Install the error handler invoked when a handler fails. Settable
    /// exactly once.
    fn set_error_handler(&mut self, error_handler: ErrorHandler) -> Result<(), TransportError>;

    /// Start serving and block until the transport is closed.
    fn run(&self) -> Result<(), TransportError>;

    /// Stop the underlying server and unblock `run`.
    fn close(&self) -> Result<(), TransportError>;
}
