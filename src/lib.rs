//! # relay-http
//!
//! **relay-http** is an HTTP transport binding for pluggable microservice
//! hosts, built on the `may` coroutine runtime and `may_minihttp`.
//!
//! ## Overview
//!
//! A host framework talks to its transports through the generic
//! [`Transporter`] trait: register handlers, run, close. This crate binds
//! that contract to HTTP: inbound requests are translated into
//! framework-generic [`Request`] values and dispatched to the handler
//! registered for the exact (path, method) pair. Everything protocol-level
//! (socket lifecycle, HTTP parsing, keep-alive) is delegated to
//! `may_minihttp`.
//!
//! ## Architecture
//!
//! - **[`transport`]** - the `Transporter` trait, handler and request types,
//!   and the [`HttpTransporter`] implementation
//! - **[`methods`]** - the [`Methods`] verb set and its expansion into
//!   concrete route keys
//! - **[`server`]** - the `may_minihttp` plumbing: server wrapper and the
//!   request-dispatching service
//! - **[`context`]** - the embedded low-level HTTP context and its accessor
//! - **[`middleware`]** - composable handler wrappers ([`ok_options`])
//! - **[`error`]** - the [`TransportError`] taxonomy
//!
//! ## Quick Start
//!
//! ```no_run
//! use relay_http::{Handler, HttpTransporter, Transporter};
//!
//! let mut transport = HttpTransporter::new("127.0.0.1:8080", false);
//! transport
//!     .register("/users", Handler::get(|_req| Ok(Some(b"ok".to_vec()))))
//!     .expect("register route");
//!
//! // Blocks until `close` is called from another thread.
//! transport.run().expect("serve");
//! ```
//!
//! ## Runtime Considerations
//!
//! relay-http uses the `may` coroutine runtime, not tokio or async-std.
//! Handlers run inside server coroutines; blocking operations should use
//! `may`'s blocking facilities. Registration is not synchronized against
//! traffic: complete all `register` calls before `run` (the borrow checker
//! enforces this on a single instance, since `register` takes `&mut self`).
//!
//! Every response is sent with `Connection: close`; the transport does not
//! keep application routing state across connection reuse.

pub mod context;
pub mod error;
pub mod methods;
pub mod middleware;
pub mod server;
pub mod transport;

pub use context::{http_context, HttpContext};
pub use error::TransportError;
pub use methods::{Methods, RouteKey};
pub use middleware::ok_options;
pub use server::{DispatchResponse, HttpServer, ServerHandle, TransportService};
pub use transport::{
    ErrorHandler, Handler, HandlerFn, HandlerOptName, HandlerOpts, HandlerResult,
    HttpTransporter, Request, Transporter,
};
