//! # Transport Module
//!
//! The generic transporter contract and its HTTP binding.
//!
//! A pluggable microservice host drives its transports through the
//! [`Transporter`] trait: handlers are registered against a route, an
//! optional error handler shapes failure responses, and `run`/`close` manage
//! the serving lifecycle. [`HttpTransporter`] implements the trait on top of
//! `may_minihttp`, keying handlers by exact (path, method) pairs.
//!
//! Handlers receive a framework-generic [`Request`] (raw body bytes plus a
//! typed attachment map) and return an optional payload. The HTTP method set
//! a handler responds to travels in its [`HandlerOpts`] bag under
//! [`HandlerOptName::HttpMethods`].

mod core;
mod http;

pub use core::{
    ErrorHandler, Handler, HandlerFn, HandlerOptName, HandlerOpts, HandlerResult, Request,
    Transporter,
};
pub use http::HttpTransporter;
