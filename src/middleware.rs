//! Composable handler wrappers.

use std::sync::Arc;

use anyhow::anyhow;

use crate::context::http_context;
use crate::transport::{HandlerFn, Request};

/// Wrap a handler so OPTIONS requests receive an empty success response
/// without reaching it.
///
/// Several HTTP client stacks probe with an OPTIONS request before sending
/// the real one; wrapping a handler with this keeps those probes out of user
/// logic. Non-OPTIONS requests are delegated unchanged.
///
/// The wrapper needs the embedded HTTP context to test the method; a request
/// without one is an internal error and fails the invocation rather than
/// passing through.
pub fn ok_options(inner: HandlerFn) -> HandlerFn {
    Arc::new(move |req: &Request| {
        let ctx = match http_context(req) {
            Some(ctx) => ctx,
            None => return Err(anyhow!("internal server error: missing http context")),
        };

        if ctx.is_options() {
            return Ok(None);
        }

        inner(req)
    })
}
