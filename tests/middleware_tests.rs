//! Tests for the ok_options handler wrapper.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use http::Method;
use relay_http::{ok_options, Handler, HandlerFn, HttpContext, HttpTransporter, Request, Transporter};

mod common;

fn request_with_method(method: Method) -> Request {
    let mut req = Request::new(Vec::new());
    req.extensions
        .insert(Arc::new(HttpContext::new(method, "/wrapped")));
    req
}

#[test]
fn test_options_request_is_answered_without_invoking_inner() {
    common::setup();
    let invoked = Arc::new(AtomicBool::new(false));
    let invoked_in_handler = invoked.clone();
    let inner: HandlerFn = Arc::new(move |_req: &Request| {
        invoked_in_handler.store(true, Ordering::SeqCst);
        Ok(Some(b"inner".to_vec()))
    });

    let wrapped = ok_options(inner);
    let result = wrapped(&request_with_method(Method::OPTIONS)).unwrap();
    assert!(result.is_none());
    assert!(!invoked.load(Ordering::SeqCst));
}

#[test]
fn test_other_methods_are_delegated_unchanged() {
    common::setup();
    let inner: HandlerFn = Arc::new(|req: &Request| Ok(Some(req.data.clone())));

    let wrapped = ok_options(inner);
    let mut req = request_with_method(Method::POST);
    req.data = b"pass through".to_vec();
    let result = wrapped(&req).unwrap();
    assert_eq!(result, Some(b"pass through".to_vec()));
}

#[test]
fn test_missing_http_context_is_an_error() {
    common::setup();
    let inner: HandlerFn = Arc::new(|_req: &Request| Ok(None));

    let wrapped = ok_options(inner);
    let err = wrapped(&Request::new(Vec::new())).unwrap_err();
    assert!(err.to_string().contains("missing http context"));
}

#[test]
fn test_wrapped_handler_through_full_dispatch() {
    common::setup();
    let mut transport = HttpTransporter::new("127.0.0.1:0", false);
    let inner: HandlerFn = Arc::new(|_req: &Request| Ok(Some(b"real".to_vec())));
    let wrapped = ok_options(inner);
    let wrapped_for_handler = wrapped.clone();

    transport
        .register(
            "/wrapped",
            Handler::new(
                move |req: &Request| wrapped_for_handler(req),
                relay_http::Methods {
                    get: true,
                    options: true,
                    ..relay_http::Methods::default()
                },
            ),
        )
        .unwrap();

    let service = transport.service();
    let options = service.dispatch("OPTIONS", "/wrapped", Vec::new());
    assert_eq!(options.status, 200);
    assert!(options.body.is_empty());

    let get = service.dispatch("GET", "/wrapped", Vec::new());
    assert_eq!(get.status, 200);
    assert_eq!(get.body, b"real");
}
