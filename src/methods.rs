//! Verb-set configuration and its expansion into concrete route keys.
//!
//! A handler declares the HTTP methods it responds to through a [`Methods`]
//! value carried in its option bag. At registration time the set is expanded
//! into one [`RouteKey`] per enabled method, and each key maps to exactly one
//! handler in the transport's route table.

use http::Method;

/// Identifies a single registered route: exact path plus HTTP method.
///
/// Equality is exact string match on the path and exact method match; there
/// is no pattern matching at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    /// Route path, matched verbatim against the request path
    pub route: String,
    /// HTTP method
    pub method: Method,
}

impl RouteKey {
    /// Create a route key for the given path and method.
    pub fn new(route: impl Into<String>, method: Method) -> Self {
        Self {
            route: route.into(),
            method,
        }
    }
}

/// Set of HTTP methods a handler responds to.
///
/// `all` is a shortcut: when set, every individual flag is treated as set
/// during expansion. A set with no flags expands to nothing, which is
/// accepted; the handler is simply unreachable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Methods {
    pub get: bool,
    pub post: bool,
    pub put: bool,
    pub patch: bool,
    pub delete: bool,
    pub head: bool,
    pub options: bool,
    /// Shortcut for every method above
    pub all: bool,
}

impl Methods {
    /// Expand the set into the route keys implied by its flags for `route`.
    ///
    /// Expansion order is fixed: GET, POST, PUT, PATCH, DELETE, HEAD,
    /// OPTIONS. The order only matters for deterministic comparison, not
    /// for dispatch semantics.
    pub fn route_keys(&self, route: &str) -> Vec<RouteKey> {
        let mut m = *self;
        if m.all {
            m.get = true;
            m.post = true;
            m.put = true;
            m.patch = true;
            m.delete = true;
            m.head = true;
            m.options = true;
        }

        let mut keys = Vec::new();
        if m.get {
            keys.push(RouteKey::new(route, Method::GET));
        }
        if m.post {
            keys.push(RouteKey::new(route, Method::POST));
        }
        if m.put {
            keys.push(RouteKey::new(route, Method::PUT));
        }
        if m.patch {
            keys.push(RouteKey::new(route, Method::PATCH));
        }
        if m.delete {
            keys.push(RouteKey::new(route, Method::DELETE));
        }
        if m.head {
            keys.push(RouteKey::new(route, Method::HEAD));
        }
        if m.options {
            keys.push(RouteKey::new(route, Method::OPTIONS));
        }
        keys
    }
}
