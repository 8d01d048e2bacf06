//! `may_minihttp` plumbing: the server wrapper and the dispatching service.

pub mod http_server;
pub mod response;
pub mod service;

pub use http_server::{HttpServer, ServerHandle};
pub use response::write_response;
pub use service::{DispatchResponse, TransportService};
