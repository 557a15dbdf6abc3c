//! # Starsite HTTP
//!
//! Hyper 1.0 native ingress: exact and prefix routes, a fallback, and
//! single-write response helpers.

pub mod ingress;
pub mod response;

pub use ingress::{HttpIngress, IngressError, RawIngressService, Router, empty_request};
pub use response::HttpResponse;

pub mod prelude {
    pub use crate::ingress::{HttpIngress, IngressError, Router};
    pub use crate::response::{self, HttpResponse, html, not_found, text};

    pub use bytes::Bytes;
    pub use http::{Method, Request, Response, StatusCode};
    pub use http_body_util::Full;
}
