//! Response helpers. Each builds a complete `Response<Full<Bytes>>` in one
//! shot; the body is written once and never streamed.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};
use http::{Response, StatusCode};
use http_body_util::Full;

pub type HttpResponse = Response<Full<Bytes>>;

/// Build a response with a status, a static content type and a body.
pub fn with_content_type(
    status: StatusCode,
    content_type: &'static str,
    body: impl Into<Bytes>,
) -> HttpResponse {
    let mut res = Response::new(Full::new(body.into()));
    *res.status_mut() = status;
    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    res
}

/// Create a 200 text/html response
pub fn html(body: impl Into<Bytes>) -> HttpResponse {
    with_content_type(StatusCode::OK, "text/html; charset=utf-8", body)
}

/// Create a 200 text/plain response
pub fn text(body: impl Into<Bytes>) -> HttpResponse {
    with_content_type(StatusCode::OK, "text/plain; charset=utf-8", body)
}

/// Create a 404 Not Found response
pub fn not_found() -> HttpResponse {
    with_content_type(
        StatusCode::NOT_FOUND,
        "text/plain; charset=utf-8",
        "Not Found",
    )
}

/// Create a 500 response; the detail is logged by the caller, not exposed.
pub fn internal_error() -> HttpResponse {
    with_content_type(
        StatusCode::INTERNAL_SERVER_ERROR,
        "text/plain; charset=utf-8",
        "Internal Server Error",
    )
}
