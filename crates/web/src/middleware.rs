//! Cross-cutting request middleware.
//!
//! Every request passes, outermost first, through panic recovery, request
//! logging and the common response headers before reaching the router.

use std::any::Any;
use std::net::SocketAddr;
use std::panic::AssertUnwindSafe;

use axum::{
    Router,
    extract::{ConnectInfo, Request},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    middleware::{Next, from_fn},
    response::{IntoResponse, Response},
};
use futures_util::FutureExt;

pub const CONTENT_SECURITY_POLICY: &str =
    "default-src 'self'; style-src 'self' fonts.googleapis.com; font-src fonts.gstatic.com";

/// Wrap `router` in the full middleware chain.
pub fn wrap(router: Router) -> Router {
    router
        .layer(from_fn(common_headers))
        .layer(from_fn(log_request))
        .layer(from_fn(recover_panic))
}

/// Turn a panic anywhere below into a logged 500 that closes the connection.
pub async fn recover_panic(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    match AssertUnwindSafe(next.run(req)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            tracing::error!(
                method = %method,
                uri = %uri,
                panic = panic_message(panic.as_ref()),
                "handler panicked"
            );

            let mut response =
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
            let headers = response.headers_mut();
            set_common_headers(headers);
            headers.insert(header::CONNECTION, HeaderValue::from_static("close"));
            response
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    panic
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

/// One info line per request, before it is handled.
pub async fn log_request(req: Request, next: Next) -> Response {
    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());

    tracing::info!(
        ip = %ip,
        proto = ?req.version(),
        method = %req.method(),
        uri = %req.uri(),
        "received request"
    );

    next.run(req).await
}

/// Security headers, present on every response unless a handler overrides one.
pub async fn common_headers(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    set_common_headers(response.headers_mut());
    response
}

/// Fill in the security headers; values a handler already set are kept.
fn set_common_headers(headers: &mut HeaderMap) {
    let defaults = [
        (header::CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY),
        (header::REFERRER_POLICY, "origin-when-cross-origin"),
        (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        (header::X_FRAME_OPTIONS, "deny"),
        (header::X_XSS_PROTECTION, "0"),
    ];

    for (name, value) in defaults {
        headers
            .entry(name)
            .or_insert(HeaderValue::from_static(value));
    }
}
