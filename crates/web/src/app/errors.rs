//! Plain-text error responses.
//!
//! Client errors are answered with the status' canonical reason and are not
//! logged. Server errors are logged once, here, with the request line and the
//! full error chain, and answered with a generic 500.

use std::error::Error;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::context::RequestLine;

pub fn server_error(req: &RequestLine, err: &(dyn Error + 'static)) -> Response {
    tracing::error!(
        method = %req.method,
        uri = %req.uri,
        error = %ErrorChain(err),
        "request failed"
    );
    client_error(StatusCode::INTERNAL_SERVER_ERROR)
}

pub fn client_error(status: StatusCode) -> Response {
    (status, status.canonical_reason().unwrap_or("Error")).into_response()
}

pub fn not_found() -> Response {
    client_error(StatusCode::NOT_FOUND)
}

/// Router fallback for unmatched paths.
pub async fn fallback() -> Response {
    not_found()
}

/// `outer: inner: root` rendering of an error and its sources.
struct ErrorChain<'a>(&'a (dyn Error + 'static));

impl core::fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(err) = source {
            write!(f, ": {err}")?;
            source = err.source();
        }
        Ok(())
    }
}
