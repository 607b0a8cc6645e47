use axum::{Router, http::StatusCode, response::Response, routing::get};

use crate::app::errors;
use crate::context::{RequestLine, TemplateData};
use crate::render::{Template, render};

pub mod snippets;
pub mod users;

pub fn router() -> Router {
    Router::new()
        .route("/", get(snippets::home))
        .nest("/snippet", snippets::router())
        .nest("/user", users::router())
}

/// Render `page`, turning an execution fault into a logged 500.
pub(crate) fn render_page(
    req: &RequestLine,
    page: &Template,
    status: StatusCode,
    data: &TemplateData,
) -> Response {
    render(page, status, data).unwrap_or_else(|err| errors::server_error(req, &err))
}
