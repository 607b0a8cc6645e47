use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Extension, Path, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;

use snipbox_core::{SnippetId, Validate};
use snipbox_infra::StoreError;
use snipbox_snippets::CreateSnippetForm;

use super::render_page;
use crate::app::{AppState, errors};
use crate::context::{RequestLine, TemplateData};

pub fn router() -> Router {
    Router::new()
        .route("/view/:id", get(view))
        .route("/create", get(create_form).post(create))
}

#[derive(Debug, Deserialize)]
pub struct CreateSnippetInput {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    expires: i64,
}

pub async fn home(Extension(state): Extension<Arc<AppState>>, req: RequestLine) -> Response {
    let snippets = match state.snippets.latest().await {
        Ok(snippets) => snippets,
        Err(e) => return errors::server_error(&req, &e),
    };

    let data = TemplateData::new().with_snippets(snippets);
    render_page(&req, &state.pages.home, StatusCode::OK, &data)
}

pub async fn view(
    Extension(state): Extension<Arc<AppState>>,
    req: RequestLine,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<SnippetId>() else {
        return errors::not_found();
    };

    match state.snippets.get(id).await {
        Ok(snippet) => {
            let data = TemplateData::new().with_snippet(snippet);
            render_page(&req, &state.pages.view, StatusCode::OK, &data)
        }
        Err(StoreError::NoRecord) => errors::not_found(),
        Err(e) => errors::server_error(&req, &e),
    }
}

pub async fn create_form(Extension(state): Extension<Arc<AppState>>, req: RequestLine) -> Response {
    let data = TemplateData::new().with_form(CreateSnippetForm::default());
    render_page(&req, &state.pages.create, StatusCode::OK, &data)
}

pub async fn create(
    Extension(state): Extension<Arc<AppState>>,
    req: RequestLine,
    input: Result<Form<CreateSnippetInput>, FormRejection>,
) -> Response {
    let Ok(Form(input)) = input else {
        return errors::client_error(StatusCode::BAD_REQUEST);
    };

    let mut form = CreateSnippetForm::new(input.title, input.content, input.expires);
    if !form.validate().is_empty() {
        let data = TemplateData::new().with_form(form);
        return render_page(&req, &state.pages.create, StatusCode::UNPROCESSABLE_ENTITY, &data);
    }

    let days = match i32::try_from(form.expires) {
        Ok(days) => days,
        Err(e) => return errors::server_error(&req, &e),
    };

    match state
        .snippets
        .insert(&form.title, &form.content, days)
        .await
    {
        Ok(id) => Redirect::to(&format!("/snippet/view/{id}")).into_response(),
        Err(e) => errors::server_error(&req, &e),
    }
}
