use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Extension, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;

use snipbox_auth::{LoginForm, SignupForm};
use snipbox_core::Validate;
use snipbox_infra::StoreError;

use super::render_page;
use crate::app::{AppState, errors};
use crate::context::{RequestLine, TemplateData};

pub fn router() -> Router {
    Router::new()
        .route("/signup", get(signup_form).post(signup))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupInput {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginInput {
    email: String,
    password: String,
}

pub async fn signup_form(Extension(state): Extension<Arc<AppState>>, req: RequestLine) -> Response {
    let data = TemplateData::new().with_form(SignupForm::default());
    render_page(&req, &state.pages.signup, StatusCode::OK, &data)
}

pub async fn signup(
    Extension(state): Extension<Arc<AppState>>,
    req: RequestLine,
    input: Result<Form<SignupInput>, FormRejection>,
) -> Response {
    let Ok(Form(input)) = input else {
        return errors::client_error(StatusCode::BAD_REQUEST);
    };

    let mut form = SignupForm::new(input.name, input.email, input.password);
    if form.validate().is_empty() {
        match state.users.insert(&form.name, &form.email, &form.password).await {
            Ok(id) => {
                tracing::info!(user_id = %id, "user signed up");
                return Redirect::to("/user/login").into_response();
            }
            Err(StoreError::DuplicateEmail) => form.reject_duplicate_email(),
            Err(e) => return errors::server_error(&req, &e),
        }
    }

    let data = TemplateData::new().with_form(form);
    render_page(&req, &state.pages.signup, StatusCode::UNPROCESSABLE_ENTITY, &data)
}

pub async fn login_form(Extension(state): Extension<Arc<AppState>>, req: RequestLine) -> Response {
    let data = TemplateData::new().with_form(LoginForm::default());
    render_page(&req, &state.pages.login, StatusCode::OK, &data)
}

pub async fn login(
    Extension(state): Extension<Arc<AppState>>,
    req: RequestLine,
    input: Result<Form<LoginInput>, FormRejection>,
) -> Response {
    let Ok(Form(input)) = input else {
        return errors::client_error(StatusCode::BAD_REQUEST);
    };

    let mut form = LoginForm::new(input.email, input.password);
    if form.validate().is_empty() {
        match state.users.authenticate(&form.email, &form.password).await {
            Ok(id) => {
                tracing::info!(user_id = %id, "user authenticated");
                return Redirect::to("/").into_response();
            }
            Err(StoreError::InvalidCredentials) => form.reject_credentials(),
            Err(e) => return errors::server_error(&req, &e),
        }
    }

    let data = TemplateData::new().with_form(form);
    render_page(&req, &state.pages.login, StatusCode::UNPROCESSABLE_ENTITY, &data)
}

pub async fn logout() -> Redirect {
    Redirect::to("/")
}
