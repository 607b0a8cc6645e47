//! HTTP application wiring.
//!
//! - `services.rs`: store handles (Postgres or in-memory)
//! - `routes/`: handlers, one file per area
//! - `errors.rs`: plain-text error responses

use std::sync::Arc;

use axum::{Extension, Router};

use snipbox_infra::{SnippetStore, UserStore};

use crate::middleware;
use crate::render::{Template, TemplateError, Templates};
use crate::templates;

pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppStores;

/// Every page the handlers render, resolved once at startup.
#[derive(Debug, Clone, Copy)]
pub struct Pages {
    pub home: Template,
    pub view: Template,
    pub create: Template,
    pub signup: Template,
    pub login: Template,
}

impl Pages {
    pub fn resolve(templates: &Templates) -> Result<Self, TemplateError> {
        Ok(Self {
            home: templates.page(templates::HOME)?,
            view: templates.page(templates::VIEW)?,
            create: templates.page(templates::CREATE)?,
            signup: templates.page(templates::SIGNUP)?,
            login: templates.page(templates::LOGIN)?,
        })
    }
}

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub snippets: Arc<dyn SnippetStore>,
    pub users: Arc<dyn UserStore>,
    pub pages: Pages,
}

/// Build the full HTTP router (entrypoint used by `main.rs` and the tests).
///
/// Fails if `templates` lacks a page a handler needs.
pub fn build_app(stores: AppStores, templates: &Templates) -> Result<Router, TemplateError> {
    let state = Arc::new(AppState {
        snippets: stores.snippets,
        users: stores.users,
        pages: Pages::resolve(templates)?,
    });

    let router = routes::router()
        .fallback(errors::fallback)
        .layer(Extension(state));

    Ok(middleware::wrap(router))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_full_registry() {
        assert!(Pages::resolve(&templates::registry()).is_ok());
    }

    #[test]
    fn missing_page_fails_construction() {
        let partial = Templates::new()
            .register(templates::HOME, templates::home::page)
            .register(templates::VIEW, templates::snippet::view);

        let err = build_app(AppStores::in_memory(), &partial).unwrap_err();
        assert_eq!(err.name, templates::CREATE);
        assert_eq!(err.available, vec![templates::HOME, templates::VIEW]);
    }
}
