//! Template registry and buffered rendering.
//!
//! A page is a plain function from [`TemplateData`] to markup. The registry
//! maps page names to those functions and is built once at startup; handlers
//! receive already-resolved [`Template`]s, so an unknown name can only fail
//! while the application is being assembled.

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use maud::Markup;
use thiserror::Error;

use crate::context::TemplateData;

/// A page was executed without a piece of data it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingContext(pub &'static str);

pub type PageFn = fn(&TemplateData) -> Result<Markup, MissingContext>;

/// Lookup failure. A configuration fault, raised only at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no template found for {name:?}, available {available:?}")]
pub struct TemplateError {
    pub name: String,
    pub available: Vec<&'static str>,
}

/// Template execution failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("template {template:?}: template data has no {what}")]
    MissingContext {
        template: &'static str,
        what: &'static str,
    },
}

/// A resolved, named page.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    name: &'static str,
    page: PageFn,
}

impl Template {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Execute the page into an in-memory buffer.
    pub fn execute(&self, data: &TemplateData) -> Result<String, RenderError> {
        (self.page)(data)
            .map(Markup::into_string)
            .map_err(|MissingContext(what)| RenderError::MissingContext {
                template: self.name,
                what,
            })
    }
}

/// Immutable name → page registry.
#[derive(Debug, Clone, Default)]
pub struct Templates {
    pages: HashMap<&'static str, Template>,
}

impl Templates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, name: &'static str, page: PageFn) -> Self {
        self.pages.insert(name, Template { name, page });
        self
    }

    pub fn page(&self, name: &str) -> Result<Template, TemplateError> {
        self.pages.get(name).copied().ok_or_else(|| TemplateError {
            name: name.to_string(),
            available: self.names(),
        })
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.pages.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// Render `template` and only then build the response.
///
/// Nothing (not even the status line) is produced unless the whole page
/// rendered, so a failing template can still be answered with a clean 500.
pub fn render(
    template: &Template,
    status: StatusCode,
    data: &TemplateData,
) -> Result<Response, RenderError> {
    let body = template.execute(data)?;
    Ok((status, Html(body)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::html;

    fn hello(data: &TemplateData) -> Result<Markup, MissingContext> {
        Ok(html! { p { "hello " (data.current_year) } })
    }

    fn needs_form(data: &TemplateData) -> Result<Markup, MissingContext> {
        data.form
            .as_ref()
            .map(|_| html! { form {} })
            .ok_or(MissingContext("form"))
    }

    #[test]
    fn renders_registered_page_with_status() {
        let templates = Templates::new().register("hello", hello);
        let page = templates.page("hello").unwrap();

        let response = render(&page, StatusCode::UNPROCESSABLE_ENTITY, &TemplateData::new()).unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(
            response.headers()[axum::http::header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
    }

    #[test]
    fn lookup_miss_lists_available_pages() {
        let templates = Templates::new().register("b", hello).register("a", hello);
        let err = templates.page("missing").unwrap_err();
        assert_eq!(err.name, "missing");
        assert_eq!(err.available, vec!["a", "b"]);
    }

    #[test]
    fn execution_fault_produces_no_response() {
        let templates = Templates::new().register("form-page", needs_form);
        let page = templates.page("form-page").unwrap();

        let err = render(&page, StatusCode::OK, &TemplateData::new()).unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingContext {
                template: "form-page",
                what: "form"
            }
        );
    }
}
