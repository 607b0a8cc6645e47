use std::convert::Infallible;

use axum::extract::{FromRequestParts, OriginalUri};
use axum::http::request::Parts;
use axum::http::{Method, Uri};
use chrono::{Datelike, Utc};

use snipbox_auth::{LoginForm, SignupForm};
use snipbox_snippets::{CreateSnippetForm, Snippet};

/// Method and URI of the request being handled, for error logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    pub uri: Uri,
}

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequestLine {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map(|OriginalUri(uri)| uri.clone())
            .unwrap_or_else(|| parts.uri.clone());

        Ok(Self {
            method: parts.method.clone(),
            uri,
        })
    }
}

/// Snippet payload of a page: nothing, one snippet, or a list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SnippetData {
    #[default]
    None,
    Single(Snippet),
    List(Vec<Snippet>),
}

/// A form to (re-)render, with whatever problems it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormView {
    CreateSnippet(CreateSnippetForm),
    Signup(SignupForm),
    Login(LoginForm),
}

impl From<CreateSnippetForm> for FormView {
    fn from(form: CreateSnippetForm) -> Self {
        Self::CreateSnippet(form)
    }
}

impl From<SignupForm> for FormView {
    fn from(form: SignupForm) -> Self {
        Self::Signup(form)
    }
}

impl From<LoginForm> for FormView {
    fn from(form: LoginForm) -> Self {
        Self::Login(form)
    }
}

/// Everything a page template can read.
///
/// Built fresh per request by the handler and consumed by one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateData {
    pub current_year: i32,
    pub snippets: SnippetData,
    pub form: Option<FormView>,
}

impl TemplateData {
    pub fn new() -> Self {
        Self {
            current_year: Utc::now().year(),
            snippets: SnippetData::None,
            form: None,
        }
    }

    pub fn with_snippet(mut self, snippet: Snippet) -> Self {
        self.snippets = SnippetData::Single(snippet);
        self
    }

    pub fn with_snippets(mut self, snippets: Vec<Snippet>) -> Self {
        self.snippets = SnippetData::List(snippets);
        self
    }

    pub fn with_form(mut self, form: impl Into<FormView>) -> Self {
        self.form = Some(form.into());
        self
    }

    pub fn snippet(&self) -> Option<&Snippet> {
        match &self.snippets {
            SnippetData::Single(s) => Some(s),
            _ => None,
        }
    }

    /// The snippet list; empty unless a list was attached.
    pub fn snippet_list(&self) -> &[Snippet] {
        match &self.snippets {
            SnippetData::List(list) => list,
            _ => &[],
        }
    }
}

impl Default for TemplateData {
    fn default() -> Self {
        Self::new()
    }
}
