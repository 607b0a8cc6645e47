//! Shared layout and partials.

use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, html};

use snipbox_core::Problems;

use crate::context::TemplateData;

/// The `base` layout every page renders into.
pub fn base(title: &str, data: &TemplateData, main: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Snipbox" }
            }
            body {
                header {
                    h1 { a href="/" { "Snipbox" } }
                }
                (nav())
                main { (main) }
                footer {
                    "Powered by " a href="https://www.rust-lang.org/" { "Rust" } " in " (data.current_year)
                }
            }
        }
    }
}

/// The `nav` partial.
pub fn nav() -> Markup {
    html! {
        nav {
            div {
                a href="/" { "Home" }
                " "
                a href="/snippet/create" { "Create snippet" }
            }
            div {
                a href="/user/signup" { "Signup" }
                " "
                a href="/user/login" { "Login" }
                " "
                a href="/user/logout" { "Logout" }
            }
        }
    }
}

/// Inline message for a field, if it has a problem.
pub fn field_error(problems: &Problems, field: &str) -> Markup {
    html! {
        @if let Some(message) = problems.get(field) {
            label.error { (message) }
        }
    }
}

/// `02 Jan 2026 at 15:04`, in UTC.
pub fn human_date(t: DateTime<Utc>) -> String {
    t.format("%d %b %Y at %H:%M").to_string()
}
