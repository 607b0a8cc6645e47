//! Snippet pages: view and create.

use maud::{Markup, html};

use snipbox_core::Validate;
use snipbox_snippets::CreateSnippetForm;

use super::components::{base, field_error, human_date};
use crate::context::{FormView, TemplateData};
use crate::render::MissingContext;

/// Radio choices, in display order.
const EXPIRES_CHOICES: [(i64, &str); 3] = [(365, "One Year"), (7, "One Week"), (1, "One Day")];

pub fn view(data: &TemplateData) -> Result<Markup, MissingContext> {
    let snippet = data.snippet().ok_or(MissingContext("snippet"))?;

    Ok(base(
        &format!("Snippet #{}", snippet.id),
        data,
        html! {
            div.snippet {
                div.metadata {
                    strong { (snippet.title) }
                    span { "#" (snippet.id) }
                }
                pre { code { (snippet.content) } }
                div.metadata {
                    time { "Created: " (human_date(snippet.created)) }
                    time { "Expires: " (human_date(snippet.expires)) }
                }
            }
        },
    ))
}

pub fn create(data: &TemplateData) -> Result<Markup, MissingContext> {
    let form = match &data.form {
        Some(FormView::CreateSnippet(form)) => form,
        _ => return Err(MissingContext("create snippet form")),
    };

    Ok(base("Create a New Snippet", data, create_form(form)))
}

fn create_form(form: &CreateSnippetForm) -> Markup {
    let problems = form.problems();

    html! {
        form action="/snippet/create" method="POST" {
            div {
                label for="title" { "Title:" }
                (field_error(problems, "title"))
                input #title type="text" name="title" value=(form.title);
            }
            div {
                label for="content" { "Content:" }
                (field_error(problems, "content"))
                textarea #content name="content" { (form.content) }
            }
            div {
                label { "Delete in:" }
                (field_error(problems, "expires"))
                @for (days, text) in EXPIRES_CHOICES {
                    input type="radio" name="expires" value=(days) checked[form.expires == days];
                    " " (text) " "
                }
            }
            div {
                input type="submit" value="Publish snippet";
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use snipbox_core::SnippetId;
    use snipbox_snippets::Snippet;

    fn snippet() -> Snippet {
        let created = Utc.with_ymd_and_hms(2026, 3, 4, 9, 30, 0).unwrap();
        Snippet {
            id: SnippetId::new(42),
            title: "An old silent pond".into(),
            content: "<b>frog</b>".into(),
            created,
            expires: created + Duration::days(7),
        }
    }

    #[test]
    fn view_requires_a_snippet() {
        assert_eq!(view(&TemplateData::new()).unwrap_err(), MissingContext("snippet"));
    }

    #[test]
    fn view_escapes_content_and_formats_dates() {
        let page = view(&TemplateData::new().with_snippet(snippet()))
            .unwrap()
            .into_string();
        assert!(page.contains("An old silent pond"));
        assert!(page.contains("&lt;b&gt;frog&lt;/b&gt;"));
        assert!(page.contains("04 Mar 2026 at 09:30"));
        assert!(page.contains("11 Mar 2026 at 09:30"));
    }

    #[test]
    fn create_requires_its_own_form() {
        assert!(create(&TemplateData::new()).is_err());
        let data = TemplateData::new().with_form(snipbox_auth::LoginForm::default());
        assert!(create(&data).is_err());
    }

    #[test]
    fn create_preselects_expiry_and_keeps_input() {
        let mut form = CreateSnippetForm::new("", "keep me", 7);
        form.validate();
        let page = create(&TemplateData::new().with_form(form))
            .unwrap()
            .into_string();

        assert!(page.contains("Title field cannot be blank"));
        assert!(page.contains("keep me"));
        assert!(page.contains(r#"value="7" checked"#));
        assert!(!page.contains(r#"value="365" checked"#));
    }
}
