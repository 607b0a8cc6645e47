use maud::{Markup, html};

use super::components::{base, human_date};
use crate::context::TemplateData;
use crate::render::MissingContext;

pub fn page(data: &TemplateData) -> Result<Markup, MissingContext> {
    let snippets = data.snippet_list();

    Ok(base(
        "Home",
        data,
        html! {
            h2 { "Latest Snippets" }
            @if snippets.is_empty() {
                p { "There's nothing to see here... yet!" }
            } @else {
                table {
                    tr {
                        th { "Title" }
                        th { "Created" }
                        th { "ID" }
                    }
                    @for snippet in snippets {
                        tr {
                            td { a href={ "/snippet/view/" (snippet.id) } { (snippet.title) } }
                            td { (human_date(snippet.created)) }
                            td { "#" (snippet.id) }
                        }
                    }
                }
            }
        },
    ))
}
