//! Create-snippet form.

use snipbox_core::validator::{max_runes, not_blank, permitted_value};
use snipbox_core::{Problems, Validate};

/// Validity windows (in days) a snippet may be created with.
pub const PERMITTED_EXPIRES_DAYS: [i64; 3] = [1, 7, 365];

/// Window preselected on an empty form.
pub const DEFAULT_EXPIRES_DAYS: i64 = 365;

pub const TITLE_MAX_RUNES: usize = 100;

/// Submitted fields of the create-snippet form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSnippetForm {
    pub title: String,
    pub content: String,
    pub expires: i64,
    problems: Problems,
}

impl CreateSnippetForm {
    pub fn new(title: impl Into<String>, content: impl Into<String>, expires: i64) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            expires,
            problems: Problems::new(),
        }
    }
}

impl Default for CreateSnippetForm {
    fn default() -> Self {
        Self::new("", "", DEFAULT_EXPIRES_DAYS)
    }
}

impl Validate for CreateSnippetForm {
    fn validate(&mut self) -> &Problems {
        let p = &mut self.problems;
        p.clear();

        p.check(not_blank(&self.title), "title", "Title field cannot be blank");
        p.check(
            max_runes(&self.title, TITLE_MAX_RUNES),
            "title",
            format!("Title field cannot be more than {TITLE_MAX_RUNES} characters long"),
        );

        p.check(not_blank(&self.content), "content", "Content field cannot be blank");

        p.check(
            permitted_value(&self.expires, &PERMITTED_EXPIRES_DAYS),
            "expires",
            "Expires field must equal 1, 7 or 365",
        );

        &self.problems
    }

    fn problems(&self) -> &Problems {
        &self.problems
    }
}
