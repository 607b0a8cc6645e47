use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use snipbox_core::SnippetId;

/// A persisted, time-bounded piece of text.
///
/// # Invariants
/// - `expires > created`.
/// - Never updated after insert; visibility is purely a function of time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: SnippetId,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub expires: DateTime<Utc>,
}

impl Snippet {
    /// A snippet is visible while `now < expires`.
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires
    }
}
