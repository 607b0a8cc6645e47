//! Form validation framework.
//!
//! Validation is split in two:
//! - total predicates (`not_blank`, `max_runes`, ...) that never fail, only
//!   answer yes or no;
//! - the [`Validate`] trait, implemented once per form, which runs the
//!   predicates in a fixed order and fills the form's own [`Problems`] map.
//!
//! Invalid input is never an error value: a form is invalid exactly when its
//! problem map is non-empty.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Email syntax accepted by the signup and login forms.
///
/// Same shape as the WHATWG `input[type=email]` rule.
pub static EMAIL_RX: LazyLock<FullPattern> = LazyLock::new(|| {
    let pattern = r"[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*";
    FullPattern::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
});

/// A regex that only ever matches a whole string.
///
/// The pattern is wrapped in `\A(?:...)\z` once, at construction, so
/// alternations and lazy quantifiers are judged against the full input rather
/// than against whichever prefix the engine settles on first.
#[derive(Debug, Clone)]
pub struct FullPattern(Regex);

impl FullPattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(&format!(r"\A(?:{pattern})\z")).map(Self)
    }
}

/// True iff the string contains something other than whitespace.
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True iff the string has at most `max` Unicode scalar values.
pub fn max_runes(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

/// True iff the string has at least `n` Unicode scalar values.
pub fn min_chars(value: &str, n: usize) -> bool {
    value.chars().count() >= n
}

/// True iff the whole string matches `pattern`.
pub fn matches(value: &str, pattern: &FullPattern) -> bool {
    pattern.0.is_match(value)
}

/// True iff `value` is one of `permitted`.
pub fn permitted_value<T: PartialEq>(value: &T, permitted: &[T]) -> bool {
    permitted.contains(value)
}

/// Field name → human readable message.
///
/// Keeps at most one message per field: the first failing check wins, which
/// is what lets a form chain "not blank" before "too long" without reporting
/// both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Problems {
    fields: BTreeMap<&'static str, String>,
}

impl Problems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless `ok` holds or the field already
    /// has a problem.
    pub fn check(&mut self, ok: bool, field: &'static str, message: impl Into<String>) {
        if !ok {
            self.add(field, message);
        }
    }

    /// Record `message` for `field` unless the field already has a problem.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// A submitted form that knows how to check itself.
pub trait Validate {
    /// Re-run every check and rebuild the problem map.
    fn validate(&mut self) -> &Problems;

    /// Problems found by the last [`Validate::validate`] call (or added since).
    fn problems(&self) -> &Problems;

    fn is_valid(&self) -> bool {
        self.problems().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_blank_ignores_surrounding_whitespace() {
        assert!(not_blank("x"));
        assert!(not_blank("  x  "));
        assert!(!not_blank(""));
        assert!(!not_blank(" \t\n"));
    }

    #[test]
    fn length_bounds_count_scalars_not_bytes() {
        // 3 scalars, 9 bytes.
        let s = "日本語";
        assert_eq!(s.len(), 9);
        assert!(max_runes(s, 3));
        assert!(!max_runes(s, 2));
        assert!(min_chars(s, 3));
        assert!(!min_chars(s, 4));
    }

    #[test]
    fn email_pattern() {
        assert!(matches("alice@example.com", &EMAIL_RX));
        assert!(matches("a.b+tag@sub.example.co.uk", &EMAIL_RX));
        assert!(!matches("alice", &EMAIL_RX));
        assert!(!matches("alice@", &EMAIL_RX));
        assert!(!matches("@example.com", &EMAIL_RX));
        assert!(!matches("alice@example.com trailing", &EMAIL_RX));
    }

    #[test]
    fn matches_requires_the_whole_string() {
        let digits = FullPattern::new("[0-9]+").unwrap();
        assert!(matches("123", &digits));
        assert!(!matches("a123", &digits));
        assert!(!matches("123a", &digits));
    }

    #[test]
    fn matches_considers_every_alternative() {
        let rx = FullPattern::new("a|ab").unwrap();
        assert!(matches("ab", &rx));
        assert!(matches("a", &rx));
        assert!(!matches("abc", &rx));
    }

    #[test]
    fn matches_extends_lazy_quantifiers_to_the_end() {
        let rx = FullPattern::new("[0-9]+?").unwrap();
        assert!(matches("123", &rx));
        assert!(!matches("", &rx));
    }

    #[test]
    fn permitted_value_membership() {
        assert!(permitted_value(&7, &[1, 7, 365]));
        assert!(!permitted_value(&30, &[1, 7, 365]));
        assert!(permitted_value(&"b", &["a", "b"]));
    }

    #[test]
    fn first_problem_per_field_wins() {
        let mut problems = Problems::new();
        problems.check(false, "title", "blank");
        problems.check(false, "title", "too long");
        problems.check(true, "content", "never recorded");

        assert_eq!(problems.get("title"), Some("blank"));
        assert!(!problems.contains("content"));
        assert_eq!(problems.len(), 1);

        problems.clear();
        assert!(problems.is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the rune bound is independent of byte length.
            #[test]
            fn max_runes_counts_multibyte_scalars(c in "[é日🦀ß]", n in 1usize..64) {
                let exact: String = std::iter::repeat(c.clone()).take(n).collect();
                let over: String = std::iter::repeat(c).take(n + 1).collect();
                prop_assert!(max_runes(&exact, n));
                prop_assert!(!max_runes(&over, n));
            }

            /// Property: whitespace-only strings are always blank.
            #[test]
            fn whitespace_is_blank(s in "[ \t\r\n]{0,16}") {
                prop_assert!(!not_blank(&s));
            }
        }
    }
}
