//! Signup and login forms.

use snipbox_core::validator::{EMAIL_RX, matches, min_chars, not_blank};
use snipbox_core::{Problems, Validate};

pub const PASSWORD_MIN_CHARS: usize = 8;

/// Submitted fields of the signup form.
///
/// The password is kept only for the duration of the request and is never
/// echoed back when the form is re-rendered.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    problems: Problems,
}

impl SignupForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            problems: Problems::new(),
        }
    }

    /// Flag the email as already registered (a storage-level conflict found
    /// after validation passed).
    pub fn reject_duplicate_email(&mut self) {
        self.problems.add("email", "Email address is already in use");
    }
}

impl Validate for SignupForm {
    fn validate(&mut self) -> &Problems {
        let p = &mut self.problems;
        p.clear();

        p.check(not_blank(&self.name), "name", "Name field cannot be blank");

        p.check(not_blank(&self.email), "email", "Email field cannot be blank");
        p.check(
            matches(&self.email, &EMAIL_RX),
            "email",
            "Email field must be a valid email address",
        );

        p.check(not_blank(&self.password), "password", "Password field cannot be blank");
        p.check(
            min_chars(&self.password, PASSWORD_MIN_CHARS),
            "password",
            format!("Password must be at least {PASSWORD_MIN_CHARS} characters long"),
        );

        &self.problems
    }

    fn problems(&self) -> &Problems {
        &self.problems
    }
}

impl core::fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SignupForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("problems", &self.problems)
            .finish_non_exhaustive()
    }
}

/// Submitted fields of the login form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    problems: Problems,
}

impl LoginForm {
    /// Problem key for failures that are not tied to a single field.
    pub const CREDENTIALS: &'static str = "credentials";

    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            problems: Problems::new(),
        }
    }

    /// Record a failed credential check without saying which half was wrong.
    pub fn reject_credentials(&mut self) {
        self.problems.add(Self::CREDENTIALS, "Email or password is incorrect");
    }
}

impl Validate for LoginForm {
    fn validate(&mut self) -> &Problems {
        let p = &mut self.problems;
        p.clear();

        p.check(not_blank(&self.email), "email", "Email field cannot be blank");
        p.check(
            matches(&self.email, &EMAIL_RX),
            "email",
            "Email field must be a valid email address",
        );
        p.check(not_blank(&self.password), "password", "Password field cannot be blank");

        &self.problems
    }

    fn problems(&self) -> &Problems {
        &self.problems
    }
}

impl core::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("problems", &self.problems)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_signup() {
        let mut form = SignupForm::new("Alice", "alice@example.com", "pa55word");
        assert!(form.validate().is_empty());
    }

    #[test]
    fn signup_reports_one_problem_per_field() {
        let mut form = SignupForm::new(" ", "", "");
        let problems = form.validate();
        assert_eq!(problems.get("name"), Some("Name field cannot be blank"));
        assert_eq!(problems.get("email"), Some("Email field cannot be blank"));
        assert_eq!(problems.get("password"), Some("Password field cannot be blank"));
        assert_eq!(problems.len(), 3);
    }

    #[test]
    fn signup_checks_email_format_and_password_length() {
        let mut form = SignupForm::new("Bob", "bob-at-example", "short");
        let problems = form.validate();
        assert_eq!(
            problems.get("email"),
            Some("Email field must be a valid email address")
        );
        assert_eq!(
            problems.get("password"),
            Some("Password must be at least 8 characters long")
        );
    }

    #[test]
    fn password_length_counts_characters() {
        // 8 scalars, 16 bytes.
        let mut form = SignupForm::new("Bob", "bob@example.com", "ääääääää");
        assert!(form.validate().is_empty());
    }

    #[test]
    fn duplicate_email_is_a_field_problem() {
        let mut form = SignupForm::new("Bob", "bob@example.com", "pa55word");
        assert!(form.validate().is_empty());
        form.reject_duplicate_email();
        assert_eq!(form.problems().get("email"), Some("Email address is already in use"));
        assert!(!form.is_valid());
    }

    #[test]
    fn debug_hides_password() {
        let form = SignupForm::new("Bob", "bob@example.com", "hunter2hunter2");
        assert!(!format!("{form:?}").contains("hunter2"));
        let form = LoginForm::new("bob@example.com", "hunter2hunter2");
        assert!(!format!("{form:?}").contains("hunter2"));
    }

    #[test]
    fn login_requires_both_fields() {
        let mut form = LoginForm::new("", "");
        let problems = form.validate();
        assert!(problems.contains("email"));
        assert!(problems.contains("password"));

        let mut form = LoginForm::new("bob@example.com", "anything");
        assert!(form.validate().is_empty());
        form.reject_credentials();
        assert_eq!(
            form.problems().get(LoginForm::CREDENTIALS),
            Some("Email or password is incorrect")
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: an address without '@' never passes the email check.
            #[test]
            fn email_without_at_sign_is_rejected(email in "[a-z0-9.]{1,40}") {
                let mut form = SignupForm::new("Name", email, "pa55word!");
                prop_assert!(form.validate().contains("email"));
            }

            /// Property: passwords shorter than the minimum are always reported.
            #[test]
            fn short_password_is_rejected(password in "[a-zA-Z0-9]{1,7}") {
                let mut form = SignupForm::new("Name", "name@example.com", password);
                prop_assert_eq!(
                    form.validate().get("password"),
                    Some("Password must be at least 8 characters long")
                );
            }
        }
    }
}
