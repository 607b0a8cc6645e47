//! Signup and login pages. Passwords are never written back into the page.

use maud::{Markup, html};

use snipbox_auth::{LoginForm, SignupForm};
use snipbox_core::Validate;

use super::components::{base, field_error};
use crate::context::{FormView, TemplateData};
use crate::render::MissingContext;

pub fn signup(data: &TemplateData) -> Result<Markup, MissingContext> {
    match &data.form {
        Some(FormView::Signup(form)) => Ok(base("Signup", data, signup_form(form))),
        _ => Err(MissingContext("signup form")),
    }
}

pub fn login(data: &TemplateData) -> Result<Markup, MissingContext> {
    match &data.form {
        Some(FormView::Login(form)) => Ok(base("Login", data, login_form(form))),
        _ => Err(MissingContext("login form")),
    }
}

fn signup_form(form: &SignupForm) -> Markup {
    let problems = form.problems();

    html! {
        form action="/user/signup" method="POST" novalidate {
            div {
                label for="name" { "Name:" }
                (field_error(problems, "name"))
                input #name type="text" name="name" value=(form.name);
            }
            div {
                label for="email" { "Email:" }
                (field_error(problems, "email"))
                input #email type="email" name="email" value=(form.email);
            }
            div {
                label for="password" { "Password:" }
                (field_error(problems, "password"))
                input #password type="password" name="password";
            }
            div {
                input type="submit" value="Signup";
            }
        }
    }
}

fn login_form(form: &LoginForm) -> Markup {
    let problems = form.problems();

    html! {
        form action="/user/login" method="POST" novalidate {
            @if let Some(message) = problems.get(LoginForm::CREDENTIALS) {
                div.error { (message) }
            }
            div {
                label for="email" { "Email:" }
                (field_error(problems, "email"))
                input #email type="email" name="email" value=(form.email);
            }
            div {
                label for="password" { "Password:" }
                (field_error(problems, "password"))
                input #password type="password" name="password";
            }
            div {
                input type="submit" value="Login";
            }
        }
    }
}
