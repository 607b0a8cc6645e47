//! HTML pages.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/); every dynamic value is
//! escaped. Pages share the `base` layout and `nav` partial in
//! [`components`].

pub mod components;
pub mod home;
pub mod snippet;
pub mod user;

use crate::render::Templates;

pub const HOME: &str = "home.html";
pub const VIEW: &str = "view.html";
pub const CREATE: &str = "create.html";
pub const SIGNUP: &str = "signup.html";
pub const LOGIN: &str = "login.html";

/// The registry used by the service.
pub fn registry() -> Templates {
    Templates::new()
        .register(HOME, home::page)
        .register(VIEW, snippet::view)
        .register(CREATE, snippet::create)
        .register(SIGNUP, user::signup)
        .register(LOGIN, user::login)
}
