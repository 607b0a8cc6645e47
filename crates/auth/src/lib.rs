//! `snipbox-auth`: user identity primitives.
//!
//! The user record, the signup and login forms, and password hashing. No HTTP,
//! storage or session handling.

pub mod forms;
pub mod password;
pub mod user;

pub use forms::{LoginForm, SignupForm, PASSWORD_MIN_CHARS};
pub use password::{PasswordError, PasswordHash};
pub use user::User;
