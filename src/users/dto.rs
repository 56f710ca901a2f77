use serde::Deserialize;

/// Form body posted by the registration page.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
}
