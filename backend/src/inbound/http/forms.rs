//! Form payloads and the form part of page contexts.
//!
//! Submitted forms are URL-encoded. Missing fields deserialise as empty
//! strings so that validation, not the extractor, reports them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    Error, LoginValidationError, REQUIRED_FIELD, RegistrationValidationError, USERNAME_MAX,
    UserValidationError,
};

/// Non-field error shown when login fails.
pub const INVALID_LOGIN: &str = "Пожалуйста, введите правильные имя пользователя и пароль. \
     Оба поля могут быть чувствительны к регистру.";
/// Field error for a taken username.
pub const USERNAME_TAKEN: &str = "Пользователь с таким именем уже существует.";
/// Field error for mismatched passwords.
pub const PASSWORD_MISMATCH: &str = "Введенные пароли не совпадают.";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommentForm {
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub username: String,
    pub password1: String,
    pub password2: String,
}

/// Query string accepted by the login page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NextQuery {
    pub next: Option<String>,
}

/// Form state rendered into a page: initial values and validation errors.
///
/// Passwords are never echoed back in `initial`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormContext {
    pub initial: BTreeMap<String, String>,
    pub errors: BTreeMap<String, Vec<String>>,
    pub non_field_errors: Vec<String>,
}

impl FormContext {
    /// An unbound form.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_initial(mut self, field: &str, value: impl Into<String>) -> Self {
        self.initial.insert(field.to_owned(), value.into());
        self
    }

    pub fn with_field_error(mut self, field: &str, message: impl Into<String>) -> Self {
        self.errors
            .entry(field.to_owned())
            .or_default()
            .push(message.into());
        self
    }

    pub fn with_non_field_error(mut self, message: impl Into<String>) -> Self {
        self.non_field_errors.push(message.into());
        self
    }

    /// Attach a domain validation error to the field it names in its details,
    /// or to the form as a whole when it names none.
    pub fn with_error(self, error: &Error) -> Self {
        match error.field() {
            Some(field) => {
                let field = field.to_owned();
                self.with_field_error(&field, error.message())
            }
            None => self.with_non_field_error(error.message()),
        }
    }
}

/// Field and message for a malformed login submission.
pub fn login_error(error: &LoginValidationError) -> (&'static str, &'static str) {
    match error {
        LoginValidationError::EmptyUsername => ("username", REQUIRED_FIELD),
        LoginValidationError::EmptyPassword => ("password", REQUIRED_FIELD),
    }
}

/// Field and message for a rejected sign-up submission.
pub fn registration_error(error: &RegistrationValidationError) -> (&'static str, String) {
    let message = match error {
        RegistrationValidationError::Username(UserValidationError::EmptyUsername)
        | RegistrationValidationError::EmptyPassword => REQUIRED_FIELD.to_owned(),
        RegistrationValidationError::Username(UserValidationError::UsernameTooLong { .. }) => {
            format!("Убедитесь, что это значение содержит не более {USERNAME_MAX} символов.")
        }
        RegistrationValidationError::Username(_) => {
            "Введите правильное имя пользователя. Оно может содержать только буквы, \
             цифры и знаки @/./+/-/_."
                .to_owned()
        }
        RegistrationValidationError::PasswordMismatch => PASSWORD_MISMATCH.to_owned(),
    };
    (error.field(), message)
}
