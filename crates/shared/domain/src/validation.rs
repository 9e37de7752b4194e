//! Validation actions and failures for the `User` entity.

use thiserror::Error;

/// Operation a `User` is being validated for.
///
/// Every action currently enforces the same rule set; see `User::validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Login,
    Other,
}

impl From<&str> for Action {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "create" => Action::Create,
            "update" => Action::Update,
            "login" => Action::Login,
            _ => Action::Other,
        }
    }
}

/// First rule a `User` failed during validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Password is required")]
    MissingPassword,

    #[error("Email is required")]
    MissingEmail,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Email is too long")]
    EmailTooLong,
}

impl ValidationError {
    /// Stable key naming the rule that failed.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingPassword => "password",
            ValidationError::MissingEmail => "email",
            ValidationError::InvalidEmail => "email-format",
            ValidationError::EmailTooLong => "email-length",
        }
    }
}
