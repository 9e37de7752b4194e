//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::constants::{EMAIL_MAX_LENGTH, ROLE_USER};
use crate::error::DomainResult;
use crate::password::Password;
use crate::validation::{Action, ValidationError};

/// User domain entity.
///
/// `password` holds plaintext only between deserialization and
/// `hash_password`; it is never serialized.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_role() -> String {
    ROLE_USER.to_string()
}

fn default_active() -> bool {
    true
}

impl Default for User {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            role: default_role(),
            photo: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

// Don't expose the password in debug output
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .field("photo", &self.photo)
            .field("active", &self.active)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

impl User {
    /// Create a new active user with the default role
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Normalize before insert.
    ///
    /// Clears `id` so the store assigns a fresh one, trims and HTML-escapes
    /// `email`, and stamps both timestamps with the same instant.
    pub fn prepare(&mut self) {
        self.id = 0;
        self.email = escape_html(self.email.trim());
        let now = Utc::now();
        self.created_at = now;
        self.updated_at = now;
    }

    /// Check the credential fields, reporting only the first failing rule.
    ///
    /// Rules, in order: password present, email present, email well formed,
    /// email fits its column once escaped.
    // NOTE: all actions share one rule set; per-action rules are undecided.
    pub fn validate(&self, action: Action) -> Result<(), ValidationError> {
        match action {
            Action::Create | Action::Update | Action::Login | Action::Other => {
                self.validate_credentials()
            }
        }
    }

    fn validate_credentials(&self) -> Result<(), ValidationError> {
        if self.password.is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        if self.email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !self.email.validate_email() {
            return Err(ValidationError::InvalidEmail);
        }
        if self.email.chars().count() > EMAIL_MAX_LENGTH as usize {
            return Err(ValidationError::EmailTooLong);
        }
        Ok(())
    }

    /// Role to store: blank roles fall back to `ROLE_USER`.
    pub fn role_or_default(&self) -> String {
        let role = self.role.trim();
        if role.is_empty() {
            default_role()
        } else {
            role.to_string()
        }
    }

    /// Replace the plaintext password with its hash (pre-save step).
    pub fn hash_password(&mut self) -> DomainResult<()> {
        self.password = Password::new(&self.password)?.into_string();
        Ok(())
    }

    /// Compare a plaintext password with the stored hash.
    pub fn verify_password(&self, plain_text: &str) -> DomainResult<()> {
        Password::from_hash(self.password.clone()).verify(plain_text)
    }
}

/// Escape the characters significant in HTML markup.
fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&#39;"),
            '"' => escaped.push_str("&#34;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Store-assigned identifier
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    /// Photo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role,
            photo: user.photo,
            active: user.active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> User {
        User::new("Ada", "Lovelace", "ada@example.com", "secret123")
    }

    #[test]
    fn test_new_user_defaults() {
        let user = valid_user();

        assert_eq!(user.id, 0);
        assert_eq!(user.role, ROLE_USER);
        assert!(user.active);
        assert!(user.photo.is_none());
    }

    #[test]
    fn test_prepare_normalizes() {
        let mut user = valid_user();
        user.id = 42;
        user.email = "  <b>ada</b>&co@example.com \n".to_string();

        user.prepare();

        assert_eq!(user.id, 0);
        assert_eq!(user.email, "&lt;b&gt;ada&lt;/b&gt;&amp;co@example.com");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_prepare_leaves_no_markup_or_padding() {
        for raw in ["x@y.z", " a'b\"c@d.e ", "\t<>&\t", ""] {
            let mut user = valid_user();
            user.email = raw.to_string();
            user.prepare();

            assert_eq!(user.email, user.email.trim());
            assert!(!user.email.contains('<'));
            assert!(!user.email.contains('>'));
            assert!(!user.email.contains('\''));
            assert!(!user.email.contains('"'));
            // Every remaining ampersand starts an entity
            let without_entities = user
                .email
                .replace("&amp;", "")
                .replace("&lt;", "")
                .replace("&gt;", "")
                .replace("&#39;", "")
                .replace("&#34;", "");
            assert!(!without_entities.contains('&'));
        }
    }

    #[test]
    fn test_prepare_restamps_timestamps() {
        let mut user = valid_user();
        let before = Utc::now();
        user.prepare();

        assert!(user.created_at >= before);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_validate_accepts_valid_user() {
        let user = valid_user();
        for action in [Action::Create, Action::Update, Action::Login, Action::Other] {
            assert_eq!(user.validate(action), Ok(()));
        }
    }

    #[test]
    fn test_validate_missing_password_for_every_action() {
        let mut user = valid_user();
        user.password.clear();

        for action in [Action::Create, Action::Update, Action::Login, Action::Other] {
            let err = user.validate(action).unwrap_err();
            assert_eq!(err, ValidationError::MissingPassword);
            assert_eq!(err.field(), "password");
        }
    }

    #[test]
    fn test_validate_missing_email() {
        let mut user = valid_user();
        user.email.clear();

        let err = user.validate(Action::Create).unwrap_err();
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn test_validate_malformed_email() {
        let mut user = valid_user();
        user.email = "not-an-email".to_string();

        let err = user.validate(Action::from("update")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
        assert_eq!(err.field(), "email-format");
    }

    #[test]
    fn test_validate_reports_password_before_email() {
        let user = User::default();
        assert_eq!(
            user.validate(Action::Login),
            Err(ValidationError::MissingPassword)
        );
    }

    #[test]
    fn test_validate_rejects_email_longer_than_column() {
        let mut user = valid_user();
        user.email = format!("{}@{}.example.com", "a".repeat(60), "b".repeat(40));
        assert!(user.email.len() > EMAIL_MAX_LENGTH as usize);

        let err = user.validate(Action::Create).unwrap_err();
        assert_eq!(err, ValidationError::EmailTooLong);
        assert_eq!(err.field(), "email-length");
    }

    #[test]
    fn test_escaping_never_yields_a_valid_email() {
        let mut user = valid_user();
        user.email = "a&b@example.com".to_string();
        user.prepare();

        assert_eq!(user.email, "a&amp;b@example.com");
        assert_eq!(
            user.validate(Action::Create),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_role_or_default() {
        let mut user = valid_user();
        assert_eq!(user.role_or_default(), ROLE_USER);

        user.role = "  ".to_string();
        assert_eq!(user.role_or_default(), ROLE_USER);

        user.role = String::new();
        assert_eq!(user.role_or_default(), ROLE_USER);

        user.role = "staff".to_string();
        assert_eq!(user.role_or_default(), "staff");
    }

    #[test]
    fn test_hash_password_replaces_plaintext() {
        let mut user = valid_user();
        user.hash_password().unwrap();

        assert_ne!(user.password, "secret123");
        assert!(user.verify_password("secret123").is_ok());
        assert!(user.verify_password("secret").is_err());
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let user: User = serde_json::from_str(
            r#"{"firstName":"Ada","email":"ada@example.com","password":"secret123"}"#,
        )
        .unwrap();

        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.role, ROLE_USER);
        assert!(user.active);
        assert_eq!(user.password, "secret123");
    }

    #[test]
    fn test_serialize_omits_password() {
        let json = serde_json::to_value(valid_user()).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["firstName"], "Ada");
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", valid_user());
        assert!(!debug.contains("secret123"));
    }

    #[test]
    fn test_user_response_from_user() {
        let response = UserResponse::from(valid_user());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(response.email, "ada@example.com");
        assert!(json.get("password").is_none());
        assert!(json.get("photo").is_none());
    }
}
