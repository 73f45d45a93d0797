//! Login and registration form validation
//!
//! Validation is independent of any UI toolkit: errors are reported through
//! a [`FieldErrorSink`] that the UI layer implements.

use crate::extractor::is_valid_email;
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_NAME_LEN: usize = 2;
const MIN_PASSWORD_LEN: usize = 8;
const DEFAULT_REDIRECT: &str = "dashboard.php";

/// Input fields of the authentication forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    LoginEmail,
    LoginPassword,
    RegisterFullName,
    RegisterEmail,
    RegisterPassword,
    RegisterPasswordConfirm,
    AgreeTerms,
}

impl Field {
    pub const LOGIN: [Self; 2] = [Self::LoginEmail, Self::LoginPassword];

    pub const REGISTER: [Self; 5] = [
        Self::RegisterFullName,
        Self::RegisterEmail,
        Self::RegisterPassword,
        Self::RegisterPasswordConfirm,
        Self::AgreeTerms,
    ];

    /// Element id of the field in the page markup
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::LoginEmail => "loginEmail",
            Self::LoginPassword => "loginPassword",
            Self::RegisterFullName => "registerFullName",
            Self::RegisterEmail => "registerEmail",
            Self::RegisterPassword => "registerPassword",
            Self::RegisterPasswordConfirm => "registerPasswordConfirm",
            Self::AgreeTerms => "agreeTerms",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Capability the UI layer provides for showing per-field errors
pub trait FieldErrorSink {
    fn show_field_error(&mut self, field: Field, message: &str);
    fn clear_field_error(&mut self, field: Field);
}

/// In-memory sink collecting the currently shown errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(Field, String)>,
}

impl FieldErrors {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl FieldErrorSink for FieldErrors {
    fn show_field_error(&mut self, field: Field, message: &str) {
        self.clear_field_error(field);
        self.errors.push((field, message.to_string()));
    }

    fn clear_field_error(&mut self, field: Field) {
        self.errors.retain(|(f, _)| *f != field);
    }
}

fn check_email(sink: &mut impl FieldErrorSink, field: Field, email: &str) -> bool {
    if email.is_empty() {
        sink.show_field_error(field, "Email is required");
        false
    } else if !is_valid_email(email) {
        sink.show_field_error(field, "Please enter a valid email address");
        false
    } else {
        true
    }
}

/// Values submitted through the login form
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl LoginForm {
    /// Validate every field, reporting each failure to `sink`
    pub fn validate(&self, sink: &mut impl FieldErrorSink) -> bool {
        for field in Field::LOGIN {
            sink.clear_field_error(field);
        }

        let mut valid = check_email(sink, Field::LoginEmail, self.email.trim());

        if self.password.is_empty() {
            sink.show_field_error(Field::LoginPassword, "Password is required");
            valid = false;
        }

        valid
    }

    #[must_use]
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            remember: self.remember,
        }
    }
}

/// Values submitted through the registration form
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub agree_terms: bool,
}

impl RegisterForm {
    /// Validate every field, reporting each failure to `sink`
    pub fn validate(&self, sink: &mut impl FieldErrorSink) -> bool {
        for field in Field::REGISTER {
            sink.clear_field_error(field);
        }

        let mut valid = true;

        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            sink.show_field_error(Field::RegisterFullName, "Full name is required");
            valid = false;
        } else if full_name.chars().count() < MIN_NAME_LEN {
            sink.show_field_error(
                Field::RegisterFullName,
                "Name must be at least 2 characters",
            );
            valid = false;
        }

        valid &= check_email(sink, Field::RegisterEmail, self.email.trim());

        if self.password.is_empty() {
            sink.show_field_error(Field::RegisterPassword, "Password is required");
            valid = false;
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            sink.show_field_error(
                Field::RegisterPassword,
                "Password must be at least 8 characters",
            );
            valid = false;
        }

        if self.password_confirm.is_empty() {
            sink.show_field_error(
                Field::RegisterPasswordConfirm,
                "Please confirm your password",
            );
            valid = false;
        } else if self.password != self.password_confirm {
            sink.show_field_error(Field::RegisterPasswordConfirm, "Passwords do not match");
            valid = false;
        }

        if !self.agree_terms {
            sink.show_field_error(
                Field::AgreeTerms,
                "You must agree to the Terms of Service",
            );
            valid = false;
        }

        valid
    }

    #[must_use]
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

/// Body of a login request to the authentication backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

/// Body of a registration request to the authentication backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Which form a backend response answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    Login,
    Register,
}

/// Response from the authentication backend
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuthResponse {
    pub success: bool,
    pub message: Option<String>,
    pub redirect: Option<String>,
}

/// What the modal should show after a backend response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success { message: String, redirect: String },
    Failure { message: String },
}

impl AuthResponse {
    /// Resolve the alert to show, filling in fallback texts
    #[must_use]
    pub fn outcome(&self, kind: AuthKind) -> AuthOutcome {
        let message = self.message.as_deref().filter(|m| !m.is_empty());

        if self.success {
            let fallback = match kind {
                AuthKind::Login => "Login successful! Redirecting...",
                AuthKind::Register => "Account created successfully! Redirecting...",
            };
            AuthOutcome::Success {
                message: message.unwrap_or(fallback).to_string(),
                redirect: self
                    .redirect
                    .as_deref()
                    .filter(|r| !r.is_empty())
                    .unwrap_or(DEFAULT_REDIRECT)
                    .to_string(),
            }
        } else {
            let fallback = match kind {
                AuthKind::Login => "Login failed. Please try again.",
                AuthKind::Register => "Registration failed. Please try again.",
            };
            AuthOutcome::Failure {
                message: message.unwrap_or(fallback).to_string(),
            }
        }
    }
}

/// Cosmetic password strength shown under the registration field
///
/// This is a display hint only and carries no security weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// `None` for an empty password, which hides the indicator
    #[must_use]
    pub fn of(password: &str) -> Option<Self> {
        if password.is_empty() {
            return None;
        }

        let score = Self::score(password);
        Some(match score {
            0..=2 => Self::Weak,
            3..=4 => Self::Medium,
            _ => Self::Strong,
        })
    }

    /// One point per satisfied criterion, 0 to 6
    #[must_use]
    pub fn score(password: &str) -> u8 {
        let len = password.chars().count();
        let criteria = [
            len >= 8,
            len >= 12,
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ];
        criteria.iter().map(|&met| u8::from(met)).sum()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak password",
            Self::Medium => "Medium strength",
            Self::Strong => "Strong password",
        }
    }
}
