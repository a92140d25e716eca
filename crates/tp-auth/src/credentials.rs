use crate::{AuthError, CredentialError, Result as AuthResult};

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex should not panic")
});

/// Loose shape check: something@something.something, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Length is counted in UTF-16 code units, as browser forms count it.
pub fn is_valid_password(password: &str, min_length: usize) -> bool {
    password.encode_utf16().count() >= min_length
}

/// Checked email/password pair, ready to send to the auth backend.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Raw login form input.
#[derive(Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Every violation in the form, in field order.
    pub fn errors(&self, min_password_length: usize) -> Vec<CredentialError> {
        let mut errors = Vec::new();
        check_email(&self.email, &mut errors);
        check_password(&self.password, min_password_length, &mut errors);
        errors
    }

    pub fn validate(&self, min_password_length: usize) -> AuthResult<Credentials> {
        let errors = self.errors(min_password_length);
        if !errors.is_empty() {
            return Err(AuthError::invalid_input(errors));
        }

        Ok(Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Raw signup form input.
#[derive(Clone, Default)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl SignUpForm {
    /// Every violation in the form, in field order.
    pub fn errors(&self, min_password_length: usize) -> Vec<CredentialError> {
        let mut errors = Vec::new();
        check_email(&self.email, &mut errors);
        check_password(&self.password, min_password_length, &mut errors);

        if self.confirm_password.is_empty() {
            errors.push(CredentialError::ConfirmationRequired);
        } else if self.confirm_password != self.password {
            errors.push(CredentialError::PasswordMismatch);
        }

        if !self.accept_terms {
            errors.push(CredentialError::TermsNotAccepted);
        }

        errors
    }

    pub fn validate(&self, min_password_length: usize) -> AuthResult<Credentials> {
        let errors = self.errors(min_password_length);
        if !errors.is_empty() {
            return Err(AuthError::invalid_input(errors));
        }

        Ok(Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

fn check_email(raw: &str, errors: &mut Vec<CredentialError>) {
    let email = raw.trim();
    if email.is_empty() {
        errors.push(CredentialError::EmailRequired);
    } else if !is_valid_email(email) {
        errors.push(CredentialError::EmailInvalid);
    }
}

fn check_password(password: &str, min_length: usize, errors: &mut Vec<CredentialError>) {
    if password.is_empty() {
        errors.push(CredentialError::PasswordRequired);
    } else if !is_valid_password(password, min_length) {
        errors.push(CredentialError::PasswordTooShort { min_length });
    }
}
