use std::fmt;

use thiserror::Error;

/// Form field a [`CredentialError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialField {
    Email,
    Password,
    ConfirmPassword,
    Terms,
}

impl CredentialField {
    pub fn as_str(self) -> &'static str {
        match self {
            CredentialField::Email => "email",
            CredentialField::Password => "password",
            CredentialField::ConfirmPassword => "confirm_password",
            CredentialField::Terms => "terms",
        }
    }
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single login/signup form violation. The messages are user-facing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Password is required")]
    PasswordRequired,

    #[error("Password must be at least {min_length} characters")]
    PasswordTooShort { min_length: usize },

    #[error("Please confirm your password")]
    ConfirmationRequired,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please accept the Terms & Conditions")]
    TermsNotAccepted,
}

impl CredentialError {
    pub fn field(&self) -> CredentialField {
        match self {
            Self::EmailRequired | Self::EmailInvalid => CredentialField::Email,
            Self::PasswordRequired | Self::PasswordTooShort { .. } => CredentialField::Password,
            Self::ConfirmationRequired | Self::PasswordMismatch => {
                CredentialField::ConfirmPassword
            }
            Self::TermsNotAccepted => CredentialField::Terms,
        }
    }
}
