use crate::{AuthSession, AuthUser};

/// What the backend did with a signup.
#[derive(Debug, Clone)]
pub enum SignUpOutcome {
    /// Auto-confirmed: a session came back with the user.
    SignedIn(AuthSession),
    /// The account exists but the email address must be confirmed first.
    ConfirmationRequired(AuthUser),
}

impl SignUpOutcome {
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            SignUpOutcome::SignedIn(session) => session.user.as_ref(),
            SignUpOutcome::ConfirmationRequired(user) => Some(user),
        }
    }
}
