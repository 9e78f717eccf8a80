//! Authentication domain types for the login/signup modal.

use serde::{Deserialize, Serialize};

/// Which half of the auth modal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    /// Anything other than `login` opens the signup tab.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("login") {
            Self::Login
        } else {
            Self::Signup
        }
    }
}

/// Credentials posted form-encoded to `/login`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// JSON reply from `/login`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginReply {
    #[serde(default)]
    pub error: Option<String>,
}

/// How a login attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Server accepted the credentials; reload to pick up the session.
    Reload,
    /// Server redirected (legacy HTML flow); follow it.
    Redirect(String),
    /// Credentials refused, with the message to show inline.
    Rejected(String),
}
