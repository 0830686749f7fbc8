//! Types for authentication

use serde::{Deserialize, Serialize};

/// Session state reported by `/api/auth/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    /// Whether the session is signed in
    pub authenticated: bool,

    /// The signed-in user's email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AuthStatus {
    /// The email of a signed-in session, if both are present
    pub fn signed_in_email(&self) -> Option<&str> {
        if self.authenticated {
            self.email.as_deref()
        } else {
            None
        }
    }
}
