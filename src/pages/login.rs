use crate::auth::LOGIN_PATH;

/// The signed-out landing page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginPage;

impl LoginPage {
    pub fn title(&self) -> &'static str {
        "Semleaf"
    }

    pub fn prompt(&self) -> &'static str {
        "Sign in to continue"
    }

    pub fn link_text(&self) -> &'static str {
        "Sign in with Google"
    }

    /// Path the browser is sent to. The backend runs the OAuth flow.
    pub fn href(&self) -> &'static str {
        LOGIN_PATH
    }
}
