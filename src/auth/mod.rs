//! Session status and logout
//!
//! Signing in happens in a browser: the user is sent to [`Auth::login_url`]
//! and the backend completes the Google OAuth flow, leaving a session cookie.

mod types;

use reqwest::Client;
use url::Url;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;
use crate::phrases::Ack;

pub use types::*;

/// Path of the browser-navigated OAuth entry point
pub const LOGIN_PATH: &str = "/api/auth/google";

/// Client for the auth endpoints
pub struct Auth {
    client: Client,
    options: ClientOptions,
}

impl Auth {
    /// Create a new Auth client
    pub(crate) fn new(client: Client, options: ClientOptions) -> Self {
        Self { client, options }
    }

    /// Check whether the current session is signed in
    pub async fn status(&self) -> Result<AuthStatus, Error> {
        Fetch::get(&self.client, &self.options, "/api/auth/me")
            .execute::<AuthStatus>()
            .await
    }

    /// End the current session
    pub async fn logout(&self) -> Result<Ack, Error> {
        Fetch::post(&self.client, &self.options, "/api/auth/logout")
            .execute::<Ack>()
            .await
    }

    /// URL to open in a browser to sign in. Never fetched by the client.
    pub fn login_url(&self) -> Result<Url, Error> {
        let url = Url::parse(&format!("{}{}", self.options.base_url, LOGIN_PATH))?;
        Ok(url)
    }
}
