//! Configuration options for the Semleaf client

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use log::{debug, warn};
use url::Url;

use crate::error::Error;

/// Environment variable holding the backend base URL
pub const ENV_URL: &str = "SEMLEAF_URL";
/// Environment variable holding the session cookie (`name=value`)
pub const ENV_SESSION: &str = "SEMLEAF_SESSION";
/// Environment variable holding an optional request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "SEMLEAF_TIMEOUT_SECS";

const DEFAULT_URL: &str = "http://localhost:8080";

/// Configuration options for the Semleaf client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the backend, e.g. `http://localhost:8080`
    pub base_url: String,

    /// The request timeout. `None` lets a hung request hang.
    pub request_timeout: Option<Duration>,

    /// Limit used when listing recent phrases
    pub list_limit: u32,

    /// Limit used for text search
    pub search_limit: u32,

    /// Session cookie sent with every request, as `name=value`
    pub session_cookie: Option<String>,

    /// Extra headers sent with every request
    pub headers: HashMap<String, String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            request_timeout: None,
            list_limit: 20,
            search_limit: 20,
            session_cookie: None,
            headers: HashMap::new(),
        }
    }
}

impl ClientOptions {
    /// Load options from the environment, reading a `.env` file first if present.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        let mut options = Self::default();

        match env::var(ENV_URL) {
            Ok(url) => options = options.with_base_url(&url),
            Err(_) => debug!("{ENV_URL} not set, using default: {DEFAULT_URL}"),
        }

        if let Ok(cookie) = env::var(ENV_SESSION) {
            if !cookie.trim().is_empty() {
                options = options.with_session_cookie(cookie.trim());
            }
        }

        if let Ok(secs) = env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                warn!("Invalid {ENV_TIMEOUT_SECS} value: {e}");
                Error::config(format!("{ENV_TIMEOUT_SECS} must be a number of seconds"))
            })?;
            options = options.with_request_timeout(Some(Duration::from_secs(secs)));
        }

        options.validate()?;
        Ok(options)
    }

    /// Check that the base URL is usable
    pub fn validate(&self) -> Result<(), Error> {
        let url = Url::parse(&self.base_url)?;
        if url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "base URL cannot be a base: {}",
                self.base_url
            )));
        }
        if self.list_limit == 0 || self.search_limit == 0 {
            return Err(Error::config("limits must be greater than zero"));
        }
        Ok(())
    }

    /// Set the backend base URL
    pub fn with_base_url(mut self, value: &str) -> Self {
        self.base_url = value.trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the limit used when listing recent phrases
    pub fn with_list_limit(mut self, value: u32) -> Self {
        self.list_limit = value;
        self
    }

    /// Set the limit used for text search
    pub fn with_search_limit(mut self, value: u32) -> Self {
        self.search_limit = value;
        self
    }

    /// Set the session cookie, as `name=value`
    pub fn with_session_cookie(mut self, value: &str) -> Self {
        self.session_cookie = Some(value.to_string());
        self
    }

    /// Add a header sent with every request
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }
}
