//! HTTP request helper shared by every endpoint client
//!
//! All network traffic goes through [`FetchBuilder`]. It always sends a JSON
//! content type, merges in caller and client-wide headers, and maps failures
//! onto [`Error`]:
//!
//! * status 401 becomes [`Error::Unauthorized`] for every endpoint,
//! * any other non-success status becomes [`Error::Api`] whose message is the
//!   body's `error` field, or the status reason text when that is missing,
//! * transport failures surface as [`Error::Http`].
//!
//! Each call is a single attempt. Nothing is retried.

use log::{debug, warn};
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, CONTENT_DISPOSITION, CONTENT_TYPE, COOKIE,
};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::config::ClientOptions;
use crate::error::Error;

/// Error payload returned by the backend: `{"error": "..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Undecoded successful response
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// `Content-Type` header, if any
    pub content_type: Option<String>,
    /// `Content-Disposition` header, if any
    pub content_disposition: Option<String>,
    /// Response body
    pub bytes: Vec<u8>,
}

/// Helper for building and executing HTTP requests
pub struct FetchBuilder<'a> {
    client: &'a Client,
    options: &'a ClientOptions,
    path: String,
    method: Method,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl<'a> FetchBuilder<'a> {
    /// Create a new FetchBuilder for `path` (which may carry a query string)
    pub fn new(
        client: &'a Client,
        options: &'a ClientOptions,
        path: &str,
        method: Method,
    ) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &options.headers {
            insert_header(&mut headers, name, value);
        }

        if let Some(cookie) = &options.session_cookie {
            match HeaderValue::from_str(cookie) {
                Ok(value) => {
                    headers.insert(COOKIE, value);
                }
                Err(_) => warn!("Ignoring invalid session cookie, requests will be anonymous"),
            }
        }

        Self {
            client,
            options,
            path: path.to_string(),
            method,
            headers,
            body: None,
        }
    }

    /// Add a header to the request, replacing any header of the same name
    pub fn header(mut self, name: &str, value: &str) -> Self {
        insert_header(&mut self.headers, name, value);
        self
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        let json = serde_json::to_vec(body)?;
        self.body = Some(json);
        Ok(self)
    }

    /// The absolute URL this request targets
    pub fn url(&self) -> Result<Url, Error> {
        let url = Url::parse(&format!("{}{}", self.options.base_url, self.path))?;
        Ok(url)
    }

    /// Build the request
    fn build(&self) -> Result<RequestBuilder, Error> {
        let url = self.url()?;

        let mut req = self.client.request(self.method.clone(), url);
        req = req.headers(self.headers.clone());

        if let Some(timeout) = self.options.request_timeout {
            req = req.timeout(timeout);
        }

        if let Some(body) = &self.body {
            req = req.body(body.clone());
        }

        Ok(req)
    }

    async fn send(&self) -> Result<Response, Error> {
        let req = self.build()?;
        debug!("{} {}", self.method, self.path);

        let response = req.send().await.map_err(|e| {
            warn!("{} {} failed: {}", self.method, self.path, e);
            Error::Http(e)
        })?;

        if response.status().is_success() {
            return Ok(response);
        }

        let err = error_from_response(response).await;
        warn!("{} {} rejected: {}", self.method, self.path, err);
        Err(err)
    }

    /// Execute the request and parse the response as JSON
    pub async fn execute<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let response = self.send().await?;
        let bytes = response.bytes().await?;
        let result = serde_json::from_slice::<T>(&bytes)?;
        Ok(result)
    }

    /// Execute the request and return the undecoded body
    pub async fn execute_raw(&self) -> Result<RawResponse, Error> {
        let response = self.send().await?;
        let content_type = header_string(response.headers(), CONTENT_TYPE);
        let content_disposition = header_string(response.headers(), CONTENT_DISPOSITION);
        let bytes = response.bytes().await?.to_vec();

        Ok(RawResponse {
            content_type,
            content_disposition,
            bytes,
        })
    }
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) {
    match (
        HeaderName::from_bytes(name.as_bytes()),
        HeaderValue::from_str(value),
    ) {
        (Ok(name), Ok(value)) => {
            headers.insert(name, value);
        }
        _ => warn!("Ignoring invalid header {name}"),
    }
}

fn header_string(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Map a non-success response onto the client error contract
async fn error_from_response(response: Response) -> Error {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Error::Unauthorized;
    }

    let fallback = status_text(status);
    let message = match response.bytes().await {
        Ok(bytes) => error_message(&bytes).unwrap_or(fallback),
        Err(_) => fallback,
    };

    Error::Api {
        status: status.as_u16(),
        message,
    }
}

/// Reason phrase of a status, or `HTTP <code>` for codes without one
fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason.to_string(),
        None => format!("HTTP {}", status.as_u16()),
    }
}

fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
}

/// Helper for creating HTTP requests
pub struct Fetch;

impl Fetch {
    /// Create a GET request
    pub fn get<'a>(
        client: &'a Client,
        options: &'a ClientOptions,
        path: &str,
    ) -> FetchBuilder<'a> {
        FetchBuilder::new(client, options, path, Method::GET)
    }

    /// Create a POST request
    pub fn post<'a>(
        client: &'a Client,
        options: &'a ClientOptions,
        path: &str,
    ) -> FetchBuilder<'a> {
        FetchBuilder::new(client, options, path, Method::POST)
    }

    /// Create a PUT request
    pub fn put<'a>(
        client: &'a Client,
        options: &'a ClientOptions,
        path: &str,
    ) -> FetchBuilder<'a> {
        FetchBuilder::new(client, options, path, Method::PUT)
    }

    /// Create a DELETE request
    pub fn delete<'a>(
        client: &'a Client,
        options: &'a ClientOptions,
        path: &str,
    ) -> FetchBuilder<'a> {
        FetchBuilder::new(client, options, path, Method::DELETE)
    }
}
