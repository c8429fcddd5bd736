/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! HTTP transport seam.
//!
//! Requests and responses are plain data. [`HttpTransport`] is the only place
//! where I/O happens, so tests can swap [`ReqwestTransport`] for an in-memory
//! implementation.

use crate::application::config::RestApiConfig;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

/// An HTTP request described as plain data
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Fully resolved URL, query string included
    pub url: Url,
    /// Header name/value pairs in insertion order
    pub headers: Vec<(String, String)>,
    /// Request body, `None` for an empty body
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a GET request without headers
    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    /// Creates a POST request without headers or body
    pub fn post(url: Url) -> Self {
        Self::new(Method::POST, url)
    }

    fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Adds a header
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets the body
    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// Looks up a header value, ignoring name case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Numeric status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl HttpResponse {
    /// Creates a response from a status and a body
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Fails with an API error unless the status is 200
    pub fn error_for_status(&self) -> Result<&Self, AppError> {
        if self.status == 200 {
            return Ok(self);
        }
        error!("Request failed with status {}", self.status);
        Err(AppError::from_api_response(self.status, &self.body))
    }

    /// Checks the status and decodes the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        self.error_for_status()?;
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Sends prepared requests over the network
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a request and returns its status and body.
    ///
    /// Any status is a successful send; only failures to obtain a response
    /// are errors.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AppError>;
}

/// Production transport backed by `reqwest`
///
/// Connection handling is whatever `reqwest` does by default. No retry and no
/// timeout are added unless the wrapped client carries one.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with a default `reqwest` client
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Wraps an existing client, keeping its timeout and TLS settings
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Creates a transport honoring the optional timeout of the REST configuration
    pub fn from_config(config: &RestApiConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AppError> {
        // the query string may carry a refresh token
        debug!("{} {}", request.method, request.url.path());

        let mut builder = self.client.request(request.method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        debug!("Response status: {}", status);
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
