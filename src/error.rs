/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error type shared by every J-Quants operation.
//!
//! Three families of failure reach the caller:
//! - validation errors ([`AppError::InvalidInput`]), raised before any request is sent
//! - API errors ([`AppError::Api`]), a non-200 status or a 200 missing a required token
//! - transport errors ([`AppError::Network`], [`AppError::Io`]), propagated unchanged
//!
//! A 200 body that cannot be decoded surfaces as [`AppError::Json`].

use crate::constants::GENERIC_API_ERROR_MESSAGE;
use serde_json::{Map, Value};
use std::fmt;

/// Result alias used across the crate
pub type JQuantsResult<T> = Result<T, AppError>;

/// Main error type for the J-Quants client
#[derive(Debug)]
pub enum AppError {
    /// A required input was missing or blank
    InvalidInput(String),
    /// The API answered with an error status or an incomplete payload
    Api {
        /// HTTP status code of the response that caused the error
        status: u16,
        /// Best-effort human readable message
        message: String,
    },
    /// The HTTP layer failed (connection, TLS, timeout, body read)
    Network(reqwest::Error),
    /// I/O failure raised by a custom transport
    Io(std::io::Error),
    /// A success body could not be decoded
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Api { status, message } => {
                write!(f, "api error: status={status}, message={message}")
            }
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::InvalidInput(_) | AppError::Api { .. } => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl AppError {
    /// Builds an API error from a response status and its raw body.
    ///
    /// The message comes from the body's `message` field when the body is a
    /// JSON object, from the trimmed body itself when it is not JSON, and
    /// falls back to a generic text otherwise.
    pub fn from_api_response(status: u16, body: &str) -> Self {
        let message =
            parse_error_message(body).unwrap_or_else(|| GENERIC_API_ERROR_MESSAGE.to_string());
        AppError::Api { status, message }
    }

    /// HTTP status carried by an API error
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the error was raised before any request was sent
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(self, AppError::InvalidInput(_))
    }

    /// Returns `true` if the server answered but the call failed
    #[must_use]
    pub fn is_api_error(&self) -> bool {
        matches!(self, AppError::Api { .. })
    }

    /// Returns `true` if the request never produced a response
    #[must_use]
    pub fn is_transport_error(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Io(_))
    }
}

/// Extracts the error message from a non-200 body.
///
/// `None` means the body was a JSON object without a usable `message`, or
/// the body was blank.
pub(crate) fn parse_error_message(body: &str) -> Option<String> {
    match serde_json::from_str::<Map<String, Value>>(body) {
        Ok(parsed) => match parsed.get("message") {
            None | Some(Value::Null) => None,
            Some(Value::String(message)) => Some(message.clone()),
            Some(other) => Some(other.to_string()),
        },
        Err(_) => {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    }
}
