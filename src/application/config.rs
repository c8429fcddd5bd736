/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_BASE_URL, ENV_BASE_URL, ENV_MAIL_ADDRESS, ENV_PASSWORD, ENV_REST_TIMEOUT,
};
use crate::utils::config::{get_env_non_blank, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Account credentials for the J-Quants API
pub struct Credentials {
    /// Registered mail address
    pub mail_address: String,
    /// Account password, never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl Credentials {
    /// Creates credentials from a mail address and a password
    pub fn new(mail_address: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            mail_address: mail_address.into(),
            password: password.into(),
        }
    }

    /// Returns `true` when both values are non-blank
    pub fn is_complete(&self) -> bool {
        !self.mail_address.trim().is_empty() && !self.password.trim().is_empty()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the J-Quants REST API
    pub base_url: String,
    /// Optional timeout in seconds applied by the transport built from this config
    pub timeout: Option<u64>,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Main configuration for the J-Quants client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Builds the configuration from the environment, loading `.env` first
    ///
    /// Missing credentials are reported through `tracing` but do not fail;
    /// authentication rejects them later as invalid input.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }
        Self::from_env()
    }

    /// Builds the configuration from process environment variables only
    pub fn from_env() -> Self {
        let mail_address = get_env_non_blank(ENV_MAIL_ADDRESS).unwrap_or_default();
        let password = get_env_non_blank(ENV_PASSWORD).unwrap_or_default();

        if mail_address.is_empty() {
            error!("{ENV_MAIL_ADDRESS} not found in environment variables or .env file");
        }
        if password.is_empty() {
            error!("{ENV_PASSWORD} not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                mail_address,
                password,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(ENV_BASE_URL, DEFAULT_BASE_URL.to_string()),
                timeout: get_env_or_none(ENV_REST_TIMEOUT),
            },
        }
    }

    /// Replaces the credentials, keeping the REST settings
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Replaces the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }
}
