/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication against the J-Quants token endpoints
//!
//! - `token/auth_user` exchanges a mail address and password for tokens
//! - `token/auth_refresh` exchanges a refresh token for a new ID token
//!
//! When `token/auth_user` answers with a refresh token only, the ID token is
//! obtained with an extra call to `token/auth_refresh`.

use crate::application::config::{Config, Credentials};
use crate::constants::{AUTH_REFRESH_PATH, AUTH_USER_PATH, DEFAULT_BASE_URL};
use crate::error::AppError;
use crate::model::auth::{AuthUserRequest, AuthUserResponse, RefreshResponse, TokenPair};
use crate::model::http::{HttpRequest, HttpTransport, ReqwestTransport};
use crate::utils::url::{build_url, normalize_base_url};
use reqwest::Url;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Authentication manager bound to one base URL and one transport
#[derive(Clone)]
pub struct Auth {
    base_url: Url,
    transport: Arc<dyn HttpTransport>,
}

impl Auth {
    /// Creates an authentication manager with an explicit transport
    ///
    /// # Arguments
    /// * `base_url` - API base URL, normalized to end with a single `/`
    /// * `transport` - Transport used for every request
    pub fn new(base_url: &str, transport: Arc<dyn HttpTransport>) -> Result<Self, AppError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            transport,
        })
    }

    /// Creates an authentication manager for the public API endpoint
    pub fn with_default_url() -> Result<Self, AppError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates an authentication manager using `reqwest` against `base_url`
    pub fn with_base_url(base_url: &str) -> Result<Self, AppError> {
        Self::new(base_url, Arc::new(ReqwestTransport::new()?))
    }

    /// Creates an authentication manager from the REST section of `config`
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let transport = ReqwestTransport::from_config(&config.rest_api)?;
        Self::new(&config.rest_api.base_url, Arc::new(transport))
    }

    /// Normalized base URL, always ending with `/`
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Obtains an ID token and a refresh token with a mail address and password
    ///
    /// # Errors
    /// * [`AppError::InvalidInput`] if either value is blank; nothing is sent
    /// * [`AppError::Api`] on a non-200 status, or when the response lacks
    ///   a usable token
    pub async fn authenticate_user(
        &self,
        mail_address: &str,
        password: &str,
    ) -> Result<TokenPair, AppError> {
        let mail_address = require_non_blank(mail_address, "mailaddress")?;
        let password = require_non_blank(password, "password")?;

        let url = build_url(&self.base_url, AUTH_USER_PATH, &[])?;
        let body = serde_json::to_string(&AuthUserRequest {
            mail_address,
            password,
        })?;
        let request = HttpRequest::post(url)
            .with_header("Content-Type", "application/json")
            .with_body(body);

        let response = self.transport.send(request).await?;
        let tokens: AuthUserResponse = response.json()?;

        let refresh_token = tokens.refresh_token();
        let id_token = match (tokens.id_token(), refresh_token) {
            (Some(id_token), _) => id_token.to_string(),
            (None, None) => {
                return Err(AppError::Api {
                    status: response.status,
                    message: "failed to obtain id token".to_string(),
                });
            }
            (None, Some(refresh_token)) => {
                warn!("auth_user returned no id token, refreshing");
                self.refresh_id_token(refresh_token).await?
            }
        };

        let Some(refresh_token) = refresh_token else {
            return Err(AppError::Api {
                status: response.status,
                message: "failed to obtain refresh token".to_string(),
            });
        };

        info!("Authenticated");
        Ok(TokenPair::new(id_token, refresh_token))
    }

    /// Authenticates with a set of credentials
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<TokenPair, AppError> {
        self.authenticate_user(&credentials.mail_address, &credentials.password)
            .await
    }

    /// Obtains a new ID token from a refresh token
    ///
    /// The request is a POST with the token in the `refreshtoken` query
    /// parameter, no body and no `Content-Type`.
    pub async fn refresh_id_token(&self, refresh_token: &str) -> Result<String, AppError> {
        let refresh_token = require_non_blank(refresh_token, "refreshtoken")?;

        let url = build_url(
            &self.base_url,
            AUTH_REFRESH_PATH,
            &[("refreshtoken", refresh_token)],
        )?;
        let response = self.transport.send(HttpRequest::post(url)).await?;
        let refreshed: RefreshResponse = response.json()?;

        match refreshed.id_token() {
            Some(id_token) => {
                debug!("ID token refreshed");
                Ok(id_token.to_string())
            }
            None => Err(AppError::Api {
                status: response.status,
                message: "failed to obtain id token".to_string(),
            }),
        }
    }
}

/// Rejects blank values; non-blank values are returned untrimmed
pub(crate) fn require_non_blank<'a>(value: &'a str, field: &str) -> Result<&'a str, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{field} is required")));
    }
    Ok(value)
}
