/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of the `token/auth_user` request
#[derive(Clone, Serialize)]
pub struct AuthUserRequest<'a> {
    /// Registered mail address
    #[serde(rename = "mailaddress")]
    pub mail_address: &'a str,
    /// Account password
    pub password: &'a str,
}

impl fmt::Debug for AuthUserRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthUserRequest")
            .field("mail_address", &self.mail_address)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Raw payload returned by `token/auth_user`
///
/// Either token may be missing; the API sometimes answers with only a refresh token.
#[derive(Clone, Default, Deserialize)]
pub struct AuthUserResponse {
    /// ID token, when issued directly
    #[serde(rename = "idToken", default)]
    pub id_token: Option<String>,
    /// Refresh token
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: Option<String>,
}

impl AuthUserResponse {
    /// ID token if present and not blank
    pub fn id_token(&self) -> Option<&str> {
        non_blank(self.id_token.as_deref())
    }

    /// Refresh token if present and not blank
    pub fn refresh_token(&self) -> Option<&str> {
        non_blank(self.refresh_token.as_deref())
    }
}

/// Raw payload returned by `token/auth_refresh`
#[derive(Clone, Default, Deserialize)]
pub struct RefreshResponse {
    /// Newly issued ID token
    #[serde(rename = "idToken", default)]
    pub id_token: Option<String>,
}

impl RefreshResponse {
    /// ID token if present and not blank
    pub fn id_token(&self) -> Option<&str> {
        non_blank(self.id_token.as_deref())
    }
}

/// Tokens resolved by a successful authentication
///
/// Both tokens are always present and non-blank.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// Short-lived bearer token sent on authenticated calls
    pub id_token: String,
    /// Longer-lived token used to mint new ID tokens
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a pair from two tokens
    pub fn new(id_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            id_token: id_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("id_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Debug for AuthUserResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthUserResponse")
            .field("id_token", &self.id_token.as_ref().map(|_| "[REDACTED]"))
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl fmt::Debug for RefreshResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshResponse")
            .field("id_token", &self.id_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
