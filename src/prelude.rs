/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # J-Quants Client Prelude
//!
//! Re-exports the types and traits needed for most J-Quants API calls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jquants_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let config = Config::new();
//! let auth = Auth::from_config(&config)?;
//! let tokens = auth.authenticate(&config.credentials).await?;
//! let client = JQuantsClient::from_config(&tokens.id_token, &config)?;
//! let page = client.get_listed_info(None).await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the J-Quants API client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, JQuantsResult};

// ============================================================================
// CLIENTS AND SERVICES
// ============================================================================

/// Token authentication
pub use crate::application::auth::Auth;

/// Authenticated API client
pub use crate::application::client::JQuantsClient;

/// Listed issue information service trait
pub use crate::application::interfaces::listed::ListedInfoService;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::auth::TokenPair;
pub use crate::model::http::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use crate::model::requests::{ListedInfoQuery, ListedInfoQueryBuilder};
pub use crate::model::responses::ListedInfoResponse;
pub use crate::presentation::listed_info::ListedInfo;

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::constants::DEFAULT_BASE_URL;
pub use crate::utils::logger::setup_logger;
