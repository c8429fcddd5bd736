/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # J-Quants Client
//!
//! Asynchronous client for the [J-Quants](https://jpx-jquants.com/) market data API.
//!
//! ## Features
//!
//! - Mail address/password authentication (`token/auth_user`)
//! - ID token refresh (`token/auth_refresh`)
//! - Listed issue information (`listed/info`), one page or every page
//! - Exact decimal prices through `rust_decimal`
//! - Pluggable HTTP transport for testing
//!
//! ## Configuration
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `JQUANTS_MAIL_ADDRESS` | Registered mail address |
//! | `JQUANTS_PASSWORD` | Account password |
//! | `JQUANTS_BASE_URL` | Base URL, defaults to `https://api.jquants.com/v1` |
//! | `JQUANTS_REST_TIMEOUT` | Optional request timeout in seconds |
//! | `LOGLEVEL` | `tracing` level for [`utils::logger::setup_logger`] |
//!
//! ## Example
//!
//! ```rust,no_run
//! use jquants_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let config = Config::new();
//!     let auth = Auth::from_config(&config)?;
//!     let tokens = auth.authenticate(&config.credentials).await?;
//!
//!     let client = JQuantsClient::from_config(&tokens.id_token, &config)?;
//!     let query = ListedInfoQuery::builder().code("86970").build();
//!     let page = client.get_listed_info(Some(&query)).await?;
//!     for info in &page.info {
//!         println!("{} {}", info.code, info.company_name);
//!     }
//!     Ok(())
//! }
//! ```

/// Token authentication, API client, configuration and service interfaces
pub mod application;
/// Constants shared across the crate
pub mod constants;
/// Error type
pub mod error;
/// Wire models and the HTTP transport seam
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Records returned by the API
pub mod presentation;
/// Environment, logging and URL helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
