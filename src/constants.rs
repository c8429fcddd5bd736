/// Default base URL of the J-Quants REST API
pub const DEFAULT_BASE_URL: &str = "https://api.jquants.com/v1";
/// User agent string used in HTTP requests to identify this client to the J-Quants API
pub const USER_AGENT: &str = concat!("jquants-client/", env!("CARGO_PKG_VERSION"));
/// Path of the mail/password authentication endpoint
pub const AUTH_USER_PATH: &str = "token/auth_user";
/// Path of the refresh token endpoint
pub const AUTH_REFRESH_PATH: &str = "token/auth_refresh";
/// Path of the listed issue information endpoint
pub const LISTED_INFO_PATH: &str = "/listed/info";
/// Message used when an error response carries nothing readable
pub const GENERIC_API_ERROR_MESSAGE: &str = "API request failed";
/// Environment variable holding the registered mail address
pub const ENV_MAIL_ADDRESS: &str = "JQUANTS_MAIL_ADDRESS";
/// Environment variable holding the account password
pub const ENV_PASSWORD: &str = "JQUANTS_PASSWORD";
/// Environment variable overriding [`DEFAULT_BASE_URL`]
pub const ENV_BASE_URL: &str = "JQUANTS_BASE_URL";
/// Environment variable with an optional request timeout in seconds
pub const ENV_REST_TIMEOUT: &str = "JQUANTS_REST_TIMEOUT";
/// Environment variable read by [`crate::utils::logger::setup_logger`]
pub const ENV_LOG_LEVEL: &str = "LOGLEVEL";
