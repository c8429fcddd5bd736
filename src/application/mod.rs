/// Token authentication against the J-Quants API
pub mod auth;
/// J-Quants API client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces implemented by the client
pub mod interfaces;
