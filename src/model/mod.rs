/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Token request and response models
pub mod auth;
/// HTTP request/response values and the transport trait
pub mod http;
/// Query models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
