/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::require_non_blank;
use crate::application::config::Config;
use crate::application::interfaces::listed::ListedInfoService;
use crate::constants::{DEFAULT_BASE_URL, LISTED_INFO_PATH};
use crate::error::AppError;
use crate::model::http::{HttpRequest, HttpTransport, ReqwestTransport};
use crate::model::requests::ListedInfoQuery;
use crate::model::responses::ListedInfoResponse;
use crate::presentation::listed_info::ListedInfo;
use crate::utils::url::{build_url, normalize_base_url};
use async_trait::async_trait;
use reqwest::Url;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the authenticated J-Quants endpoints
///
/// Holds an ID token obtained through [`crate::application::auth::Auth`].
/// The token is never refreshed here; build a new client when it expires.
#[derive(Clone)]
pub struct JQuantsClient {
    id_token: String,
    base_url: Url,
    transport: Arc<dyn HttpTransport>,
}

impl JQuantsClient {
    /// Creates a client for the public API endpoint
    pub fn new(id_token: &str) -> Result<Self, AppError> {
        Self::with_base_url(id_token, DEFAULT_BASE_URL)
    }

    /// Creates a client for another base URL
    pub fn with_base_url(id_token: &str, base_url: &str) -> Result<Self, AppError> {
        Self::with_transport(id_token, base_url, Arc::new(ReqwestTransport::new()?))
    }

    /// Creates a client with an explicit transport
    ///
    /// # Errors
    /// [`AppError::InvalidInput`] when the token is blank or the base URL
    /// cannot be parsed
    pub fn with_transport(
        id_token: &str,
        base_url: &str,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, AppError> {
        let id_token = require_non_blank(id_token, "idToken")?;
        Ok(Self {
            id_token: id_token.to_string(),
            base_url: normalize_base_url(base_url)?,
            transport,
        })
    }

    /// Creates a client from the REST section of `config`
    pub fn from_config(id_token: &str, config: &Config) -> Result<Self, AppError> {
        let transport = ReqwestTransport::from_config(&config.rest_api)?;
        Self::with_transport(id_token, &config.rest_api.base_url, Arc::new(transport))
    }

    /// Normalized base URL, always ending with `/`
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, AppError> {
        let url = build_url(&self.base_url, path, params)?;
        let request = HttpRequest::get(url)
            .with_header("Authorization", &format!("Bearer {}", self.id_token));
        let response = self.transport.send(request).await?;
        response.json()
    }
}

#[async_trait]
impl ListedInfoService for JQuantsClient {
    async fn get_listed_info(
        &self,
        query: Option<&ListedInfoQuery>,
    ) -> Result<ListedInfoResponse, AppError> {
        let params = query.map(ListedInfoQuery::to_query_pairs).unwrap_or_default();
        debug!("Getting listed info: {:?}", params);
        let page: ListedInfoResponse = self.get(LISTED_INFO_PATH, &params).await?;
        debug!("Listed info page obtained: {} records", page.info.len());
        Ok(page)
    }

    async fn get_all_listed_info(
        &self,
        query: Option<&ListedInfoQuery>,
    ) -> Result<Vec<ListedInfo>, AppError> {
        let mut query = query.cloned().unwrap_or_default();
        let mut records = Vec::new();
        let mut pages = 0usize;
        // keys already requested, including the starting one
        let mut seen_keys: HashSet<String> =
            query.pagination_key().map(String::from).into_iter().collect();

        loop {
            let page = self.get_listed_info(Some(&query)).await?;
            pages += 1;
            records.extend(page.info);

            let Some(key) = page.pagination_key else {
                break;
            };
            if !seen_keys.insert(key.clone()) {
                return Err(AppError::Api {
                    status: 200,
                    message: format!("pagination key repeated: {key}"),
                });
            }
            query = query.next_page(&key);
        }

        info!(
            "Listed info obtained: {} records in {} pages",
            records.len(),
            pages
        );
        Ok(records)
    }
}
