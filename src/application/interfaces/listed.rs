use crate::error::AppError;
use crate::model::requests::ListedInfoQuery;
use crate::model::responses::ListedInfoResponse;
use crate::presentation::listed_info::ListedInfo;
use async_trait::async_trait;

/// Interface for the listed issue information service
#[async_trait]
pub trait ListedInfoService: Send + Sync {
    /// Gets one page of listed issue information
    ///
    /// `None` requests every issue with no filter.
    async fn get_listed_info(
        &self,
        query: Option<&ListedInfoQuery>,
    ) -> Result<ListedInfoResponse, AppError>;

    /// Gets every page, following pagination keys until none is returned
    ///
    /// # Arguments
    /// * `query` - Filter applied to every page; its own pagination key, if
    ///   any, is the starting page
    ///
    /// # Returns
    /// All records of all pages in API order
    async fn get_all_listed_info(
        &self,
        query: Option<&ListedInfoQuery>,
    ) -> Result<Vec<ListedInfo>, AppError>;
}
