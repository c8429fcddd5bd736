/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::presentation::listed_info::ListedInfo;
use crate::presentation::serialization::{blank_string_as_none, null_as_empty_vec};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// One page of `/listed/info`
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedInfoResponse {
    /// Records in API order, empty when the API sends none
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub info: Vec<ListedInfo>,
    /// Key of the next page, present only while more pages exist
    #[serde(
        default,
        deserialize_with = "blank_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub pagination_key: Option<String>,
}

impl ListedInfoResponse {
    /// Returns `true` when another page can be requested
    pub fn has_next_page(&self) -> bool {
        self.pagination_key.is_some()
    }
}
