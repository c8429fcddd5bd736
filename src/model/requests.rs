/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use chrono::NaiveDate;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::Serialize;

/// Search conditions for `/listed/info`
///
/// Every field is either a trimmed non-blank string or absent; blank input
/// never produces an empty parameter.
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListedInfoQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination_key: Option<String>,
}

impl ListedInfoQuery {
    /// Starts a builder with every field absent
    pub fn builder() -> ListedInfoQueryBuilder {
        ListedInfoQueryBuilder::default()
    }

    /// Issue code (4 or 5 digits)
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Reference date (`YYYY-MM-DD` or `YYYYMMDD`)
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Pagination key returned by a previous page
    pub fn pagination_key(&self) -> Option<&str> {
        self.pagination_key.as_deref()
    }

    /// Returns `true` when no condition is set
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.date.is_none() && self.pagination_key.is_none()
    }

    /// Same conditions, pointed at the page identified by `pagination_key`
    pub fn next_page(&self, pagination_key: &str) -> Self {
        Self {
            pagination_key: normalize(Some(pagination_key)),
            ..self.clone()
        }
    }

    /// Query parameters in wire order: `code`, `date`, `pagination_key`
    pub fn to_query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("code", self.code()),
            ("date", self.date()),
            ("pagination_key", self.pagination_key()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

/// Fluent builder for [`ListedInfoQuery`]
#[derive(Debug, Clone, Default)]
pub struct ListedInfoQueryBuilder {
    code: Option<String>,
    date: Option<String>,
    pagination_key: Option<String>,
}

impl ListedInfoQueryBuilder {
    /// Set the issue code
    pub fn code<'a>(mut self, code: impl Into<Option<&'a str>>) -> Self {
        self.code = normalize(code.into());
        self
    }

    /// Set the reference date
    pub fn date<'a>(mut self, date: impl Into<Option<&'a str>>) -> Self {
        self.date = normalize(date.into());
        self
    }

    /// Set the reference date from a calendar date, formatted as `YYYY-MM-DD`
    pub fn date_naive(mut self, date: NaiveDate) -> Self {
        self.date = Some(date.format("%Y-%m-%d").to_string());
        self
    }

    /// Set the pagination key
    pub fn pagination_key<'a>(mut self, pagination_key: impl Into<Option<&'a str>>) -> Self {
        self.pagination_key = normalize(pagination_key.into());
        self
    }

    /// Freezes the conditions
    pub fn build(self) -> ListedInfoQuery {
        ListedInfoQuery {
            code: self.code,
            date: self.date,
            pagination_key: self.pagination_key,
        }
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
