/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use chrono::NaiveDate;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One listed issue as of a given date
///
/// Field names follow the upstream casing. Fields the API leaves out (for
/// example margin data on restricted plans) decode as empty strings.
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListedInfo {
    /// Date the information applies to (`YYYY-MM-DD`)
    #[serde(rename = "Date")]
    pub date: String,
    /// Issue code
    #[serde(rename = "Code")]
    pub code: String,
    /// Company name in Japanese
    #[serde(rename = "CompanyName")]
    pub company_name: String,
    /// Company name in English
    #[serde(rename = "CompanyNameEnglish")]
    pub company_name_english: String,
    /// 17-sector classification code
    #[serde(rename = "Sector17Code")]
    pub sector17_code: String,
    #[serde(rename = "Sector17CodeName")]
    pub sector17_code_name: String,
    /// 33-sector classification code
    #[serde(rename = "Sector33Code")]
    pub sector33_code: String,
    #[serde(rename = "Sector33CodeName")]
    pub sector33_code_name: String,
    /// TOPIX size category, e.g. `TOPIX Large70`
    #[serde(rename = "ScaleCategory")]
    pub scale_category: String,
    /// Market segment code
    #[serde(rename = "MarketCode")]
    pub market_code: String,
    #[serde(rename = "MarketCodeName")]
    pub market_code_name: String,
    /// Margin trading classification code
    #[serde(rename = "MarginCode")]
    pub margin_code: String,
    #[serde(rename = "MarginCodeName")]
    pub margin_code_name: String,
    /// Reference price for the daily limit range, exact as sent
    #[serde(rename = "BasePrice")]
    pub base_price: Option<Decimal>,
}

impl ListedInfo {
    /// Parses [`ListedInfo::date`], accepting `YYYY-MM-DD` and `YYYYMMDD`
    pub fn trade_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&self.date, "%Y%m%d"))
            .ok()
    }
}
