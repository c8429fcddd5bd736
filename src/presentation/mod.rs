/// Listed issue records
pub mod listed_info;
/// Serde helpers for lenient API payloads
pub mod serialization;

pub use listed_info::ListedInfo;
