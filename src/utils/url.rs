/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! URL helpers for joining endpoint paths onto the API base URL.

use crate::error::AppError;
use reqwest::Url;

/// Parses a base URL and guarantees its path ends with exactly one `/`.
///
/// Relative paths resolved against the result land under the base path
/// instead of replacing its last segment.
pub fn normalize_base_url(base_url: &str) -> Result<Url, AppError> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput("base url is required".to_string()));
    }
    let mut url = Url::parse(trimmed)
        .map_err(|e| AppError::InvalidInput(format!("invalid base url {trimmed}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(AppError::InvalidInput(format!(
            "base url cannot hold paths: {trimmed}"
        )));
    }
    let path = format!("{}/", url.path().trim_end_matches('/'));
    url.set_path(&path);
    Ok(url)
}

/// Resolves `path` against a normalized base and appends query parameters.
///
/// A leading `/` on `path` is ignored. Parameters keep their order and are
/// form-encoded; with no parameters the URL has no `?` at all.
pub fn build_url(base: &Url, path: &str, params: &[(&str, &str)]) -> Result<Url, AppError> {
    let relative = path.trim_start_matches('/');
    let mut url = base
        .join(relative)
        .map_err(|e| AppError::InvalidInput(format!("invalid path {path}: {e}")))?;
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params.iter());
    }
    Ok(url)
}
