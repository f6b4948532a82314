//! Client configuration.
//!
//! Resolves where the notes API lives and which page document to attach to.
//! Values come from the process environment (the binary loads `.env` first).

use std::path::PathBuf;

use crate::{Error, Result};

/// Environment variable naming the notes server base URL.
pub const API_BASE_URL_ENV: &str = "COURSENOTES_API_BASE_URL";
/// Environment variable naming the page document path.
pub const PAGE_DATA_ENV: &str = "COURSENOTES_PAGE_DATA";
/// Address the notes server listens on when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without trailing slash, e.g. `http://127.0.0.1:5000`
    pub api_base_url: String,
    /// Page document to load at startup, if any
    pub page_data_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_data_path: None,
        }
    }
}

impl ClientConfig {
    /// Build from raw values, applying defaults and validation.
    pub fn from_raw(api_base_url: Option<String>, page_data_path: Option<String>) -> Result<Self> {
        let api_base_url = match non_blank(api_base_url) {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        Ok(Self {
            api_base_url,
            page_data_path: non_blank(page_data_path).map(PathBuf::from),
        })
    }

    /// Resolve from `COURSENOTES_API_BASE_URL` and `COURSENOTES_PAGE_DATA`.
    pub fn from_env() -> Result<Self> {
        Self::from_raw(
            std::env::var(API_BASE_URL_ENV).ok(),
            std::env::var(PAGE_DATA_ENV).ok(),
        )
    }
}

/// An unset variable and one holding only whitespace both mean "use the default".
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub(crate) fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::InvalidInput(
            "API base URL must not be empty".to_string(),
        ));
    }
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(Error::InvalidInput(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}
