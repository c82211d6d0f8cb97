//! Endpoint Configuration
//!
//! The collection base URL, passed explicitly to the repository.

use serde::{Deserialize, Serialize};

/// Collection endpoint used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3005/items";

/// REST collection endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL baked in at build time via `ITEMS_API_URL`, else the default
    pub fn from_env() -> Self {
        match option_env!("ITEMS_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// URL of the whole collection
    pub fn collection_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single item
    pub fn item_url(&self, id: u32) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
