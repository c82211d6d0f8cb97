//! Endpoint Resolution
//!
//! Picks the collection URL at startup: a `<meta name="items-api-url">`
//! tag in the host page wins, then the build-time default.

use item_client::ApiConfig;

const API_URL_META: &str = r#"meta[name="items-api-url"]"#;

/// Resolve the endpoint configuration for this page
pub fn resolve_api_config() -> ApiConfig {
    match meta_api_url() {
        Some(url) => {
            log::info!("Using collection endpoint from page: {}", url);
            ApiConfig::new(url)
        }
        None => ApiConfig::from_env(),
    }
}

fn meta_api_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(API_URL_META).ok()??;
    meta.get_attribute("content")
        .filter(|url| !url.trim().is_empty())
}
