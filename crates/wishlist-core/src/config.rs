//! Client Configuration
//!
//! Where the collaborator lives and how many wishes a page holds.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_PER_PAGE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Collaborator base address, without the collection path
    pub api_base_url: String,
    /// Items requested per page
    pub per_page: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ClientConfig {
    /// Defaults, with `WISHLIST_API_URL` baked in at build time if set.
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("WISHLIST_API_URL"))
    }

    fn with_base_url(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self {
                api_base_url: url.trim_end_matches('/').to_string(),
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    /// Port shown in the "is json-server running" hint
    pub fn api_port(&self) -> Option<u16> {
        reqwest::Url::parse(&self.api_base_url)
            .ok()
            .and_then(|url| url.port_or_known_default())
    }
}
