use serde::Deserialize;

use crate::services::{recommendations::DEFAULT_RECOMMENDATION_LIMIT, search::DEFAULT_SEARCH_LIMIT};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON catalog file; the embedded catalog is used when unset
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Redis connection URL for profile storage; profiles stay in memory when unset
    #[serde(default)]
    pub redis_url: Option<String>,

    /// Default number of search results
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// Default number of recommendations returned
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,

    /// Size of the ranked pool a category filter is applied to
    #[serde(default = "default_recommendation_pool")]
    pub recommendation_pool: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_search_limit() -> usize {
    DEFAULT_SEARCH_LIMIT
}

fn default_recommendation_limit() -> usize {
    DEFAULT_RECOMMENDATION_LIMIT
}

fn default_recommendation_pool() -> usize {
    20
}

/// Result size limits handed to request handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub search: usize,
    pub recommendations: usize,
    pub recommendation_pool: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            search: default_search_limit(),
            recommendations: default_recommendation_limit(),
            recommendation_pool: default_recommendation_pool(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn limits(&self) -> Limits {
        Limits {
            search: self.search_limit,
            recommendations: self.recommendation_limit,
            recommendation_pool: self.recommendation_pool,
        }
    }
}
