use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::pokeapi::PokeApiConfig;

/// Root configuration.
///
/// Every section is defaulted: an empty TOML file is a valid config.
/// There are no secrets anywhere in here (the remote source is keyless),
/// so the config endpoint serves it verbatim.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pokeapi: PokeApiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Catalog loader and search tuning.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Summary refs fetched per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Bound on concurrent per-entry detail fetches within a page.
    #[serde(default = "default_detail_concurrency")]
    pub detail_concurrency: usize,
    /// Cap on suggestion results.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            detail_concurrency: default_detail_concurrency(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

fn default_page_size() -> u32 {
    crate::catalog::DEFAULT_PAGE_SIZE
}

fn default_detail_concurrency() -> usize {
    crate::catalog::DEFAULT_DETAIL_CONCURRENCY
}

fn default_suggestion_limit() -> usize {
    crate::search::DEFAULT_SUGGESTION_LIMIT
}
