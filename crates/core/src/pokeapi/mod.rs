//! PokeAPI remote source integration.
//!
//! This module provides the `CreatureSource` trait for fetching creature
//! summaries and details from the remote catalog, plus the reqwest-backed
//! `PokeApiClient` implementation.

mod client;
mod types;

pub use client::{PokeApiClient, PokeApiConfig};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to the remote catalog.
#[derive(Debug, Error)]
pub enum PokeApiError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Trait for remote creature sources.
///
/// Implemented by `PokeApiClient` for the real API and by
/// `testing::MockCreatureSource` for tests.
#[async_trait]
pub trait CreatureSource: Send + Sync {
    /// Fetch one page of summary references starting at `offset`.
    async fn list_page(&self, offset: u32, limit: u32) -> Result<SummaryPage, PokeApiError>;

    /// Fetch the full detail payload for a creature by name or numeric id.
    async fn get_creature(&self, name_or_id: &str) -> Result<Creature, PokeApiError>;

    /// Fetch the flat list of all known creature names, up to `limit`.
    ///
    /// Used once at startup to seed the suggestion name index.
    async fn list_names(&self, limit: u32) -> Result<Vec<String>, PokeApiError>;
}
