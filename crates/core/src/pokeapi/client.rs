//! PokeAPI HTTP client.
//!
//! PokeAPI is a keyless public API; the documented fair-use policy asks
//! clients to cache aggressively, which the catalog loader honors by never
//! re-fetching an accumulated entry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{Creature, SpriteSet, SummaryPage, SummaryRef};
use super::{CreatureSource, PokeApiError};

/// PokeAPI client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokeApiConfig {
    /// Base URL (default: https://pokeapi.co/api/v2).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// Upper bound on the one-shot name list request (default: 10000).
    #[serde(default = "default_name_index_limit")]
    pub name_index_limit: u32,
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_name_index_limit() -> u32 {
    10_000
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            name_index_limit: default_name_index_limit(),
        }
    }
}

/// Reqwest-backed PokeAPI client.
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a new client from configuration.
    pub fn new(config: &PokeApiConfig) -> Result<Self, PokeApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CreatureSource for PokeApiClient {
    async fn list_page(&self, offset: u32, limit: u32) -> Result<SummaryPage, PokeApiError> {
        let url = format!("{}/pokemon", self.base_url);

        debug!(offset, limit, "PokeAPI list page");

        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit.to_string()), ("offset", offset.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PokeApiError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let list: ListResponse = response.json().await.map_err(|e| {
            PokeApiError::ParseError(format!("Failed to parse list response: {}", e))
        })?;

        Ok(list.into())
    }

    async fn get_creature(&self, name_or_id: &str) -> Result<Creature, PokeApiError> {
        let url = format!(
            "{}/pokemon/{}",
            self.base_url,
            urlencoding::encode(name_or_id)
        );

        debug!(creature = name_or_id, "PokeAPI get creature");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == 404 {
            return Err(PokeApiError::NotFound(name_or_id.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PokeApiError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let detail: DetailResponse = response.json().await.map_err(|e| {
            PokeApiError::ParseError(format!("Failed to parse detail response: {}", e))
        })?;

        Ok(detail.into())
    }

    async fn list_names(&self, limit: u32) -> Result<Vec<String>, PokeApiError> {
        let page = self.list_page(0, limit).await?;
        Ok(page.refs.into_iter().map(|r| r.name).collect())
    }
}

// ============================================================================
// PokeAPI Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct ListResponse {
    results: Vec<ListResult>,
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListResult {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    id: u32,
    name: String,
    #[serde(default)]
    sprites: SpritesResult,
    #[serde(default)]
    types: Vec<TypeSlot>,
    height: Option<u32>,
    weight: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct SpritesResult {
    front_default: Option<String>,
    back_default: Option<String>,
    front_shiny: Option<String>,
    back_shiny: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    type_ref: TypeRef,
}

#[derive(Debug, Deserialize)]
struct TypeRef {
    name: String,
}

// ============================================================================
// Conversions
// ============================================================================

impl From<ListResponse> for SummaryPage {
    fn from(r: ListResponse) -> Self {
        Self {
            refs: r
                .results
                .into_iter()
                .map(|entry| SummaryRef {
                    name: entry.name,
                    url: entry.url,
                })
                .collect(),
            next: r.next,
        }
    }
}

impl From<DetailResponse> for Creature {
    fn from(d: DetailResponse) -> Self {
        Self {
            id: d.id,
            name: d.name,
            sprites: SpriteSet {
                front: d.sprites.front_default,
                back: d.sprites.back_default,
                front_shiny: d.sprites.front_shiny,
                back_shiny: d.sprites.back_shiny,
            },
            types: d.types.into_iter().map(|t| t.type_ref.name).collect(),
            height: d.height,
            weight: d.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_conversion() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }"#;

        let list: ListResponse = serde_json::from_str(json).unwrap();
        let page: SummaryPage = list.into();

        assert_eq!(page.refs.len(), 2);
        assert_eq!(page.refs[0].name, "bulbasaur");
        assert_eq!(page.refs[1].name, "ivysaur");
        assert!(!page.is_last());
    }

    #[test]
    fn test_list_response_last_page() {
        let json = r#"{"count": 2, "next": null, "previous": null, "results": []}"#;
        let list: ListResponse = serde_json::from_str(json).unwrap();
        let page: SummaryPage = list.into();
        assert!(page.is_last());
        assert!(page.refs.is_empty());
    }

    #[test]
    fn test_detail_response_conversion() {
        let json = r#"{
            "id": 6,
            "name": "charizard",
            "height": 17,
            "weight": 905,
            "sprites": {
                "front_default": "https://example.test/6.png",
                "back_default": "https://example.test/back/6.png",
                "front_shiny": "https://example.test/shiny/6.png",
                "back_shiny": null
            },
            "types": [
                {"slot": 1, "type": {"name": "fire", "url": "https://pokeapi.co/api/v2/type/10/"}},
                {"slot": 2, "type": {"name": "flying", "url": "https://pokeapi.co/api/v2/type/3/"}}
            ]
        }"#;

        let detail: DetailResponse = serde_json::from_str(json).unwrap();
        let creature: Creature = detail.into();

        assert_eq!(creature.id, 6);
        assert_eq!(creature.name, "charizard");
        assert_eq!(creature.types, vec!["fire", "flying"]);
        assert_eq!(
            creature.sprites.front.as_deref(),
            Some("https://example.test/6.png")
        );
        assert!(creature.sprites.back_shiny.is_none());
        assert_eq!(creature.height, Some(17));
    }

    #[test]
    fn test_detail_response_missing_sprites() {
        // Sprites section can be absent entirely for some forms.
        let json = r#"{"id": 10001, "name": "deoxys-attack", "height": null, "weight": null}"#;
        let detail: DetailResponse = serde_json::from_str(json).unwrap();
        let creature: Creature = detail.into();

        assert_eq!(creature.sprites, SpriteSet::default());
        assert!(creature.types.is_empty());
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let client = PokeApiClient::new(&PokeApiConfig {
            base_url: "https://pokeapi.co/api/v2/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.base_url, "https://pokeapi.co/api/v2");
    }
}
