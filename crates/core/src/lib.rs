//! Core library for the Pokédex catalog service.
//!
//! Domain logic only: the PokeAPI client, the incremental catalog loader,
//! the search/suggestion flow, ephemeral caught tracking, configuration and
//! metrics. The HTTP surface lives in the server crate.

pub mod catalog;
pub mod collection;
pub mod config;
pub mod metrics;
pub mod pokeapi;
pub mod search;
pub mod testing;

pub use catalog::{CatalogEntry, CatalogLoader, Cursor, PageLoad};
pub use collection::{CaughtStatus, CaughtTracker, CollectionStats, Variant};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    ServerConfig,
};
pub use pokeapi::{
    Creature, CreatureSource, PokeApiClient, PokeApiConfig, PokeApiError, SpriteSet, SummaryPage,
    SummaryRef,
};
pub use search::{display_list, resolve_exact, NameIndex, DEFAULT_SUGGESTION_LIMIT};
