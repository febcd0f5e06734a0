//! Types for the accumulated catalog.

use serde::{Deserialize, Serialize};

use crate::pokeapi::{Creature, SpriteSet};

/// A single accumulated catalog entry.
///
/// Created when a page's detail fetch resolves, immutable afterwards.
/// Entries are keyed by name; the catalog never holds two entries with the
/// same name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Creature name (unique key).
    pub name: String,
    /// Front/back and shiny sprite URLs.
    #[serde(default)]
    pub sprites: SpriteSet,
    /// Type tags in slot order.
    #[serde(default)]
    pub types: Vec<String>,
}

impl From<Creature> for CatalogEntry {
    fn from(c: Creature) -> Self {
        Self {
            name: c.name,
            sprites: c.sprites,
            types: c.types,
        }
    }
}

/// Pagination cursor.
///
/// `offset` only ever grows; `has_more` flips to `false` exactly once, when
/// the source reports an empty batch or a null next-page link.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cursor {
    pub offset: u32,
    pub has_more: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            offset: 0,
            has_more: true,
        }
    }
}

/// Outcome of a page-load trigger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "appended")]
pub enum PageLoad {
    /// The page resolved and `n` new entries were appended (already-present
    /// names are skipped and not counted).
    Appended(usize),
    /// A load was already in flight; no remote call was made.
    AlreadyLoading,
    /// The source is exhausted; no remote call was made (or the source just
    /// returned an empty batch).
    Exhausted,
    /// The page fetch or one of its detail fetches failed; the whole page
    /// was discarded and the cursor left untouched.
    Failed,
}
