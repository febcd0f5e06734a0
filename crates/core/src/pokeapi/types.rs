//! Domain types for remote catalog payloads.

use serde::{Deserialize, Serialize};

/// A summary reference from the paginated list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryRef {
    /// Creature name (unique key).
    pub name: String,
    /// URL of the detail sub-resource.
    pub url: String,
}

/// One page of summary references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryPage {
    /// References in source order.
    pub refs: Vec<SummaryRef>,
    /// URL of the next page, `None` when the source is exhausted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl SummaryPage {
    /// Whether the source reported this as the last page.
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// Sprite image URLs for a creature.
///
/// Any of these can be missing for creatures without rendered artwork.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpriteSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_shiny: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_shiny: Option<String>,
}

/// Full detail payload for a single creature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Creature {
    /// National dex id.
    pub id: u32,
    /// Creature name (unique key, lowercase in the source).
    pub name: String,
    /// Sprite image URLs.
    #[serde(default)]
    pub sprites: SpriteSet,
    /// Type tag names in slot order.
    #[serde(default)]
    pub types: Vec<String>,
    /// Height in decimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Weight in hectograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl Creature {
    /// The primary type tag, when the source provided any.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_page_is_last() {
        let page = SummaryPage {
            refs: vec![],
            next: None,
        };
        assert!(page.is_last());

        let page = SummaryPage {
            refs: vec![],
            next: Some("https://pokeapi.co/api/v2/pokemon?offset=20&limit=20".to_string()),
        };
        assert!(!page.is_last());
    }

    #[test]
    fn test_creature_primary_type() {
        let creature = Creature {
            id: 6,
            name: "charizard".to_string(),
            sprites: SpriteSet::default(),
            types: vec!["fire".to_string(), "flying".to_string()],
            height: Some(17),
            weight: Some(905),
        };
        assert_eq!(creature.primary_type(), Some("fire"));

        let typeless = Creature {
            id: 0,
            name: "missingno".to_string(),
            sprites: SpriteSet::default(),
            types: vec![],
            height: None,
            weight: None,
        };
        assert_eq!(typeless.primary_type(), None);
    }
}
