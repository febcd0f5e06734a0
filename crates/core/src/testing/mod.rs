//! Test doubles and fixtures.
//!
//! `MockCreatureSource` stands in for the remote catalog in unit and
//! integration tests; `fixtures` builds plausible payloads.

mod mock_source;

pub use mock_source::MockCreatureSource;

/// Fixture builders for tests.
pub mod fixtures {
    use crate::pokeapi::{Creature, SpriteSet, SummaryPage, SummaryRef};

    /// Build a creature with derived sprite URLs and a synthetic id.
    pub fn creature(name: &str, types: &[&str]) -> Creature {
        Creature {
            id: name.bytes().map(u32::from).sum(),
            name: name.to_string(),
            sprites: SpriteSet {
                front: Some(format!("https://sprites.test/{}/front.png", name)),
                back: Some(format!("https://sprites.test/{}/back.png", name)),
                front_shiny: Some(format!("https://sprites.test/{}/front-shiny.png", name)),
                back_shiny: Some(format!("https://sprites.test/{}/back-shiny.png", name)),
            },
            types: types.iter().map(|t| t.to_string()).collect(),
            height: Some(7),
            weight: Some(69),
        }
    }

    /// Build a summary page from bare names.
    pub fn summary_page(names: &[&str], next: Option<&str>) -> SummaryPage {
        SummaryPage {
            refs: names
                .iter()
                .map(|name| SummaryRef {
                    name: name.to_string(),
                    url: format!("https://pokeapi.test/api/v2/pokemon/{}/", name),
                })
                .collect(),
            next: next.map(|n| n.to_string()),
        }
    }
}
