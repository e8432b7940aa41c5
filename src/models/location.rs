//! Location area models
//!
//! Shapes of the `location-area` listing and detail responses.

use serde::{Deserialize, Serialize};

/// A `{ name, url }` reference to another catalog resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of `GET /location-area/`
///
/// `next` and `previous` are absolute page URLs, absent at either end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationAreaPage {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// Body of `GET /location-area/{name}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationAreaDetail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub game_index: u32,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A creature that can be met in a location area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationAreaDetail {
    /// Names of every creature encounterable here, in response order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}
