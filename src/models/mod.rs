//! Response models for the remote catalog
//!
//! This module defines the subset of PokeAPI response bodies the client
//! decodes. Unknown fields are ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{LocationAreaEncounter, Pokemon, PokemonStat, PokemonType};
