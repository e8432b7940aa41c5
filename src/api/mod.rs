//! API Module
//!
//! Client side of the remote catalog. All requests go through the
//! expiring response cache.
//!
//! # Endpoints
//! - `GET /location-area/` - Paged location area listing
//! - `GET /location-area/{name}` - Area detail with encounters
//! - `GET /pokemon/{name}` - Creature detail
//! - `GET /pokemon/{name}/encounters` - Areas where a creature appears

pub mod client;

pub use client::PokeApiClient;
