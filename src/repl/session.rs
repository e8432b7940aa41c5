//! Session state
//!
//! Everything the REPL remembers between commands.

use std::collections::BTreeMap;

use crate::models::{LocationAreaPage, Pokemon};

/// Pagination cursor, player position, and caught creatures.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// URL of the next location page; None before the first `map` and on the last page
    pub next_page: Option<String>,
    /// URL of the previous location page; None on the first page
    pub previous_page: Option<String>,
    /// Location area the player is currently exploring
    pub current_location: String,
    /// Caught creatures by name
    pub pokedex: BTreeMap<String, Pokemon>,
}

impl Session {
    pub fn new(start_location: impl Into<String>) -> Self {
        Self {
            current_location: start_location.into(),
            ..Self::default()
        }
    }

    /// Moves the pagination cursor to the page just displayed.
    pub fn record_page(&mut self, page: &LocationAreaPage) {
        self.next_page = page.next.clone();
        self.previous_page = page.previous.clone();
    }

    /// Stores a caught creature under the name the player used for it.
    pub fn record_catch(&mut self, name: impl Into<String>, pokemon: Pokemon) {
        self.pokedex.insert(name.into(), pokemon);
    }

    pub fn caught(&self, name: &str) -> Option<&Pokemon> {
        self.pokedex.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(next: Option<&str>, previous: Option<&str>) -> LocationAreaPage {
        LocationAreaPage {
            count: 0,
            next: next.map(str::to_string),
            previous: previous.map(str::to_string),
            results: Vec::new(),
        }
    }

    #[test]
    fn test_new_session() {
        let session = Session::new("canalave-city-area");
        assert_eq!(session.current_location, "canalave-city-area");
        assert!(session.next_page.is_none());
        assert!(session.previous_page.is_none());
        assert!(session.pokedex.is_empty());
    }

    #[test]
    fn test_record_page_replaces_cursor() {
        let mut session = Session::new("start");

        session.record_page(&page(Some("p2"), None));
        assert_eq!(session.next_page.as_deref(), Some("p2"));
        assert!(session.previous_page.is_none());

        session.record_page(&page(None, Some("p1")));
        assert!(session.next_page.is_none());
        assert_eq!(session.previous_page.as_deref(), Some("p1"));
    }

    #[test]
    fn test_record_catch() {
        let mut session = Session::new("start");
        let pokemon: Pokemon =
            serde_json::from_str(r#"{"id": 25, "name": "pikachu"}"#).unwrap();

        session.record_catch("pikachu", pokemon);

        assert!(session.caught("pikachu").is_some());
        assert!(session.caught("raichu").is_none());
    }

    #[test]
    fn test_record_catch_keeps_lookup_name() {
        let mut session = Session::new("start");
        let pokemon: Pokemon =
            serde_json::from_str(r#"{"id": 72, "name": "tentacool"}"#).unwrap();

        session.record_catch("72", pokemon);

        assert_eq!(session.caught("72").map(|p| p.name.as_str()), Some("tentacool"));
        assert!(session.caught("tentacool").is_none());
    }
}
