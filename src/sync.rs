//! URL state synchronization: load once at startup, write after every
//! mutation.
//!
//! The host page's address bar is modeled by the [`HostLocation`] trait; the
//! component never touches a real browser API directly. Loading happens once,
//! before the first render (the component constructor drives this, see
//! [`crate::customizer`]); writing uses replace semantics, so sharing a
//! character never pollutes the history stack.
//!
//! Every parse failure on the load path degrades to "keep the current
//! value". Fail-open, never fail-closed.

use tracing::debug;

use crate::character::{CharacterState, HatStyle};
use crate::query::{self, QueryParams};
use crate::seed;

// ============================================================================
// HostLocation
// ============================================================================

/// The page-location collaborator: the one seam between the component and
/// the host environment's address bar.
pub trait HostLocation {
    /// The current query string, without the leading `?`.
    fn query(&self) -> String;

    /// Replaces the query portion of the current URL in place: no
    /// navigation, no new history entry, no reload.
    fn replace_query(&mut self, query: &str);

    /// The full shareable URL (origin + path + current query string).
    fn href(&self) -> String;
}

/// An in-memory [`HostLocation`] for tests, doctests, and headless hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLocation {
    origin: String,
    path: String,
    query: String,
}

impl MemoryLocation {
    /// A location with an empty query string.
    pub fn new(origin: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_query(origin, path, "")
    }

    /// A location primed with an incoming query string (no leading `?`).
    pub fn with_query(
        origin: impl Into<String>,
        path: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            path: path.into(),
            query: query.into(),
        }
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("https://example.com", "/")
    }
}

impl HostLocation for MemoryLocation {
    fn query(&self) -> String {
        self.query.clone()
    }

    fn replace_query(&mut self, query: &str) {
        self.query = query.to_owned();
    }

    fn href(&self) -> String {
        if self.query.is_empty() {
            format!("{}{}", self.origin, self.path)
        } else {
            format!("{}{}?{}", self.origin, self.path, self.query)
        }
    }
}

// ============================================================================
// Load / write policy
// ============================================================================

/// Applies an incoming query string onto `state`.
///
/// - `seed` is applied iff it is exactly nine decimal digits (the
///   [`crate::seed`] gate); otherwise the seed-bearing attributes keep
///   their current values.
/// - `fire`, `walking`, `circle` become true iff their raw value is the
///   literal `"true"`; any other value, including absence, reads as false.
/// - `hat` overrides the current style only when present, non-empty, and a
///   recognized style name.
pub fn load_from_query(state: &mut CharacterState, query_string: &str) {
    let params = QueryParams::parse(query_string);

    if let Some(incoming) = params.seed.as_deref() {
        if seed::apply(state, incoming) {
            debug!(seed = incoming, "loaded seed from url");
        }
    }

    state.fire = query::truthy(params.fire.as_deref());
    state.walking = query::truthy(params.walking.as_deref());
    state.circle = query::truthy(params.circle.as_deref());

    if let Some(name) = params.hat.as_deref().filter(|name| !name.is_empty()) {
        match HatStyle::from_name(name) {
            Some(style) => state.hat = style,
            None => debug!(hat = name, "unrecognized hat style, keeping current"),
        }
    }
}

/// Serializes `state` under the schema presence rules and replaces the
/// location's query portion.
pub fn write_url<L: HostLocation>(state: &CharacterState, location: &mut L) {
    let query = QueryParams::from_state(state).to_query_string();
    debug!(%query, "replacing url query");
    location.replace_query(&query);
}

/// Re-derives the seed and writes the URL.
///
/// Called after any mutation of a seed-bearing attribute. Mutations to
/// `hat`, `fire`, `walking`, or `circle` skip the derivation and call
/// [`write_url`] directly; the seed cannot have changed.
pub fn recompute_and_write<L: HostLocation>(state: &CharacterState, location: &mut L) {
    debug!(seed = %state.seed(), "recomputed seed");
    write_url(state, location);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_location_href_includes_query_only_when_present() {
        let mut location = MemoryLocation::new("https://example.com", "/rpg");
        assert_eq!(location.href(), "https://example.com/rpg");

        location.replace_query("seed=010000000&hat=none");
        assert_eq!(
            location.href(),
            "https://example.com/rpg?seed=010000000&hat=none"
        );
    }

    #[test]
    fn load_applies_a_nine_digit_seed() {
        let mut state = CharacterState::default();
        load_from_query(&mut state, "seed=987654321");

        assert_eq!(state.accessories, 9);
        assert_eq!(state.hat_color, 1);
        assert_eq!(state.seed(), "987654321");
    }

    #[test]
    fn load_with_absent_or_malformed_seed_keeps_defaults() {
        for query in ["", "hat=ninja", "seed=123", "seed=1234567890", "seed=12345678x"] {
            let mut state = CharacterState::default();
            load_from_query(&mut state, query);
            assert_eq!(state.seed(), "010000000", "query: {query}");
        }
    }

    #[test]
    fn load_booleans_require_the_exact_literal() {
        let mut state = CharacterState::default();
        load_from_query(&mut state, "fire=maybe&walking=True&circle=true");

        assert!(!state.fire);
        assert!(!state.walking);
        assert!(state.circle);
    }

    #[test]
    fn load_hat_overrides_only_on_recognized_names() {
        let mut state = CharacterState::default();
        load_from_query(&mut state, "hat=cowboy");
        assert_eq!(state.hat, HatStyle::Cowboy);

        load_from_query(&mut state, "hat=fedora");
        assert_eq!(state.hat, HatStyle::Cowboy);

        load_from_query(&mut state, "hat=");
        assert_eq!(state.hat, HatStyle::Cowboy);
    }

    #[test]
    fn write_replaces_the_whole_query() {
        let mut state = CharacterState::default();
        let mut location =
            MemoryLocation::with_query("https://example.com", "/", "stale=1&seed=999999999");

        write_url(&state, &mut location);
        assert_eq!(location.query(), "seed=010000000&hat=none");

        state.fire = true;
        write_url(&state, &mut location);
        assert_eq!(location.query(), "seed=010000000&hat=none&fire=true");
    }

    #[test]
    fn recompute_and_write_reflects_fresh_mutations() {
        let mut state = CharacterState::default();
        let mut location = MemoryLocation::default();

        state.hair = 7;
        recompute_and_write(&state, &mut location);
        assert_eq!(location.query(), "seed=010070000&hat=none");
    }

    #[test]
    fn load_then_write_round_trips_a_shared_url() {
        let incoming = "seed=050000003&hat=ninja&walking=true";
        let mut state = CharacterState::default();
        load_from_query(&mut state, incoming);

        let mut location = MemoryLocation::default();
        write_url(&state, &mut location);
        assert_eq!(location.query(), incoming);
    }
}
