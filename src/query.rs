//! Query-parameter wire schema for shareable character URLs.
//!
//! The schema is small and asymmetric on purpose:
//!
//! | param     | presence rule                                  |
//! |-----------|------------------------------------------------|
//! | `seed`    | present iff the derived seed is nine digits    |
//! | `hat`     | always present, including the `none` sentinel  |
//! | `fire`    | present only when true, as the literal `true`  |
//! | `walking` | present only when true, as the literal `true`  |
//! | `circle`  | present only when true, as the literal `true`  |
//!
//! A false boolean is represented by the *absence* of its parameter; on the
//! read side anything other than the literal `"true"` (including absence)
//! reads as false, so the omission round-trips.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::character::CharacterState;
use crate::seed;

/// Value carried by boolean parameters when, and only when, they are set.
const TRUE_LITERAL: &str = "true";

/// Interprets a raw boolean parameter value: `true` iff it is exactly the
/// literal `"true"`.
pub fn truthy(value: Option<&str>) -> bool {
    value == Some(TRUE_LITERAL)
}

// ============================================================================
// QueryParams
// ============================================================================

/// The raw query-parameter set, one field per schema parameter, declared in
/// schema order so serialization emits them in that order.
///
/// Values are kept as uninterpreted strings here; policy (the length gate on
/// `seed`, the `"true"` literal, hat-name lookup) lives in [`crate::sync`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fire: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walking: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle: Option<String>,
}

impl QueryParams {
    /// Parses a query string (no leading `?`). Unknown parameters are
    /// ignored; a string that does not parse at all degrades to the empty
    /// parameter set rather than failing.
    pub fn parse(query: &str) -> QueryParams {
        match serde_urlencoded::from_str(query) {
            Ok(params) => params,
            Err(err) => {
                debug!(%err, query, "unparseable query string, treating as empty");
                QueryParams::default()
            }
        }
    }

    /// Builds the parameter set for `state`, applying the presence rules.
    pub fn from_state(state: &CharacterState) -> QueryParams {
        let derived = state.seed();
        QueryParams {
            seed: seed::is_valid(&derived).then_some(derived),
            hat: Some(state.hat.as_name().to_owned()),
            fire: state.fire.then(|| TRUE_LITERAL.to_owned()),
            walking: state.walking.then(|| TRUE_LITERAL.to_owned()),
            circle: state.circle.then(|| TRUE_LITERAL.to_owned()),
        }
    }

    /// Serializes to a query string in schema order, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        match serde_urlencoded::to_string(self) {
            Ok(query) => query,
            Err(err) => {
                debug!(%err, "query serialization failed");
                String::new()
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::HatStyle;

    #[test]
    fn default_state_serializes_seed_and_hat_only() {
        let params = QueryParams::from_state(&CharacterState::default());
        assert_eq!(params.to_query_string(), "seed=010000000&hat=none");
    }

    #[test]
    fn true_booleans_are_written_as_the_literal() {
        let state = CharacterState {
            fire: true,
            circle: true,
            hat: HatStyle::Ninja,
            ..CharacterState::default()
        };

        let query = QueryParams::from_state(&state).to_query_string();
        assert_eq!(query, "seed=010000000&hat=ninja&fire=true&circle=true");
    }

    #[test]
    fn false_booleans_are_absent_not_false() {
        let query = QueryParams::from_state(&CharacterState::default()).to_query_string();
        assert!(!query.contains("fire"));
        assert!(!query.contains("walking"));
        assert!(!query.contains("circle"));
        assert!(!query.contains("false"));
    }

    #[test]
    fn seed_is_omitted_when_an_attribute_is_out_of_range() {
        let state = CharacterState {
            hair: 42,
            ..CharacterState::default()
        };

        let params = QueryParams::from_state(&state);
        assert_eq!(params.seed, None);
        assert_eq!(params.to_query_string(), "hat=none");
    }

    #[test]
    fn parse_reads_raw_values() {
        let params = QueryParams::parse("seed=050000003&hat=ninja&fire=maybe");
        assert_eq!(params.seed.as_deref(), Some("050000003"));
        assert_eq!(params.hat.as_deref(), Some("ninja"));
        assert_eq!(params.fire.as_deref(), Some("maybe"));
        assert_eq!(params.walking, None);
    }

    #[test]
    fn parse_ignores_unknown_parameters() {
        let params = QueryParams::parse("seed=123456789&utm_source=share&hat=party");
        assert_eq!(params.seed.as_deref(), Some("123456789"));
        assert_eq!(params.hat.as_deref(), Some("party"));
    }

    #[test]
    fn parse_of_empty_query_is_empty() {
        assert_eq!(QueryParams::parse(""), QueryParams::default());
    }

    #[test]
    fn truthy_accepts_only_the_exact_literal() {
        assert!(truthy(Some("true")));
        assert!(!truthy(Some("TRUE")));
        assert!(!truthy(Some("maybe")));
        assert!(!truthy(Some("")));
        assert!(!truthy(None));
    }

    #[test]
    fn round_trip_through_the_wire_format() {
        let state = CharacterState {
            base: 5,
            hat_color: 3,
            hat: HatStyle::Ninja,
            walking: true,
            ..CharacterState::default()
        };

        let query = QueryParams::from_state(&state).to_query_string();
        let reparsed = QueryParams::parse(&query);
        assert_eq!(reparsed, QueryParams::from_state(&state));
    }
}
