//! Character state: the set of customization attributes behind the seed.
//!
//! [`CharacterState`] is the in-memory record the rest of the crate revolves
//! around. Nine digit-valued attributes participate in the seed string (see
//! [`crate::seed`]); the hat style and the three effect booleans travel in
//! the URL on their own.
//!
//! The state serializes to a JSON profile for sending between frontend and
//! backend processes:
//!
//! ```
//! use rpg_customizer::{CharacterState, HatStyle};
//!
//! let state = CharacterState {
//!     base: 5,
//!     hat: HatStyle::Ninja,
//!     ..CharacterState::default()
//! };
//!
//! let json = state.to_json().unwrap();
//! let restored = CharacterState::from_json(&json).unwrap();
//! assert_eq!(restored, state);
//! ```

use serde::{Deserialize, Serialize};

use crate::seed;

// ============================================================================
// HatStyle
// ============================================================================

/// The enumerated hat styles, including the `none` sentinel.
///
/// Wire names (URL parameter values, JSON) are the lowercase variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "tsify",
    derive(tsify_next::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub enum HatStyle {
    /// No hat; still written to the URL explicitly.
    #[default]
    None,
    Bunny,
    Coffee,
    Construction,
    Cowboy,
    Education,
    Knight,
    Ninja,
    Party,
    Pirate,
    Watermelon,
}

impl HatStyle {
    /// Every style, in display order.
    pub const ALL: [HatStyle; 11] = [
        HatStyle::None,
        HatStyle::Bunny,
        HatStyle::Coffee,
        HatStyle::Construction,
        HatStyle::Cowboy,
        HatStyle::Education,
        HatStyle::Knight,
        HatStyle::Ninja,
        HatStyle::Party,
        HatStyle::Pirate,
        HatStyle::Watermelon,
    ];

    /// The wire name of this style (`"none"`, `"ninja"`, ...).
    pub fn as_name(self) -> &'static str {
        match self {
            HatStyle::None => "none",
            HatStyle::Bunny => "bunny",
            HatStyle::Coffee => "coffee",
            HatStyle::Construction => "construction",
            HatStyle::Cowboy => "cowboy",
            HatStyle::Education => "education",
            HatStyle::Knight => "knight",
            HatStyle::Ninja => "ninja",
            HatStyle::Party => "party",
            HatStyle::Pirate => "pirate",
            HatStyle::Watermelon => "watermelon",
        }
    }

    /// Looks up a style by its wire name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<HatStyle> {
        Self::ALL.iter().copied().find(|style| style.as_name() == name)
    }
}

impl std::fmt::Display for HatStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_name())
    }
}

// ============================================================================
// CharacterState
// ============================================================================

/// The full customization state of one character.
///
/// The nine `u8` attributes are each expected to hold a single decimal digit
/// (0-9); `base` is further documented as one of {1, 5}. Neither constraint
/// is enforced on assignment: out-of-range values are accepted and carried
/// as-is, and the URL layer simply stops emitting a `seed` parameter once
/// the derived seed is no longer nine digits. See [`crate::seed`] for the
/// permissive-decode contract.
///
/// The seed is *derived*, not stored: [`CharacterState::seed`] recomputes it
/// from the nine attributes on every call, so it can never drift from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "tsify",
    derive(tsify_next::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct CharacterState {
    pub accessories: u8,
    pub base: u8,
    pub face: u8,
    pub face_item: u8,
    pub hair: u8,
    pub pants: u8,
    pub shirt: u8,
    pub skin: u8,
    pub hat_color: u8,

    /// Hat style; not part of the seed.
    pub hat: HatStyle,

    /// Effect toggles; not part of the seed.
    pub fire: bool,
    pub walking: bool,
    pub circle: bool,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self {
            accessories: 0,
            base: 1,
            face: 0,
            face_item: 0,
            hair: 0,
            pants: 0,
            shirt: 0,
            skin: 0,
            hat_color: 0,
            hat: HatStyle::None,
            fire: false,
            walking: false,
            circle: false,
        }
    }
}

impl CharacterState {
    /// Creates a character with the fixed defaults (seed `"010000000"`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the seed string from the nine seed-bearing attributes.
    ///
    /// Exactly nine characters whenever every attribute is a single digit.
    pub fn seed(&self) -> String {
        seed::encode(self)
    }

    /// Serializes the state to a JSON profile.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the state to a pretty-printed JSON profile.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a state from a JSON profile. Missing fields fall back
    /// to their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_component_contract() {
        let state = CharacterState::default();

        assert_eq!(state.accessories, 0);
        assert_eq!(state.base, 1);
        assert_eq!(state.face, 0);
        assert_eq!(state.face_item, 0);
        assert_eq!(state.hair, 0);
        assert_eq!(state.pants, 0);
        assert_eq!(state.shirt, 0);
        assert_eq!(state.skin, 0);
        assert_eq!(state.hat_color, 0);
        assert_eq!(state.hat, HatStyle::None);
        assert!(!state.fire);
        assert!(!state.walking);
        assert!(!state.circle);

        assert_eq!(state.seed(), "010000000");
    }

    #[test]
    fn hat_names_round_trip() {
        for style in HatStyle::ALL {
            assert_eq!(HatStyle::from_name(style.as_name()), Some(style));
        }
        assert_eq!(HatStyle::from_name("fedora"), None);
        assert_eq!(HatStyle::from_name(""), None);
    }

    #[test]
    fn hat_display_matches_wire_name() {
        assert_eq!(HatStyle::Ninja.to_string(), "ninja");
        assert_eq!(HatStyle::None.to_string(), "none");
    }

    #[test]
    fn json_round_trip() {
        let state = CharacterState {
            accessories: 2,
            base: 5,
            hat_color: 9,
            hat: HatStyle::Pirate,
            fire: true,
            ..CharacterState::default()
        };

        let json = state.to_json().unwrap();
        let restored = CharacterState::from_json(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn json_uses_camel_case_keys_and_lowercase_hats() {
        let state = CharacterState {
            face_item: 3,
            hat: HatStyle::Watermelon,
            ..CharacterState::default()
        };

        let json = state.to_json().unwrap();
        assert!(json.contains("\"faceItem\":3"));
        assert!(json.contains("\"hatColor\":0"));
        assert!(json.contains("\"watermelon\""));
    }

    #[test]
    fn empty_json_profile_deserializes_to_defaults() {
        let state = CharacterState::from_json("{}").unwrap();
        assert_eq!(state, CharacterState::default());
    }
}
