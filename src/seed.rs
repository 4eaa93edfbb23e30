//! Seed codec: the fixed-order digit-string encoding of a character.
//!
//! The seed packs the nine digit-valued attributes into one compact string,
//! one decimal digit per attribute, in the order given by
//! [`SeedSlot::ORDER`]. The codec is pure and deterministic:
//!
//! ```
//! use rpg_customizer::{seed, CharacterState};
//!
//! let state = CharacterState { base: 5, hat_color: 3, ..CharacterState::default() };
//! assert_eq!(seed::encode(&state), "050000003");
//!
//! let mut restored = CharacterState::default();
//! assert!(seed::apply(&mut restored, "050000003"));
//! assert_eq!(restored.base, 5);
//! assert_eq!(restored.hat_color, 3);
//! ```
//!
//! Decoding is deliberately permissive: the only acceptance gate is "exactly
//! nine ASCII decimal digits". Values outside an attribute's declared domain
//! (a `base` other than 1 or 5, say) pass through untouched. A seed that
//! fails the gate is rejected as a whole; the caller's state is left exactly
//! as it was.

use tracing::debug;

use crate::character::CharacterState;

/// Length of a well-formed seed string.
pub const SEED_LEN: usize = 9;

// ============================================================================
// SeedSlot
// ============================================================================

/// One of the nine seed-bearing attributes, addressed by its position in
/// the seed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedSlot {
    Accessories,
    Base,
    Face,
    FaceItem,
    Hair,
    Pants,
    Shirt,
    Skin,
    HatColor,
}

impl SeedSlot {
    /// Encoding order: `ORDER[i]` owns character `i` of the seed.
    pub const ORDER: [SeedSlot; SEED_LEN] = [
        SeedSlot::Accessories,
        SeedSlot::Base,
        SeedSlot::Face,
        SeedSlot::FaceItem,
        SeedSlot::Hair,
        SeedSlot::Pants,
        SeedSlot::Shirt,
        SeedSlot::Skin,
        SeedSlot::HatColor,
    ];

    /// Reads this slot's attribute from `state`.
    pub fn get(self, state: &CharacterState) -> u8 {
        match self {
            SeedSlot::Accessories => state.accessories,
            SeedSlot::Base => state.base,
            SeedSlot::Face => state.face,
            SeedSlot::FaceItem => state.face_item,
            SeedSlot::Hair => state.hair,
            SeedSlot::Pants => state.pants,
            SeedSlot::Shirt => state.shirt,
            SeedSlot::Skin => state.skin,
            SeedSlot::HatColor => state.hat_color,
        }
    }

    /// Writes this slot's attribute on `state`.
    pub fn set(self, state: &mut CharacterState, value: u8) {
        match self {
            SeedSlot::Accessories => state.accessories = value,
            SeedSlot::Base => state.base = value,
            SeedSlot::Face => state.face = value,
            SeedSlot::FaceItem => state.face_item = value,
            SeedSlot::Hair => state.hair = value,
            SeedSlot::Pants => state.pants = value,
            SeedSlot::Shirt => state.shirt = value,
            SeedSlot::Skin => state.skin = value,
            SeedSlot::HatColor => state.hat_color = value,
        }
    }
}

// ============================================================================
// Codec
// ============================================================================

/// Encodes the nine seed-bearing attributes in [`SeedSlot::ORDER`], each in
/// decimal, with no separators.
///
/// For in-range (single digit) attributes the result is exactly
/// [`SEED_LEN`] characters and `decode(&encode(state))` restores the same
/// nine values. An out-of-range attribute contributes more than one
/// character, which makes the result fail [`is_valid`]; the URL layer then
/// drops the `seed` parameter rather than writing a malformed one.
pub fn encode(state: &CharacterState) -> String {
    let mut seed = String::with_capacity(SEED_LEN);
    for slot in SeedSlot::ORDER {
        seed.push_str(&slot.get(state).to_string());
    }
    seed
}

/// Returns true when `seed` is exactly nine ASCII decimal digits.
pub fn is_valid(seed: &str) -> bool {
    seed.len() == SEED_LEN && seed.bytes().all(|b| b.is_ascii_digit())
}

/// Decodes a seed string into the nine attribute values, positionally.
///
/// Rejected inputs (wrong length, or any character that does not parse as a
/// base-10 digit) yield `None`; nothing is partially applied and nothing
/// panics. No range validation happens beyond digit-ness.
pub fn decode(seed: &str) -> Option<[u8; SEED_LEN]> {
    if !is_valid(seed) {
        return None;
    }
    let mut digits = [0u8; SEED_LEN];
    for (digit, byte) in digits.iter_mut().zip(seed.bytes()) {
        *digit = byte - b'0';
    }
    Some(digits)
}

/// Decodes `seed` and assigns the digits onto `state`.
///
/// Returns whether the seed was accepted; on rejection `state` is untouched.
pub fn apply(state: &mut CharacterState, seed: &str) -> bool {
    match decode(seed) {
        Some(digits) => {
            for (slot, digit) in SeedSlot::ORDER.into_iter().zip(digits) {
                slot.set(state, digit);
            }
            true
        }
        None => {
            debug!(seed, "rejected malformed seed");
            false
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_uses_the_fixed_field_order() {
        let mut state = CharacterState::default();
        state.accessories = 1;
        state.base = 2;
        state.face = 3;
        state.face_item = 4;
        state.hair = 5;
        state.pants = 6;
        state.shirt = 7;
        state.skin = 8;
        state.hat_color = 9;

        assert_eq!(encode(&state), "123456789");
    }

    #[test]
    fn decode_then_encode_is_identity_on_valid_seeds() {
        for seed in ["000000000", "010000000", "987654321", "050000003"] {
            let mut state = CharacterState::default();
            assert!(apply(&mut state, seed));
            assert_eq!(encode(&state), seed);
        }
    }

    #[test]
    fn encode_then_decode_restores_the_nine_fields() {
        let state = CharacterState {
            accessories: 9,
            base: 5,
            face: 2,
            face_item: 7,
            hair: 1,
            pants: 4,
            shirt: 8,
            skin: 3,
            hat_color: 6,
            ..CharacterState::default()
        };

        let mut restored = CharacterState::default();
        assert!(apply(&mut restored, &encode(&state)));
        assert_eq!(restored, state);
    }

    #[test]
    fn wrong_length_is_a_silent_no_op() {
        let mut state = CharacterState::default();
        let before = state.clone();

        assert!(!apply(&mut state, ""));
        assert!(!apply(&mut state, "12345678"));
        assert!(!apply(&mut state, "1234567890"));
        assert_eq!(state, before);
    }

    #[test]
    fn non_digit_characters_reject_the_whole_seed() {
        let mut state = CharacterState::default();
        let before = state.clone();

        assert!(!apply(&mut state, "12345678x"));
        assert!(!apply(&mut state, "12345678 "));
        assert!(!apply(&mut state, "-12345678"));
        assert_eq!(state, before);
    }

    #[test]
    fn out_of_declared_range_digits_pass_through() {
        // base is documented as {1, 5}, but the codec does not police that.
        let mut state = CharacterState::default();
        assert!(apply(&mut state, "090000000"));
        assert_eq!(state.base, 9);
    }

    #[test]
    fn out_of_range_attribute_invalidates_the_derived_seed() {
        let mut state = CharacterState::default();
        state.hair = 27;

        let seed = encode(&state);
        assert_eq!(seed, "0100270000");
        assert!(!is_valid(&seed));
    }

    #[test]
    fn slots_cover_every_seed_position() {
        let mut state = CharacterState::default();
        for (index, slot) in SeedSlot::ORDER.into_iter().enumerate() {
            slot.set(&mut state, index as u8);
        }
        assert_eq!(encode(&state), "012345678");
    }
}
