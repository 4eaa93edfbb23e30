//! Input mutation gateway types: every UI-driven change flows through one
//! exhaustive match.
//!
//! Controls do not hand the component raw DOM events. Each call site builds
//! an [`InputSignal`] describing what kind of control fired (checkbox,
//! selection, numeric) together with its already-typed value, and names the
//! target attribute with a [`Field`]. Assignment then reduces to a single
//! match over `(field, signal)`: no property probing, no guessing.
//!
//! Consistent with the seed codec, assignment performs no range validation:
//! a numeric signal carrying 27 lands in the state as 27. Shapes that do
//! not fit (a checkbox signal aimed at `hair`, a selection that does not
//! parse) are silent no-ops.

use std::str::FromStr;

use tracing::debug;

use crate::character::{CharacterState, HatStyle};
use crate::seed::SeedSlot;

// ============================================================================
// Field
// ============================================================================

/// A customization attribute addressable by UI controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Accessories,
    Base,
    Face,
    FaceItem,
    Hair,
    Pants,
    Shirt,
    Skin,
    HatColor,
    Hat,
    Fire,
    Walking,
    Circle,
}

impl Field {
    /// Every field, seed-bearing attributes first.
    pub const ALL: [Field; 13] = [
        Field::Accessories,
        Field::Base,
        Field::Face,
        Field::FaceItem,
        Field::Hair,
        Field::Pants,
        Field::Shirt,
        Field::Skin,
        Field::HatColor,
        Field::Hat,
        Field::Fire,
        Field::Walking,
        Field::Circle,
    ];

    /// The control-facing name, camelCase as exposed to hosts.
    pub fn name(self) -> &'static str {
        match self {
            Field::Accessories => "accessories",
            Field::Base => "base",
            Field::Face => "face",
            Field::FaceItem => "faceItem",
            Field::Hair => "hair",
            Field::Pants => "pants",
            Field::Shirt => "shirt",
            Field::Skin => "skin",
            Field::HatColor => "hatColor",
            Field::Hat => "hat",
            Field::Fire => "fire",
            Field::Walking => "walking",
            Field::Circle => "circle",
        }
    }

    /// The seed position this field occupies, if it is seed-bearing.
    pub fn seed_slot(self) -> Option<SeedSlot> {
        match self {
            Field::Accessories => Some(SeedSlot::Accessories),
            Field::Base => Some(SeedSlot::Base),
            Field::Face => Some(SeedSlot::Face),
            Field::FaceItem => Some(SeedSlot::FaceItem),
            Field::Hair => Some(SeedSlot::Hair),
            Field::Pants => Some(SeedSlot::Pants),
            Field::Shirt => Some(SeedSlot::Shirt),
            Field::Skin => Some(SeedSlot::Skin),
            Field::HatColor => Some(SeedSlot::HatColor),
            Field::Hat | Field::Fire | Field::Walking | Field::Circle => None,
        }
    }

    /// Whether this attribute participates in the seed string.
    pub fn is_seed_bearing(self) -> bool {
        self.seed_slot().is_some()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for host-supplied field names that match nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field name: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_owned()))
    }
}

// ============================================================================
// InputSignal
// ============================================================================

/// A typed input signal, constructed at the control call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSignal {
    /// Checked state of a checkbox-style control.
    Checkbox(bool),
    /// Selected value of a combo/selection-style control.
    Selection(String),
    /// Value of a slider or other numeric control, already parsed base-10.
    Numeric(u8),
}

/// Assigns `signal` to `field` on `state`.
///
/// Returns whether a value was assigned. Mismatched signal shapes and
/// unparseable selections return `false` and leave the state untouched;
/// synchronization and re-rendering are the caller's job (see
/// [`crate::customizer::CharacterCustomizer::apply_change`]).
pub fn assign(state: &mut CharacterState, field: Field, signal: &InputSignal) -> bool {
    match (field, signal) {
        (Field::Fire, InputSignal::Checkbox(checked)) => {
            state.fire = *checked;
            true
        }
        (Field::Walking, InputSignal::Checkbox(checked)) => {
            state.walking = *checked;
            true
        }
        (Field::Circle, InputSignal::Checkbox(checked)) => {
            state.circle = *checked;
            true
        }
        (Field::Hat, InputSignal::Selection(name)) => match HatStyle::from_name(name) {
            Some(style) => {
                state.hat = style;
                true
            }
            None => {
                debug!(hat = %name, "unrecognized hat selection ignored");
                false
            }
        },
        (field, InputSignal::Numeric(value)) => match field.seed_slot() {
            Some(slot) => {
                slot.set(state, *value);
                true
            }
            None => {
                debug!(%field, "numeric signal aimed at a non-numeric field");
                false
            }
        },
        (field, InputSignal::Selection(raw)) => match (field.seed_slot(), raw.parse::<u8>()) {
            (Some(slot), Ok(value)) => {
                slot.set(state, value);
                true
            }
            (Some(_), Err(_)) => {
                debug!(%field, value = %raw, "unparseable selection ignored");
                false
            }
            (None, _) => {
                debug!(%field, "selection signal aimed at a non-selection field");
                false
            }
        },
        (field, signal) => {
            debug!(%field, ?signal, "signal shape does not fit field");
            false
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
