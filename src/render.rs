//! Render collaborator seam.
//!
//! The avatar is drawn by an external character-rendering component; this
//! crate only decides *what* to draw. [`RenderInputs`] is that contract: a
//! pure function of the current state, handed to whichever
//! [`CharacterRenderer`] the host registered.
//!
//! The host document owns the renderer's lifetime, so registration is
//! process-wide, happens once on first load, and has no teardown. A second
//! registration is a no-op.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::character::{CharacterState, HatStyle};

// ============================================================================
// RenderInputs
// ============================================================================

/// Everything the external drawing component consumes, snapshotted from the
/// current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "tsify",
    derive(tsify_next::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct RenderInputs {
    pub accessories: u8,
    pub base: u8,
    pub face: u8,
    pub face_item: u8,
    pub hair: u8,
    pub pants: u8,
    pub shirt: u8,
    pub skin: u8,
    pub hat_color: u8,
    pub hat: HatStyle,
    pub fire: bool,
    pub walking: bool,
    pub circle: bool,
}

impl RenderInputs {
    /// Snapshots the render inputs for `state`.
    pub fn from_state(state: &CharacterState) -> Self {
        Self {
            accessories: state.accessories,
            base: state.base,
            face: state.face,
            face_item: state.face_item,
            hair: state.hair,
            pants: state.pants,
            shirt: state.shirt,
            skin: state.skin,
            hat_color: state.hat_color,
            hat: state.hat,
            fire: state.fire,
            walking: state.walking,
            circle: state.circle,
        }
    }
}

impl From<&CharacterState> for RenderInputs {
    fn from(state: &CharacterState) -> Self {
        Self::from_state(state)
    }
}

// ============================================================================
// Renderer registry
// ============================================================================

/// The external character-drawing component.
pub trait CharacterRenderer: Send + Sync {
    /// Draws (or schedules drawing of) the character described by `inputs`.
    fn render(&self, inputs: &RenderInputs);
}

static RENDERER: OnceLock<Box<dyn CharacterRenderer>> = OnceLock::new();

/// Registers the process-wide renderer.
///
/// Idempotent, first registration wins; returns whether this call installed
/// the renderer. There is no unregistration; the host owns the lifetime.
pub fn register_renderer(renderer: Box<dyn CharacterRenderer>) -> bool {
    RENDERER.set(renderer).is_ok()
}

/// Hands `inputs` to the registered renderer, if any.
///
/// Returns whether a renderer ran. A host that has not registered one yet
/// simply skips the draw; state and URL stay authoritative either way.
pub fn dispatch(inputs: &RenderInputs) -> bool {
    match RENDERER.get() {
        Some(renderer) => {
            renderer.render(inputs);
            true
        }
        None => false,
    }
}

// ============================================================================
// Tests
// ============================================================================
