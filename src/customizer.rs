//! The character customizer component: state, gateway, synchronization,
//! share.
//!
//! [`CharacterCustomizer`] ties the pieces together and enforces the two
//! ordering contracts:
//!
//! 1. **Init before first render**: construction parses the location's
//!    query string into the state before anything can observe it, so the
//!    first paint already reflects a shared URL.
//! 2. **Write then sync**: every mutation goes through
//!    [`apply_change`](CharacterCustomizer::apply_change), which assigns
//!    the value, re-derives the seed when a seed-bearing attribute moved,
//!    rewrites the URL, and only then dispatches to the render
//!    collaborator. One mutation fully completes, URL write included,
//!    before the next input event is processed.

use crate::character::CharacterState;
use crate::input::{self, Field, InputSignal};
use crate::render::{self, RenderInputs};
use crate::share::{self, Clipboard, ShareOutcome};
use crate::sync::{self, HostLocation};

// ============================================================================
// CharacterCustomizer
// ============================================================================

/// The customizer component.
///
/// Generic over its [`HostLocation`] so the same component runs against a
/// real address bar (via the `wasm` bindings) or an in-memory one:
///
/// ```
/// use rpg_customizer::{CharacterCustomizer, Field, HostLocation, InputSignal, MemoryLocation};
///
/// let mut customizer = CharacterCustomizer::new(MemoryLocation::default());
///
/// customizer.apply_change(Field::Base, &InputSignal::Selection("5".into()));
/// customizer.apply_change(Field::HatColor, &InputSignal::Numeric(3));
/// customizer.apply_change(Field::Hat, &InputSignal::Selection("ninja".into()));
///
/// assert_eq!(customizer.seed(), "050000003");
/// assert_eq!(customizer.location().query(), "seed=050000003&hat=ninja");
/// ```
pub struct CharacterCustomizer<L: HostLocation> {
    state: CharacterState,
    location: L,
}

impl<L: HostLocation> CharacterCustomizer<L> {
    /// Builds the component, loading state from the location's current
    /// query string before returning.
    ///
    /// Parsing failures degrade silently to the defaults; there is no
    /// loading or error state, only "ready".
    pub fn new(location: L) -> Self {
        let mut state = CharacterState::default();
        sync::load_from_query(&mut state, &location.query());
        Self { state, location }
    }

    /// The current character state.
    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    /// The derived seed string.
    pub fn seed(&self) -> String {
        self.state.seed()
    }

    /// The host location handle.
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Snapshot of what the external drawing component should render.
    pub fn render_inputs(&self) -> RenderInputs {
        RenderInputs::from_state(&self.state)
    }

    /// The single mutation gateway.
    ///
    /// Assigns the signal's value to the field (no range validation),
    /// re-derives the seed when the field is seed-bearing, rewrites the
    /// URL (replace semantics), and dispatches to the registered render
    /// collaborator. Returns whether the state changed; a rejected signal
    /// leaves state, URL, and rendering untouched.
    pub fn apply_change(&mut self, field: Field, signal: &InputSignal) -> bool {
        if !input::assign(&mut self.state, field, signal) {
            return false;
        }

        if field.is_seed_bearing() {
            sync::recompute_and_write(&self.state, &mut self.location);
        } else {
            sync::write_url(&self.state, &mut self.location);
        }

        let _ = render::dispatch(&self.render_inputs());
        true
    }

    /// Shares the current URL through `clipboard`.
    ///
    /// Two terminal outcomes, both user-visible; never an error. The URL is
    /// whatever the synchronizer last wrote; no extra sync pass happens
    /// here.
    pub fn share<C: Clipboard>(&self, clipboard: &mut C) -> ShareOutcome {
        share::share_url(self.location.href(), clipboard)
    }

    /// Exports the state as a JSON profile.
    pub fn export_state_json(&self) -> Result<String, serde_json::Error> {
        self.state.to_json()
    }

    /// Imports a JSON profile, then resynchronizes the URL and re-renders,
    /// as if every field had been set through the gateway at once.
    pub fn import_state_json(&mut self, json: &str) -> Result<(), serde_json::Error> {
        self.state = CharacterState::from_json(json)?;
        sync::recompute_and_write(&self.state, &mut self.location);
        let _ = render::dispatch(&self.render_inputs());
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
