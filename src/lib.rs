//! rpg-customizer: seed codec and URL state synchronization for a
//! character customizer.
//!
//! This crate is the state core of a browser-based character customizer:
//! it maps a set of discrete customization attributes onto a compact
//! nine-digit "seed", keeps that seed (plus a hat style and three effect
//! toggles) synchronized with the page's query string for shareability,
//! and hands render inputs to an external character-drawing component.
//! Drawing itself, widget styling, and the host address bar are
//! collaborators behind traits, not part of this crate.
//!
//! # Example
//!
//! ```
//! use rpg_customizer::{
//!     CharacterCustomizer, Field, HostLocation, InputSignal, MemoryLocation,
//! };
//!
//! // A shared link restores the character before the first render.
//! let location = MemoryLocation::with_query(
//!     "https://example.com",
//!     "/",
//!     "seed=050000003&hat=ninja",
//! );
//! let mut customizer = CharacterCustomizer::new(location);
//! assert_eq!(customizer.state().base, 5);
//!
//! // Every control change funnels through the gateway and lands in the URL.
//! customizer.apply_change(Field::Fire, &InputSignal::Checkbox(true));
//! assert_eq!(
//!     customizer.location().query(),
//!     "seed=050000003&hat=ninja&fire=true",
//! );
//! ```
//!
//! # Sharing
//!
//! The share action is best-effort: a refused clipboard degrades to
//! presenting the raw URL, never to an error:
//!
//! ```
//! use rpg_customizer::{
//!     CharacterCustomizer, MemoryClipboard, MemoryLocation, ShareOutcome,
//! };
//!
//! let customizer = CharacterCustomizer::new(MemoryLocation::default());
//! let mut clipboard = MemoryClipboard::new();
//!
//! let outcome = customizer.share(&mut clipboard);
//! assert!(matches!(outcome, ShareOutcome::Copied { .. }));
//! ```
//!
//! # Frontend integration
//!
//! With the `wasm` feature, [`BrowserCustomizer`] exposes the component to
//! JavaScript over plain strings (the glue code owns
//! `history.replaceState` and the real clipboard); `tsify` additionally
//! emits TypeScript types for the serializable state, and `jsonschema`
//! derives JSON Schemas.

pub mod character;
pub mod customizer;
pub mod input;
pub mod query;
pub mod render;
pub mod seed;
pub mod share;
pub mod sync;

#[cfg(feature = "wasm")]
pub mod bindings;

pub use character::{CharacterState, HatStyle};
pub use customizer::CharacterCustomizer;
pub use input::{Field, InputSignal, UnknownField};
pub use query::QueryParams;
pub use render::{register_renderer, CharacterRenderer, RenderInputs};
pub use seed::{SeedSlot, SEED_LEN};
pub use share::{
    Clipboard, ClipboardError, MemoryClipboard, ShareOutcome, UnavailableClipboard,
};
pub use sync::{HostLocation, MemoryLocation};

#[cfg(feature = "wasm")]
pub use bindings::BrowserCustomizer;
