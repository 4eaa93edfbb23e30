//! JavaScript bindings for WASM environments.
//!
//! [`BrowserCustomizer`] wraps [`CharacterCustomizer`] behind a
//! string-typed boundary: the JS glue passes `window.location` pieces in
//! and gets query strings back, so `history.replaceState` and the real
//! clipboard stay on the JavaScript side where they belong.
//!
//! # Feature Flag
//!
//! This module is only available with the `wasm` feature enabled:
//!
//! ```toml
//! [dependencies]
//! rpg-customizer = { version = "0.1", features = ["wasm"] }
//! ```
//!
//! # Example (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { BrowserCustomizer } from 'rpg-customizer';
//!
//! await init();
//!
//! const customizer = new BrowserCustomizer(
//!   window.location.origin,
//!   window.location.pathname,
//!   window.location.search,
//! );
//!
//! // Wire a slider
//! slider.addEventListener('change', (e) => {
//!   customizer.applyNumeric('hair', parseInt(e.target.value));
//!   history.replaceState({}, '', `${location.pathname}?${customizer.queryString()}`);
//!   repaint(customizer.renderInputs());
//! });
//!
//! // Share button
//! try {
//!   await navigator.clipboard.writeText(customizer.shareUrl());
//! } catch (err) {
//!   alert('Share link: ' + customizer.shareUrl());
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::customizer::CharacterCustomizer;
use crate::input::{Field, InputSignal};
use crate::sync::{HostLocation, MemoryLocation};

// ============================================================================
// BrowserCustomizer
// ============================================================================

/// A wrapper around [`CharacterCustomizer`] for JavaScript hosts.
#[wasm_bindgen]
pub struct BrowserCustomizer {
    inner: CharacterCustomizer<MemoryLocation>,
}

#[wasm_bindgen]
impl BrowserCustomizer {
    /// Creates the customizer from the page's location pieces.
    ///
    /// `search` is `window.location.search`, with or without the leading
    /// `?`. The incoming query is loaded before this constructor returns,
    /// so the first render already reflects a shared link.
    #[wasm_bindgen(constructor)]
    pub fn new(origin: &str, path: &str, search: &str) -> BrowserCustomizer {
        let location =
            MemoryLocation::with_query(origin, path, search.trim_start_matches('?'));
        Self {
            inner: CharacterCustomizer::new(location),
        }
    }

    // ---- State ----

    /// The derived nine-digit seed.
    pub fn seed(&self) -> String {
        self.inner.seed()
    }

    /// The current query string (no leading `?`); pass it to
    /// `history.replaceState` after every change.
    #[wasm_bindgen(js_name = "queryString")]
    pub fn query_string(&self) -> String {
        self.inner.location().query()
    }

    /// The full shareable URL.
    #[wasm_bindgen(js_name = "shareUrl")]
    pub fn share_url(&self) -> String {
        self.inner.location().href()
    }

    /// The render inputs for the character-drawing component, as a plain
    /// JS object.
    #[wasm_bindgen(js_name = "renderInputs")]
    pub fn render_inputs(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.render_inputs())
            .map_err(|e| JsError::new(&format!("Failed to convert render inputs: {}", e)))
    }

    // ---- Mutation gateway ----

    /// Applies a slider/numeric control change. `field` is the camelCase
    /// attribute name (`"hair"`, `"hatColor"`, ...). Returns whether the
    /// state changed; unknown fields are ignored.
    #[wasm_bindgen(js_name = "applyNumeric")]
    pub fn apply_numeric(&mut self, field: &str, value: u8) -> bool {
        self.apply(field, InputSignal::Numeric(value))
    }

    /// Applies a combo/selection control change (`"base"`, `"hat"`).
    #[wasm_bindgen(js_name = "applySelection")]
    pub fn apply_selection(&mut self, field: &str, value: &str) -> bool {
        self.apply(field, InputSignal::Selection(value.to_owned()))
    }

    /// Applies a checkbox control change (`"fire"`, `"walking"`,
    /// `"circle"`).
    #[wasm_bindgen(js_name = "applyToggle")]
    pub fn apply_toggle(&mut self, field: &str, checked: bool) -> bool {
        self.apply(field, InputSignal::Checkbox(checked))
    }

    // ---- Profile Import/Export ----

    /// Exports the current state as a JSON string.
    #[wasm_bindgen(js_name = "exportStateJson")]
    pub fn export_state_json(&self) -> Result<String, JsError> {
        self.inner
            .export_state_json()
            .map_err(|e| JsError::new(&format!("Failed to serialize state: {}", e)))
    }

    /// Imports state from a JSON string and resynchronizes the query
    /// string.
    #[wasm_bindgen(js_name = "importStateJson")]
    pub fn import_state_json(&mut self, json: &str) -> Result<(), JsError> {
        self.inner
            .import_state_json(json)
            .map_err(|e| JsError::new(&format!("Failed to parse state: {}", e)))
    }
}

impl BrowserCustomizer {
    fn apply(&mut self, field: &str, signal: InputSignal) -> bool {
        match field.parse::<Field>() {
            Ok(field) => self.inner.apply_change(field, &signal),
            Err(_) => false,
        }
    }
}
