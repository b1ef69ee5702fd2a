//! JavaScript-facing entry points.

use std::rc::Rc;

use navtoggle_core::{NavToggle, NavToggleConfig};
use wasm_bindgen::prelude::*;

use crate::binding::{NavToggleBinding, attach};
use crate::dom;
use crate::element::DomDocument;

/// Handle returned to JavaScript; keeps the click listener alive until
/// `detach()` is called or the handle is freed.
#[wasm_bindgen]
pub struct NavToggleHandle {
    binding: Option<NavToggleBinding>,
    toggle: Rc<NavToggle<DomDocument>>,
}

#[wasm_bindgen]
impl NavToggleHandle {
    /// Remove the click listener. Further calls are no-ops.
    pub fn detach(&mut self) {
        if let Some(binding) = self.binding.take() {
            binding.detach();
        }
    }

    #[wasm_bindgen(js_name = isAttached)]
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.binding.as_ref().is_some_and(NavToggleBinding::is_attached)
    }

    /// Whether the menu container currently carries the active class.
    ///
    /// Keeps reading the page after `detach()`; `false` while the menu is
    /// absent from the document.
    #[wasm_bindgen(js_name = isOpen)]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.toggle
            .current_state()
            .is_ok_and(|state| state.is_open())
    }
}

/// Attach the toggle to the current document.
///
/// `config` may be `undefined`/`null` for the default ids, or an object with
/// any of `toggleId`, `menuId`, `linkClass`, `activeClass`, `closedClass`.
///
/// # Errors
///
/// Throws if the config cannot be read, no document is available, or the
/// toggle button is missing.
#[wasm_bindgen(js_name = initNavToggle)]
pub fn init_nav_toggle(config: JsValue) -> Result<NavToggleHandle, JsValue> {
    let config = config_from_js(config)?;
    let document = dom::document().ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let binding = attach(&document, config)?;
    Ok(NavToggleHandle {
        toggle: binding.handler(),
        binding: Some(binding),
    })
}

fn config_from_js(value: JsValue) -> Result<NavToggleConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(NavToggleConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|err| JsValue::from_str(&format!("Invalid config: {err}")))
}
