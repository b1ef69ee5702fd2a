#![forbid(unsafe_code)]
#[cfg(all(target_arch = "wasm32", feature = "autostart"))]
use wasm_bindgen::prelude::*;

pub mod api;
pub mod binding;
pub mod dom;
pub mod element;

pub use binding::{BindError, NavToggleBinding, attach};
pub use element::{DomDocument, DomElement};
pub use navtoggle_core::{ElementRole, MenuState, NavToggleConfig, NavToggleError};

#[cfg(all(target_arch = "wasm32", feature = "autostart"))]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let Some(document) = dom::document() else {
        dom::console_error("Navigation toggle: no document available");
        return;
    };
    match attach(&document, NavToggleConfig::default()) {
        Ok(binding) => binding.forget(),
        Err(err) => {
            log::error!("Navigation toggle not attached: {err}");
            dom::console_error(&err.to_string());
        }
    }
}
