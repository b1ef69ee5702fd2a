//! Attaching the toggle to a page and detaching it again.

use std::rc::Rc;

use navtoggle_core::{
    ConfigError, ElementRole, MenuState, NavToggle, NavToggleConfig, NavToggleError,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget};

use crate::dom;
use crate::element::DomDocument;

const CLICK: &str = "click";

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Toggle(#[from] NavToggleError),
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<BindError> for JsValue {
    fn from(err: BindError) -> Self {
        Self::from(js_sys::Error::new(&err.to_string()))
    }
}

/// A click listener registered on the toggle button.
///
/// Dropping the binding (or calling [`NavToggleBinding::detach`]) removes the
/// listener. Use [`NavToggleBinding::forget`] to keep it for the page lifetime.
pub struct NavToggleBinding {
    target: EventTarget,
    listener: Option<Closure<dyn FnMut(Event)>>,
    toggle: Rc<NavToggle<DomDocument>>,
}

/// Validate `config`, normalise the page markup and start listening for clicks.
///
/// Only the button has to exist at attach time. The menu container is looked
/// up on every click, so a menu inserted later is picked up by the next click.
///
/// # Errors
///
/// Returns an error if the config is invalid, the toggle button is missing,
/// or the listener cannot be registered.
pub fn attach(document: &Document, config: NavToggleConfig) -> Result<NavToggleBinding, BindError> {
    config.validate()?;
    let button = document
        .get_element_by_id(&config.toggle_id)
        .ok_or_else(|| NavToggleError::MissingElement {
            role: ElementRole::ToggleButton,
            id: config.toggle_id.clone(),
        })?;

    let toggle = Rc::new(NavToggle::new(DomDocument(document.clone()), config));
    let initial = match toggle.sync() {
        Ok(state) => Some(state),
        Err(NavToggleError::MissingElement {
            role: ElementRole::MenuContainer,
            id,
        }) => {
            log::warn!("Navigation menu #{id} not in document yet, listening anyway");
            None
        }
        Err(err) => return Err(err.into()),
    };

    let handler = Rc::clone(&toggle);
    let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Err(err) = handler.toggle() {
            log::error!("Navigation toggle failed: {err}");
            dom::console_error(&err.to_string());
        }
    });

    let target: EventTarget = button.into();
    target
        .add_event_listener_with_callback(CLICK, listener.as_ref().unchecked_ref())
        .map_err(|err| BindError::Js(dom::js_error_message(&err)))?;

    log::debug!(
        "Navigation toggle attached to #{} ({initial:?})",
        toggle.config().toggle_id
    );

    Ok(NavToggleBinding {
        target,
        listener: Some(listener),
        toggle,
    })
}

impl NavToggleBinding {
    /// Live state of the menu container.
    ///
    /// # Errors
    ///
    /// Returns an error if the menu container has left the document.
    pub fn state(&self) -> Result<MenuState, NavToggleError> {
        self.toggle.current_state()
    }

    /// Flip the menu as a click would, without dispatching an event.
    ///
    /// # Errors
    ///
    /// Returns an error if either required element has left the document.
    pub fn toggle(&self) -> Result<MenuState, NavToggleError> {
        self.toggle.toggle()
    }

    /// Shared handle to the toggle, readable after the listener is gone.
    #[must_use]
    pub fn handler(&self) -> Rc<NavToggle<DomDocument>> {
        Rc::clone(&self.toggle)
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Remove the click listener.
    pub fn detach(self) {
        drop(self);
    }

    /// Leak the listener so it stays registered for the life of the page.
    pub fn forget(mut self) {
        if let Some(listener) = self.listener.take() {
            listener.forget();
        }
    }
}

impl Drop for NavToggleBinding {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            let removed = self
                .target
                .remove_event_listener_with_callback(CLICK, listener.as_ref().unchecked_ref());
            if let Err(err) = removed {
                log::warn!(
                    "Failed to detach navigation toggle: {}",
                    dom::js_error_message(&err)
                );
            }
        }
    }
}
