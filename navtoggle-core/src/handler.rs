//! The click handler that opens and closes the mobile menu.

use std::fmt;

use thiserror::Error;

use crate::config::{ARIA_EXPANDED, NavToggleConfig};
use crate::element::{NavDocument, NavElement};
use crate::state::MenuState;

/// Which of the two required elements a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    ToggleButton,
    MenuContainer,
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ToggleButton => "toggle button",
            Self::MenuContainer => "menu container",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavToggleError {
    #[error("{role} #{id} not found in document")]
    MissingElement { role: ElementRole, id: String },
}

/// Toggle bound to a document and a set of lookup keys.
///
/// Elements are looked up again on every call, so a click that fails
/// because an element is missing leaves later clicks unaffected.
pub struct NavToggle<D: NavDocument> {
    document: D,
    config: NavToggleConfig,
}

impl<D: NavDocument> NavToggle<D> {
    #[must_use]
    pub const fn new(document: D, config: NavToggleConfig) -> Self {
        Self { document, config }
    }

    #[must_use]
    pub const fn config(&self) -> &NavToggleConfig {
        &self.config
    }

    #[must_use]
    pub const fn document(&self) -> &D {
        &self.document
    }

    /// Handle one click: flip the menu and bring button, ARIA and links along.
    ///
    /// The next state is the negation of the button's `aria-expanded` value;
    /// link reachability follows the menu's live active class afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`NavToggleError::MissingElement`] if the button or the menu
    /// container is absent. Nothing is mutated when the button is missing.
    pub fn toggle(&self) -> Result<MenuState, NavToggleError> {
        let button = self.button()?;
        let expanded = button.attribute(ARIA_EXPANDED);
        let next = MenuState::from_aria_expanded(expanded.as_deref()).toggled();

        self.paint(&button, next);
        button.set_attribute(ARIA_EXPANDED, next.aria_expanded());

        let menu = self.menu()?;
        self.paint(&menu, next);

        let state = self.sync_links(&menu);
        log::debug!(
            "nav toggle #{} -> {state} (aria-expanded was {expanded:?})",
            self.config.toggle_id
        );
        Ok(state)
    }

    /// Run `clicks` toggles back to back and return the final state.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first failing toggle.
    pub fn toggle_n(&self, clicks: usize) -> Result<MenuState, NavToggleError> {
        let mut state = self.current_state()?;
        for _ in 0..clicks {
            state = self.toggle()?;
        }
        Ok(state)
    }

    /// Live state of the menu container, read from its active class.
    ///
    /// # Errors
    ///
    /// Returns an error if the menu container is absent.
    pub fn current_state(&self) -> Result<MenuState, NavToggleError> {
        let menu = self.menu()?;
        Ok(MenuState::from_active_class(
            menu.has_class(&self.config.active_class),
        ))
    }

    /// Force both elements and every link into `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if the button or the menu container is absent.
    pub fn apply(&self, state: MenuState) -> Result<MenuState, NavToggleError> {
        let button = self.button()?;
        let menu = self.menu()?;
        self.paint(&button, state);
        button.set_attribute(ARIA_EXPANDED, state.aria_expanded());
        self.paint(&menu, state);
        Ok(self.sync_links(&menu))
    }

    /// Reconcile the page with the button's initial `aria-expanded` value.
    ///
    /// Markup that ships with classes, ARIA and tab indexes out of step is
    /// rewritten so the first click starts from a consistent state.
    ///
    /// # Errors
    ///
    /// Returns an error if the button or the menu container is absent.
    pub fn sync(&self) -> Result<MenuState, NavToggleError> {
        let button = self.button()?;
        let menu = self.menu()?;
        let expanded = button.attribute(ARIA_EXPANDED);
        let state = MenuState::from_aria_expanded(expanded.as_deref());
        if !self.is_painted(&button, state) || !self.is_painted(&menu, state) {
            log::warn!(
                "nav toggle #{} markup out of sync, normalising to {state}",
                self.config.toggle_id
            );
        }
        self.apply(state)
    }

    fn button(&self) -> Result<D::Element, NavToggleError> {
        self.lookup(ElementRole::ToggleButton, &self.config.toggle_id)
    }

    fn menu(&self) -> Result<D::Element, NavToggleError> {
        self.lookup(ElementRole::MenuContainer, &self.config.menu_id)
    }

    fn lookup(&self, role: ElementRole, id: &str) -> Result<D::Element, NavToggleError> {
        self.document
            .element_by_id(id)
            .ok_or_else(|| NavToggleError::MissingElement {
                role,
                id: id.to_string(),
            })
    }

    fn paint(&self, element: &D::Element, state: MenuState) {
        element.set_class(&self.config.active_class, state.is_open());
        element.set_class(&self.config.closed_class, !state.is_open());
    }

    fn is_painted(&self, element: &D::Element, state: MenuState) -> bool {
        element.has_class(&self.config.active_class) == state.is_open()
            && element.has_class(&self.config.closed_class) != state.is_open()
    }

    fn sync_links(&self, menu: &D::Element) -> MenuState {
        let state = MenuState::from_active_class(menu.has_class(&self.config.active_class));
        for link in self.document.links_within(menu, &self.config.link_class) {
            link.set_tab_index(state.tab_index());
        }
        state
    }
}
