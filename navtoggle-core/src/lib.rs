//! Navigation toggle core
//!
//! Platform-agnostic logic for the mobile navigation toggle: a button that
//! opens and closes a menu, keeping CSS classes, `aria-expanded` and the tab
//! order of the menu's links in step. This crate has no browser dependencies;
//! platform crates implement [`NavDocument`] for their element type.

pub mod config;
pub mod element;
pub mod handler;
pub mod state;
pub mod synthetic;

pub use config::{ConfigError, NavToggleConfig};
pub use element::{NavDocument, NavElement};
pub use handler::{ElementRole, NavToggle, NavToggleError};
pub use state::MenuState;
pub use synthetic::{SyntheticDocument, SyntheticElement};
