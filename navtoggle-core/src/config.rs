//! Lookup keys and class names used by the toggle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TOGGLE_ID: &str = "nav-toggle";
pub const DEFAULT_MENU_ID: &str = "nav-toggle-menu";
pub const DEFAULT_LINK_CLASS: &str = "dropdown__btn--mobile";
pub const DEFAULT_ACTIVE_CLASS: &str = "active";
pub const DEFAULT_CLOSED_CLASS: &str = "closed";
pub const ARIA_EXPANDED: &str = "aria-expanded";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{field}` must not be empty")]
    Empty { field: &'static str },
    #[error("`{field}` must be a single class or id, got {value:?}")]
    Whitespace { field: &'static str, value: String },
    #[error("active and closed classes must differ, both are {0:?}")]
    SameClass(String),
    #[error("toggle button and menu container must have different ids, both are {0:?}")]
    SameId(String),
}

/// Where the toggle finds its elements and which classes it writes.
///
/// Field names are camelCase on the wire so the same shape can be passed
/// from JavaScript or loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavToggleConfig {
    pub toggle_id: String,
    pub menu_id: String,
    pub link_class: String,
    pub active_class: String,
    pub closed_class: String,
}

impl Default for NavToggleConfig {
    fn default() -> Self {
        Self {
            toggle_id: DEFAULT_TOGGLE_ID.to_string(),
            menu_id: DEFAULT_MENU_ID.to_string(),
            link_class: DEFAULT_LINK_CLASS.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            closed_class: DEFAULT_CLOSED_CLASS.to_string(),
        }
    }
}

impl NavToggleConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the resulting config is invalid.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every key is a usable id or class token.
    ///
    /// # Errors
    ///
    /// Returns an error for empty values, values containing whitespace, a
    /// button id reused as the menu id, or identical active and closed classes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("toggleId", &self.toggle_id),
            ("menuId", &self.menu_id),
            ("linkClass", &self.link_class),
            ("activeClass", &self.active_class),
            ("closedClass", &self.closed_class),
        ];
        for (field, value) in fields {
            if value.is_empty() {
                return Err(ConfigError::Empty { field });
            }
            if value.chars().any(char::is_whitespace) {
                return Err(ConfigError::Whitespace {
                    field,
                    value: value.clone(),
                });
            }
        }
        if self.toggle_id == self.menu_id {
            return Err(ConfigError::SameId(self.toggle_id.clone()));
        }
        if self.active_class == self.closed_class {
            return Err(ConfigError::SameClass(self.active_class.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_markup() {
        let config = NavToggleConfig::default();
        assert_eq!(config.toggle_id, "nav-toggle");
        assert_eq!(config.menu_id, "nav-toggle-menu");
        assert_eq!(config.link_class, "dropdown__btn--mobile");
        assert_eq!(config.active_class, "active");
        assert_eq!(config.closed_class, "closed");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = NavToggleConfig::from_json(r#"{"menuId":"side-menu"}"#).unwrap();
        assert_eq!(config.menu_id, "side-menu");
        assert_eq!(config.toggle_id, DEFAULT_TOGGLE_ID);
    }

    #[test]
    fn rejects_bad_values() {
        let err = NavToggleConfig::from_json(r#"{"toggleId":""}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Empty { field: "toggleId" }));

        let err = NavToggleConfig::from_json(r#"{"linkClass":"a b"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Whitespace { field: "linkClass", .. }));

        let err = NavToggleConfig::from_json(r#"{"closedClass":"active"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::SameClass(_)));

        let err = NavToggleConfig::from_json(r#"{"menuId":"nav-toggle"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::SameId(ref id) if id == "nav-toggle"));

        let err = NavToggleConfig::from_json("{").unwrap_err();
        assert!(err.to_string().starts_with("JSON parsing error"));
    }
}
