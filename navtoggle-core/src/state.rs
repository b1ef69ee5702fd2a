use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation state of the mobile navigation menu.
///
/// Every class, ARIA value and tab index the toggle writes is derived from
/// this one value, so the button and menu can never disagree after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    /// The state reached by one click from `self`.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Value written to the button's `aria-expanded` attribute.
    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        match self {
            Self::Open => "true",
            Self::Closed => "false",
        }
    }

    /// Tab index for menu links: `0` keeps them in the tab order, `-1` skips them.
    #[must_use]
    pub const fn tab_index(self) -> i32 {
        match self {
            Self::Open => 0,
            Self::Closed => -1,
        }
    }

    /// Interpret an `aria-expanded` value read from the button.
    ///
    /// Only the exact string `"true"` counts as expanded; a missing attribute
    /// or any other value reads as closed.
    #[must_use]
    pub fn from_aria_expanded(value: Option<&str>) -> Self {
        match value {
            Some("true") => Self::Open,
            _ => Self::Closed,
        }
    }

    /// Interpret the live presence of the active class on the menu container.
    #[must_use]
    pub const fn from_active_class(active: bool) -> Self {
        if active { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
