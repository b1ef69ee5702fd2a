//! Element and document abstractions the toggle is written against.
//!
//! Platform-specific crates implement these for real DOM nodes; the
//! [`crate::synthetic`] module implements them in memory.

/// The operations the toggle performs on a single element.
///
/// Implementations are handles: mutating through `&self` must be visible
/// through every other handle to the same element, the way DOM nodes behave.
pub trait NavElement {
    /// Whether `class` is currently in the element's class list.
    fn has_class(&self, class: &str) -> bool;

    /// Add `class` when `present` is true, remove it otherwise.
    fn set_class(&self, class: &str, present: bool);

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str);

    fn set_tab_index(&self, index: i32);
}

/// Element lookups the toggle needs from its document.
pub trait NavDocument {
    type Element: NavElement;

    /// Find the unique element carrying `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Elements inside `container` carrying `class`, in document order.
    fn links_within(&self, container: &Self::Element, class: &str) -> Vec<Self::Element>;
}
