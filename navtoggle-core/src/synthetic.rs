//! In-memory document used by tests and the tester CLI.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::config::{ARIA_EXPANDED, NavToggleConfig};
use crate::element::{NavDocument, NavElement};
use crate::state::MenuState;

#[derive(Debug, Default)]
struct ElementData {
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    tab_index: Option<i32>,
    children: Vec<SyntheticElement>,
}

/// Shared handle to an in-memory element. Clones point at the same node.
#[derive(Debug, Clone, Default)]
pub struct SyntheticElement {
    inner: Rc<RefCell<ElementData>>,
}

impl SyntheticElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.inner.borrow_mut().id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.set_class(class, true);
        self
    }

    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn with_tab_index(self, index: i32) -> Self {
        self.set_tab_index(index);
        self
    }

    #[must_use]
    pub fn with_child(self, child: Self) -> Self {
        self.append_child(child);
        self
    }

    pub fn append_child(&self, child: Self) {
        self.inner.borrow_mut().children.push(child);
    }

    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.inner.borrow().id.clone()
    }

    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.inner.borrow().classes.clone()
    }

    #[must_use]
    pub fn tab_index(&self) -> Option<i32> {
        self.inner.borrow().tab_index
    }

    pub fn remove_attribute(&self, name: &str) {
        self.inner.borrow_mut().attributes.remove(name);
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn children(&self) -> Vec<Self> {
        self.inner.borrow().children.clone()
    }

    fn find_by_id(&self, id: &str) -> Option<Self> {
        if self.inner.borrow().id.as_deref() == Some(id) {
            return Some(self.clone());
        }
        self.children()
            .iter()
            .find_map(|child| child.find_by_id(id))
    }

    fn collect_with_class(&self, class: &str, out: &mut Vec<Self>) {
        for child in self.children() {
            if child.has_class(class) {
                out.push(child.clone());
            }
            child.collect_with_class(class, out);
        }
    }
}

impl NavElement for SyntheticElement {
    fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.iter().any(|c| c == class)
    }

    fn set_class(&self, class: &str, present: bool) {
        let mut data = self.inner.borrow_mut();
        let existing = data.classes.iter().position(|c| c == class);
        match (existing, present) {
            (None, true) => data.classes.push(class.to_string()),
            (Some(idx), false) => {
                data.classes.remove(idx);
            }
            _ => {}
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.inner.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.inner
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_tab_index(&self, index: i32) {
        self.inner.borrow_mut().tab_index = Some(index);
    }
}

/// A flat list of root elements standing in for a page body.
#[derive(Debug, Clone, Default)]
pub struct SyntheticDocument {
    roots: Rc<RefCell<Vec<SyntheticElement>>>,
}

impl SyntheticDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, element: SyntheticElement) {
        self.roots.borrow_mut().push(element);
    }

    /// Detach the root element carrying `id`. Returns whether one was removed.
    pub fn remove_by_id(&self, id: &str) -> bool {
        let mut roots = self.roots.borrow_mut();
        let before = roots.len();
        roots.retain(|root| root.id().as_deref() != Some(id));
        roots.len() != before
    }

    /// Build the standard page: a toggle button and a menu with `link_count`
    /// links, both marked up in `initial` state.
    #[must_use]
    pub fn nav_fixture(config: &NavToggleConfig, initial: MenuState, link_count: usize) -> Self {
        let doc = Self::new();
        let state_class = if initial.is_open() {
            &config.active_class
        } else {
            &config.closed_class
        };

        let button = SyntheticElement::new()
            .with_id(config.toggle_id.as_str())
            .with_class(state_class)
            .with_attribute(ARIA_EXPANDED, initial.aria_expanded());

        let list = SyntheticElement::new();
        for _ in 0..link_count {
            let link = SyntheticElement::new()
                .with_class(&config.link_class)
                .with_tab_index(initial.tab_index());
            list.append_child(SyntheticElement::new().with_child(link));
        }
        let menu = SyntheticElement::new()
            .with_id(config.menu_id.as_str())
            .with_class(state_class)
            .with_child(list);

        doc.append(button);
        doc.append(menu);
        doc
    }
}

impl NavDocument for SyntheticDocument {
    type Element = SyntheticElement;

    fn element_by_id(&self, id: &str) -> Option<SyntheticElement> {
        self.roots
            .borrow()
            .iter()
            .find_map(|root| root.find_by_id(id))
    }

    fn links_within(&self, container: &SyntheticElement, class: &str) -> Vec<SyntheticElement> {
        let mut links = Vec::new();
        container.collect_with_class(class, &mut links);
        links
    }
}
