//! [`NavDocument`] over the live browser DOM.

use navtoggle_core::{NavDocument, NavElement};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// A DOM element as seen by the toggle.
#[derive(Debug, Clone)]
pub struct DomElement(pub Element);

impl NavElement for DomElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_class(&self, class: &str, present: bool) {
        let classes = self.0.class_list();
        let _ = if present {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = Element::set_attribute(&self.0, name, value);
    }

    fn set_tab_index(&self, index: i32) {
        match self.0.dyn_ref::<HtmlElement>() {
            Some(html) => html.set_tab_index(index),
            // SVG and other non-HTML elements only take the attribute form.
            None => {
                let _ = Element::set_attribute(&self.0, "tabindex", &index.to_string());
            }
        }
    }
}

/// The page document the toggle looks its elements up in.
#[derive(Debug, Clone)]
pub struct DomDocument(pub Document);

impl NavDocument for DomDocument {
    type Element = DomElement;

    fn element_by_id(&self, id: &str) -> Option<DomElement> {
        self.0.get_element_by_id(id).map(DomElement)
    }

    fn links_within(&self, container: &DomElement, class: &str) -> Vec<DomElement> {
        let collection = container.0.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|idx| collection.item(idx))
            .map(DomElement)
            .collect()
    }
}
