use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use hbnb_client::{Deferred, Display, Dom, Element, Node};

#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    pub text: String,
    pub value: Option<String>,
    pub styles: HashMap<String, String>,
    pub href: Option<String>,
    pub children: Vec<Node>,
    pub resets: usize,
}

#[derive(Default)]
struct State {
    elements: HashMap<String, FakeElement>,
    query: HashMap<String, String>,
    navigations: Vec<String>,
    deferred: Vec<(Duration, Deferred)>,
    storage: HashMap<String, String>,
}

/// A page reduced to elements by id. Builders add elements, inspectors read
/// back what the handlers did.
#[derive(Default)]
pub struct MemoryDom {
    state: RefCell<State>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(self, id: &str) -> Self {
        self.insert(id, FakeElement::default());
        self
    }

    pub fn with_text(self, id: &str, text: &str) -> Self {
        self.insert(
            id,
            FakeElement {
                text: text.to_string(),
                ..FakeElement::default()
            },
        );
        self
    }

    pub fn with_input(self, id: &str, value: &str) -> Self {
        self.insert(
            id,
            FakeElement {
                value: Some(value.to_string()),
                ..FakeElement::default()
            },
        );
        self
    }

    pub fn with_hidden(self, id: &str) -> Self {
        let mut element = FakeElement::default();
        element
            .styles
            .insert("display".to_string(), "none".to_string());
        self.insert(id, element);
        self
    }

    pub fn with_query(self, name: &str, value: &str) -> Self {
        self.state
            .borrow_mut()
            .query
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_flash(self, key: &str, message: &str) -> Self {
        self.state
            .borrow_mut()
            .storage
            .insert(key.to_string(), message.to_string());
        self
    }

    /// Elements every page shell has in common.
    pub fn with_place_page(self) -> Self {
        self.with_element("place-details")
            .with_text("place-name", "Loading...")
            .with_text("place-host", "Loading...")
            .with_text("place-price", "Loading...")
            .with_text("place-description", "Loading...")
            .with_text("place-amenities", "Loading...")
            .with_element("reviews")
            .with_hidden("error-message")
            .with_element("review-form")
            .with_input("review-text", "")
            .with_input("rating", "")
            .with_element("amenity-form")
            .with_input("amenity-name", "")
            .with_hidden("add-amenity")
            .with_element("toggle-amenity-form")
    }

    pub fn insert(&self, id: &str, element: FakeElement) {
        self.state
            .borrow_mut()
            .elements
            .insert(id.to_string(), element);
    }

    pub fn set_input(&self, id: &str, value: &str) {
        if let Some(element) = self.state.borrow_mut().elements.get_mut(id) {
            element.value = Some(value.to_string());
        }
    }

    pub fn element(&self, id: &str) -> Option<FakeElement> {
        self.state.borrow().elements.get(id).cloned()
    }

    pub fn text_of(&self, id: &str) -> Option<String> {
        self.text(id)
    }

    pub fn style_of(&self, id: &str, property: &str) -> Option<String> {
        self.element(id)?.styles.get(property).cloned()
    }

    pub fn is_shown(&self, id: &str) -> bool {
        self.style_of(id, "display").as_deref() == Some("block")
    }

    pub fn children(&self, id: &str) -> Vec<Node> {
        self.element(id).map(|e| e.children).unwrap_or_default()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.state.borrow().navigations.clone()
    }

    pub fn deferred(&self) -> Vec<(Duration, Deferred)> {
        self.state.borrow().deferred.clone()
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.state.borrow().storage.get(key).cloned()
    }

    /// Runs every pending deferred action, as if the timers had elapsed.
    pub fn run_deferred(&self) {
        let pending = std::mem::take(&mut self.state.borrow_mut().deferred);
        for (_, action) in pending {
            match action {
                Deferred::Hide(id) => {
                    self.set_display(&id, Display::None);
                }
                Deferred::Navigate(url) => self.navigate(&url),
            }
        }
    }

    /// Elements with `class` anywhere under any rendered container.
    pub fn elements_with_class(&self, class: &str) -> Vec<Element> {
        fn collect(nodes: &[Node], class: &str, found: &mut Vec<Element>) {
            for node in nodes {
                if let Node::Element(element) = node {
                    if element.has_class(class) {
                        found.push(element.clone());
                    }
                    collect(&element.children, class, found);
                }
            }
        }
        let state = self.state.borrow();
        let mut found = Vec::new();
        let mut ids: Vec<&String> = state.elements.keys().collect();
        ids.sort();
        for id in ids {
            collect(&state.elements[id].children, class, &mut found);
        }
        found
    }

    pub fn visible_with_class(&self, class: &str) -> Vec<Element> {
        self.elements_with_class(class)
            .into_iter()
            .filter(|element| element.get_attr("style") != Some("display: none"))
            .collect()
    }
}

fn toggle_class(
    nodes: &mut [Node],
    class: &str,
    attribute: &str,
    keep: &dyn Fn(Option<&str>) -> bool,
) -> usize {
    let mut visible = 0;
    for node in nodes {
        if let Node::Element(element) = node {
            if element.has_class(class) {
                let shown = keep(element.get_attr(attribute));
                let display = if shown { Display::Block } else { Display::None };
                element.set_attr("style", format!("display: {}", display.as_css()));
                if shown {
                    visible += 1;
                }
            }
            visible += toggle_class(&mut element.children, class, attribute, keep);
        }
    }
    visible
}

impl Dom for MemoryDom {
    fn exists(&self, id: &str) -> bool {
        self.state.borrow().elements.contains_key(id)
    }

    fn text(&self, id: &str) -> Option<String> {
        let state = self.state.borrow();
        let element = state.elements.get(id)?;
        if element.children.is_empty() {
            Some(element.text.clone())
        } else {
            Some(element.children.iter().map(Node::text_content).collect())
        }
    }

    fn set_text(&self, id: &str, text: &str) -> bool {
        match self.state.borrow_mut().elements.get_mut(id) {
            Some(element) => {
                element.text = text.to_string();
                element.children.clear();
                true
            }
            None => false,
        }
    }

    fn value(&self, id: &str) -> Option<String> {
        self.state.borrow().elements.get(id)?.value.clone()
    }

    fn display(&self, id: &str) -> Option<Display> {
        let state = self.state.borrow();
        let element = state.elements.get(id)?;
        match element.styles.get("display").map(String::as_str) {
            None | Some("") | Some("none") => Some(Display::None),
            Some(_) => Some(Display::Block),
        }
    }

    fn set_display(&self, id: &str, display: Display) -> bool {
        self.set_style(id, "display", display.as_css())
    }

    fn set_style(&self, id: &str, property: &str, value: &str) -> bool {
        match self.state.borrow_mut().elements.get_mut(id) {
            Some(element) => {
                element
                    .styles
                    .insert(property.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    fn set_href(&self, id: &str, href: &str) -> bool {
        match self.state.borrow_mut().elements.get_mut(id) {
            Some(element) => {
                element.href = Some(href.to_string());
                true
            }
            None => false,
        }
    }

    fn replace_children(&self, id: &str, nodes: &[Node]) -> bool {
        match self.state.borrow_mut().elements.get_mut(id) {
            Some(element) => {
                element.text.clear();
                element.children = nodes.to_vec();
                true
            }
            None => false,
        }
    }

    fn ensure_child(&self, parent_id: &str, child_id: &str) -> bool {
        if self.exists(child_id) {
            return true;
        }
        if !self.exists(parent_id) {
            return false;
        }
        self.insert(child_id, FakeElement::default());
        true
    }

    fn reset_form(&self, id: &str) -> bool {
        match self.state.borrow_mut().elements.get_mut(id) {
            Some(element) => {
                element.resets += 1;
                true
            }
            None => false,
        }
    }

    fn set_visible_by_class(
        &self,
        class: &str,
        attribute: &str,
        keep: &dyn Fn(Option<&str>) -> bool,
    ) -> usize {
        let mut state = self.state.borrow_mut();
        state
            .elements
            .values_mut()
            .map(|element| toggle_class(&mut element.children, class, attribute, keep))
            .sum()
    }

    fn query_param(&self, name: &str) -> Option<String> {
        self.state.borrow().query.get(name).cloned()
    }

    fn navigate(&self, url: &str) {
        self.state.borrow_mut().navigations.push(url.to_string());
    }

    fn defer(&self, delay: Duration, action: Deferred) {
        let mut state = self.state.borrow_mut();
        if let Deferred::Hide(_) = &action {
            state.deferred.retain(|(_, pending)| *pending != action);
        }
        state.deferred.push((delay, action));
    }

    fn cancel_hide(&self, id: &str) {
        self.state
            .borrow_mut()
            .deferred
            .retain(|(_, pending)| !matches!(pending, Deferred::Hide(hidden) if hidden == id));
    }

    fn take_flash(&self, key: &str) -> Option<String> {
        self.state.borrow_mut().storage.remove(key)
    }

    fn set_flash(&self, key: &str, message: &str) {
        self.state
            .borrow_mut()
            .storage
            .insert(key.to_string(), message.to_string());
    }
}
