//! The page boundary: everything the handlers read from or write to the
//! browser apart from cookies. Elements are addressed by id; rendered
//! content is passed as a [`Node`] tree.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::None => "none",
        }
    }
}

/// Status region colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Error,
    Success,
}

impl Tone {
    pub fn color(self) -> &'static str {
        match self {
            Self::Error => "red",
            Self::Success => "green",
        }
    }
}

/// Work scheduled to run after a delay on the page's event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    Hide(String),
    Navigate(String),
}

pub trait Dom {
    fn exists(&self, id: &str) -> bool;
    fn text(&self, id: &str) -> Option<String>;
    /// Returns `false` when the element is missing.
    fn set_text(&self, id: &str, text: &str) -> bool;
    /// Current value of an input, textarea or select.
    fn value(&self, id: &str) -> Option<String>;
    fn display(&self, id: &str) -> Option<Display>;
    fn set_display(&self, id: &str, display: Display) -> bool;
    fn set_style(&self, id: &str, property: &str, value: &str) -> bool;
    fn set_href(&self, id: &str, href: &str) -> bool;
    /// Drops the element's children and appends `nodes` in order.
    fn replace_children(&self, id: &str, nodes: &[Node]) -> bool;
    /// Makes sure an element `child_id` exists, appending an empty `div`
    /// with that id to `parent_id` when it doesn't.
    fn ensure_child(&self, parent_id: &str, child_id: &str) -> bool;
    fn reset_form(&self, id: &str) -> bool;
    /// Shows or hides every element carrying `class`, deciding from the
    /// value of its `attribute`. Returns how many stay visible.
    fn set_visible_by_class(
        &self,
        class: &str,
        attribute: &str,
        keep: &dyn Fn(Option<&str>) -> bool,
    ) -> usize;

    fn query_param(&self, name: &str) -> Option<String>;
    fn navigate(&self, url: &str);
    /// Schedules `action`. A pending `Hide` for the same id is replaced, so
    /// an older timer never hides a newer message.
    fn defer(&self, delay: Duration, action: Deferred);

    /// Drops a pending `Hide` for `id`, if any.
    fn cancel_hide(&self, id: &str);

    /// Message left in page-local storage to survive a redirect. Reading
    /// it removes it.
    fn take_flash(&self, key: &str) -> Option<String>;
    fn set_flash(&self, key: &str, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<&'static str>,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn set_attr(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Concatenated text of the subtree, like `textContent`.
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element(element) => element.children.iter().map(Node::text_content).collect(),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }
}

/// `<p><strong>label</strong> value</p>`
pub fn labelled(label: &str, value: impl Into<String>) -> Element {
    Element::new("p")
        .child(Element::new("strong").text(label))
        .text(format!(" {}", value.into()))
}
