//! Browser side of the page boundary: web-sys DOM access, the cookie
//! session and a gloo-net transport.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use leptos::logging::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlDocument, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, UrlSearchParams, Window,
};

use crate::client::{ApiRequest, ApiResponse, Method, Transport};
use crate::config::ClientConfig;
use crate::dom::{Deferred, Display, Dom, Node};
use crate::error::TransportError;
use crate::page::PageEnv;
use crate::session::{cookie_value, expired_cookie, token_cookie, Session};

pub type BrowserEnv = PageEnv<BrowserDom, BrowserSession, GlooTransport>;

/// Builds the environment for the current window. `None` outside a browser.
pub fn browser_env() -> Option<BrowserEnv> {
    let config = ClientConfig::from_env();
    let dom = BrowserDom::from_window()?;
    let session = BrowserSession::new(&dom.document, &config.token_cookie)?;
    Some(PageEnv::new(dom, session, GlooTransport, config))
}

#[derive(Clone)]
pub struct BrowserDom {
    window: Window,
    document: Document,
    // Dropping a `Timeout` cancels it.
    pending_hides: Rc<RefCell<HashMap<String, Timeout>>>,
}

impl BrowserDom {
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            pending_hides: Rc::default(),
        })
    }

    fn element(&self, id: &str) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id)
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.element(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn build(&self, node: &Node) -> Result<web_sys::Node, JsValue> {
        match node {
            Node::Text(text) => Ok(self.document.create_text_node(text).into()),
            Node::Element(view) => {
                let element = self.document.create_element(view.tag)?;
                for class in &view.classes {
                    element.class_list().add_1(class)?;
                }
                for (name, value) in &view.attributes {
                    element.set_attribute(name, value)?;
                }
                for child in &view.children {
                    element.append_child(&self.build(child)?)?;
                }
                Ok(element.into())
            }
        }
    }

    fn run(&self, action: Deferred) {
        match action {
            Deferred::Hide(id) => {
                self.set_display(&id, Display::None);
            }
            Deferred::Navigate(url) => self.navigate(&url),
        }
    }
}

impl Dom for BrowserDom {
    fn exists(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn text(&self, id: &str) -> Option<String> {
        self.element(id)?.text_content()
    }

    fn set_text(&self, id: &str, text: &str) -> bool {
        match self.element(id) {
            Some(element) => {
                element.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }

    fn value(&self, id: &str) -> Option<String> {
        let element = self.element(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            return Some(area.value());
        }
        element
            .dyn_ref::<HtmlSelectElement>()
            .map(HtmlSelectElement::value)
    }

    fn display(&self, id: &str) -> Option<Display> {
        let value = self
            .html_element(id)?
            .style()
            .get_property_value("display")
            .unwrap_or_default();
        // An unset inline style counts as hidden: forms toggled this way
        // start out collapsed in the stylesheet.
        match value.as_str() {
            "" | "none" => Some(Display::None),
            _ => Some(Display::Block),
        }
    }

    fn set_display(&self, id: &str, display: Display) -> bool {
        self.set_style(id, "display", display.as_css())
    }

    fn set_style(&self, id: &str, property: &str, value: &str) -> bool {
        let Some(element) = self.html_element(id) else {
            return false;
        };
        if let Err(err) = element.style().set_property(property, value) {
            warn!("[Dom] #{} {}: {:?}", id, property, err);
        }
        true
    }

    fn set_href(&self, id: &str, href: &str) -> bool {
        match self.element(id) {
            Some(element) => element.set_attribute("href", href).is_ok(),
            None => false,
        }
    }

    fn replace_children(&self, id: &str, nodes: &[Node]) -> bool {
        let Some(parent) = self.element(id) else {
            return false;
        };
        parent.set_text_content(None);
        for node in nodes {
            let appended = self
                .build(node)
                .and_then(|child| parent.append_child(&child));
            if let Err(err) = appended {
                warn!("[Dom] Could not render into #{}: {:?}", id, err);
            }
        }
        true
    }

    fn ensure_child(&self, parent_id: &str, child_id: &str) -> bool {
        if self.exists(child_id) {
            return true;
        }
        let Some(parent) = self.element(parent_id) else {
            return false;
        };
        let created = self.document.create_element("div").and_then(|child| {
            child.set_id(child_id);
            parent.append_child(&child)
        });
        created.is_ok()
    }

    fn reset_form(&self, id: &str) -> bool {
        match self.element(id) {
            Some(element) => match element.dyn_ref::<HtmlFormElement>() {
                Some(form) => {
                    form.reset();
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    fn set_visible_by_class(
        &self,
        class: &str,
        attribute: &str,
        keep: &dyn Fn(Option<&str>) -> bool,
    ) -> usize {
        let elements = self.document.get_elements_by_class_name(class);
        let mut visible = 0;
        for index in 0..elements.length() {
            let Some(element) = elements.item(index) else {
                continue;
            };
            let shown = keep(element.get_attribute(attribute).as_deref());
            if let Some(html) = element.dyn_ref::<HtmlElement>() {
                let display = if shown { Display::Block } else { Display::None };
                if let Err(err) = html.style().set_property("display", display.as_css()) {
                    warn!("[Dom] .{} display: {:?}", class, err);
                }
            }
            if shown {
                visible += 1;
            }
        }
        visible
    }

    fn query_param(&self, name: &str) -> Option<String> {
        let search = self.window.location().search().ok()?;
        UrlSearchParams::new_with_str(&search).ok()?.get(name)
    }

    fn navigate(&self, url: &str) {
        if let Err(err) = self.window.location().set_href(url) {
            warn!("[Dom] navigation to {} failed: {:?}", url, err);
        }
    }

    fn defer(&self, delay: Duration, action: Deferred) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let hide_id = match &action {
            Deferred::Hide(id) => Some(id.clone()),
            Deferred::Navigate(_) => None,
        };
        let dom = self.clone();
        let timeout = Timeout::new(millis, move || dom.run(action));
        match hide_id {
            Some(id) => {
                self.pending_hides.borrow_mut().insert(id, timeout);
            }
            None => {
                timeout.forget();
            }
        }
    }

    fn cancel_hide(&self, id: &str) {
        self.pending_hides.borrow_mut().remove(id);
    }

    fn take_flash(&self, key: &str) -> Option<String> {
        let storage = self.window.local_storage().ok()??;
        let message = storage.get_item(key).ok()??;
        if let Err(err) = storage.remove_item(key) {
            warn!("[Dom] Could not clear {}: {:?}", key, err);
        }
        Some(message)
    }

    fn set_flash(&self, key: &str, message: &str) {
        match self.window.local_storage() {
            Ok(Some(storage)) => {
                if let Err(err) = storage.set_item(key, message) {
                    warn!("[Dom] Could not store {}: {:?}", key, err);
                }
            }
            _ => warn!("[Dom] localStorage unavailable"),
        }
    }
}

/// Token cookie on the current document.
pub struct BrowserSession {
    document: HtmlDocument,
    cookie: String,
}

impl BrowserSession {
    pub fn new(document: &Document, cookie: &str) -> Option<Self> {
        let document = document.clone().dyn_into::<HtmlDocument>().ok()?;
        Some(Self {
            document,
            cookie: cookie.to_string(),
        })
    }

    fn write(&self, cookie: &str) {
        if let Err(err) = self.document.set_cookie(cookie) {
            warn!("[Auth] Could not write cookie: {:?}", err);
        }
    }
}

impl Session for BrowserSession {
    fn token(&self) -> Option<String> {
        let cookies = self.document.cookie().ok()?;
        cookie_value(&cookies, &self.cookie)
    }

    fn set_token(&self, token: &str) {
        self.write(&token_cookie(&self.cookie, token));
    }

    fn clear_token(&self) {
        self.write(&expired_cookie(&self.cookie));
    }
}

/// `fetch` through gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let sent = match request.body {
            Some(body) => builder.body(body).map_err(transport_error)?.send().await,
            None => builder.send().await,
        };
        let response = sent.map_err(transport_error)?;

        let status = response.status();
        let content_type = response.headers().get("content-type");
        let body = response.text().await.map_err(transport_error)?;
        Ok(ApiResponse {
            status,
            content_type,
            body,
        })
    }
}

fn transport_error(err: gloo_net::Error) -> TransportError {
    TransportError(err.to_string())
}
