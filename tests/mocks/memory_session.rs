use std::cell::RefCell;
use std::collections::BTreeMap;

use hbnb_client::session::{cookie_value, expired_cookie, token_cookie, Session};

/// Cookie jar that applies the same cookie strings the browser would get.
pub struct MemorySession {
    name: String,
    jar: RefCell<BTreeMap<String, String>>,
    writes: RefCell<Vec<String>>,
}

impl MemorySession {
    pub fn anonymous() -> Self {
        Self {
            name: "token".to_string(),
            jar: RefCell::new(BTreeMap::new()),
            writes: RefCell::new(Vec::new()),
        }
    }

    pub fn with_token(token: &str) -> Self {
        let session = Self::anonymous();
        session
            .jar
            .borrow_mut()
            .insert(session.name.clone(), token.to_string());
        session
    }

    /// `document.cookie` as the page would read it.
    pub fn cookie_header(&self) -> String {
        self.jar
            .borrow()
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    fn write(&self, cookie: &str) {
        self.writes.borrow_mut().push(cookie.to_string());
        let (pair, attributes) = cookie.split_once(';').unwrap_or((cookie, ""));
        let Some((name, value)) = pair.split_once('=') else {
            return;
        };
        let mut jar = self.jar.borrow_mut();
        if attributes.contains("expires=Thu, 01 Jan 1970") {
            jar.remove(name.trim());
        } else {
            jar.insert(name.trim().to_string(), value.trim().to_string());
        }
    }
}

impl Session for MemorySession {
    fn token(&self) -> Option<String> {
        cookie_value(&self.cookie_header(), &self.name)
    }

    fn set_token(&self, token: &str) {
        self.write(&token_cookie(&self.name, token));
    }

    fn clear_token(&self) {
        self.write(&expired_cookie(&self.name));
    }
}
