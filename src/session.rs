//! Session accessor: the bearer token kept in a cookie.
//!
//! The client never inspects the token. Presence means "logged in"; the
//! backend answers 401 when it disagrees.

pub trait Session {
    /// Current token, `None` when the cookie is absent or empty.
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear_token(&self);

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// Looks up one cookie in a `document.cookie` style string (`a=1; b=2`).
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Cookie string that stores the token for the whole site.
pub fn token_cookie(name: &str, token: &str) -> String {
    format!("{}={}; path=/; SameSite=Strict", name, token)
}

/// Cookie string that removes the token by expiring it.
pub fn expired_cookie(name: &str) -> String {
    format!("{}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT", name)
}

/// Header value for an authenticated request.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
