//! Client configuration: where the REST backend lives, which page URLs the
//! scripts navigate between and how long status messages stay visible.

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api/v1";
pub const DEFAULT_PLACES_PATH: &str = "/places/";
pub const TOKEN_COOKIE: &str = "token";
pub const FLASH_KEY: &str = "errorMessage";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrls {
    pub landing: String,
    pub login: String,
    pub place: String,
    pub add_review: String,
}

impl Default for PageUrls {
    fn default() -> Self {
        Self {
            landing: "/".to_string(),
            login: "/login".to_string(),
            place: "/place".to_string(),
            add_review: "/add_review".to_string(),
        }
    }
}

impl PageUrls {
    /// Link to the detail page of one place.
    pub fn place_url(&self, place_id: &str) -> String {
        format!("{}?placeId={}", self.place, urlencoding::encode(place_id))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the API, without trailing slash (`http://host/api/v1`).
    pub api_base: String,
    /// Collection path for places. Some deployments redirect `/places` to
    /// `/places/`, so this stays configurable.
    pub places_path: String,
    pub pages: PageUrls,
    pub token_cookie: String,
    pub status_hide_after: Duration,
    pub notice_hide_after: Duration,
    pub redirect_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            places_path: DEFAULT_PLACES_PATH.to_string(),
            pages: PageUrls::default(),
            token_cookie: TOKEN_COOKIE.to_string(),
            status_hide_after: Duration::from_secs(5),
            notice_hide_after: Duration::from_secs(3),
            redirect_delay: Duration::from_secs(2),
        }
    }
}

impl ClientConfig {
    /// Reads overrides baked in at compile time. The WASM bundle has no
    /// process environment, so `option_env!` is the only channel.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base) = option_env!("HBNB_API_BASE") {
            config = config.with_api_base(base);
        }
        if let Some(path) = option_env!("HBNB_PLACES_PATH") {
            config.places_path = path.to_string();
        }
        config
    }

    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim_end_matches('/').to_string();
        self
    }

    pub fn with_places_path(mut self, path: &str) -> Self {
        self.places_path = path.to_string();
        self
    }
}

/// Per-page settings for the places list. The landing page and the
/// standalone places page share one renderer and differ only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPageConfig {
    pub section_id: &'static str,
    pub container_id: &'static str,
    pub filter_id: &'static str,
    pub status_id: &'static str,
    pub empty_placeholder: &'static str,
    /// Shown in the status region when the list cannot be fetched. `None`
    /// keeps the failure silent (the list just renders empty).
    pub load_error_message: Option<&'static str>,
    /// Whether the page displays a message left behind by a redirect.
    pub show_flash: bool,
}

impl ListPageConfig {
    pub fn index() -> Self {
        Self {
            section_id: "places-list",
            container_id: "places-container",
            filter_id: "max-price",
            status_id: "error-message",
            empty_placeholder: "No places available.",
            load_error_message: Some("Failed to load places. Please try again later."),
            show_flash: true,
        }
    }

    pub fn places() -> Self {
        Self {
            load_error_message: None,
            show_flash: false,
            ..Self::index()
        }
    }
}
