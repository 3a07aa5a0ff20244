pub mod app;
pub mod browser;
pub mod client;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod forms;
pub mod models;
pub mod page;
pub mod pages;
pub mod render;
pub mod session;
pub mod status;

pub use client::{ApiRequest, ApiResponse, Method, ResourceClient, Transport};
pub use config::{ClientConfig, ListPageConfig};
pub use dom::{Deferred, Display, Dom, Element, Node, Tone};
pub use error::{RequestError, TransportError};
pub use page::PageEnv;
pub use session::Session;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
