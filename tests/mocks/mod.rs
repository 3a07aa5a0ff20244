//! In-memory stand-ins for the browser: DOM, cookie jar and HTTP transport.
#![allow(dead_code)]

pub mod memory_dom;
pub mod memory_session;
pub mod mock_transport;

pub use memory_dom::MemoryDom;
pub use memory_session::MemorySession;
pub use mock_transport::MockTransport;

use hbnb_client::{ClientConfig, PageEnv};

pub const API_BASE: &str = "http://api.test/api/v1";

pub type TestEnv = PageEnv<MemoryDom, MemorySession, MockTransport>;

pub fn config() -> ClientConfig {
    ClientConfig::default().with_api_base(API_BASE)
}

pub fn url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

pub fn env(dom: MemoryDom, session: MemorySession, transport: MockTransport) -> TestEnv {
    PageEnv::new(dom, session, transport, config())
}
