//! What a page handler works against: the DOM, the cookie session, the API
//! client and the configuration.

use crate::client::{ResourceClient, Transport};
use crate::config::ClientConfig;
use crate::dom::Dom;
use crate::session::Session;
use crate::status::StatusRegion;

pub struct PageEnv<D, S, T> {
    pub dom: D,
    pub session: S,
    pub client: ResourceClient<T>,
    pub config: ClientConfig,
}

impl<D: Dom, S: Session, T: Transport> PageEnv<D, S, T> {
    pub fn new(dom: D, session: S, transport: T, config: ClientConfig) -> Self {
        let client = ResourceClient::new(transport, &config);
        Self {
            dom,
            session,
            client,
            config,
        }
    }

    pub fn status<'a>(&'a self, id: &'a str) -> StatusRegion<'a, D> {
        StatusRegion::new(&self.dom, id, self.config.status_hide_after)
    }

    /// Place id from the query string: `placeId`, else `place_id`.
    pub fn place_id(&self) -> Option<String> {
        ["placeId", "place_id"]
            .iter()
            .filter_map(|name| self.dom.query_param(name))
            .map(|id| id.trim().to_string())
            .find(|id| !id.is_empty())
    }
}
