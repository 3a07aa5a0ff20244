use std::cell::RefCell;

use leptos::logging::{log, warn};

use crate::client::Transport;
use crate::config::{ListPageConfig, FLASH_KEY};
use crate::dom::Dom;
use crate::models::Place;
use crate::page::PageEnv;
use crate::render::places_list::{apply_filter, render_places, PriceFilter};
use crate::session::Session;

/// Landing page (and the standalone places page): list of places with a
/// price filter.
pub struct IndexPage<D, S, T> {
    env: PageEnv<D, S, T>,
    layout: ListPageConfig,
    places: RefCell<Vec<Place>>,
}

impl<D: Dom, S: Session, T: Transport> IndexPage<D, S, T> {
    pub fn new(env: PageEnv<D, S, T>, layout: ListPageConfig) -> Self {
        Self {
            env,
            layout,
            places: RefCell::new(Vec::new()),
        }
    }

    pub fn env(&self) -> &PageEnv<D, S, T> {
        &self.env
    }

    /// Places from the last successful load.
    pub fn places(&self) -> Vec<Place> {
        self.places.borrow().clone()
    }

    pub async fn load(&self) {
        let dom = &self.env.dom;
        if !dom.exists(self.layout.section_id) {
            log!("[Places] No #{} on this page", self.layout.section_id);
            return;
        }
        if self.layout.show_flash {
            self.show_flash();
        }
        dom.ensure_child(self.layout.section_id, self.layout.container_id);

        let token = self.env.session.token();
        let places = match self.env.client.places(token.as_deref()).await {
            Ok(places) => places,
            Err(err) => {
                warn!("[Places] Error fetching places: {:?}", err);
                if let Some(message) = self.layout.load_error_message {
                    self.env
                        .status(self.layout.status_id)
                        .error_text(message, err.auto_hides());
                }
                Vec::new()
            }
        };
        log!("[Places] Fetched {} places", places.len());

        render_places(
            dom,
            self.layout.container_id,
            &places,
            &self.env.config.pages,
            self.layout.empty_placeholder,
        );
        *self.places.borrow_mut() = places;
        self.filter_changed();
    }

    /// Re-applies the price filter from the current `max-price` selection.
    /// Returns the number of visible cards, `None` without a filter control.
    pub fn filter_changed(&self) -> Option<usize> {
        let value = self.env.dom.value(self.layout.filter_id)?;
        let filter = value.parse::<PriceFilter>().unwrap_or_else(|err| {
            warn!("[Places] {}, showing all", err);
            PriceFilter::All
        });
        log!("[Places] Filter selected: {:?}", filter);
        Some(apply_filter(&self.env.dom, filter))
    }

    fn show_flash(&self) {
        if let Some(message) = self.env.dom.take_flash(FLASH_KEY) {
            self.env
                .status(self.layout.status_id)
                .error_text(&message, true);
        }
    }
}
