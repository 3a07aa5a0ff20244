//! Place cards for the landing page and the client-side price filter.
//!
//! Every card carries its price in a `data-price` attribute. Filtering reads
//! that attribute back from the rendered cards, so changing the filter never
//! touches the network.

use std::str::FromStr;

use leptos::logging::warn;
use thiserror::Error;

use crate::config::PageUrls;
use crate::dom::{labelled, Dom, Element, Node};
use crate::models::place::{format_price, Place};

pub const CARD_CLASS: &str = "place-card";
pub const PRICE_ATTR: &str = "data-price";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceFilter {
    All,
    Max(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid price filter: {0:?}")]
pub struct InvalidFilter(pub String);

impl FromStr for PriceFilter {
    type Err = InvalidFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        match value.parse::<f64>() {
            Ok(max) if max.is_finite() && max >= 0.0 => Ok(Self::Max(max)),
            _ => Err(InvalidFilter(value.to_string())),
        }
    }
}

impl PriceFilter {
    /// Whether a card with this `data-price` value stays visible. Cards
    /// without a readable price only show under `All`.
    pub fn admits(self, price: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Max(max) => price
                .and_then(|p| p.trim().parse::<f64>().ok())
                .is_some_and(|p| p <= max),
        }
    }
}

pub fn place_card(place: &Place, pages: &PageUrls) -> Node {
    let mut card = Element::new("div").class(CARD_CLASS);
    if let Some(price) = place.price {
        card.set_attr(PRICE_ATTR, price.to_string());
    }
    let price = place
        .price
        .map(|p| format!("${}", format_price(p)))
        .unwrap_or_else(|| "N/A".to_string());
    let location = match (place.latitude, place.longitude) {
        (Some(lat), Some(lng)) => format!("{}, {}", lat, lng),
        _ => "Unknown".to_string(),
    };

    card.child(Element::new("h3").text(place.title().unwrap_or("No title")))
        .child(
            Element::new("p").text(place.description().unwrap_or("No description provided.")),
        )
        .child(labelled("Price per night:", price))
        .child(labelled("Location:", location))
        .child(
            Element::new("a")
                .class("details-button")
                .attr("href", pages.place_url(&place.id))
                .text("View Details"),
        )
        .into()
}

/// Replaces the container's content with one card per place, or with the
/// placeholder when there are none.
pub fn render_places<D: Dom>(
    dom: &D,
    container_id: &str,
    places: &[Place],
    pages: &PageUrls,
    empty_placeholder: &str,
) -> bool {
    let nodes: Vec<Node> = if places.is_empty() {
        vec![Element::new("p").text(empty_placeholder).into()]
    } else {
        places.iter().map(|place| place_card(place, pages)).collect()
    };
    let rendered = dom.replace_children(container_id, &nodes);
    if !rendered {
        warn!("[Places] #{} not found, nothing rendered", container_id);
    }
    rendered
}

/// Shows the cards priced at or below the threshold. Returns the number of
/// visible cards.
pub fn apply_filter<D: Dom>(dom: &D, filter: PriceFilter) -> usize {
    dom.set_visible_by_class(CARD_CLASS, PRICE_ATTR, &|price| filter.admits(price))
}
