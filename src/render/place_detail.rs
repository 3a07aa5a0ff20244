//! Place detail page: fixed slots for the place itself and a review list
//! enriched with each reviewer's name.

use futures::future;
use leptos::logging::{log, warn};

use crate::client::Transport;
use crate::dom::{labelled, Dom, Element, Node};
use crate::error::RequestError;
use crate::models::place::{format_price, Place};
use crate::models::Review;
use crate::page::PageEnv;
use crate::session::Session;

pub const NAME_SLOT: &str = "place-name";
pub const HOST_SLOT: &str = "place-host";
pub const PRICE_SLOT: &str = "place-price";
pub const DESCRIPTION_SLOT: &str = "place-description";
pub const AMENITIES_SLOT: &str = "place-amenities";
pub const REVIEWS_SECTION: &str = "reviews";

pub const UNKNOWN_HOST: &str = "Unknown host";
pub const NO_AMENITIES: &str = "None";
pub const NO_REVIEWS: &str = "No reviews yet.";
const UNKNOWN_REVIEWER: &str = "Unknown reviewer";

pub const NOT_FOUND: &str = "Place not found. The place ID may be invalid.";
pub const UNREACHABLE: &str =
    "An error occurred while fetching place details. Please ensure the backend server is running.";

pub fn host_name(place: &Place) -> String {
    place
        .owner
        .as_ref()
        .and_then(|owner| owner.display_name())
        .unwrap_or_else(|| UNKNOWN_HOST.to_string())
}

pub fn amenities_line(place: &Place) -> String {
    let names = place.amenity_names();
    if names.is_empty() {
        NO_AMENITIES.to_string()
    } else {
        names.join(", ")
    }
}

/// Fills the fixed detail slots. Missing slots are skipped.
pub fn render_place<D: Dom>(dom: &D, place: &Place) {
    let price = place
        .price
        .map(format_price)
        .unwrap_or_else(|| "N/A".to_string());
    let slots = [
        (NAME_SLOT, place.title().unwrap_or("No title provided").to_string()),
        (HOST_SLOT, host_name(place)),
        (PRICE_SLOT, price),
        (
            DESCRIPTION_SLOT,
            place
                .description()
                .unwrap_or("No description provided")
                .to_string(),
        ),
        (AMENITIES_SLOT, amenities_line(place)),
    ];
    for (id, text) in slots {
        if !dom.set_text(id, &text) {
            warn!("[Place] #{} not found", id);
        }
    }
}

fn review_card(review: &Review, reviewer: &str) -> Node {
    Element::new("div")
        .class("review-card")
        .child(Element::new("p").child(Element::new("strong").text(reviewer)))
        .child(Element::new("p").text(review.text.clone()))
        .child(labelled("Rating:", review.stars()))
        .into()
}

/// Replaces the review list. Reviewer lookups are issued together and the
/// cards are reassembled in review order; a failed lookup shows the bare
/// user id instead of a name.
pub async fn render_reviews<D, S, T>(env: &PageEnv<D, S, T>, reviews: Option<&[Review]>)
where
    D: Dom,
    S: Session,
    T: Transport,
{
    let mut nodes: Vec<Node> = vec![Element::new("h3").text("Reviews").into()];
    let reviews = reviews.unwrap_or_default();

    if reviews.is_empty() {
        nodes.push(Element::new("p").text(NO_REVIEWS).into());
    } else {
        let token = env.session.token();
        let lookups = reviews.iter().map(|review| {
            let token = token.as_deref();
            async move {
                if review.user_id.trim().is_empty() {
                    return UNKNOWN_REVIEWER.to_string();
                }
                match env.client.user(&review.user_id, token).await {
                    Ok(user) => user
                        .display_name()
                        .unwrap_or_else(|| review.user_id.clone()),
                    Err(err) => {
                        warn!(
                            "[Place] Could not load reviewer {}: {:?}",
                            review.user_id, err
                        );
                        review.user_id.clone()
                    }
                }
            }
        });
        let reviewers = future::join_all(lookups).await;
        log!("[Place] Rendering {} reviews", reviews.len());
        nodes.extend(
            reviews
                .iter()
                .zip(reviewers.iter())
                .map(|(review, reviewer)| review_card(review, reviewer)),
        );
    }

    if !env.dom.replace_children(REVIEWS_SECTION, &nodes) {
        warn!("[Place] #{} not found, reviews not rendered", REVIEWS_SECTION);
    }
}

/// Fetches one place and redraws both the detail slots and the reviews.
pub async fn show_place<D, S, T>(env: &PageEnv<D, S, T>, place_id: &str) -> Result<(), RequestError>
where
    D: Dom,
    S: Session,
    T: Transport,
{
    let place = env.client.place(place_id).await?;
    log!("[Place] Fetched place {}", place.id);
    render_place(&env.dom, &place);
    render_reviews(env, place.reviews.as_deref()).await;
    Ok(())
}

/// Wording used when the place itself cannot be loaded.
pub fn place_error_message(err: &RequestError) -> String {
    match err {
        err if err.is_not_found() => NOT_FOUND.to_string(),
        RequestError::Network { .. } => UNREACHABLE.to_string(),
        other => other.to_string(),
    }
}
