use leptos::logging::{error, log};

use super::NO_PLACE_ID;
use crate::client::Transport;
use crate::dom::{Display, Dom};
use crate::forms::amenity::toggle_form;
use crate::forms::{AfterReview, AmenityForm, FormState, ReviewForm};
use crate::page::PageEnv;
use crate::render::place_detail::{place_error_message, show_place};
use crate::session::Session;

pub const DETAILS_SECTION: &str = "place-details";
pub const STATUS_ID: &str = "error-message";

/// Place detail page with its review and amenity forms.
pub struct PlacePage<D, S, T> {
    env: PageEnv<D, S, T>,
    place_id: Option<String>,
    review: Option<ReviewForm>,
    amenity: Option<AmenityForm>,
}

impl<D: Dom, S: Session, T: Transport> PlacePage<D, S, T> {
    pub fn new(env: PageEnv<D, S, T>) -> Self {
        let place_id = env.place_id();
        let review = place_id
            .as_ref()
            .map(|id| ReviewForm::new(id.clone(), AfterReview::RefreshDetail, STATUS_ID));
        let amenity = place_id.as_ref().map(|id| AmenityForm::new(id.clone()));
        Self {
            env,
            place_id,
            review,
            amenity,
        }
    }

    pub fn env(&self) -> &PageEnv<D, S, T> {
        &self.env
    }

    pub fn place_id(&self) -> Option<&str> {
        self.place_id.as_deref()
    }

    pub async fn load(&self) {
        if !self.env.dom.exists(DETAILS_SECTION) {
            error!("[Place] #{} not found", DETAILS_SECTION);
            return;
        }
        let status = self.env.status(STATUS_ID);
        let Some(place_id) = self.place_id.as_deref() else {
            log!("[Place] No placeId in the URL");
            status.error_text(NO_PLACE_ID, false);
            return;
        };
        if let Err(err) = show_place(&self.env, place_id).await {
            error!("[Place] Error fetching place details: {:?}", err);
            status.error_text(&place_error_message(&err), err.auto_hides());
        }
    }

    pub async fn submit_review(&self) -> FormState {
        match &self.review {
            Some(form) => form.submit(&self.env).await,
            None => FormState::Idle,
        }
    }

    pub async fn submit_amenity(&self) -> FormState {
        match &self.amenity {
            Some(form) => form.submit(&self.env).await,
            None => FormState::Idle,
        }
    }

    pub fn toggle_amenity_form(&self) -> Option<Display> {
        toggle_form(&self.env.dom)
    }
}
