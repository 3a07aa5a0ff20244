use leptos::logging::log;

use super::NO_PLACE_ID;
use crate::client::Transport;
use crate::config::FLASH_KEY;
use crate::dom::Dom;
use crate::forms::{AfterReview, FormState, ReviewForm};
use crate::page::PageEnv;
use crate::session::Session;

pub const STATUS_ID: &str = "message";
pub const LOGIN_REQUIRED: &str = "You must be logged in to add a review.";

/// Standalone "add review" page. Requires a session; sends visitors without
/// one back to the landing page with a message.
pub struct AddReviewPage<D, S, T> {
    env: PageEnv<D, S, T>,
    form: Option<ReviewForm>,
}

impl<D: Dom, S: Session, T: Transport> AddReviewPage<D, S, T> {
    pub fn new(env: PageEnv<D, S, T>) -> Self {
        let form = env
            .place_id()
            .map(|id| ReviewForm::new(id, AfterReview::RedirectToPlace, STATUS_ID));
        Self { env, form }
    }

    pub fn env(&self) -> &PageEnv<D, S, T> {
        &self.env
    }

    /// Checks the session and the place id. Returns whether the form is
    /// usable.
    pub fn open(&self) -> bool {
        if !self.env.session.is_authenticated() {
            log!("[AddReview] No token found, redirecting");
            self.env.dom.set_flash(FLASH_KEY, LOGIN_REQUIRED);
            self.env.dom.navigate(&self.env.config.pages.landing);
            return false;
        }
        if self.form.is_none() {
            log!("[AddReview] No placeId in the URL");
            self.env.status(STATUS_ID).error_text(NO_PLACE_ID, true);
            return false;
        }
        true
    }

    pub async fn submit(&self) -> FormState {
        match &self.form {
            Some(form) => form.submit(&self.env).await,
            None => FormState::Idle,
        }
    }
}
