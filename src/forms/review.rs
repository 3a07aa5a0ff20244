use leptos::logging::{log, warn};

use super::{FormMachine, FormState};
use crate::client::Transport;
use crate::dom::{Deferred, Dom};
use crate::error::RequestError;
use crate::models::review::MAX_RATING;
use crate::models::NewReview;
use crate::page::PageEnv;
use crate::render::place_detail::{place_error_message, show_place};
use crate::session::Session;

pub const FORM_ID: &str = "review-form";
pub const TEXT_FIELD: &str = "review-text";
pub const RATING_FIELD: &str = "rating";

pub const MISSING_INPUT: &str = "Please provide a review and a rating.";
pub const RATING_RANGE: &str = "Rating must be between 1 and 5.";
pub const LOGIN_REQUIRED: &str = "You must be logged in to submit a review.";
pub const SUBMITTED: &str = "Review submitted successfully!";

/// What happens after the backend accepts a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterReview {
    /// Re-fetch the place and redraw the detail view in place.
    RefreshDetail,
    /// Show a confirmation, then go to the place page.
    RedirectToPlace,
}

#[derive(Debug)]
pub struct ReviewForm {
    machine: FormMachine,
    place_id: String,
    after: AfterReview,
    status_id: &'static str,
}

impl ReviewForm {
    pub fn new(place_id: impl Into<String>, after: AfterReview, status_id: &'static str) -> Self {
        Self {
            machine: FormMachine::default(),
            place_id: place_id.into(),
            after,
            status_id,
        }
    }

    pub fn state(&self) -> FormState {
        self.machine.state()
    }

    pub async fn submit<D, S, T>(&self, env: &PageEnv<D, S, T>) -> FormState
    where
        D: Dom,
        S: Session,
        T: Transport,
    {
        if !self.machine.begin() {
            log!("[Review] Submission already in flight");
            return FormState::Submitting;
        }
        let outcome = self.send(env).await;
        if let Err(err) = &outcome {
            warn!("[Review] Not submitted: {:?}", err);
            env.status(self.status_id).error(err);
        }
        self.machine.finish(outcome)
    }

    async fn send<D, S, T>(&self, env: &PageEnv<D, S, T>) -> Result<(), RequestError>
    where
        D: Dom,
        S: Session,
        T: Transport,
    {
        let review = parse_review(
            &env.dom.value(TEXT_FIELD).unwrap_or_default(),
            &env.dom.value(RATING_FIELD).unwrap_or_default(),
            &self.place_id,
        )?;
        let token = env
            .session
            .token()
            .ok_or_else(|| RequestError::unauthorized(LOGIN_REQUIRED))?;

        let created = env.client.create_review(&review, &token).await?;
        log!("[Review] Review {} submitted", created.id);
        env.dom.reset_form(FORM_ID);

        let status = env.status(self.status_id);
        match self.after {
            AfterReview::RefreshDetail => match show_place(env, &self.place_id).await {
                Ok(()) => status.success(SUBMITTED, true),
                Err(err) => status.error_text(&place_error_message(&err), err.auto_hides()),
            },
            AfterReview::RedirectToPlace => {
                status.success(SUBMITTED, false);
                env.dom.defer(
                    env.config.redirect_delay,
                    Deferred::Navigate(env.config.pages.place_url(&self.place_id)),
                );
            }
        }
        Ok(())
    }
}

/// Local checks run before anything is sent.
pub fn parse_review(text: &str, rating: &str, place_id: &str) -> Result<NewReview, RequestError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(RequestError::validation(MISSING_INPUT));
    }
    let rating: i64 = rating
        .trim()
        .parse()
        .map_err(|_| RequestError::validation(MISSING_INPUT))?;
    if !(1..=MAX_RATING).contains(&rating) {
        return Err(RequestError::validation(RATING_RANGE));
    }
    Ok(NewReview {
        text: text.to_string(),
        rating,
        place_id: place_id.to_string(),
    })
}
