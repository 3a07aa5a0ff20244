use leptos::logging::{log, warn};

use super::{FormMachine, FormState};
use crate::client::Transport;
use crate::dom::{Display, Dom};
use crate::error::RequestError;
use crate::models::NewAmenity;
use crate::page::PageEnv;
use crate::render::place_detail::{place_error_message, show_place, AMENITIES_SLOT, NO_AMENITIES};
use crate::session::Session;
use crate::status::StatusRegion;

pub const FORM_ID: &str = "amenity-form";
pub const NAME_FIELD: &str = "amenity-name";
pub const TOGGLE_BUTTON: &str = "toggle-amenity-form";
pub const FORM_CONTAINER: &str = "add-amenity";
pub const STATUS_ID: &str = "error-message";

pub const EMPTY_NAME: &str = "Please enter an amenity name.";
pub const DUPLICATE: &str = "This amenity has already been added.";
pub const LOGIN_REQUIRED: &str = "You must be logged in to add an amenity.";
pub const ADDED: &str = "Amenity added successfully!";

const LOADING: &str = "Loading...";

#[derive(Debug)]
pub struct AmenityForm {
    machine: FormMachine,
    place_id: String,
}

impl AmenityForm {
    pub fn new(place_id: impl Into<String>) -> Self {
        Self {
            machine: FormMachine::default(),
            place_id: place_id.into(),
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
            log!("[Amenity] Submission already in flight");
            return FormState::Submitting;
        }
        let status = StatusRegion::new(&env.dom, STATUS_ID, env.config.notice_hide_after);
        let outcome = self.send(env, &status).await;
        if let Err(err) = &outcome {
            warn!("[Amenity] Not added: {:?}", err);
            status.error(err);
        }
        self.machine.finish(outcome)
    }

    async fn send<D, S, T>(
        &self,
        env: &PageEnv<D, S, T>,
        status: &StatusRegion<'_, D>,
    ) -> Result<(), RequestError>
    where
        D: Dom,
        S: Session,
        T: Transport,
    {
        let name = env.dom.value(NAME_FIELD).unwrap_or_default();
        let name = name.trim();
        if name.is_empty() {
            return Err(RequestError::validation(EMPTY_NAME));
        }
        if let Some(displayed) = env.dom.text(AMENITIES_SLOT) {
            if is_duplicate(&displayed, name) {
                return Err(RequestError::validation(DUPLICATE));
            }
        }
        let token = env
            .session
            .token()
            .ok_or_else(|| RequestError::unauthorized(LOGIN_REQUIRED))?;

        let amenity = NewAmenity {
            name: name.to_string(),
            place_id: self.place_id.clone(),
        };
        let created = env.client.create_amenity(&amenity, &token).await?;
        log!("[Amenity] Added {:?}", created.name());
        env.dom.reset_form(FORM_ID);
        status.success(ADDED, true);

        if let Err(err) = show_place(env, &self.place_id).await {
            status.error_text(&place_error_message(&err), err.auto_hides());
        }
        Ok(())
    }
}

/// Case-insensitive match of `name` against the comma-separated list shown
/// on the page. Placeholder text never counts as an amenity.
pub fn is_duplicate(displayed: &str, name: &str) -> bool {
    let displayed = displayed.trim();
    if displayed.eq_ignore_ascii_case(LOADING) || displayed == NO_AMENITIES {
        return false;
    }
    let wanted = name.trim().to_lowercase();
    displayed
        .split(',')
        .map(|item| item.trim().to_lowercase())
        .any(|item| item == wanted)
}

/// Shows the amenity form when hidden, hides it otherwise.
pub fn toggle_form<D: Dom>(dom: &D) -> Option<Display> {
    let next = match dom.display(FORM_CONTAINER)? {
        Display::None => Display::Block,
        Display::Block => Display::None,
    };
    dom.set_display(FORM_CONTAINER, next);
    Some(next)
}
