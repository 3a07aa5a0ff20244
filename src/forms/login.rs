use leptos::logging::{log, warn};

use super::{FormMachine, FormState};
use crate::client::Transport;
use crate::dom::Dom;
use crate::error::RequestError;
use crate::page::PageEnv;
use crate::session::Session;

pub const FORM_ID: &str = "login-form";
pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";
pub const STATUS_ID: &str = "error-message";

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

#[derive(Debug, Default)]
pub struct LoginForm {
    machine: FormMachine,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.machine.state()
    }

    /// Posts the credentials. On success the token lands in the cookie and
    /// the browser goes to the landing page.
    pub async fn submit<D, S, T>(&self, env: &PageEnv<D, S, T>) -> FormState
    where
        D: Dom,
        S: Session,
        T: Transport,
    {
        if !self.machine.begin() {
            log!("[Login] Submission already in flight");
            return FormState::Submitting;
        }
        let status = env.status(STATUS_ID);
        status.clear();

        let (Some(email), Some(password)) = (
            env.dom.value(EMAIL_FIELD),
            env.dom.value(PASSWORD_FIELD),
        ) else {
            warn!("[Login] #{} or #{} not found", EMAIL_FIELD, PASSWORD_FIELD);
            self.machine.reset();
            return FormState::Idle;
        };

        let outcome = match env.client.login(email.trim(), &password).await {
            Ok(response) if !response.access_token.trim().is_empty() => {
                env.session.set_token(response.access_token.trim());
                log!("[Login] Logged in, redirecting");
                env.dom.navigate(&env.config.pages.landing);
                Ok(())
            }
            Ok(_) => Err(RequestError::format("login response without access_token")),
            Err(err) => Err(err),
        };
        if let Err(err) = &outcome {
            warn!("[Login] Login failed: {:?}", err);
            status.error_text(&login_message(err), err.auto_hides());
        }
        self.machine.finish(outcome)
    }
}

/// Server text when there is one; the generic credential message otherwise.
fn login_message(err: &RequestError) -> String {
    match err {
        RequestError::Unauthorized { message: None } | RequestError::Http { .. } => {
            LOGIN_FAILED.to_string()
        }
        other => other.to_string(),
    }
}
