//! Form submission handlers. Each form walks the same small state machine:
//! `Idle -> Submitting -> Success | Error`, and may be submitted again from
//! any state except `Submitting`.

pub mod amenity;
pub mod login;
pub mod review;

use std::cell::RefCell;

use crate::error::RequestError;

pub use amenity::AmenityForm;
pub use login::LoginForm;
pub use review::{AfterReview, ReviewForm};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(RequestError),
}

#[derive(Debug, Default)]
pub struct FormMachine {
    state: RefCell<FormState>,
}

impl FormMachine {
    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    /// Enters `Submitting`. Returns `false` while a submission is in flight.
    pub fn begin(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if *state == FormState::Submitting {
            return false;
        }
        *state = FormState::Submitting;
        true
    }

    pub fn finish(&self, outcome: Result<(), RequestError>) -> FormState {
        let next = match outcome {
            Ok(()) => FormState::Success,
            Err(err) => FormState::Error(err),
        };
        *self.state.borrow_mut() = next.clone();
        next
    }

    pub fn reset(&self) {
        *self.state.borrow_mut() = FormState::Idle;
    }
}
