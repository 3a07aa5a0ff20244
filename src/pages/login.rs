use crate::client::Transport;
use crate::dom::Dom;
use crate::forms::{FormState, LoginForm};
use crate::page::PageEnv;
use crate::session::Session;

pub struct LoginPage<D, S, T> {
    env: PageEnv<D, S, T>,
    form: LoginForm,
}

impl<D: Dom, S: Session, T: Transport> LoginPage<D, S, T> {
    pub fn new(env: PageEnv<D, S, T>) -> Self {
        Self {
            env,
            form: LoginForm::new(),
        }
    }

    pub fn env(&self) -> &PageEnv<D, S, T> {
        &self.env
    }

    pub async fn submit(&self) -> FormState {
        self.form.submit(&self.env).await
    }
}
