use leptos::logging::log;

use crate::client::Transport;
use crate::dom::{Display, Dom};
use crate::page::PageEnv;
use crate::session::Session;

pub const AUTH_LINK: &str = "auth-link";
pub const LOGOUT_LINK: &str = "logout-link";

/// Reflects the session in the header. With a dedicated logout link only
/// one of the two links is visible; with a single link it is relabelled.
pub fn sync_auth_links<D, S, T>(env: &PageEnv<D, S, T>)
where
    D: Dom,
    S: Session,
    T: Transport,
{
    let logged_in = env.session.is_authenticated();
    let dom = &env.dom;
    if dom.exists(LOGOUT_LINK) {
        let (login, logout) = if logged_in {
            (Display::None, Display::Block)
        } else {
            (Display::Block, Display::None)
        };
        dom.set_display(AUTH_LINK, login);
        dom.set_display(LOGOUT_LINK, logout);
    } else if logged_in {
        dom.set_text(AUTH_LINK, "Logout");
        dom.set_href(AUTH_LINK, "#");
    } else {
        dom.set_text(AUTH_LINK, "Login");
        dom.set_href(AUTH_LINK, &env.config.pages.login);
    }
}

/// Handles a click on the auth link. In single-link mode a logged-in click
/// logs out; returns `true` when the default navigation must be suppressed.
pub fn auth_link_clicked<D, S, T>(env: &PageEnv<D, S, T>) -> bool
where
    D: Dom,
    S: Session,
    T: Transport,
{
    if env.dom.exists(LOGOUT_LINK) || !env.session.is_authenticated() {
        return false;
    }
    logout(env);
    true
}

pub fn logout<D, S, T>(env: &PageEnv<D, S, T>)
where
    D: Dom,
    S: Session,
    T: Transport,
{
    log!("[Auth] Logging out");
    env.session.clear_token();
    env.dom.navigate(&env.config.pages.login);
}
