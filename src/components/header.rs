use leptos::*;

use crate::browser::browser_env;
use crate::config::ClientConfig;
use crate::pages::nav::{auth_link_clicked, logout, sync_auth_links};

/// Site header with the login/logout links.
#[component]
pub fn Header() -> impl IntoView {
    let pages = ClientConfig::from_env().pages;

    create_effect(move |_| {
        if let Some(env) = browser_env() {
            sync_auth_links(&env);
        }
    });

    let on_auth_click = move |ev: ev::MouseEvent| {
        if let Some(env) = browser_env() {
            if auth_link_clicked(&env) {
                ev.prevent_default();
            }
        }
    };

    let on_logout = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        if let Some(env) = browser_env() {
            logout(&env);
        }
    };

    view! {
        <header>
            <a class="logo" href=pages.landing.clone()>{ "HBnB" }</a>
            <nav>
                <a
                    id="auth-link"
                    class="login-button"
                    href=pages.login.clone()
                    on:click=on_auth_click
                >
                    { "Login" }
                </a>
                <a
                    id="logout-link"
                    class="login-button"
                    href="#"
                    style="display: none;"
                    on:click=on_logout
                >
                    { "Logout" }
                </a>
            </nav>
        </header>
    }
}
