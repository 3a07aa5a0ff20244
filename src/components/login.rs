use std::rc::Rc;

use leptos::logging::error;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser::{browser_env, BrowserDom, BrowserSession, GlooTransport};
use crate::components::header::Header;
use crate::pages::LoginPage;

type Controller = LoginPage<BrowserDom, BrowserSession, GlooTransport>;

#[component]
pub fn Login() -> impl IntoView {
    let controller = store_value(None::<Rc<Controller>>);

    create_effect(move |_| match browser_env() {
        Some(env) => controller.set_value(Some(Rc::new(Controller::new(env)))),
        None => error!("[Login] No browser environment"),
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(page) = controller.get_value() {
            spawn_local(async move {
                page.submit().await;
            });
        }
    };

    view! {
        <Header/>
        <main>
            <form id="login-form" class="login-form" on:submit=on_submit>
                <label for="email">{ "Email" }</label>
                <input type="email" id="email" name="email" required/>
                <label for="password">{ "Password" }</label>
                <input type="password" id="password" name="password" required/>
                <button type="submit">{ "Login" }</button>
            </form>
            <div id="error-message" class="error-message" style="display: none;"></div>
        </main>
    }
}
