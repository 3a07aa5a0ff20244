//! Places list pages: the landing page and the standalone `/places` page.
//! Both render the same shell and differ only in their `ListPageConfig`.

use std::rc::Rc;

use leptos::logging::error;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser::{browser_env, BrowserDom, BrowserSession, GlooTransport};
use crate::components::header::Header;
use crate::config::ListPageConfig;
use crate::pages::IndexPage;

type Controller = IndexPage<BrowserDom, BrowserSession, GlooTransport>;

#[component]
pub fn Home() -> impl IntoView {
    view! { <PlacesListing config=ListPageConfig::index()/> }
}

/// Same list without the flash message, and a failed fetch stays silent.
#[component]
pub fn Places() -> impl IntoView {
    view! { <PlacesListing config=ListPageConfig::places()/> }
}

#[component]
fn PlacesListing(config: ListPageConfig) -> impl IntoView {
    let controller = store_value(None::<Rc<Controller>>);
    let ids = config.clone();

    create_effect(move |_| {
        let Some(env) = browser_env() else {
            error!("[Places] No browser environment");
            return;
        };
        let page = Rc::new(Controller::new(env, config.clone()));
        controller.set_value(Some(Rc::clone(&page)));
        spawn_local(async move { page.load().await });
    });

    let on_filter = move |_: ev::Event| {
        if let Some(page) = controller.get_value() {
            page.filter_changed();
        }
    };

    view! {
        <Header/>
        <main>
            <div id=ids.status_id class="error-message" style="display: none;"></div>
            <section id="filter">
                <label for=ids.filter_id>{ "Max price:" }</label>
                <select id=ids.filter_id on:change=on_filter>
                    <option value="All">{ "All" }</option>
                    <option value="10">{ "$10" }</option>
                    <option value="50">{ "$50" }</option>
                    <option value="100">{ "$100" }</option>
                </select>
            </section>
            <section id=ids.section_id>
                <h2>{ "Places" }</h2>
                <div id=ids.container_id></div>
            </section>
        </main>
    }
}
