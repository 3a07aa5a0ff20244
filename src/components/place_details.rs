//! Place detail page: details, reviews, review form and amenity form.

use std::rc::Rc;

use leptos::logging::error;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser::{browser_env, BrowserDom, BrowserSession, GlooTransport};
use crate::components::header::Header;
use crate::components::rating_options;
use crate::pages::PlacePage;

type Controller = PlacePage<BrowserDom, BrowserSession, GlooTransport>;

#[component]
pub fn PlaceDetails() -> impl IntoView {
    let controller = store_value(None::<Rc<Controller>>);

    create_effect(move |_| {
        let Some(env) = browser_env() else {
            error!("[Place] No browser environment");
            return;
        };
        let page = Rc::new(Controller::new(env));
        controller.set_value(Some(Rc::clone(&page)));
        spawn_local(async move { page.load().await });
    });

    let on_review = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(page) = controller.get_value() {
            spawn_local(async move {
                page.submit_review().await;
            });
        }
    };

    let on_amenity = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(page) = controller.get_value() {
            spawn_local(async move {
                page.submit_amenity().await;
            });
        }
    };

    let on_toggle = move |_: ev::MouseEvent| {
        if let Some(page) = controller.get_value() {
            page.toggle_amenity_form();
        }
    };

    view! {
        <Header/>
        <main>
            <div id="error-message" class="error-message" style="display: none;"></div>
            <section id="place-details" class="place-details">
                <h1 id="place-name">{ "Loading..." }</h1>
                <p>
                    <strong>{ "Host: " }</strong>
                    <span id="place-host">{ "Loading..." }</span>
                </p>
                <p>
                    <strong>{ "Price per night: $" }</strong>
                    <span id="place-price">{ "Loading..." }</span>
                </p>
                <p>
                    <strong>{ "Description: " }</strong>
                    <span id="place-description">{ "Loading..." }</span>
                </p>
                <p>
                    <strong>{ "Amenities: " }</strong>
                    <span id="place-amenities">{ "Loading..." }</span>
                </p>
                <button id="toggle-amenity-form" type="button" on:click=on_toggle>
                    { "Add Amenity" }
                </button>
                <div id="add-amenity" style="display: none;">
                    <form id="amenity-form" on:submit=on_amenity>
                        <label for="amenity-name">{ "Amenity name:" }</label>
                        <input type="text" id="amenity-name" name="amenity-name"/>
                        <button type="submit">{ "Add" }</button>
                    </form>
                </div>
            </section>
            <section id="reviews">
                <h3>{ "Reviews" }</h3>
            </section>
            <section id="add-review" class="add-review">
                <h3>{ "Add a Review" }</h3>
                <form id="review-form" on:submit=on_review>
                    <textarea
                        id="review-text"
                        name="review-text"
                        placeholder="Write your review here"
                    ></textarea>
                    <label for="rating">{ "Rating:" }</label>
                    <select id="rating" name="rating">{ rating_options() }</select>
                    <button type="submit">{ "Submit Review" }</button>
                </form>
            </section>
        </main>
    }
}
