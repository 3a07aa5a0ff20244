use std::rc::Rc;

use leptos::logging::error;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser::{browser_env, BrowserDom, BrowserSession, GlooTransport};
use crate::components::header::Header;
use crate::components::rating_options;
use crate::pages::AddReviewPage;

type Controller = AddReviewPage<BrowserDom, BrowserSession, GlooTransport>;

#[component]
pub fn AddReview() -> impl IntoView {
    let controller = store_value(None::<Rc<Controller>>);

    create_effect(move |_| {
        let Some(env) = browser_env() else {
            error!("[AddReview] No browser environment");
            return;
        };
        let page = Controller::new(env);
        if page.open() {
            controller.set_value(Some(Rc::new(page)));
        }
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
            <section id="add-review" class="add-review">
                <h2>{ "Add a Review" }</h2>
                <div id="message" style="display: none;"></div>
                <form id="review-form" on:submit=on_submit>
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
