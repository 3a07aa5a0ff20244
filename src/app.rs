//! Main application entry point for the HBnB client.
//! Routes each page URL to its page shell.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::{AddReview, Home, Login, PlaceDetails, Places};

// Paths match `config::PageUrls::default()`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/hbnb_client.css"/>
        <Title text="HBnB"/>
        <Router>
            <Routes>
                <Route path="/" view=Home/>
                <Route path="/places" view=Places/>
                <Route path="/login" view=Login/>
                <Route path="/place" view=PlaceDetails/>
                <Route path="/add_review" view=AddReview/>
            </Routes>
        </Router>
    }
}
