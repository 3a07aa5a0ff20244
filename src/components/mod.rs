//! Leptos page shells. Each renders the element ids the page controllers
//! expect and, once hydrated, forwards events to its controller.

pub mod add_review;
pub mod header;
pub mod home;
pub mod login;
pub mod place_details;

pub use add_review::AddReview;
pub use header::Header;
pub use home::{Home, Places};
pub use login::Login;
pub use place_details::PlaceDetails;

use leptos::*;

/// `<option>`s for the rating select, with an empty first choice.
pub(crate) fn rating_options() -> impl IntoView {
    view! {
        <option value="">{ "Select a rating" }</option>
        {(1..=5)
            .map(|rating| view! { <option value=rating.to_string()>{ rating }</option> })
            .collect::<Vec<_>>()}
    }
}
