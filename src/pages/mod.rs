//! One controller per page. A controller owns the page environment and the
//! page's forms; the Leptos shells call into it on load and on events.

pub mod add_review;
pub mod index;
pub mod login;
pub mod nav;
pub mod place;

pub use add_review::AddReviewPage;
pub use index::IndexPage;
pub use login::LoginPage;
pub use place::PlacePage;

pub const NO_PLACE_ID: &str = "No place ID provided in the URL.";
