pub mod place_detail;
pub mod places_list;

pub use place_detail::{amenities_line, host_name, render_place, render_reviews};
pub use places_list::{apply_filter, render_places, PriceFilter};
