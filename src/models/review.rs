use serde::{Deserialize, Serialize};

use super::null_as_default;

pub const MAX_RATING: i64 = 5;
const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Review {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub place_id: String,
}

impl Review {
    pub fn stars(&self) -> String {
        stars(self.rating)
    }
}

/// Five glyphs: `rating` filled, the rest empty. Out-of-range ratings clamp.
pub fn stars(rating: i64) -> String {
    let filled = rating.clamp(0, MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    std::iter::repeat(FILLED_STAR)
        .take(filled)
        .chain(std::iter::repeat(EMPTY_STAR).take(empty))
        .collect()
}

/// Body of `POST /reviews/`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewReview {
    pub text: String,
    pub rating: i64,
    pub place_id: String,
}
