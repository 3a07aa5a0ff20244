pub mod amenity;
pub mod place;
pub mod review;
pub mod user;

pub use amenity::{AmenityRef, NewAmenity};
pub use place::{OwnerRef, Place};
pub use review::{NewReview, Review};
pub use user::User;

use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `first last` when both parts are present and non-blank.
pub(crate) fn full_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    match (first.map(str::trim), last.map(str::trim)) {
        (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
            Some(format!("{} {}", first, last))
        }
        _ => None,
    }
}
