use serde::{Deserialize, Serialize};

use super::{null_as_default, AmenityRef, Review, User};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Place {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub owner: Option<OwnerRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amenities: Vec<AmenityRef>,
    /// `None` when the payload has no `reviews` field at all.
    #[serde(default)]
    pub reviews: Option<Vec<Review>>,
}

/// Owner is either embedded or referenced by id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum OwnerRef {
    Id(String),
    User(User),
}

impl OwnerRef {
    pub fn display_name(&self) -> Option<String> {
        match self {
            Self::Id(id) if !id.trim().is_empty() => Some(id.trim().to_string()),
            Self::Id(_) => None,
            Self::User(user) => user.display_name(),
        }
    }
}

impl Place {
    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    pub fn amenity_names(&self) -> Vec<&str> {
        self.amenities
            .iter()
            .filter_map(AmenityRef::name)
            .filter(|name| !name.trim().is_empty())
            .collect()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Whole prices print without decimals, others with two.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{:.2}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_with_nested_owner() {
        let place: Place = serde_json::from_str(
            r#"{
                "id": "p1", "title": "Loft", "price": 80.0,
                "owner": {"id": "u1", "first_name": "Ada", "last_name": "Lovelace"},
                "amenities": [{"id": "a1", "name": "WiFi"}]
            }"#,
        )
        .unwrap();
        assert_eq!(place.owner.unwrap().display_name().as_deref(), Some("Ada Lovelace"));
        assert!(place.reviews.is_none());
        assert_eq!(place.amenities.len(), 1);
    }

    #[test]
    fn test_owner_falls_back_to_id() {
        let by_id = OwnerRef::Id("u42".into());
        assert_eq!(by_id.display_name().as_deref(), Some("u42"));
        let partial = OwnerRef::User(User {
            id: "u7".into(),
            first_name: Some("Ada".into()),
            ..User::default()
        });
        assert_eq!(partial.display_name().as_deref(), Some("u7"));
        assert_eq!(OwnerRef::User(User::default()).display_name(), None);
    }

    #[test]
    fn test_null_amenities_become_empty() {
        let place: Place = serde_json::from_str(r#"{"id": "p1", "amenities": null}"#).unwrap();
        assert!(place.amenity_names().is_empty());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(100.0), "100");
        assert_eq!(format_price(12.5), "12.50");
    }
}
