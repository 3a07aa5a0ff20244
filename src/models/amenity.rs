use serde::{Deserialize, Serialize};

/// Amenities arrive either as bare names or as `{id, name}` objects.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AmenityRef {
    Name(String),
    Object {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl AmenityRef {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Object { name, .. } => name.as_deref(),
        }
    }
}

/// Body of `POST /amenities/`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewAmenity {
    pub name: String,
    pub place_id: String,
}

/// The backend wraps the created amenity (`{"amenity": {...}, "message": ...}`);
/// older deployments return it bare.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum CreatedAmenity {
    Wrapped { amenity: AmenityRef },
    Bare(AmenityRef),
}

impl CreatedAmenity {
    pub fn into_inner(self) -> AmenityRef {
        match self {
            Self::Wrapped { amenity } | Self::Bare(amenity) => amenity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amenity_shapes() {
        let json = r#"["WiFi", {"id": "a1", "name": "Pool"}, {"id": "a2"}]"#;
        let list: Vec<AmenityRef> = serde_json::from_str(json).unwrap();
        let names: Vec<Option<&str>> = list.iter().map(AmenityRef::name).collect();
        assert_eq!(names, vec![Some("WiFi"), Some("Pool"), None]);
    }

    #[test]
    fn test_created_amenity_unwraps() {
        let wrapped: CreatedAmenity =
            serde_json::from_str(r#"{"amenity": {"id": "a1", "name": "Sauna"}, "message": "ok"}"#)
                .unwrap();
        assert_eq!(wrapped.into_inner().name(), Some("Sauna"));
    }
}
