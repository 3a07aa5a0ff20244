use serde::{Deserialize, Serialize};

use super::{full_name, null_as_default};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// Full name, falling back to the id. `None` when both are missing.
    pub fn display_name(&self) -> Option<String> {
        full_name(self.first_name.as_deref(), self.last_name.as_deref()).or_else(|| {
            let id = self.id.trim();
            (!id.is_empty()).then(|| id.to_string())
        })
    }
}
