//! Artisan directory types.

use crate::error::CommerceError;
use crate::ids::ArtisanId;
use serde::{Deserialize, Serialize};

/// A seller in the artisan directory.
///
/// Looked up by id for display only; the cart never validates or owns
/// artisan data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Artisan {
    /// Unique artisan identifier.
    pub id: ArtisanId,
    /// Display name.
    pub name: String,
    /// Home town or region.
    #[serde(default)]
    pub location: Option<String>,
    /// Craft specialty (e.g., "weaving").
    #[serde(default)]
    pub craft: Option<String>,
}

/// The artisan directory loaded from a fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtisanDirectory {
    artisans: Vec<Artisan>,
}

impl ArtisanDirectory {
    /// Create a directory from a list of artisans.
    pub fn new(artisans: Vec<Artisan>) -> Self {
        Self { artisans }
    }

    /// Load a directory from a JSON array fixture.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let artisans: Vec<Artisan> = serde_json::from_str(json)?;
        Ok(Self::new(artisans))
    }

    /// Look up an artisan by id.
    pub fn get(&self, id: &ArtisanId) -> Option<&Artisan> {
        self.artisans.iter().find(|a| &a.id == id)
    }

    /// Display name for an artisan id, if known.
    pub fn name_of(&self, id: &ArtisanId) -> Option<&str> {
        self.get(id).map(|a| a.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"[
        { "id": "aling-maria", "name": "Aling Maria", "location": "Bicol", "craft": "weaving" },
        { "id": "mang-ben", "name": "Mang Ben" }
    ]"#;

    #[test]
    fn test_directory_lookup() {
        let directory = ArtisanDirectory::from_json(FIXTURE).unwrap();
        assert_eq!(
            directory.name_of(&ArtisanId::new("aling-maria")),
            Some("Aling Maria")
        );
        assert!(directory.get(&ArtisanId::new("unknown")).is_none());
    }
}
