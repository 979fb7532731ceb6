//! Frontend Models
//!
//! Data structures matching the remote `/animals` resource.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned identifier.
///
/// The store may hand out numeric or string ids; both are kept in their
/// original JSON form so they round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnimalId {
    Number(u64),
    Text(String),
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimalId::Number(n) => write!(f, "{}", n),
            AnimalId::Text(s) => f.write_str(s),
        }
    }
}

/// Animal record (matches the store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub description: String,
    #[serde(default)]
    pub donations: u32,
}

/// Draft submitted from the form, before the store assigns an id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAnimal {
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub description: String,
    pub donations: u32,
}

impl NewAnimal {
    pub fn new(
        name: impl Into<String>,
        image_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
            description: description.into(),
            donations: 0,
        }
    }
}

/// PATCH body: the full replacement value, never a delta
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DonationPatch {
    pub donations: u32,
}
