use serde::{de::DeserializeOwned, Deserialize, Serialize};
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Collection entries
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryValidationError {
    #[error("{field} cannot be empty")]
    MissingField { field: &'static str },
}

/// A document type that lives in its own collection of the document store.
///
/// Documents are schemaless, so every entry deserializes with defaults for
/// fields a document does not carry.
pub trait CollectionEntry:
    Serialize + DeserializeOwned + Clone + std::fmt::Debug + Send + Sync + 'static
{
    const COLLECTION: &'static str;

    fn validate(&self) -> Result<(), EntryValidationError>;
}

fn require(field: &'static str, value: &str) -> Result<(), EntryValidationError> {
    if value.trim().is_empty() {
        return Err(EntryValidationError::MissingField { field });
    }
    Ok(())
}

/// An entry together with the document id it is stored under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stored<E> {
    pub id: String,
    #[serde(flatten)]
    pub entry: E,
}

//
// ──────────────────────────────────────────────────────────
// Entities
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ActiveStatus {
    pub status: bool,
}

impl ActiveStatus {
    pub const COLLECTION: &'static str = "active_status";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Certificate {
    pub issuer: String,
    pub title: String,
    pub year: String,
}

impl CollectionEntry for Certificate {
    const COLLECTION: &'static str = "certificates";

    fn validate(&self) -> Result<(), EntryValidationError> {
        require("issuer", &self.issuer)?;
        require("title", &self.title)?;
        require("year", &self.year)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub location: String,
    pub period: String,
    pub description: String,
}

impl CollectionEntry for Education {
    const COLLECTION: &'static str = "education";

    fn validate(&self) -> Result<(), EntryValidationError> {
        require("institution", &self.institution)?;
        require("degree", &self.degree)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub location: String,
    pub period: String,
    pub role: String,
    pub description: String,
    pub skills: Vec<String>,
}

impl CollectionEntry for Experience {
    const COLLECTION: &'static str = "experience";

    fn validate(&self) -> Result<(), EntryValidationError> {
        require("company", &self.company)?;
        require("role", &self.role)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
    pub details: String,
    pub image: String,
    pub link: String,
    pub technologies: Vec<String>,
}

impl CollectionEntry for Project {
    const COLLECTION: &'static str = "project_category";

    fn validate(&self) -> Result<(), EntryValidationError> {
        require("title", &self.title)?;
        require("category", &self.category)
    }
}
