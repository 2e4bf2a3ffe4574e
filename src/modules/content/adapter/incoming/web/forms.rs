use serde::{de::DeserializeOwned, Deserialize};
use utoipa::ToSchema;

use crate::content::application::{
    content_use_cases::ContentCollection,
    domain::{
        entities::{Certificate, Education, Experience, Project},
        list_input::parse_list,
    },
};

/// Request body accepted by the admin create/update endpoints of a collection.
pub trait EntryForm: DeserializeOwned + 'static {
    type Entry: ContentCollection;

    fn into_entry(self) -> Self::Entry;
}

impl EntryForm for Certificate {
    type Entry = Certificate;

    fn into_entry(self) -> Self::Entry {
        self
    }
}

impl EntryForm for Education {
    type Entry = Education;

    fn into_entry(self) -> Self::Entry {
        self
    }
}

/// `skills` arrives as the comma-separated text typed into the form.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ExperienceForm {
    pub company: String,
    pub location: String,
    pub period: String,
    pub role: String,
    pub description: String,
    #[schema(example = "Rust, PostgreSQL, Docker")]
    pub skills: String,
}

impl EntryForm for ExperienceForm {
    type Entry = Experience;

    fn into_entry(self) -> Self::Entry {
        Experience {
            company: self.company,
            location: self.location,
            period: self.period,
            role: self.role,
            description: self.description,
            skills: parse_list(&self.skills),
        }
    }
}

/// `technologies` arrives as the comma-separated text typed into the form.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProjectForm {
    pub title: String,
    pub category: String,
    pub description: String,
    pub details: String,
    pub image: String,
    pub link: String,
    #[schema(example = "Python, TensorFlow")]
    pub technologies: String,
}

impl EntryForm for ProjectForm {
    type Entry = Project;

    fn into_entry(self) -> Self::Entry {
        Project {
            title: self.title,
            category: self.category,
            description: self.description,
            details: self.details,
            image: self.image,
            link: self.link,
            technologies: parse_list(&self.technologies),
        }
    }
}
