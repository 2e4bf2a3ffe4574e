use serde::Deserialize;
use utoipa::IntoParams;

use crate::content::application::domain::entities::{Project, Stored};

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProjectFilter {
    /// Exact category to show; empty or `All` shows every category
    pub category: Option<String>,
    /// Case-insensitive term matched against text fields and technologies
    pub search: Option<String>,
}

impl ProjectFilter {
    pub fn apply(&self, projects: &[Stored<Project>]) -> Vec<Stored<Project>> {
        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);
        let term = self
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();

        projects
            .iter()
            .filter(|p| category.map_or(true, |c| p.entry.category == c))
            .filter(|p| matches_search(&p.entry, &term))
            .cloned()
            .collect()
    }
}

/// `term` must already be lower-cased. An empty term matches everything.
///
/// A field matches when it contains the term, or when the initials of its
/// words do (`ml` finds "Machine Learning").
pub fn matches_search(project: &Project, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let contains = |field: &str| {
        let field = field.to_lowercase();
        field.contains(term) || initials(&field).contains(term)
    };

    contains(&project.title)
        || contains(&project.category)
        || contains(&project.description)
        || contains(&project.details)
        || project.technologies.iter().any(|t| contains(t))
}

fn initials(field: &str) -> String {
    field
        .split(|c: char| !c.is_alphanumeric())
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Distinct categories in the order they first appear.
pub fn categories(projects: &[Stored<Project>]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for project in projects {
        if !seen.iter().any(|c| *c == project.entry.category) {
            seen.push(project.entry.category.clone());
        }
    }
    seen
}
