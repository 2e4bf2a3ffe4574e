use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use super::map_collection_error;
use crate::{
    content::application::{
        content_use_cases::ContentCollection,
        domain::{
            entities::{Certificate, Education, Experience, Project, Stored},
            skills::SkillCatalog,
        },
        services::project_filter::{categories, ProjectFilter},
    },
    shared::api::ApiResponse,
    AppState,
};

/// In-page anchors of the public site, in page order.
pub const SITE_SECTIONS: [&str; 6] = ["home", "about", "projects", "skills", "experience", "contact"];

//
// ──────────────────────────────────────────────────────────
// Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityResponse {
    /// `null` when the flag was never set or could not be read
    pub available: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ExperiencePage {
    pub experience: Vec<Stored<Experience>>,
    pub education: Vec<Stored<Education>>,
    pub certificates: Vec<Stored<Certificate>>,
}

#[derive(Debug, Serialize)]
pub struct ProjectsPage {
    /// Every category present, before filtering
    pub categories: Vec<String>,
    pub projects: Vec<Stored<Project>>,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

#[get("/api/public/sections")]
pub async fn get_sections() -> impl Responder {
    ApiResponse::success(SITE_SECTIONS)
}

#[utoipa::path(
    get,
    path = "/api/public/availability",
    tag = "public",
    responses(
        (status = 200, description = "Whether the owner is open to work", body = AvailabilityResponse)
    )
)]
#[get("/api/public/availability")]
pub async fn get_availability(data: web::Data<AppState>) -> impl Responder {
    let available = match data.active_status.get().await {
        Ok(status) => status.map(|s| s.status),
        Err(err) => {
            warn!(error = %err, "Could not read active status");
            None
        }
    };

    ApiResponse::success(AvailabilityResponse { available })
}

#[get("/api/public/skills")]
pub async fn get_skills() -> impl Responder {
    ApiResponse::success(SkillCatalog::standard())
}

#[get("/api/public/experience")]
pub async fn get_public_experience(data: web::Data<AppState>) -> impl Responder {
    let (experience, education, certificates) = tokio::join!(
        Experience::use_case(&data.content).list(),
        Education::use_case(&data.content).list(),
        Certificate::use_case(&data.content).list(),
    );

    let page = match (experience, education, certificates) {
        (Ok(experience), Ok(education), Ok(certificates)) => ExperiencePage {
            experience,
            education,
            certificates,
        },
        (Err(err), _, _) | (_, Err(err), _) | (_, _, Err(err)) => {
            return map_collection_error(err)
        }
    };

    ApiResponse::success(page)
}

#[utoipa::path(
    get,
    path = "/api/public/projects",
    tag = "public",
    params(ProjectFilter),
    responses(
        (status = 200, description = "Project categories and the projects matching the filter")
    )
)]
#[get("/api/public/projects")]
pub async fn get_public_projects(
    data: web::Data<AppState>,
    filter: web::Query<ProjectFilter>,
) -> impl Responder {
    match Project::use_case(&data.content).list().await {
        Ok(projects) => ApiResponse::success(ProjectsPage {
            categories: categories(&projects),
            projects: filter.apply(&projects),
        }),
        Err(err) => map_collection_error(err),
    }
}
