use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use super::map_collection_error;
use crate::{
    auth::adapter::incoming::web::extractors::auth::AdminSession,
    content::application::{
        content_use_cases::ContentCollection,
        domain::entities::{
            ActiveStatus, Certificate, Education, Experience, Project, Stored,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminSection {
    ActiveStatus,
    Certificates,
    Education,
    Experiences,
    Projects,
}

impl AdminSection {
    const ALL: [AdminSection; 5] = [
        AdminSection::ActiveStatus,
        AdminSection::Certificates,
        AdminSection::Education,
        AdminSection::Experiences,
        AdminSection::Projects,
    ];

    fn slug(self) -> &'static str {
        match self {
            AdminSection::ActiveStatus => "activestatus",
            AdminSection::Certificates => "certificates",
            AdminSection::Education => "education",
            AdminSection::Experiences => "experiences",
            AdminSection::Projects => "projects",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AdminSection::ActiveStatus => "Active Status",
            AdminSection::Certificates => "Certificates",
            AdminSection::Education => "Education",
            AdminSection::Experiences => "Experience",
            AdminSection::Projects => "Projects",
        }
    }

    fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardLink {
    pub label: &'static str,
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub signed_in_as: String,
    pub links: Vec<DashboardLink>,
}

/// Content of one admin page.
#[derive(Debug, Serialize)]
#[serde(tag = "section", content = "entries", rename_all = "lowercase")]
pub enum SectionView {
    ActiveStatus(ActiveStatus),
    Certificates(Vec<Stored<Certificate>>),
    Education(Vec<Stored<Education>>),
    Experiences(Vec<Stored<Experience>>),
    Projects(Vec<Stored<Project>>),
}

fn redirect_to_login() -> HttpResponse {
    ApiResponse::see_other(LOGIN_PATH)
}

#[get("/admin")]
pub async fn admin_dashboard(session: Option<AdminSession>) -> impl Responder {
    let Some(session) = session else {
        return redirect_to_login();
    };

    let links = AdminSection::ALL
        .into_iter()
        .map(|section| DashboardLink {
            label: section.label(),
            path: format!("/admin/{}", section.slug()),
        })
        .collect();

    ApiResponse::success(Dashboard {
        signed_in_as: session.session.email,
        links,
    })
}

#[get("/admin/{section}")]
pub async fn admin_section_page(
    session: Option<AdminSession>,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    if session.is_none() {
        return redirect_to_login();
    }

    let Some(section) = AdminSection::from_slug(&path.into_inner()) else {
        return ApiResponse::not_found("SECTION_NOT_FOUND", "Admin section not found");
    };

    let content = &data.content;
    let view = match section {
        AdminSection::ActiveStatus => match data.active_status.get().await {
            Ok(status) => Ok(SectionView::ActiveStatus(status.unwrap_or_default())),
            Err(err) => {
                tracing::error!(error = %err, "Active status store failure");
                return ApiResponse::internal_error();
            }
        },
        AdminSection::Certificates => Certificate::use_case(content)
            .list()
            .await
            .map(SectionView::Certificates),
        AdminSection::Education => Education::use_case(content)
            .list()
            .await
            .map(SectionView::Education),
        AdminSection::Experiences => Experience::use_case(content)
            .list()
            .await
            .map(SectionView::Experiences),
        AdminSection::Projects => Project::use_case(content)
            .list()
            .await
            .map(SectionView::Projects),
    };

    match view {
        Ok(view) => ApiResponse::success(view),
        Err(err) => map_collection_error(err),
    }
}
