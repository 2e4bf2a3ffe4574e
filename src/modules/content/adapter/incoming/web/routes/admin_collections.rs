use actix_web::{web, HttpResponse, Resource};

use super::map_collection_error;
use crate::{
    auth::adapter::incoming::web::extractors::auth::AdminSession,
    content::{
        adapter::incoming::web::forms::{EntryForm, ExperienceForm, ProjectForm},
        application::{
            content_use_cases::ContentCollection,
            domain::entities::{Certificate, Education, Experience, Project},
            services::project_filter::ProjectFilter,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Registration
// ──────────────────────────────────────────────────────────
//

/// Registers list/create/update/delete for every admin collection.
///
/// ```text
/// GET    /api/admin/{name}
/// POST   /api/admin/{name}
/// PUT    /api/admin/{name}/{id}
/// DELETE /api/admin/{name}/{id}
/// ```
pub fn configure_admin_collections(cfg: &mut web::ServiceConfig) {
    cfg.service(
        collection_resource::<Certificate>("certificates")
            .route(web::get().to(list_entries::<Certificate>)),
    )
    .service(entry_resource::<Certificate>("certificates"))
    .service(
        collection_resource::<Education>("education")
            .route(web::get().to(list_entries::<Education>)),
    )
    .service(entry_resource::<Education>("education"))
    .service(
        collection_resource::<ExperienceForm>("experiences")
            .route(web::get().to(list_entries::<Experience>)),
    )
    .service(entry_resource::<ExperienceForm>("experiences"))
    .service(collection_resource::<ProjectForm>("projects").route(web::get().to(list_projects)))
    .service(entry_resource::<ProjectForm>("projects"));
}

fn collection_resource<F: EntryForm>(name: &str) -> Resource {
    web::resource(format!("/api/admin/{name}")).route(web::post().to(create_entry::<F>))
}

fn entry_resource<F: EntryForm>(name: &str) -> Resource {
    web::resource(format!("/api/admin/{name}/{{id}}"))
        .route(web::put().to(update_entry::<F>))
        .route(web::delete().to(delete_entry::<F::Entry>))
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

async fn list_entries<E: ContentCollection>(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    match E::use_case(&data.content).list().await {
        Ok(entries) => ApiResponse::success(entries),
        Err(err) => map_collection_error(err),
    }
}

async fn list_projects(
    _session: AdminSession,
    data: web::Data<AppState>,
    filter: web::Query<ProjectFilter>,
) -> HttpResponse {
    match Project::use_case(&data.content).list().await {
        Ok(projects) => ApiResponse::success(filter.apply(&projects)),
        Err(err) => map_collection_error(err),
    }
}

async fn create_entry<F: EntryForm>(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<F>,
) -> HttpResponse {
    let entry = payload.into_inner().into_entry();

    match F::Entry::use_case(&data.content).create(entry).await {
        Ok(stored) => ApiResponse::created(stored),
        Err(err) => map_collection_error(err),
    }
}

async fn update_entry<F: EntryForm>(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<F>,
) -> HttpResponse {
    let id = path.into_inner();
    let entry = payload.into_inner().into_entry();

    match F::Entry::use_case(&data.content).update(&id, entry).await {
        Ok(stored) => ApiResponse::success(stored),
        Err(err) => map_collection_error(err),
    }
}

async fn delete_entry<E: ContentCollection>(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    match E::use_case(&data.content).delete(&path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_collection_error(err),
    }
}
