pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, contact, content};

use crate::auth::adapter::outgoing::{
    admin_query_postgres::AdminQueryPostgres,
    admin_repository_postgres::AdminRepositoryPostgres,
    jwt::JwtTokenService,
    security::Argon2Hasher,
    session_revocation_redis::RedisSessionRevocation,
};
use crate::auth::application::{
    ports::incoming::use_cases::{ResolveSessionUseCase, SignInUseCase, SignOutUseCase},
    services::{
        AdminBootstrap, BootstrapOutcome, ResolveSessionService, SignInService, SignOutService,
    },
    session_events::{spawn_session_logger, SessionEvents},
};
use crate::config::{AppConfig, ContactTransport};
use crate::contact::adapter::outgoing::{EmailJsMailer, SmtpContactMailer};
use crate::contact::application::{
    ports::{incoming::use_cases::SubmitContactUseCase, outgoing::ContactMailer},
    services::SubmitContactService,
};
use crate::content::adapter::outgoing::DocumentStorePostgres;
use crate::content::application::{
    content_use_cases::ContentUseCases, ports::incoming::use_cases::ActiveStatusUseCase,
    services::ActiveStatusService,
};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
    pub active_status: Arc<dyn ActiveStatusUseCase + Send + Sync>,
    pub sign_in: Arc<dyn SignInUseCase + Send + Sync>,
    pub sign_out: Arc<dyn SignOutUseCase + Send + Sync>,
    pub resolve_session: Arc<dyn ResolveSessionUseCase + Send + Sync>,
    pub submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&conn, None)
        .await
        .context("Failed to run migrations")?;

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .context("Failed to create Redis pool")?;
    let redis_arc = Arc::new(redis_pool);

    // Content
    let document_store = DocumentStorePostgres::new(Arc::clone(&db_arc));
    let content = ContentUseCases::from_store(document_store.clone());
    let active_status =
        ActiveStatusService::new(document_store, config.active_status_doc_id.clone());

    // Auth
    let admin_query = Arc::new(AdminQueryPostgres::new(Arc::clone(&db_arc)));
    let admin_repo = Arc::new(AdminRepositoryPostgres::new(Arc::clone(&db_arc)));
    let hasher = Arc::new(
        Argon2Hasher::with_params(
            config.argon2.memory_kib,
            config.argon2.iterations,
            config.argon2.parallelism,
        )
        .map_err(|e| anyhow::anyhow!("Invalid Argon2 parameters: {e}"))?,
    );
    let jwt_service = Arc::new(JwtTokenService::new(config.jwt.clone()));
    let revocation = Arc::new(RedisSessionRevocation::new(Arc::clone(&redis_arc)));

    if let Some(seed) = &config.admin_seed {
        let bootstrap = AdminBootstrap::new(admin_query.clone(), admin_repo, hasher.clone());
        match bootstrap
            .ensure_admin(&seed.email, &seed.password)
            .await
            .context("Failed to provision admin account")?
        {
            BootstrapOutcome::Created(admin) => info!(email = %admin.email, "Admin account created"),
            BootstrapOutcome::AlreadyPresent => info!("Admin account already present"),
        }
    } else {
        warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set, no admin account provisioned");
    }

    let session_events = SessionEvents::default();
    spawn_session_logger(&session_events);

    let sign_in = SignInService::new(
        admin_query,
        hasher,
        jwt_service.clone(),
        session_events.clone(),
    );
    let sign_out = SignOutService::new(revocation.clone(), session_events);
    let resolve_session = ResolveSessionService::new(jwt_service, revocation);

    // Contact
    let mailer: Arc<dyn ContactMailer> = match &config.contact {
        ContactTransport::EmailJs(cfg) => {
            info!("Contact messages go through EmailJS");
            Arc::new(EmailJsMailer::new(cfg.clone()).context("Failed to build EmailJS client")?)
        }
        ContactTransport::Smtp(cfg) => {
            info!(host = %cfg.host, "Contact messages go through SMTP");
            Arc::new(SmtpContactMailer::new(cfg).context("Failed to build SMTP transport")?)
        }
    };
    let submit_contact = SubmitContactService::new(mailer);

    let state = AppState {
        content,
        active_status: Arc::new(active_status),
        sign_in: Arc::new(sign_in),
        sign_out: Arc::new(sign_out),
        resolve_session: Arc::new(resolve_session),
        submit_contact: Arc::new(submit_contact),
    };

    let openapi = api::openapi::ApiDoc::openapi();

    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(shared::api::custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::sign_in_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::sign_out_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::current_session_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_page);
    // Admin
    cfg.service(crate::content::adapter::incoming::web::routes::admin_dashboard);
    cfg.service(crate::content::adapter::incoming::web::routes::admin_section_page);
    cfg.service(crate::content::adapter::incoming::web::routes::get_active_status);
    cfg.service(crate::content::adapter::incoming::web::routes::set_active_status);
    cfg.service(crate::content::adapter::incoming::web::routes::toggle_active_status);
    crate::content::adapter::incoming::web::routes::configure_admin_collections(cfg);
    // Public
    cfg.service(crate::content::adapter::incoming::web::routes::get_sections);
    cfg.service(crate::content::adapter::incoming::web::routes::get_availability);
    cfg.service(crate::content::adapter::incoming::web::routes::get_skills);
    cfg.service(crate::content::adapter::incoming::web::routes::get_public_experience);
    cfg.service(crate::content::adapter::incoming::web::routes::get_public_projects);
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
