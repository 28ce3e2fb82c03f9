use std::time::Duration;

use anyhow::Context;
use fest_storage::Database;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::teams::handlers::list_teams,
        features::teams::handlers::get_team,
        features::teams::handlers::create_team,
        features::teams::handlers::update_team,
        features::teams::handlers::delete_team,
        features::students::handlers::list_students,
        features::students::handlers::get_student,
        features::students::handlers::create_student,
        features::students::handlers::update_student,
        features::students::handlers::delete_student,
        features::programs::handlers::list_programs,
        features::programs::handlers::get_program,
        features::programs::handlers::create_program,
        features::programs::handlers::update_program,
        features::programs::handlers::delete_program,
        features::participations::handlers::list_participations,
        features::participations::handlers::create_participation,
        features::participations::handlers::delete_participation,
        features::results::handlers::list_results,
        features::results::handlers::list_unscored,
        features::results::handlers::create_result,
        features::results::handlers::update_result,
        features::results::handlers::delete_result,
        features::scoring_rules::handlers::list_rules,
        features::scoring_rules::handlers::update_rule,
        features::leaderboard::handlers::get_leaderboard,
        features::summary::handlers::get_summary,
    ),
    components(
        schemas(
            fest_storage::dto::team::CreateTeamRequest,
            fest_storage::dto::team::UpdateTeamRequest,
            fest_storage::dto::student::StudentResponse,
            fest_storage::dto::student::CreateStudentRequest,
            fest_storage::dto::student::UpdateStudentRequest,
            fest_storage::dto::program::ProgramResponse,
            fest_storage::dto::program::CreateProgramRequest,
            fest_storage::dto::program::UpdateProgramRequest,
            fest_storage::dto::participation::DetailedParticipation,
            fest_storage::dto::participation::UnscoredParticipation,
            fest_storage::dto::participation::CreateParticipationRequest,
            fest_storage::dto::result::DetailedResult,
            fest_storage::dto::result::CreateResultRequest,
            fest_storage::dto::result::UpdateResultRequest,
            fest_storage::dto::result::UpdateScoringRuleRequest,
            fest_storage::dto::leaderboard::LeaderboardEntry,
            fest_storage::dto::leaderboard::TeamInfo,
            fest_storage::dto::summary::SummaryResponse,
            fest_storage::dto::summary::ProgramCounts,
            fest_storage::models::Team,
            fest_storage::models::Student,
            fest_storage::models::StudentCategory,
            fest_storage::models::Program,
            fest_storage::models::ProgramKind,
            fest_storage::models::ProgramCategory,
            fest_storage::models::Participation,
            fest_storage::models::ProgramResult,
            fest_storage::models::Position,
            fest_storage::models::Grade,
            fest_storage::models::ScoringRule,
        )
    ),
    tags(
        (name = "teams", description = "Houses that students compete for"),
        (name = "students", description = "Student registry"),
        (name = "programs", description = "Stage, non-stage and sports programs"),
        (name = "participations", description = "Program registrations"),
        (name = "results", description = "Positions, grades and points"),
        (name = "scoring-rules", description = "Default points per position"),
        (name = "leaderboard", description = "Team standings"),
        (name = "summary", description = "Dashboard counters"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting fest admin API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config.redacted_database_url()
    );
    let db = Database::new(&config.database_url, config.database_max_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("API_KEYS is empty, every write request will be rejected");
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let app = features::routes(api_keys)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
