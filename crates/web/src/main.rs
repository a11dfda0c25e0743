use anyhow::Context;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod identity;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::list_all_athletes,
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::delete_athlete,
        features::entries::handlers::list_entries,
        features::entries::handlers::create_entry,
        features::entries::handlers::update_entry_status,
        features::teams::handlers::list_teams,
        features::teams::handlers::create_team,
        features::teams::handlers::add_team_members,
        features::events::handlers::list_events,
        features::events::handlers::list_divisions,
        features::events::handlers::list_weight_classes,
        features::events::handlers::update_event_config,
        features::review::handlers::review_queue,
        features::review::handlers::bulk_review,
        features::reports::handlers::entries_csv,
    ),
    components(
        schemas(
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::entry::EntryResponse,
            storage::dto::entry::CreateEntryRequest,
            storage::dto::entry::UpdateEntryStatusRequest,
            storage::dto::entry::EntryReportRow,
            storage::dto::team::TeamResponse,
            storage::dto::team::TeamMemberResponse,
            storage::dto::team::CreateTeamRequest,
            storage::dto::team::TeamMemberInput,
            storage::dto::team::AddTeamMembersRequest,
            storage::dto::event::UpdateEventConfigRequest,
            storage::dto::review::BulkReviewRequest,
            storage::dto::review::BulkReviewResponse,
            storage::models::Event,
            storage::models::Division,
            storage::models::WeightClass,
            storage::models::Club,
            storage::models::User,
            storage::models::Athlete,
            storage::models::Team,
            storage::models::TeamMember,
            storage::models::Entry,
            storage::models::AuditLog,
            storage::models::Gender,
            storage::models::EntryType,
            storage::models::EntryStatus,
            storage::models::TeamType,
            storage::models::UserRole,
        )
    ),
    tags(
        (name = "athletes", description = "Club athlete roster"),
        (name = "entries", description = "Competition entries and status workflow"),
        (name = "teams", description = "Team kata/kumite squads"),
        (name = "events", description = "Event configuration"),
        (name = "review", description = "Organizer review queue"),
        (name = "reports", description = "CSV exports"),
    )
)]
struct ApiDoc;

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

    tracing::info!("Starting tournament registration API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let app = axum::Router::new()
        .nest("/api/athletes", features::athletes::routes())
        .nest("/api/entries", features::entries::routes())
        .nest("/api/teams", features::teams::routes())
        .nest("/api/events", features::events::routes())
        .nest("/api/review", features::review::routes())
        .nest("/api/reports", features::reports::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(db);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind listener")?;
    axum::serve(listener, app).await?;

    Ok(())
}
