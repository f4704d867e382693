use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod state;

use config::Config;
use middleware::auth::ApiKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::participants::handlers::list_participants,
        features::participants::handlers::live_participants,
        features::participants::handlers::participant_history,
        features::participants::handlers::create_participant,
        features::participants::handlers::record_match_result,
        features::participants::handlers::adjust_points,
        features::participants::handlers::deactivate_participant,
        features::participants::handlers::reactivate_participant,
        features::participants::handlers::delete_participant,
        features::events::handlers::record_event,
        features::events::handlers::list_events,
        features::events::handlers::get_event,
        features::history::handlers::list_history,
    ),
    components(
        schemas(
            storage::dto::participant::CreateParticipantRequest,
            storage::dto::participant::RecordMatchRequest,
            storage::dto::participant::AdjustPointsRequest,
            storage::dto::participant::ParticipantResponse,
            storage::dto::participant::MatchOutcome,
            storage::dto::participant::AdjustOutcome,
            storage::dto::tournament::RecordEventRequest,
            storage::dto::tournament::EventResultEntry,
            storage::dto::tournament::EventParticipantUpdate,
            storage::models::Participant,
            storage::models::PointHistoryRecord,
            storage::models::Tournament,
            storage::models::EventResultLine,
        )
    ),
    tags(
        (name = "participants", description = "Ranked participant list and admin operations"),
        (name = "events", description = "Batched tournament event results"),
        (name = "history", description = "Append-only point history"),
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

    tracing::info!("Starting tier ranking API");

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

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    let state = AppState { db, api_keys };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let admin_api = Router::new()
        .nest("/participants", features::participants::admin_routes())
        .nest("/events", features::events::admin_routes())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_api_key,
        ));

    let app = Router::new()
        .nest("/api/participants", features::participants::routes())
        .nest("/api/events", features::events::routes())
        .nest("/api/history", features::history::routes())
        .nest("/api/admin", admin_api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
