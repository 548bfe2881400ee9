use anyhow::Context;
use scoring::ScoringTable;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod routes;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::acft::handlers::list_events,
        features::acft::handlers::get_event,
        features::acft::handlers::score_event,
        features::acft::handlers::score_test,
        features::acft::handlers::get_standards,
    ),
    components(
        schemas(
            scoring::dto::acft::ScoreTestRequest,
            scoring::dto::acft::ScoreTestResponse,
            scoring::dto::acft::EventScoreResponse,
            scoring::dto::acft::NextCategory,
            scoring::dto::acft::ScoreEventRequest,
            scoring::dto::acft::ScoreEventResponse,
            scoring::dto::acft::EventTableResponse,
            scoring::dto::acft::CategoryResponse,
            scoring::dto::acft::StandardsResponse,
            scoring::models::Breakpoint,
            scoring::models::Category,
            scoring::models::Direction,
            scoring::models::EventId,
            scoring::models::InputRange,
            scoring::models::Unit,
        )
    ),
    tags(
        (name = "acft", description = "ACFT scoring endpoints"),
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

    tracing::info!("Starting ACFT scoring API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let table = ScoringTable::standard().context("Failed to load scoring tables")?;
    tracing::info!("Scoring tables loaded for {} events", table.definitions().count());

    let bind_address = config.bind_address();
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let app = routes::router(AppState::new(table)).merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    axum::serve(listener, app).await?;

    Ok(())
}
