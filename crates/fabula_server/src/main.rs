use fabula_core::init_tracing;
use fabula_database::{check_connection, establish_pool, DatabaseStoryRepository};
use fabula_error::{FabulaResult, ServerError, ServerErrorKind};
use fabula_models::OpenRouterClient;
use fabula_server::{cors_layer, router, AppConfig, AppState};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> FabulaResult<()> {
    dotenvy::dotenv().ok();
    init_tracing().map_err(|e| ServerError::new(ServerErrorKind::Telemetry(e.to_string())))?;

    // Fail fast at boot: missing configuration or an unreachable database
    // aborts before the listener binds.
    let config = AppConfig::from_env()?;

    let pool = establish_pool(&config.database_url)?;
    check_connection(&pool).await?;
    info!("Database connection successful");

    let driver = Arc::new(OpenRouterClient::new(config.openrouter.clone()));
    let stories = Arc::new(DatabaseStoryRepository::new(pool));
    info!(model = %config.openrouter.model, "Upstream client initialized");

    let state = AppState::new(driver, stories);
    let app = router(state)
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http());

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Bind(e.to_string())))?;
    info!("Server running at http://localhost:{}", config.port);

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Bind(e.to_string())))?;

    Ok(())
}
