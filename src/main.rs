use salary_engine::api::{AppState, create_router};
use salary_engine::config::{ConfigLoader, ServerSettings};
use salary_engine::error::{EngineError, EngineResult};
use tracing::info;

#[tokio::main]
async fn main() -> EngineResult<()> {
    dotenvy::dotenv().ok();

    let settings = ServerSettings::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(settings.log_level)
        .with_target(false)
        .init();

    let config = ConfigLoader::load(&settings.profile_dir)?;
    info!(
        profile = %config.metadata().code,
        tax_year = config.metadata().tax_year,
        "Loaded tax profile"
    );

    let app = create_router(AppState::new(config));
    let server_error = |source: std::io::Error| EngineError::Server {
        addr: settings.addr.clone(),
        source,
    };

    let listener = tokio::net::TcpListener::bind(&settings.addr)
        .await
        .map_err(server_error)?;
    info!(addr = %settings.addr, "Salary engine listening");

    axum::serve(listener, app).await.map_err(server_error)
}
