//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use fogtech::{router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Se a configuração ou o banco falharem, a aplicação não deve iniciar.
    let settings = Settings::from_env()?;
    let app_state = AppState::from_settings(&settings).await?;

    if settings.seed_catalog {
        app_state.catalog_service.seed_defaults_if_empty().await?;
    }

    let app = router(app_state, &settings.cors_origin);

    let listener = TcpListener::bind(settings.bind_address()).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
