use tokio::net::TcpListener;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use review_roster::adapters::http::{build_router, serve, AppState};
use review_roster::adapters::postgres::{create_pool, run_migrations};
use review_roster::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    tracing::info!(
        environment = ?config.server.environment,
        database = %config.database.redacted_url(),
        "starting review-roster"
    );

    let pool = create_pool(&config.database).await?;
    if config.database.run_migrations {
        run_migrations(&pool).await?;
        tracing::info!("migrations applied");
    }

    let app = build_router(AppState::postgres(pool.clone()), &config.server);
    let listener = TcpListener::bind(config.server.socket_addr()?).await?;
    serve(listener, app).await?;

    pool.close().await;
    Ok(())
}

/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
