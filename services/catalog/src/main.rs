use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use catalog::{config::ServerConfig, routes, schema, state::AppState};
use common::database::{DatabaseConfig, init_pool};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting catalog service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if common::database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Create the schema idempotently and seed an empty catalog
    schema::init_schema(&pool).await?;
    schema::seed_products(&pool).await?;

    info!("Catalog service initialized successfully");

    let server_config = ServerConfig::from_env();
    if server_config.production {
        info!("Serving client bundle from {}", server_config.static_dir);
    }

    let app_state = AppState::new(pool);

    // Start the web server
    let app = routes::create_router(app_state, &server_config);

    let addr = format!("0.0.0.0:{}", server_config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Catalog service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
