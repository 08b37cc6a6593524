//! Products API - REST server for the product catalog

use axum_helpers::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Connect to PostgreSQL and bring the schema up to date
    let db = database::postgres::connect(&config.database.url).await?;
    database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name).await?;

    let state = AppState {
        config: config.clone(),
        db,
    };

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes);
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.clone()));

    info!("Starting Products API on port {}", state.config.server.port);

    create_app(app, &state.config.server).await?;

    info!("Products API shutdown complete");
    Ok(())
}
