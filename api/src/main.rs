use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use gym_api::app::{create_app, AppState};
use gym_infra::database::{
    DatabasePool, MySqlGymBookingRepository, MySqlTrainerBookingRepository,
    MySqlTrainerRepository, MySqlUserRepository,
};
use gym_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize logger
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.environment.default_log_filter()),
    );

    info!("Starting GymFlow API Server ({})", config.environment);

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid configuration")?;

    // Database and schema
    let database = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the database")?;
    database
        .run_migrations()
        .await
        .context("Failed to apply database migrations")?;
    info!("Database ready: {}", database.get_statistics());

    // Repositories and services
    let pool = database.get_pool().clone();
    let app_state = AppState::new(
        Arc::new(MySqlUserRepository::new(pool.clone())),
        Arc::new(MySqlTrainerRepository::new(pool.clone())),
        Arc::new(MySqlGymBookingRepository::new(pool.clone())),
        Arc::new(MySqlTrainerBookingRepository::new(pool)),
        &config,
    )
    .context("Failed to initialize services")?;
    let app_state = web::Data::new(app_state);

    if app_state.admin_api_key.is_none() {
        log::warn!("ADMIN_API_KEY is not set; administrative endpoints are disabled");
    }

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    database.close().await;
    info!("Server stopped");
    Ok(())
}
