use std::sync::Arc;

use hangman_persistence_sea_orm::{
    create_db_pool, create_tables, games::GameRepositoryImpl, scores::ScoreRepositoryImpl,
    users::UserRepositoryImpl,
};
use hangman_server_app::{
    Application, build_application,
    domain::word::RandomWordSource,
    memory::{InMemoryGameRepository, InMemoryScoreRepository, InMemoryUserRepository},
};
use log::{error, info, warn};

use crate::{config::ServerConfig, logs::init_logger};

mod config;
mod logs;

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

async fn build_app(config: &ServerConfig) -> Application {
    let word_source = Arc::new(RandomWordSource::new(
        config.word_bank.clone(),
        config.word_seed,
    ));

    match &config.database_url {
        Some(database_url) => {
            let db = create_db_pool(database_url)
                .await
                .expect("Failed to connect to database");
            create_tables(&db)
                .await
                .expect("Failed to create database tables");
            info!("Using database storage");

            build_application(
                Arc::new(UserRepositoryImpl::new(db.clone())),
                Arc::new(GameRepositoryImpl::new(db.clone())),
                Arc::new(ScoreRepositoryImpl::new(db)),
                word_source,
            )
        }
        None => {
            warn!("HANGMAN_DATABASE_URL not set, game data will not survive a restart");
            build_application(
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryGameRepository::new()),
                Arc::new(InMemoryScoreRepository::new()),
                word_source,
            )
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    init_logger();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Starting application with {} words in the word bank",
        config.word_bank.len()
    );

    let app = Arc::new(build_app(&config).await);

    if let Err(e) =
        hangman_server_api::run(app, &config.host, config.port, shutdown_signal()).await
    {
        error!("HTTP API failed: {}", e);
        std::process::exit(1);
    }
}
