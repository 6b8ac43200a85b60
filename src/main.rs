use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookboard::{config, db, server, state::AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = config::Config::from_env();

    let default_filter = if config.debug {
        "bookboard=debug,tower_http=debug"
    } else {
        "bookboard=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if config.reinit_db {
        tracing::warn!("REINIT_DB=1: dropping and recreating all tables");
    }

    let db = db::init_db(&config.database_url, config.reinit_db)
        .await
        .expect("Failed to initialize database");

    let state = AppState::new(db);

    if let Err(e) = server::run(&config.host, config.port, state).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
