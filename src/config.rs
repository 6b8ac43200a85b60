use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    /// Drop and recreate all tables at startup. Destructive - every row is
    /// lost. Off unless REINIT_DB=1; never enable against a database you
    /// care about.
    pub reinit_db: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://bookboard.db?mode=rwc".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            debug: env::var("DEBUG").map(|v| v == "1").unwrap_or(false),
            reinit_db: env::var("REINIT_DB").map(|v| v == "1").unwrap_or(false),
        }
    }
}
