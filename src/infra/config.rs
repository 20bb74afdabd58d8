use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;

pub struct AppConfig {
    /// Postgres connection string. Contains credentials, never log it.
    pub database_url: SecretString,
    pub bind_addr: SocketAddr,
    /// Origin of the marketing site allowed to call the API from the browser.
    pub cors_origin: HeaderValue,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    /// Apply pending migrations from `migrations/` on startup.
    pub run_migrations: bool,
    /// Destination of the JSON log stream.
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url: SecretString = SecretString::new(get_env::<String>("DATABASE_URL").into());

        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        let db_max_connections: u32 = get_env_default("DB_MAX_CONNECTIONS", 5);
        let db_acquire_timeout_secs: u64 = get_env_default("DB_ACQUIRE_TIMEOUT_SECS", 5);
        let run_migrations: bool = get_env_default("RUN_MIGRATIONS", true);
        let log_file: String = get_env_default("LOG_FILE", "app.log".to_string());

        Self {
            database_url,
            bind_addr,
            cors_origin,
            db_max_connections,
            db_acquire_timeout_secs,
            run_migrations,
            log_file,
        }
    }
}
