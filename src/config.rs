use anyhow::{Context, Result, bail};
use axum_extra::extract::cookie::Key;
use sea_orm::Database;
use tracing::info;

use crate::state::AppState;

/// Minimum amount of key material accepted for cookie key derivation.
const MIN_SECRET_KEY_LEN: usize = 32;

/// Development fallback; set SECRET_KEY in any real deployment.
const DEV_SECRET_KEY: &str = "insecure-dev-secret-key-change-me-before-deploying";

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://registrar.db?mode=rwc";

/// Runtime configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub secret_key: String,
    pub database_url: String,
}

impl AppConfig {
    /// Read configuration from the environment (and `.env`, if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value '{raw}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        let secret_key =
            std::env::var("SECRET_KEY").unwrap_or_else(|_| DEV_SECRET_KEY.to_string());
        if secret_key.len() < MIN_SECRET_KEY_LEN {
            bail!(
                "SECRET_KEY must be at least {MIN_SECRET_KEY_LEN} bytes, got {}",
                secret_key.len()
            );
        }

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        Ok(Self {
            port,
            secret_key,
            database_url,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Session-cookie key derived from the configured secret.
    pub fn cookie_key(&self) -> Key {
        Key::derive_from(self.secret_key.as_bytes())
    }
}

/// Initialize application configuration and state
pub async fn initialize_app_state(config: &AppConfig) -> Result<AppState> {
    info!("Connecting to database: {}", config.database_url);
    let db = Database::connect(&config.database_url).await?;

    Ok(AppState {
        db,
        key: config.cookie_key(),
    })
}
