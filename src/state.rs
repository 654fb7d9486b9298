use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sea_orm::DatabaseConnection;

/// Application state shared across handlers.
///
/// Constructed once at startup and handed to every handler through axum's
/// `State` extractor; there are no module-level handles anywhere.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Key for the encrypted session cookie jar
    pub key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}
