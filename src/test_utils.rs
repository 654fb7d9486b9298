#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::seed;
    use crate::state::AppState;
    use axum::Router;
    use axum_extra::extract::cookie::Key;
    use axum_test::{TestServer, TestServerConfig};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;")
            .await
            .expect("Failed to enable foreign keys");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Create AppState over a migrated and seeded in-memory database
    pub async fn setup_test_state() -> AppState {
        let db = setup_test_db().await;

        seed::bootstrap(&db)
            .await
            .expect("Failed to seed test database");

        AppState {
            db,
            key: Key::generate(),
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> (Router, AppState) {
        let _ = init_test_tracing();

        let state = setup_test_state().await;
        let router = create_router(state.clone());
        (router, state)
    }

    /// Test server that persists cookies between requests, like a browser
    pub fn test_server(app: Router) -> TestServer {
        let config = TestServerConfig {
            save_cookies: true,
            ..TestServerConfig::default()
        };
        TestServer::new_with_config(app, config).expect("Failed to start test server")
    }
}
