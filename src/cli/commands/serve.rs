use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{AppConfig, initialize_app_state};
use crate::router::create_router;
use crate::seed;

pub async fn serve() -> Result<()> {
    trace!("Entering serve function");
    info!("Registrar application starting up");

    let config = AppConfig::from_env()?;
    debug!("Listen port: {}", config.port);
    debug!("Database URL: {}", config.database_url);

    // Initialize application state
    let state = match initialize_app_state(&config).await {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    // Schema and fixtures come up before the listener starts accepting.
    seed::bootstrap(&state.db).await?;

    // Create router
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    let bind_address = config.bind_address();
    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Registrar running on http://{}", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
