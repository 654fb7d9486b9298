use anyhow::Result;
use sea_orm::{Database, DatabaseConnection};
use tracing::{debug, error, info};

use crate::seed;

pub async fn init_database(database_url: &str) -> Result<()> {
    info!("Initializing database");
    debug!("Database URL: {}", database_url);

    let db: DatabaseConnection = match Database::connect(database_url).await {
        Ok(connection) => {
            info!("Successfully connected to database");
            connection
        }
        Err(e) => {
            error!("Failed to connect to database '{}': {}", database_url, e);
            return Err(e.into());
        }
    };

    seed::bootstrap(&db).await?;

    info!("Database initialization completed successfully!");
    Ok(())
}
