//! Application state - shared across all handlers.

use std::sync::Arc;

use feedline_core::ports::PostRepository;
use feedline_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use feedline_infra::{PostgresPostRepository, database};
#[cfg(feature = "postgres")]
use migration::{Migrator, MigratorTrait};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build state around an already constructed repository.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>, auto_migrate: bool) -> Self {
        #[cfg(feature = "postgres")]
        let posts: Arc<dyn PostRepository> = {
            if let Some(config) = db_config {
                match database::connect(config).await {
                    Ok(conn) => {
                        if auto_migrate {
                            match Migrator::up(&conn, None).await {
                                Ok(()) => tracing::info!("Database migrations applied"),
                                Err(e) => tracing::error!("Failed to apply migrations: {}", e),
                            }
                        }
                        Arc::new(PostgresPostRepository::new(conn))
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryPostRepository::new())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let posts: Arc<dyn PostRepository> = {
            let _ = (db_config, auto_migrate);
            tracing::info!("Running without postgres feature - using in-memory repository");
            Arc::new(InMemoryPostRepository::new())
        };

        tracing::info!("Application state initialized");

        Self::with_repository(posts)
    }
}
