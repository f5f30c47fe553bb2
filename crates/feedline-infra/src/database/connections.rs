#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Open the connection pool described by `config`.
#[cfg(feature = "postgres")]
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Initializing database connection...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let conn = Database::connect(opts).await?;
    tracing::info!(
        "Database connected (pool: {}..{})",
        config.min_connections,
        config.max_connections
    );

    Ok(conn)
}
