use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

use super::entity::{post, user};

/// Configuration for the database connection.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Create missing tables from the entity definitions on startup.
    pub sync_schema: bool,
}

/// Pooled connection to the main database.
pub struct DatabaseConnections {
    pub main: DbConn,
}

impl DatabaseConnections {
    /// Open the connection pool and, if configured, create missing tables.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        if config.sync_schema {
            sync_schema(&main).await?;
        }

        Ok(Self { main })
    }
}

/// `CREATE TABLE IF NOT EXISTS` for every entity. No migration history is kept.
async fn sync_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut tables = [
        schema.create_table_from_entity(post::Entity),
        schema.create_table_from_entity(user::Entity),
    ];
    for table in tables.iter_mut() {
        table.if_not_exists();
        db.execute(backend.build(&*table)).await?;
    }

    tracing::info!("Database schema synchronized");
    Ok(())
}
