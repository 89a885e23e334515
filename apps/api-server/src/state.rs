//! Application state - shared across all handlers.

use std::sync::Arc;

use postdesk_core::domain::Post;
use postdesk_core::ports::{PasswordService, RecordStore, UserStore};
use postdesk_core::{PostService, UserService};
use postdesk_infra::database::{
    DatabaseConfig, DatabaseConnections, InMemoryPostStore, InMemoryUserStore, PostgresPostStore,
    PostgresUserStore,
};
use postdesk_infra::Argon2PasswordService;

/// Shared application state. Cloning is cheap; services sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub users: Arc<UserService>,
}

impl AppState {
    /// Build the state on PostgreSQL if configured and reachable, otherwise
    /// fall back to in-memory stores.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Self::in_memory();
        };

        match DatabaseConnections::init(config).await {
            Ok(connections) => {
                let posts = Arc::new(PostgresPostStore::new(connections.main.clone()));
                let users = Arc::new(PostgresUserStore::new(connections.main));
                tracing::info!("Application state initialized (postgres)");
                Self::from_stores(posts, users, Arc::new(Argon2PasswordService::new()))
            }
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Self::in_memory()
            }
        }
    }

    /// State backed by in-memory stores. Data is lost on restart.
    pub fn in_memory() -> Self {
        tracing::info!("Application state initialized (in-memory)");
        Self::from_stores(
            Arc::new(InMemoryPostStore::new()),
            Arc::new(InMemoryUserStore::new()),
            Arc::new(Argon2PasswordService::new()),
        )
    }

    pub fn from_stores(
        posts: Arc<dyn RecordStore<Post>>,
        users: Arc<dyn UserStore>,
        passwords: Arc<dyn PasswordService>,
    ) -> Self {
        Self {
            posts: Arc::new(PostService::new(posts)),
            users: Arc::new(UserService::new(users, passwords)),
        }
    }
}
