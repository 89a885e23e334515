//! Concrete PostgreSQL stores.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use postdesk_core::domain::User;
use postdesk_core::error::RepoError;
use postdesk_core::ports::UserStore;

use super::entity::post::Entity as PostEntity;
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresStore, repo_error};

pub type PostgresPostStore = PostgresStore<PostEntity>;

pub type PostgresUserStore = PostgresStore<UserEntity>;

/// Keep addresses out of the logs: `connor@example.com` → `c***@example.com`.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if local.chars().count() > 1 => {
            let first: String = local.chars().take(1).collect();
            format!("{first}***@{domain}")
        }
        Some((_, domain)) => format!("***@{domain}"),
        None => "***".to_string(),
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.map(Into::into))
    }
}
