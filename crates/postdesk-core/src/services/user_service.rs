use std::sync::Arc;

use async_trait::async_trait;

use super::{CrudService, load, paginate, vanished};
use crate::domain::{NewUser, Page, Pagination, RecordId, User, UserChanges};
use crate::error::{DomainError, RepoError};
use crate::ports::{PasswordService, UserStore};

/// User service - validation, email uniqueness and password hashing.
pub struct UserService {
    store: Arc<dyn UserStore>,
    passwords: Arc<dyn PasswordService>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, passwords: Arc<dyn PasswordService>) -> Self {
        Self { store, passwords }
    }

    fn hash_password(&self, password: &str) -> Result<String, DomainError> {
        self.passwords
            .hash(password)
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    /// Fails with `Duplicate` if the email belongs to a user other than `owner`.
    async fn ensure_email_available(
        &self,
        email: &str,
        owner: Option<RecordId>,
    ) -> Result<(), DomainError> {
        match self.store.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner => Err(DomainError::Duplicate(format!(
                "email {email} is already registered"
            ))),
            _ => Ok(()),
        }
    }
}

/// The unique index on email can still fire when two writes race.
fn write_error(id: RecordId) -> impl FnOnce(RepoError) -> DomainError {
    move |err| match err {
        RepoError::Constraint(msg) => DomainError::Duplicate(msg),
        other => vanished::<User>(id)(other),
    }
}

#[async_trait]
impl CrudService<User> for UserService {
    type Draft = NewUser;
    type Changes = UserChanges;

    async fn create(&self, draft: NewUser) -> Result<User, DomainError> {
        draft.validate()?;
        self.ensure_email_available(&draft.email, None).await?;

        let password_hash = self.hash_password(&draft.password)?;
        let user = self
            .store
            .insert(User::new(draft.name, draft.email, password_hash))
            .await
            .map_err(write_error(0))?;
        tracing::info!(user_id = user.id, "User created");

        Ok(user)
    }

    async fn get_by_id(&self, id: RecordId) -> Result<User, DomainError> {
        load(&*self.store, id).await
    }

    async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.store.find_all().await?)
    }

    async fn get_with_pagination(&self, pagination: Pagination) -> Result<Page<User>, DomainError> {
        paginate(&*self.store, pagination).await
    }

    async fn update(&self, id: RecordId, draft: NewUser) -> Result<User, DomainError> {
        tracing::debug!(user_id = id, "Replacing user");

        let mut user = load(&*self.store, id).await?;
        draft.validate()?;
        self.ensure_email_available(&draft.email, Some(id)).await?;

        user.password_hash = self.hash_password(&draft.password)?;
        user.name = draft.name;
        user.email = draft.email;

        let user = self.store.save(user).await.map_err(write_error(id))?;
        tracing::info!(user_id = id, "User updated");

        Ok(user)
    }

    async fn partial_update(&self, id: RecordId, changes: UserChanges) -> Result<User, DomainError> {
        tracing::debug!(user_id = id, "Patching user");

        let mut user = load(&*self.store, id).await?;
        changes.validate()?;
        if let Some(email) = changes.email.as_deref() {
            self.ensure_email_available(email, Some(id)).await?;
        }

        if let Some(password) = changes.password.as_deref() {
            user.password_hash = self.hash_password(password)?;
        }
        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }

        let user = self.store.save(user).await.map_err(write_error(id))?;
        tracing::info!(user_id = id, "User patched");

        Ok(user)
    }

    async fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        load(&*self.store, id).await?;
        self.store.delete(id).await.map_err(vanished::<User>(id))?;
        tracing::info!(user_id = id, "User deleted");

        Ok(())
    }
}
