use async_trait::async_trait;

use crate::domain::{RecordId, User};
use crate::error::RepoError;

/// Generic record store: keyed CRUD plus count and offset scans.
///
/// Scans return records in store-native order (ascending id).
#[async_trait]
pub trait RecordStore<T>: Send + Sync {
    /// Persist a new record. The store assigns the id and both timestamps.
    async fn insert(&self, record: T) -> Result<T, RepoError>;

    /// Find a record by its id.
    async fn find_by_id(&self, id: RecordId) -> Result<Option<T>, RepoError>;

    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<T>, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;

    /// Overwrite an existing record and refresh `updated_at`.
    /// Returns `RepoError::NotFound` if the row no longer exists.
    async fn save(&self, record: T) -> Result<T, RepoError>;

    /// Delete a record by id. Returns `RepoError::NotFound` if nothing was removed.
    async fn delete(&self, id: RecordId) -> Result<(), RepoError>;
}

/// User store with the email lookup needed for uniqueness checks.
#[async_trait]
pub trait UserStore: RecordStore<User> {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}
