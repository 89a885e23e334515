//! Resource services - business-rule validation and CRUD orchestration.
//!
//! Every resource implements [`CrudService`]. Services receive their store
//! handles at construction time and keep no other state.

mod post_service;
mod user_service;


use async_trait::async_trait;

use crate::domain::{Page, Pagination, Record, RecordId};
use crate::error::{DomainError, RepoError};
use crate::ports::RecordStore;

pub use post_service::PostService;
pub use user_service::UserService;

/// Generic CRUD contract over a record type.
#[async_trait]
pub trait CrudService<T>: Send + Sync {
    /// Full input for create and full replacement.
    type Draft: Send + 'static;
    /// Sparse change-set for partial updates.
    type Changes: Send + 'static;

    async fn create(&self, draft: Self::Draft) -> Result<T, DomainError>;

    async fn get_by_id(&self, id: RecordId) -> Result<T, DomainError>;

    async fn get_all(&self) -> Result<Vec<T>, DomainError>;

    async fn get_with_pagination(&self, pagination: Pagination) -> Result<Page<T>, DomainError>;

    /// Replace every mutable field. Omitted fields are rejected as empty.
    async fn update(&self, id: RecordId, draft: Self::Draft) -> Result<T, DomainError>;

    /// Assign only the fields present in `changes`.
    async fn partial_update(&self, id: RecordId, changes: Self::Changes)
    -> Result<T, DomainError>;

    async fn delete(&self, id: RecordId) -> Result<(), DomainError>;
}

/// Fetch a record or fail with `NotFound`.
pub(crate) async fn load<T, S>(store: &S, id: RecordId) -> Result<T, DomainError>
where
    T: Record,
    S: RecordStore<T> + ?Sized,
{
    store
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: T::ENTITY_TYPE,
            id,
        })
}

pub(crate) async fn paginate<T, S>(store: &S, pagination: Pagination) -> Result<Page<T>, DomainError>
where
    T: Record,
    S: RecordStore<T> + ?Sized,
{
    let total = store.count().await?;
    let items = store
        .find_page(pagination.offset(), pagination.limit())
        .await?;

    Ok(Page { items, total })
}

/// A row that vanished between the existence check and the write is reported
/// as `NotFound` for that record.
pub(crate) fn vanished<T: Record>(id: RecordId) -> impl FnOnce(RepoError) -> DomainError {
    move |err| match err {
        RepoError::NotFound => DomainError::NotFound {
            entity_type: T::ENTITY_TYPE,
            id,
        },
        other => DomainError::Store(other),
    }
}
