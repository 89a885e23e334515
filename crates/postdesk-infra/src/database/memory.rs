//! In-memory record store - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use postdesk_core::domain::{Post, Record, RecordId, User};
use postdesk_core::error::RepoError;
use postdesk_core::ports::{RecordStore, UserStore};

struct Table<T> {
    rows: BTreeMap<RecordId, T>,
    last_id: RecordId,
}

/// Record store backed by an ordered map behind an async `RwLock`.
///
/// Ids are assigned from a monotonically increasing counter and never reused.
/// Note: Data is lost on process restart.
pub struct InMemoryStore<T> {
    table: RwLock<Table<T>>,
}

pub type InMemoryPostStore = InMemoryStore<Post>;

pub type InMemoryUserStore = InMemoryStore<User>;

impl<T> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for InMemoryStore<T> {
    async fn insert(&self, mut record: T) -> Result<T, RepoError> {
        let mut table = self.table.write().await;

        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepoError::Constraint("id sequence exhausted".to_string()))?;
        table.last_id = id;

        record.assign_id(id);
        record.touch(Utc::now(), true);
        table.rows.insert(id, record.clone());

        Ok(record)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<T>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<T>, RepoError> {
        let table = self.table.read().await;
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(table.rows.values().skip(offset).take(limit).cloned().collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.table.read().await.rows.len() as u64)
    }

    async fn save(&self, mut record: T) -> Result<T, RepoError> {
        let mut table = self.table.write().await;
        let slot = table.rows.get_mut(&record.id()).ok_or(RepoError::NotFound)?;

        record.touch(Utc::now(), false);
        *slot = record.clone();

        Ok(record)
    }

    async fn delete(&self, id: RecordId) -> Result<(), RepoError> {
        let mut table = self.table.write().await;

        match table.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|u| u.email == email).cloned())
    }
}
