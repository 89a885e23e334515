use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, Iterable,
    PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder, QuerySelect, Select, SqlErr,
};

use postdesk_core::domain::{Pagination, Record, RecordId};
use postdesk_core::error::RepoError;
use postdesk_core::ports::RecordStore;

/// Generic SeaORM record store over one entity.
pub struct PostgresStore<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresStore<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Store-native order: ascending primary key.
    fn ordered() -> Select<E> {
        E::PrimaryKey::iter().fold(E::find(), |query, key| {
            query.order_by_asc(key.into_column())
        })
    }
}

pub(crate) fn repo_error(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepoError::Constraint(detail);
    }

    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => RepoError::NotFound,
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl<E, T> RecordStore<T> for PostgresStore<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = RecordId>,
    T: Record + From<E::Model> + Into<E::ActiveModel>,
{
    async fn insert(&self, record: T) -> Result<T, RepoError> {
        let mut active_model: E::ActiveModel = record.into();
        // Let the serial column assign the id.
        for key in E::PrimaryKey::iter() {
            active_model.not_set(key.into_column());
        }

        let model = active_model.insert(&self.db).await.map_err(repo_error)?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let models = Self::ordered().all(&self.db).await.map_err(repo_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<T>, RepoError> {
        // Postgres binds LIMIT/OFFSET as BIGINT.
        let models = Self::ordered()
            .offset(offset.min(Pagination::MAX_VALUE))
            .limit(limit.min(Pagination::MAX_VALUE))
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        E::find().count(&self.db).await.map_err(repo_error)
    }

    async fn save(&self, record: T) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = record.into();
        let model = active_model.update(&self.db).await.map_err(repo_error)?;

        Ok(model.into())
    }

    async fn delete(&self, id: RecordId) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(repo_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
