use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, Iterable,
    PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder, SqlErr, TryIntoModel,
};

use feedline_core::RepoError;
use feedline_core::domain::{self, Record};
use feedline_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

fn query_error(err: DbErr) -> RepoError {
    match err {
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

fn save_error(err: DbErr) -> RepoError {
    if matches!(err, DbErr::RecordNotUpdated) {
        return RepoError::NotFound;
    }

    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail))
        | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => RepoError::Constraint(detail),
        _ => query_error(err),
    }
}

/// A SeaORM entity paired with the domain type its repository stores.
pub trait DomainEntity: EntityTrait {
    type Domain: Record + From<Self::Model> + Into<Self::ActiveModel> + 'static;
}

type PrimaryKeyValue<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

#[async_trait]
impl<E> BaseRepository<E::Domain, PrimaryKeyValue<E>> for PostgresBaseRepository<E>
where
    E: DomainEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E>
        + ActiveModelBehavior
        + TryIntoModel<E::Model>
        + Send
        + Sync,
    E::Domain: Record<Id = PrimaryKeyValue<E>>,
    PrimaryKeyValue<E>: Copy + Send + Sync + 'static,
{
    async fn find_by_id(
        &self,
        id: PrimaryKeyValue<E>,
    ) -> Result<Option<E::Domain>, RepoError> {
        let result = E::find_by_id(id).one(&self.db).await.map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<E::Domain>, RepoError> {
        let mut select = E::find();
        for key in E::PrimaryKey::iter() {
            select = select.order_by_asc(key.into_column());
        }

        let models = select.all(&self.db).await.map_err(query_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn exists_by_id(&self, id: PrimaryKeyValue<E>) -> Result<bool, RepoError> {
        let count = E::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(query_error)?;

        Ok(count > 0)
    }

    async fn save(&self, mut entity: E::Domain) -> Result<E::Domain, RepoError> {
        // The primary key decides insert vs. update inside ActiveModel::save.
        let now = domain::now();
        if entity.is_transient() {
            entity.on_create(now);
        } else {
            entity.on_update(now);
        }

        let active_model: E::ActiveModel = entity.into();
        let result = active_model.save(&self.db).await.map_err(save_error)?;

        let model = result
            .try_into_model()
            .map_err(|e| RepoError::Query(e.to_string()))?;
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: PrimaryKeyValue<E>) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            tracing::debug!("No row to delete");
        }

        Ok(())
    }
}
