use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Every stored entity, in ascending ID order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    async fn exists_by_id(&self, id: ID) -> Result<bool, RepoError>;

    /// Insert a transient entity or overwrite a stored one.
    ///
    /// Fails with [`RepoError::NotFound`] when the entity carries an ID that
    /// is not stored.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Missing IDs are ignored.
    async fn delete_by_id(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
pub trait PostRepository: BaseRepository<Post, i64> {}
