//! PostgreSQL repository implementations.

use feedline_core::ports::PostRepository;

use super::entity::post::Entity as PostEntity;
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

impl PostRepository for PostgresPostRepository {}
