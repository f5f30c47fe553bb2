//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use crate::database::DomainEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub author: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub post_content: Option<String>,
    pub image_url: Option<String>,
    pub created_date: Option<DateTime>,
    pub modified_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl DomainEntity for Entity {
    type Domain = feedline_core::domain::Post;
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for feedline_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            author: model.author,
            post_content: model.post_content,
            image_url: model.image_url,
            created_date: model.created_date,
            modified_date: model.modified_date,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
///
/// A transient post leaves `id` unset so the database assigns it. A stored
/// post leaves `created_date` unset so an update never rewrites it.
impl From<feedline_core::domain::Post> for ActiveModel {
    fn from(post: feedline_core::domain::Post) -> Self {
        let (id, created_date) = match post.id {
            Some(id) => (Set(id), NotSet),
            None => (NotSet, Set(post.created_date)),
        };

        Self {
            id,
            author: Set(post.author),
            post_content: Set(post.post_content),
            image_url: Set(post.image_url),
            created_date,
            modified_date: Set(post.modified_date),
        }
    }
}
