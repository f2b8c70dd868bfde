use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::entity::prelude::*;

use crate::dao::models::{GameEntity, NewGameEntity};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub publisher_id: String,
    pub name: String,
    pub platform: String,
    pub store_id: Option<String>,
    pub bundle_id: Option<String>,
    pub app_version: Option<String>,
    pub is_published: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for GameEntity {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            publisher_id: model.publisher_id,
            name: model.name,
            platform: model.platform,
            store_id: model.store_id,
            bundle_id: model.bundle_id,
            app_version: model.app_version,
            is_published: model.is_published,
        }
    }
}

impl From<NewGameEntity> for ActiveModel {
    fn from(game: NewGameEntity) -> Self {
        Self {
            id: NotSet,
            publisher_id: Set(game.publisher_id),
            name: Set(game.name),
            platform: Set(game.platform),
            store_id: Set(game.store_id),
            bundle_id: Set(game.bundle_id),
            app_version: Set(game.app_version),
            is_published: Set(game.is_published),
        }
    }
}

impl From<GameEntity> for ActiveModel {
    /// Every column except the key is marked dirty so an update rewrites the whole row.
    fn from(game: GameEntity) -> Self {
        Self {
            id: Unchanged(game.id),
            publisher_id: Set(game.publisher_id),
            name: Set(game.name),
            platform: Set(game.platform),
            store_id: Set(game.store_id),
            bundle_id: Set(game.bundle_id),
            app_version: Set(game.app_version),
            is_published: Set(game.is_published),
        }
    }
}
