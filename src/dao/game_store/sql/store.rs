use futures::future::BoxFuture;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, Schema,
};
use tracing::{debug, info};

use crate::dao::{
    game_store::{GameFilter, GameStore},
    models::{GameEntity, NewGameEntity},
    storage::{StorageError, StorageResult},
};

use super::{
    config::SqlConfig,
    entity::{self as game, Entity as Games},
    error::{SqlDaoError, SqlResult},
};

const GAME_TABLE_NAME: &str = "games";

/// [`GameStore`] backed by a relational database through sea-orm.
#[derive(Clone)]
pub struct SqlGameStore {
    db: DatabaseConnection,
}

impl SqlGameStore {
    /// Open the connection pool and make sure the games table exists.
    pub async fn connect(config: SqlConfig) -> SqlResult<Self> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .sqlx_logging(false);

        let db = Database::connect(options)
            .await
            .map_err(|source| SqlDaoError::Connect {
                url: config.url.clone(),
                source,
            })?;

        let store = Self { db };
        store.ensure_schema().await?;
        info!(backend = ?store.db.get_database_backend(), "connected to game store");
        Ok(store)
    }

    /// Create the games table from the entity definition unless it already exists.
    async fn ensure_schema(&self) -> SqlResult<()> {
        let backend = self.db.get_database_backend();
        let mut statement = Schema::new(backend).create_table_from_entity(Games);
        statement.if_not_exists();

        self.db
            .execute(backend.build(&statement))
            .await
            .map_err(|source| SqlDaoError::CreateTable {
                table: GAME_TABLE_NAME,
                source,
            })?;

        debug!(table = GAME_TABLE_NAME, "schema ready");
        Ok(())
    }

    async fn update(&self, game: GameEntity) -> SqlResult<Option<GameEntity>> {
        let id = game.id;
        let active: game::ActiveModel = game.into();
        match active.update(&self.db).await {
            Ok(model) => Ok(Some(model.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(source) => Err(SqlDaoError::UpdateGame { id, source }),
        }
    }
}

impl GameStore for SqlGameStore {
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let models = Games::find()
                .order_by_asc(game::Column::Id)
                .all(&store.db)
                .await
                .map_err(|source| SqlDaoError::ListGames { source })?;
            Ok(models.into_iter().map(Into::into).collect())
        })
    }

    fn insert_game(&self, game: NewGameEntity) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let store = self.clone();
        Box::pin(async move {
            let active: game::ActiveModel = game.into();
            let model = active
                .insert(&store.db)
                .await
                .map_err(|source| SqlDaoError::InsertGame { source })?;
            Ok(model.into())
        })
    }

    fn insert_games(&self, games: Vec<NewGameEntity>) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move {
            let count = games.len();
            if count == 0 {
                return Ok(0);
            }

            let rows = games.into_iter().map(game::ActiveModel::from);
            Games::insert_many(rows)
                .exec(&store.db)
                .await
                .map_err(|source| SqlDaoError::InsertGames { count, source })?;
            Ok(count as u64)
        })
    }

    fn find_game(&self, id: i32) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let model = Games::find_by_id(id)
                .one(&store.db)
                .await
                .map_err(|source| SqlDaoError::LoadGame { id, source })?;
            Ok(model.map(Into::into))
        })
    }

    fn update_game(
        &self,
        game: GameEntity,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.update(game).await.map_err(Into::into) })
    }

    fn delete_game(&self, id: i32) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move {
            let result = Games::delete_by_id(id)
                .exec(&store.db)
                .await
                .map_err(|source| SqlDaoError::DeleteGame { id, source })?;
            Ok(result.rows_affected)
        })
    }

    fn search_games(
        &self,
        filter: GameFilter,
    ) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let query = Games::find().filter(game::Column::Name.contains(&filter.name_contains));
            let query = match filter.platform {
                Some(platform) => query.filter(game::Column::Platform.eq(platform)),
                None => query.filter(game::Column::Platform.is_not_null()),
            };

            let models = query
                .order_by_asc(game::Column::Id)
                .all(&store.db)
                .await
                .map_err(|source| SqlDaoError::SearchGames { source })?;
            Ok(models.into_iter().map(Into::into).collect())
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .db
                .ping()
                .await
                .map_err(|source| StorageError::from(SqlDaoError::HealthPing { source }))
        })
    }

    fn close(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .db
                .close()
                .await
                .map_err(|source| StorageError::from(SqlDaoError::Close { source }))
        })
    }
}
