/// Relational backend built on sea-orm; the SQL driver is picked by cargo features.
pub mod sql;

use crate::dao::models::{GameEntity, NewGameEntity};
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the persistence layer for game records.
pub trait GameStore: Send + Sync {
    /// Every stored record in the backend's natural order.
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    /// Insert one record and return it with its assigned identifier.
    fn insert_game(&self, game: NewGameEntity) -> BoxFuture<'static, StorageResult<GameEntity>>;
    /// Insert a batch of records in a single statement, returning how many were written.
    fn insert_games(&self, games: Vec<NewGameEntity>) -> BoxFuture<'static, StorageResult<u64>>;
    fn find_game(&self, id: i32) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// Overwrite every column of an existing record. `None` when the record vanished.
    fn update_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// Hard delete, returning the number of removed rows.
    fn delete_game(&self, id: i32) -> BoxFuture<'static, StorageResult<u64>>;
    fn search_games(&self, filter: GameFilter) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Release the underlying connections. The store must not be used afterwards.
    fn close(&self) -> BoxFuture<'static, StorageResult<()>>;
}

/// Criteria applied by [`GameStore::search_games`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFilter {
    /// Substring the name must contain; empty matches every name.
    pub name_contains: String,
    /// Exact platform to match; `None` matches any non-null platform.
    pub platform: Option<String>,
}

impl GameFilter {
    /// Build a filter from raw search inputs, treating an empty platform as "any".
    pub fn new(name: impl Into<String>, platform: impl Into<String>) -> Self {
        let platform = platform.into();
        Self {
            name_contains: name.into(),
            platform: (!platform.is_empty()).then_some(platform),
        }
    }
}
