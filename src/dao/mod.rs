/// Game record storage and retrieval operations.
pub mod game_store;
/// Backend-agnostic game record models.
pub mod models;
/// Storage abstraction layer for database operations.
pub mod storage;
