//! Error types shared by the SQL storage implementation.

use sea_orm::DbErr;
use thiserror::Error;

/// Convenient result alias returning [`SqlDaoError`] failures.
pub type SqlResult<T> = Result<T, SqlDaoError>;

/// Failures that can occur while interacting with the SQL database.
#[derive(Debug, Error)]
pub enum SqlDaoError {
    /// Opening the connection pool failed.
    #[error("failed to connect to database `{url}`")]
    Connect {
        url: String,
        #[source]
        source: DbErr,
    },
    /// Creating the backing table failed.
    #[error("failed to create table `{table}`: {source}")]
    CreateTable {
        table: &'static str,
        #[source]
        source: DbErr,
    },
    /// Reading every game failed.
    #[error("failed to list games: {source}")]
    ListGames {
        #[source]
        source: DbErr,
    },
    /// Inserting a single game failed.
    #[error("failed to insert game: {source}")]
    InsertGame {
        #[source]
        source: DbErr,
    },
    /// Inserting a batch of games failed.
    #[error("failed to bulk insert {count} games: {source}")]
    InsertGames {
        count: usize,
        #[source]
        source: DbErr,
    },
    /// Loading a game by identifier failed.
    #[error("failed to load game `{id}`: {source}")]
    LoadGame {
        id: i32,
        #[source]
        source: DbErr,
    },
    /// Updating a game failed.
    #[error("failed to update game `{id}`: {source}")]
    UpdateGame {
        id: i32,
        #[source]
        source: DbErr,
    },
    /// Deleting a game failed.
    #[error("failed to delete game `{id}`: {source}")]
    DeleteGame {
        id: i32,
        #[source]
        source: DbErr,
    },
    /// Running a filtered game query failed.
    #[error("failed to search games: {source}")]
    SearchGames {
        #[source]
        source: DbErr,
    },
    /// The connection did not answer a ping.
    #[error("database ping health check failed")]
    HealthPing {
        #[source]
        source: DbErr,
    },
    /// Closing the connection pool failed.
    #[error("failed to close database connections")]
    Close {
        #[source]
        source: DbErr,
    },
}
