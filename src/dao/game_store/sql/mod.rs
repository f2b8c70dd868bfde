mod config;
mod entity;
mod error;
mod store;

pub use config::SqlConfig;
pub use error::SqlDaoError;
pub use store::SqlGameStore;

use crate::dao::storage::StorageError;

impl From<SqlDaoError> for StorageError {
    fn from(err: SqlDaoError) -> Self {
        match err {
            SqlDaoError::Connect { .. }
            | SqlDaoError::HealthPing { .. }
            | SqlDaoError::Close { .. } => StorageError::unavailable(err.to_string(), err),
            _ => StorageError::rejected(err.to_string(), err),
        }
    }
}
