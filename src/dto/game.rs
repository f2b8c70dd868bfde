//! DTO definitions used by the `/api/games` routes and documentation layer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::lenient_string;
use crate::dao::models::GameEntity;

/// Game fields accepted by create and update.
///
/// Every field is optional on the wire; the three required columns are checked before the
/// record reaches the store, and absent optional fields are written as null. Text columns
/// also take numbers, which are stored as their decimal text.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GameInput {
    /// Publisher identifier in the originating store.
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(required)]
    pub publisher_id: Option<String>,
    /// Display name.
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(required)]
    pub name: Option<String>,
    /// Platform label such as `ios` or `android`.
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(required)]
    pub platform: Option<String>,
    /// Identifier in the platform store.
    #[serde(default, deserialize_with = "lenient_string")]
    pub store_id: Option<String>,
    /// Application bundle identifier.
    #[serde(default, deserialize_with = "lenient_string")]
    pub bundle_id: Option<String>,
    /// Published version string.
    #[serde(default, deserialize_with = "lenient_string")]
    pub app_version: Option<String>,
    /// Whether the game is live in its store.
    pub is_published: Option<bool>,
}

/// A stored game as returned by every `/api/games` route.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    /// Store-assigned identifier.
    pub id: i32,
    /// Publisher identifier in the originating store.
    pub publisher_id: String,
    /// Display name.
    pub name: String,
    /// Platform label.
    pub platform: String,
    /// Identifier in the platform store, if known.
    pub store_id: Option<String>,
    /// Application bundle identifier, if known.
    pub bundle_id: Option<String>,
    /// Published version string, if known.
    pub app_version: Option<String>,
    /// Whether the game is live in its store, if known.
    pub is_published: Option<bool>,
}

impl From<GameEntity> for GameResponse {
    fn from(game: GameEntity) -> Self {
        Self {
            id: game.id,
            publisher_id: game.publisher_id,
            name: game.name,
            platform: game.platform,
            store_id: game.store_id,
            bundle_id: game.bundle_id,
            app_version: game.app_version,
            is_published: game.is_published,
        }
    }
}

/// Body returned once a game has been deleted.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedGame {
    /// Identifier of the removed game.
    pub id: i32,
}

/// Search criteria. Missing fields behave like empty strings.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SearchRequest {
    /// Substring the game name must contain.
    #[serde(default)]
    pub name: String,
    /// Exact platform; empty matches every platform.
    #[serde(default)]
    pub platform: String,
}
