//! Storage-level representation of a game record, shared by every backend.

/// Column values of a game record that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGameEntity {
    /// Publisher identifier in the originating store.
    pub publisher_id: String,
    /// Display name.
    pub name: String,
    /// Platform label such as `ios` or `android`.
    pub platform: String,
    /// Identifier in the platform store.
    pub store_id: Option<String>,
    /// Application bundle identifier.
    pub bundle_id: Option<String>,
    /// Published version string.
    pub app_version: Option<String>,
    /// Whether the game is live in its store.
    pub is_published: Option<bool>,
}

/// Persisted game record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntity {
    /// Primary key assigned by the store.
    pub id: i32,
    /// Publisher identifier in the originating store.
    pub publisher_id: String,
    /// Display name.
    pub name: String,
    /// Platform label such as `ios` or `android`.
    pub platform: String,
    /// Identifier in the platform store.
    pub store_id: Option<String>,
    /// Application bundle identifier.
    pub bundle_id: Option<String>,
    /// Published version string.
    pub app_version: Option<String>,
    /// Whether the game is live in its store.
    pub is_published: Option<bool>,
}

impl GameEntity {
    /// Attach an existing identifier to a full set of column values.
    pub fn from_parts(id: i32, values: NewGameEntity) -> Self {
        Self {
            id,
            publisher_id: values.publisher_id,
            name: values.name,
            platform: values.platform,
            store_id: values.store_id,
            bundle_id: values.bundle_id,
            app_version: values.app_version,
            is_published: values.is_published,
        }
    }
}
