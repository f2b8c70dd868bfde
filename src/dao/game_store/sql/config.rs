/// Default pool size handed to the SQL driver.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime configuration describing how to connect to the SQL database.
#[derive(Debug, Clone)]
pub struct SqlConfig {
    pub url: String,
    pub max_connections: u32,
}

impl SqlConfig {
    /// Construct a configuration from a database URL such as `sqlite://games.db?mode=rwc`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Override the connection pool size.
    ///
    /// In-memory SQLite databases must use a single connection, otherwise every pooled
    /// connection sees its own empty database.
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }
}
