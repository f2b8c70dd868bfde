//! Bulk import of the external top-100 catalogs into the game store.

use reqwest::Client;
use tracing::{info, warn};

use crate::{
    config::CatalogConfig,
    dao::models::NewGameEntity,
    dto::catalog::CatalogDocument,
    error::{ImportError, ServiceError},
    state::SharedState,
};

/// HTTP client and source list used by [`populate`].
#[derive(Debug, Clone)]
pub struct CatalogImporter {
    client: Client,
    sources: Vec<String>,
}

impl CatalogImporter {
    /// Build the outbound client, applying the configured fetch timeout.
    pub fn new(config: &CatalogConfig) -> Result<Self, ImportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.fetch_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|source| ImportError::ClientBuilder { source })?;

        Ok(Self {
            client,
            sources: config.sources.clone(),
        })
    }

    /// Catalog URLs, in import order.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Download one catalog and remap its entries onto game columns.
    pub async fn fetch(&self, url: &str) -> Result<Vec<NewGameEntity>, ImportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| ImportError::Fetch {
                url: url.to_owned(),
                source,
            })?;

        let document = response
            .json::<CatalogDocument>()
            .await
            .map_err(|source| ImportError::Decode {
                url: url.to_owned(),
                source,
            })?;

        document
            .into_iter()
            .flatten()
            .enumerate()
            .map(|(position, entry)| entry.into_new_game(url, position))
            .collect()
    }
}

/// Import every configured catalog, one bulk insert per source.
///
/// Sources are processed in order and the first failure aborts the import. Batches already
/// inserted for earlier sources are kept.
pub async fn populate(state: &SharedState) -> Result<u64, ServiceError> {
    let importer = state.catalog();
    let store = state.game_store();
    let mut imported = 0;

    for url in importer.sources() {
        let games = importer
            .fetch(url)
            .await
            .inspect_err(|err| warn!(%url, error = %err, "failed to fetch catalog"))?;

        if games.is_empty() {
            warn!(%url, "catalog is empty; nothing to insert");
            continue;
        }

        let inserted = store
            .insert_games(games)
            .await
            .inspect_err(|err| warn!(%url, error = %err, "failed to insert catalog"))?;

        info!(%url, inserted, "catalog imported");
        imported += inserted;
    }

    Ok(imported)
}
