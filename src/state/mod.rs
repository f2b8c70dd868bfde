use std::sync::Arc;

use crate::{dao::game_store::GameStore, services::catalog_service::CatalogImporter};

pub type SharedState = Arc<AppState>;

/// Central application state: the injected store handle and the catalog importer.
pub struct AppState {
    game_store: Arc<dyn GameStore>,
    catalog: CatalogImporter,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The caller owns the store lifecycle: it opens the store before building the state and
    /// closes it once the server has stopped.
    pub fn new(game_store: Arc<dyn GameStore>, catalog: CatalogImporter) -> SharedState {
        Arc::new(Self {
            game_store,
            catalog,
        })
    }

    /// Obtain a handle to the game store.
    pub fn game_store(&self) -> Arc<dyn GameStore> {
        Arc::clone(&self.game_store)
    }

    /// Client used by the bulk import.
    pub fn catalog(&self) -> &CatalogImporter {
        &self.catalog
    }
}
