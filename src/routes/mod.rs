use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::SharedState;

pub mod docs;
pub mod game;
pub mod health;

/// Compose all route trees, wiring in shared state, documentation routes and the static
/// assets served from `static_dir` for every other path.
pub fn router(state: SharedState, static_dir: &Path) -> Router<()> {
    let api_router = health::router().merge(game::router());

    let docs_router = docs::router();

    api_router
        .merge(docs_router)
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}
