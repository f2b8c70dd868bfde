use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{Method, StatusCode, Uri},
    routing::{get, post, put},
};

use crate::{
    dto::game::{DeletedGame, GameInput, GameResponse, SearchRequest},
    error::AppError,
    services::{catalog_service, game_service},
    state::SharedState,
};

/// Routes managing the game catalog.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/games", get(list_games).post(create_game))
        .route(
            "/api/games/search",
            post(search_games).fallback(unsupported_method),
        )
        .route(
            "/api/games/populate",
            get(populate_games).fallback(unsupported_method),
        )
        .route("/api/games/{id}", put(update_game).delete(delete_game))
}

/// Return every stored game.
#[utoipa::path(
    get,
    path = "/api/games",
    tag = "games",
    responses(
        (status = 200, description = "All games", body = [GameResponse]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_games(
    State(state): State<SharedState>,
) -> Result<Json<Vec<GameResponse>>, AppError> {
    let games = game_service::list_games(&state)
        .await
        .map_err(AppError::from_read)?;
    Ok(Json(games))
}

/// Create a game from the supplied fields.
#[utoipa::path(
    post,
    path = "/api/games",
    tag = "games",
    request_body = GameInput,
    responses(
        (status = 200, description = "Game created", body = GameResponse),
        (status = 400, description = "Missing required field or store rejection")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    payload: Result<Json<GameInput>, JsonRejection>,
) -> Result<Json<GameResponse>, AppError> {
    let Json(payload) = payload?;
    Ok(Json(game_service::create_game(&state, payload).await?))
}

/// Overwrite every field of an existing game.
#[utoipa::path(
    put,
    path = "/api/games/{id}",
    tag = "games",
    params(("id" = i32, Path, description = "Identifier of the game to update")),
    request_body = GameInput,
    responses(
        (status = 200, description = "Game updated", body = GameResponse),
        (status = 400, description = "Unknown game, invalid identifier or invalid fields")
    )
)]
pub async fn update_game(
    State(state): State<SharedState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<GameInput>, JsonRejection>,
) -> Result<Json<GameResponse>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    Ok(Json(game_service::update_game(&state, id, payload).await?))
}

/// Permanently delete a game.
#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = "games",
    params(("id" = i32, Path, description = "Identifier of the game to delete")),
    responses(
        (status = 200, description = "Game deleted", body = DeletedGame),
        (status = 400, description = "Unknown game or invalid identifier")
    )
)]
pub async fn delete_game(
    State(state): State<SharedState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeletedGame>, AppError> {
    let Path(id) = id?;
    Ok(Json(game_service::delete_game(&state, id).await?))
}

/// Find games by name substring and platform.
#[utoipa::path(
    post,
    path = "/api/games/search",
    tag = "games",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching games", body = [GameResponse]),
        (status = 400, description = "Malformed criteria or store failure")
    )
)]
pub async fn search_games(
    State(state): State<SharedState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<Vec<GameResponse>>, AppError> {
    let Json(payload) = payload?;
    Ok(Json(game_service::search_games(&state, payload).await?))
}

/// Import the configured top-100 catalogs.
#[utoipa::path(
    get,
    path = "/api/games/populate",
    tag = "games",
    responses(
        (status = 201, description = "Catalogs imported"),
        (status = 400, description = "A catalog could not be fetched, decoded or stored")
    )
)]
pub async fn populate_games(State(state): State<SharedState>) -> Result<StatusCode, AppError> {
    catalog_service::populate(&state).await?;
    Ok(StatusCode::CREATED)
}

/// Answer other methods on the fixed `/api/games/*` paths as a bad game identifier would.
async fn unsupported_method(method: Method, uri: Uri) -> AppError {
    AppError::BadRequest(format!("`{method} {}` is not a game operation", uri.path()))
}
