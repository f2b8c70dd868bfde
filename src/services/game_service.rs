//! Operations behind the `/api/games` CRUD and search routes.

use tracing::{debug, error};
use validator::Validate;

use crate::{
    dao::{
        game_store::{GameFilter, GameStore},
        models::{GameEntity, NewGameEntity},
    },
    dto::game::{DeletedGame, GameInput, GameResponse, SearchRequest},
    error::ServiceError,
    state::SharedState,
};

/// Return every stored game.
pub async fn list_games(state: &SharedState) -> Result<Vec<GameResponse>, ServiceError> {
    let games = state
        .game_store()
        .list_games()
        .await
        .inspect_err(|err| error!(error = %err, "failed to query games"))?;

    Ok(games.into_iter().map(Into::into).collect())
}

/// Persist a new game and return it with its assigned identifier.
pub async fn create_game(
    state: &SharedState,
    input: GameInput,
) -> Result<GameResponse, ServiceError> {
    let game = into_new_game(input).inspect_err(|err| error!(error = %err, "invalid game"))?;

    let created = state
        .game_store()
        .insert_game(game)
        .await
        .inspect_err(|err| error!(error = %err, "failed to create game"))?;

    debug!(id = created.id, "game created");
    Ok(created.into())
}

/// Replace every field of an existing game.
///
/// Optional fields missing from `input` are cleared rather than left untouched.
pub async fn update_game(
    state: &SharedState,
    id: i32,
    input: GameInput,
) -> Result<GameResponse, ServiceError> {
    let updated = replace_game(state.game_store().as_ref(), id, input)
        .await
        .inspect_err(|err| error!(id, error = %err, "failed to update game"))?;

    Ok(updated.into())
}

/// Permanently remove a game, returning its identifier.
pub async fn delete_game(state: &SharedState, id: i32) -> Result<DeletedGame, ServiceError> {
    remove_game(state.game_store().as_ref(), id)
        .await
        .inspect_err(|err| error!(id, error = %err, "failed to delete game"))
}

/// Return the games whose name contains `request.name` and whose platform matches
/// `request.platform` (any platform when empty).
pub async fn search_games(
    state: &SharedState,
    request: SearchRequest,
) -> Result<Vec<GameResponse>, ServiceError> {
    debug!(name = %request.name, platform = %request.platform, "searching games");

    let filter = GameFilter::new(request.name, request.platform);
    let games = state
        .game_store()
        .search_games(filter)
        .await
        .inspect_err(|err| error!(error = %err, "failed to search games"))?;

    Ok(games.into_iter().map(Into::into).collect())
}

async fn replace_game(
    store: &dyn GameStore,
    id: i32,
    input: GameInput,
) -> Result<GameEntity, ServiceError> {
    let existing = store.find_game(id).await?.ok_or_else(|| not_found(id))?;
    let values = into_new_game(input)?;
    store
        .update_game(GameEntity::from_parts(existing.id, values))
        .await?
        .ok_or_else(|| not_found(id))
}

async fn remove_game(store: &dyn GameStore, id: i32) -> Result<DeletedGame, ServiceError> {
    let existing = store.find_game(id).await?.ok_or_else(|| not_found(id))?;
    match store.delete_game(existing.id).await? {
        0 => Err(not_found(id)),
        _ => Ok(DeletedGame { id: existing.id }),
    }
}

fn not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("game `{id}` not found"))
}

fn into_new_game(input: GameInput) -> Result<NewGameEntity, ServiceError> {
    input.validate()?;

    // `validate` guarantees the required columns are present.
    Ok(NewGameEntity {
        publisher_id: input.publisher_id.unwrap_or_default(),
        name: input.name.unwrap_or_default(),
        platform: input.platform.unwrap_or_default(),
        store_id: input.store_id,
        bundle_id: input.bundle_id,
        app_version: input.app_version,
        is_published: input.is_published,
    })
}
