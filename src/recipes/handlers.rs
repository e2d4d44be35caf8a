use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tracing::{error, instrument, warn};

use crate::{
    auth::services::AuthUser,
    recipes::{
        dto::{CreateRecipeRequest, RecipeResponse},
        repo_types::{Recipe, RecipeDraft},
    },
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/recipes", get(list_recipes))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/recipes", post(create_recipe))
}

/// GET /recipes — every recipe owned by the authenticated user.
#[instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<RecipeResponse>>, (StatusCode, String)> {
    let recipes = Recipe::list_by_user(&state.db, user_id)
        .await
        .map_err(internal)?;
    let items = recipes.into_iter().map(RecipeResponse::from).collect();
    Ok(Json(items))
}

/// POST /recipes — create a recipe for the authenticated user.
#[instrument(skip(state, payload))]
pub async fn create_recipe(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, HeaderMap, Json<RecipeResponse>), (StatusCode, String)> {
    let mut draft = RecipeDraft::default().user_id(user_id);
    if let Some(title) = payload.title {
        draft = draft.title(title);
    }
    if let Some(instructions) = payload.instructions {
        draft = draft.instructions(instructions);
    }
    if let Some(minutes) = payload.minutes_to_complete {
        draft = draft.minutes_to_complete(minutes);
    }

    // Draft validation fails before the pool is touched.
    let new = draft.build().map_err(|e| {
        warn!(user_id = %user_id, error = %e, "recipe draft rejected");
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    })?;

    let recipe = Recipe::insert(&state.db, &new).await.map_err(|e| {
        error!(error = %e, user_id = %user_id, "create recipe failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    let mut headers = HeaderMap::new();
    if let Ok(location) = format!("/api/v1/recipes/{}", recipe.id).parse() {
        headers.insert(axum::http::header::LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(recipe.into())))
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
