use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::recipes::repo_types::Recipe;

/// Request body for recipe creation. Title is optional here so that its
/// absence is reported by draft validation, not by body deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub minutes_to_complete: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: Option<i32>,
    pub created_at: OffsetDateTime,
}

impl From<Recipe> for RecipeResponse {
    fn from(r: Recipe) -> Self {
        Self {
            id: r.id,
            title: r.title,
            instructions: r.instructions,
            minutes_to_complete: r.minutes_to_complete,
            created_at: r.created_at,
        }
    }
}
