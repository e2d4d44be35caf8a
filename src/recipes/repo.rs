use crate::auth::repo_types::User;
use crate::recipes::repo_types::{NewRecipe, Recipe};
use sqlx::PgPool;
use uuid::Uuid;

impl Recipe {
    /// Insert a validated pending recipe. Missing instructions or user_id
    /// reach the database as NULL and come back as constraint violations.
    pub async fn insert(db: &PgPool, new: &NewRecipe) -> anyhow::Result<Recipe> {
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            INSERT INTO recipes (title, instructions, minutes_to_complete, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, instructions, minutes_to_complete, user_id, created_at
            "#,
        )
        .bind(&new.title)
        .bind(new.instructions.as_deref())
        .bind(new.minutes_to_complete)
        .bind(new.user_id)
        .fetch_one(db)
        .await?;
        Ok(recipe)
    }

    /// All recipes owned by a user, in insertion order.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Recipe>> {
        let rows = sqlx::query_as::<_, Recipe>(
            r#"
            SELECT id, title, instructions, minutes_to_complete, user_id, created_at
            FROM recipes
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_for_user(
        db: &PgPool,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> anyhow::Result<Option<Recipe>> {
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            SELECT id, title, instructions, minutes_to_complete, user_id, created_at
            FROM recipes
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(recipe_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(recipe)
    }
}

impl User {
    /// The owned side of the one-to-many relationship.
    pub async fn recipes(&self, db: &PgPool) -> anyhow::Result<Vec<Recipe>> {
        Recipe::list_by_user(db, self.id).await
    }
}
