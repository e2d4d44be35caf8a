use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

/// Recipe record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: Option<i32>,
    pub user_id: Uuid,
    pub created_at: OffsetDateTime,
}

/// Raised while assembling a recipe, before anything touches the database.
/// Distinct from the constraint violations the database reports on insert.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecipeValidationError {
    #[error("a title is required")]
    MissingTitle,
    #[error("title must not be blank")]
    BlankTitle,
}

/// Accumulates recipe fields before validation. `build` checks the title
/// eagerly; everything else is left for the database constraints, matching
/// how user drafts defer to NOT NULL.
#[derive(Debug, Clone, Default)]
pub struct RecipeDraft {
    title: Option<String>,
    instructions: Option<String>,
    minutes_to_complete: Option<i32>,
    user_id: Option<Uuid>,
}

/// A validated pending recipe row. The title is guaranteed present here;
/// instructions and user_id may still be rejected by the database.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: String,
    pub instructions: Option<String>,
    pub minutes_to_complete: Option<i32>,
    pub user_id: Option<Uuid>,
}

impl RecipeDraft {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn minutes_to_complete(mut self, minutes: i32) -> Self {
        self.minutes_to_complete = Some(minutes);
        self
    }

    pub fn user_id(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn build(self) -> Result<NewRecipe, RecipeValidationError> {
        let title = self.title.ok_or(RecipeValidationError::MissingTitle)?;
        if title.trim().is_empty() {
            return Err(RecipeValidationError::BlankTitle);
        }
        Ok(NewRecipe {
            title,
            instructions: self.instructions,
            minutes_to_complete: self.minutes_to_complete,
            user_id: self.user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_without_title_fails_before_any_io() {
        let err = RecipeDraft::default()
            .instructions("A".repeat(60))
            .minutes_to_complete(10)
            .user_id(Uuid::new_v4())
            .build()
            .unwrap_err();
        assert_eq!(err, RecipeValidationError::MissingTitle);
    }

    #[test]
    fn build_with_blank_title_fails() {
        let err = RecipeDraft::default().title("   ").build().unwrap_err();
        assert_eq!(err, RecipeValidationError::BlankTitle);
    }

    #[test]
    fn build_keeps_all_fields() {
        let user_id = Uuid::new_v4();
        let new = RecipeDraft::default()
            .title("Valid Recipe")
            .instructions("A".repeat(60))
            .minutes_to_complete(10)
            .user_id(user_id)
            .build()
            .expect("draft is complete");
        assert_eq!(new.title, "Valid Recipe");
        assert_eq!(new.instructions.as_deref(), Some("A".repeat(60).as_str()));
        assert_eq!(new.minutes_to_complete, Some(10));
        assert_eq!(new.user_id, Some(user_id));
    }

    #[test]
    fn instructions_are_not_checked_eagerly() {
        // Missing instructions flow through to the NOT NULL constraint.
        let new = RecipeDraft::default().title("Bare").build().expect("title is enough");
        assert!(new.instructions.is_none());
    }
}
