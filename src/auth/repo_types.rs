use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::password::hash_password;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 hash, not exposed in JSON
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Pending user row. Fields are only checked when the row is inserted, so an
/// incomplete draft surfaces as a NOT NULL violation from the database, not
/// an error here. The credential field is private: `set_password` is the one
/// write path, and it stores a hash.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: Option<String>,
    password_hash: Option<String>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

impl NewUser {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Hashes `plain` and stores the result as the credential.
    pub fn set_password(&mut self, plain: &str) -> anyhow::Result<()> {
        self.password_hash = Some(hash_password(plain)?);
        Ok(())
    }

    pub fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }
}
