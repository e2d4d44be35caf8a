use crate::auth::repo_types::{NewUser, User};
use sqlx::PgPool;
use uuid::Uuid;

impl User {
    /// Find a user by username.
    pub async fn find_by_username(db: &PgPool, username: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, image_url, bio, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Find a user by id.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, image_url, bio, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert a pending user row. Missing username or credential reaches the
    /// database as NULL and comes back as a constraint violation.
    pub async fn insert(db: &PgPool, new: &NewUser) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, image_url, bio)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, password_hash, image_url, bio, created_at
            "#,
        )
        .bind(new.username.as_deref())
        .bind(new.password_hash())
        .bind(new.image_url.as_deref())
        .bind(new.bio.as_deref())
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}
