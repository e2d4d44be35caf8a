use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, RefreshRequest, RegisterRequest},
        password::verify_password,
        repo_types::{NewUser, User},
        services::{is_valid_username, AuthUser, JwtKeys},
    },
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

fn token_pair(
    keys: &JwtKeys,
    user_id: uuid::Uuid,
) -> Result<(String, String), (axum::http::StatusCode, String)> {
    let access = keys.sign_access(user_id).map_err(|e| {
        error!(error = %e, "jwt sign access failed");
        (axum::http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;
    let refresh = keys.sign_refresh(user_id).map_err(|e| {
        error!(error = %e, "jwt sign refresh failed");
        (axum::http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;
    Ok((access, refresh))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, (axum::http::StatusCode, String)> {
    payload.username = payload.username.trim().to_string();

    if !is_valid_username(&payload.username) {
        warn!(username = %payload.username, "invalid username");
        return Err((
            axum::http::StatusCode::BAD_REQUEST,
            "Invalid username".into(),
        ));
    }

    if payload.password.len() < 8 {
        warn!("password too short");
        return Err((
            axum::http::StatusCode::BAD_REQUEST,
            "Password too short".into(),
        ));
    }

    // Ensure username is not taken; the UNIQUE constraint still backs this up.
    if let Ok(Some(_)) = User::find_by_username(&state.db, &payload.username).await {
        warn!(username = %payload.username, "username already taken");
        return Err((
            axum::http::StatusCode::CONFLICT,
            "Username already taken".into(),
        ));
    }

    let mut draft = NewUser::new(&payload.username);
    if let Some(url) = payload.image_url.take() {
        draft = draft.with_image_url(url);
    }
    if let Some(bio) = payload.bio.take() {
        draft = draft.with_bio(bio);
    }
    if let Err(e) = draft.set_password(&payload.password) {
        error!(error = %e, "set_password failed");
        return Err((axum::http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
    }

    let user = match User::insert(&state.db, &draft).await {
        Ok(u) => u,
        Err(e) => {
            error!(error = %e, "create user failed");
            return Err((axum::http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    let keys = JwtKeys::from_ref(&state);
    let (access_token, refresh_token) = token_pair(&keys, user.id)?;

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user: user.into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, (axum::http::StatusCode, String)> {
    payload.username = payload.username.trim().to_string();

    let user = match User::find_by_username(&state.db, &payload.username).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            warn!(username = %payload.username, "login unknown username");
            return Err((
                axum::http::StatusCode::UNAUTHORIZED,
                "Invalid credentials".into(),
            ));
        }
        Err(e) => {
            error!(error = %e, "find_by_username failed");
            return Err((axum::http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    let ok = match verify_password(&payload.password, &user.password_hash) {
        Ok(v) => v,
        Err(e) => {
            error!(error = %e, "verify_password failed");
            return Err((axum::http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    if !ok {
        warn!(username = %payload.username, user_id = %user.id, "login invalid password");
        return Err((
            axum::http::StatusCode::UNAUTHORIZED,
            "Invalid credentials".into(),
        ));
    }

    let keys = JwtKeys::from_ref(&state);
    let (access_token, refresh_token) = token_pair(&keys, user.id)?;

    info!(user_id = %user.id, username = %user.username, "user logged in");
    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user: user.into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<AuthResponse>, (axum::http::StatusCode, String)> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys
        .verify_refresh(&payload.refresh_token)
        .map_err(|e| (axum::http::StatusCode::UNAUTHORIZED, format!("{}", e)))?;

    let user = User::find_by_id(&state.db, claims.sub)
        .await
        .ok()
        .flatten()
        .ok_or((
            axum::http::StatusCode::UNAUTHORIZED,
            "User not found".to_string(),
        ))?;

    let (access_token, refresh_token) = token_pair(&keys, user.id)?;
    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user: user.into(),
    }))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PublicUser>, (axum::http::StatusCode, String)> {
    let user = User::find_by_id(&state.db, user_id)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %user_id, "load user failed");
            (axum::http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?
        .ok_or((
            axum::http::StatusCode::UNAUTHORIZED,
            "User not found".to_string(),
        ))?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod serialization_tests {
    use super::*;

    #[test]
    fn public_user_omits_password_hash() {
        let user = User {
            id: uuid::Uuid::new_v4(),
            username: "Liz".into(),
            password_hash: "$argon2id$fake".into(),
            image_url: Some("https://example.com/image.jpg".into()),
            bio: None,
            created_at: time::OffsetDateTime::UNIX_EPOCH,
        };

        let public: PublicUser = user.into();
        let json = serde_json::to_string(&public).unwrap();
        assert!(json.contains("Liz"));
        assert!(!json.contains("argon2"));
    }

    #[test]
    fn user_row_never_serializes_its_hash() {
        let user = User {
            id: uuid::Uuid::new_v4(),
            username: "Ben".into(),
            password_hash: "$argon2id$fake".into(),
            image_url: None,
            bio: None,
            created_at: time::OffsetDateTime::UNIX_EPOCH,
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
    }
}
