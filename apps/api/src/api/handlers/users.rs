use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extract::{PathParam, ValidJson};
use crate::api::state::TwitterState;
use crate::domain::repositories::UserRecord;
use crate::domain::user::{User, UserLogin, UserRegister, UserUpdate};

/// Register a new user
///
/// The password is hashed before it is stored and never returned.
///
/// POST /signup
pub async fn signup(
    State(state): State<TwitterState>,
    ValidJson(req): ValidJson<UserRegister>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let hasher = state.hasher;
    let password = req.password;
    let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(ApiError::internal_server_error)??;

    let user = state
        .users
        .create(UserRecord {
            user: req.user,
            password_hash,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Login with email and password
///
/// POST /login
pub async fn login(
    State(state): State<TwitterState>,
    ValidJson(req): ValidJson<UserLogin>,
) -> Result<Json<User>, ApiError> {
    let record = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let hasher = state.hasher;
    let password = req.password;
    let hash = record.password_hash;
    let valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
        .await
        .map_err(ApiError::internal_server_error)??;

    if !valid {
        tracing::warn!(user_id = %record.user.user_id, "Failed login attempt");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    Ok(Json(record.user))
}

/// Show all users
///
/// GET /users
pub async fn show_all_users(
    State(state): State<TwitterState>,
) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.users.list().await?))
}

/// Show a user
///
/// GET /users/:user_id
pub async fn show_user(
    State(state): State<TwitterState>,
    PathParam(user_id): PathParam<Uuid>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User not found: {}", user_id)))?;

    Ok(Json(user))
}

/// Delete a user and return the removed profile
///
/// DELETE /users/:user_id/delete
pub async fn delete_user(
    State(state): State<TwitterState>,
    PathParam(user_id): PathParam<Uuid>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.delete(user_id).await?))
}

/// Update part of a user's profile
///
/// PUT /users/:user_id/update
pub async fn update_user(
    State(state): State<TwitterState>,
    PathParam(user_id): PathParam<Uuid>,
    ValidJson(update): ValidJson<UserUpdate>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.update(user_id, update).await?))
}
