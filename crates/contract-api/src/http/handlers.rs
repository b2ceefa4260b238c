//! HTTP API handlers

use super::error::ApiError;
use super::state::AppState;
use super::types::*;
use crate::item_actor::ItemError;
use crate::model::{Item, ItemCreate, ItemId, ItemUpdate, Secret, User, UserId, UserRegistration};
use crate::user_actor::UserError;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

type ApiResult<T> = Result<T, ApiError>;

// Rejections are taken as values so they map to 400 with a `detail` body
// instead of axum's default plain-text 422.
type JsonBody<T> = Result<Json<T>, JsonRejection>;

// Any integer is accepted; one outside the id range names no record.
type PathParam = Result<Path<i64>, PathRejection>;

fn item_id(raw: i64) -> ApiResult<ItemId> {
    u32::try_from(raw)
        .map(ItemId)
        .map_err(|_| ItemError::NotFound(raw.to_string()).into())
}

fn user_id(raw: i64) -> ApiResult<UserId> {
    u32::try_from(raw)
        .map(UserId)
        .map_err(|_| UserError::NotFound(raw.to_string()).into())
}

// ============================================================================
// Item Handlers
// ============================================================================

/// GET /items
pub async fn list_items(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Item>>> {
    Ok(Json(state.system.list_items().await?))
}

/// POST /items
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    body: JsonBody<ItemCreate>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    let Json(params) = body?;
    let item = state.system.create_item(params).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /items/:item_id
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    id: PathParam,
) -> ApiResult<Json<Item>> {
    let id = item_id(id?.0)?;
    Ok(Json(state.system.get_item(id).await?))
}

/// PUT /items/:item_id
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    id: PathParam,
    body: JsonBody<ItemUpdate>,
) -> ApiResult<Json<Item>> {
    let id = item_id(id?.0)?;
    let Json(update) = body?;
    Ok(Json(state.system.update_item(id, update).await?))
}

/// DELETE /items/:item_id
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    id: PathParam,
) -> ApiResult<StatusCode> {
    let id = item_id(id?.0)?;
    state.system.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// User Handlers
// ============================================================================

/// GET /users
pub async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.system.list_users().await?))
}

/// POST /users
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    body: JsonBody<UserRegistration>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let Json(registration) = body?;
    let user = state.system.create_user(registration).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/:user_id
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    id: PathParam,
) -> ApiResult<Json<User>> {
    let id = user_id(id?.0)?;
    Ok(Json(state.system.get_user(id).await?))
}

// ============================================================================
// Auth Handlers
// ============================================================================

/// POST /login
pub async fn login(
    State(state): State<Arc<AppState>>,
    body: JsonBody<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(request) = body?;
    let secret = Secret::new(request.password);
    let token = state.system.login(&request.username, &secret).await?;
    Ok(Json(TokenResponse {
        token: token.to_string(),
    }))
}

/// GET /config - requires `Authorization: Bearer <token>`
pub async fn get_config(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<ConfigResponse>> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    state.system.authorize(header)?;

    Ok(Json(ConfigResponse {
        service: state.config.server.service_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        debug_reset_enabled: state.config.server.enable_debug_reset,
    }))
}

// ============================================================================
// Misc Handlers
// ============================================================================

/// POST /debug/reset
pub async fn reset(State(state): State<Arc<AppState>>) -> ApiResult<StatusCode> {
    state.system.reset_all().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /message
pub async fn get_message() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello, world!".to_string(),
    })
}
