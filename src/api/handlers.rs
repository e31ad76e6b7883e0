use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{ClothingItem, Criteria, NewClothingItem},
    services::suggestions::{self, AiSuggestions, RuleBasedSuggestions},
};

use super::AppState;

// Response types

#[derive(Debug, Serialize)]
pub struct WardrobeResponse {
    pub wardrobe: Vec<ClothingItem>,
}

#[derive(Debug, Serialize)]
pub struct ItemCreatedResponse {
    pub message: String,
    pub item: ClothingItem,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Lists a user's wardrobe, newest first
pub async fn get_wardrobe(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<WardrobeResponse>> {
    let mut wardrobe = state.wardrobe.wardrobe(&user_id).await?;
    wardrobe.reverse();
    Ok(Json(WardrobeResponse { wardrobe }))
}

/// Adds a clothing item to a user's wardrobe
pub async fn add_item(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<NewClothingItem>,
) -> AppResult<(StatusCode, Json<ItemCreatedResponse>)> {
    tracing::info!(
        request_id = %request_id,
        user_id = %user_id,
        category = %request.category,
        "Adding clothing item"
    );

    let item = state.wardrobe.add_item(&user_id, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ItemCreatedResponse {
            message: "Clothing item uploaded successfully".to_string(),
            item,
        }),
    ))
}

/// Removes a clothing item from a user's wardrobe
pub async fn delete_item(
    State(state): State<AppState>,
    Path((user_id, item_id)): Path<(String, Uuid)>,
) -> AppResult<Json<MessageResponse>> {
    state.wardrobe.remove_item(&user_id, item_id).await?;
    Ok(Json(MessageResponse {
        message: "Item deleted successfully".to_string(),
    }))
}

/// Rule-based suggestions grouped by category
pub async fn rule_based_suggestions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Extension(request_id): Extension<RequestId>,
    Json(criteria): Json<Criteria>,
) -> AppResult<Json<RuleBasedSuggestions>> {
    tracing::info!(
        request_id = %request_id,
        user_id = %user_id,
        weather = ?criteria.weather(),
        occasion = ?criteria.occasion(),
        "Processing rule-based suggestion request"
    );

    let response = suggestions::rule_based(state.wardrobe.clone(), &user_id, &criteria).await?;
    Ok(Json(response))
}

/// Scored outfit suggestions
pub async fn ai_suggestions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Extension(request_id): Extension<RequestId>,
    Json(criteria): Json<Criteria>,
) -> AppResult<Json<AiSuggestions>> {
    tracing::info!(
        request_id = %request_id,
        user_id = %user_id,
        weather = ?criteria.weather(),
        occasion = ?criteria.occasion(),
        "Processing outfit suggestion request"
    );

    let response = suggestions::ai_powered(state.wardrobe.clone(), &user_id, &criteria).await?;
    Ok(Json(response))
}
