use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

use super::WardrobeProvider;
use crate::{
    error::{AppError, AppResult},
    models::{Category, ClothingItem, NewClothingItem},
};

/// Process-local wardrobe store keyed by user id
#[derive(Default)]
pub struct InMemoryWardrobe {
    items: RwLock<HashMap<String, Vec<ClothingItem>>>,
}

impl InMemoryWardrobe {
    pub fn new() -> Self {
        Self::default()
    }
}

fn required(field: &str, value: String) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Turns a validated request into a stored item
fn build_item(request: NewClothingItem) -> AppResult<ClothingItem> {
    Ok(ClothingItem {
        id: Uuid::new_v4(),
        name: required("name", request.name)?,
        category: Category::from(required("category", request.category)?),
        color: required("color", request.color)?,
        style: optional(request.style),
        occasion: optional(request.occasion),
        weather: optional(request.weather),
        image_url: required("imageUrl", request.image_url)?,
        tags: request
            .tags
            .into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect(),
        created_at: Utc::now(),
    })
}

#[async_trait::async_trait]
impl WardrobeProvider for InMemoryWardrobe {
    async fn wardrobe(&self, user_id: &str) -> AppResult<Vec<ClothingItem>> {
        let items = self.items.read().await;
        Ok(items.get(user_id).cloned().unwrap_or_default())
    }

    #[instrument(skip(self, item))]
    async fn add_item(&self, user_id: &str, item: NewClothingItem) -> AppResult<ClothingItem> {
        let item = build_item(item)?;

        if !item.category.is_known() {
            tracing::warn!(
                category = %item.category,
                "Stored item with unknown category; it will not appear in suggestions"
            );
        }

        // Insertion order; suggestion tie-breaks depend on it
        self.items
            .write()
            .await
            .entry(user_id.to_string())
            .or_default()
            .push(item.clone());

        tracing::info!(item_id = %item.id, category = %item.category, "Clothing item added");
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn remove_item(&self, user_id: &str, item_id: Uuid) -> AppResult<()> {
        let mut items = self.items.write().await;
        let wardrobe = items
            .get_mut(user_id)
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        let position = wardrobe
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        wardrobe.remove(position);
        tracing::info!(%item_id, "Clothing item deleted");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}
