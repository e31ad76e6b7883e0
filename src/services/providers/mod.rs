//! Wardrobe data provider abstraction
//!
//! The suggestion endpoints only need a read-only snapshot of one user's
//! wardrobe per request. Storage lives behind this trait so the recommendation
//! core never touches it directly.

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{ClothingItem, NewClothingItem},
};

pub mod in_memory;

pub use in_memory::InMemoryWardrobe;

/// Trait for wardrobe storage backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WardrobeProvider: Send + Sync {
    /// Returns the current wardrobe of `user_id` in the order items were added
    ///
    /// Unknown users have an empty wardrobe.
    async fn wardrobe(&self, user_id: &str) -> AppResult<Vec<ClothingItem>>;

    /// Validates and stores a new item for `user_id`
    async fn add_item(&self, user_id: &str, item: NewClothingItem) -> AppResult<ClothingItem>;

    /// Removes an item from the wardrobe of `user_id`
    ///
    /// Fails with `NotFound` when the item does not belong to that user.
    async fn remove_item(&self, user_id: &str, item_id: Uuid) -> AppResult<()>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
