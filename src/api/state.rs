use std::sync::Arc;

use crate::services::{InMemoryWardrobe, WardrobeProvider};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub wardrobe: Arc<dyn WardrobeProvider>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates state backed by an empty in-memory wardrobe store
    pub fn new() -> Self {
        Self::with_provider(Arc::new(InMemoryWardrobe::new()))
    }

    pub fn with_provider(wardrobe: Arc<dyn WardrobeProvider>) -> Self {
        Self { wardrobe }
    }
}
