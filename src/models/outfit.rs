use serde::{Deserialize, Serialize};

use super::ClothingItem;

/// One composed outfit: at most one item per category, in the order
/// top, bottom, shoes, accessories
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Outfit {
    /// Attempt number within one composition call, starting at 1
    pub id: u32,
    pub name: String,
    pub items: Vec<ClothingItem>,
    /// Sum of item scores; only comparable between outfits of the same call
    pub score: u32,
    pub description: String,
}

impl Outfit {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: format!("Outfit {}", id),
            items: Vec::new(),
            score: 0,
            description: String::new(),
        }
    }

    /// Appends a selected item and adds its score to the running total
    pub fn push(&mut self, item: ClothingItem, score: u32) {
        self.items.push(item);
        self.score += score;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Rule filter output, bucketed by category
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GroupedSuggestions {
    pub tops: Vec<ClothingItem>,
    pub bottoms: Vec<ClothingItem>,
    pub shoes: Vec<ClothingItem>,
    pub accessories: Vec<ClothingItem>,
}

impl GroupedSuggestions {
    pub fn total(&self) -> usize {
        self.tops.len() + self.bottoms.len() + self.shoes.len() + self.accessories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_new_outfit() {
        let outfit = Outfit::new(2);
        assert_eq!(outfit.name, "Outfit 2");
        assert!(outfit.is_empty());
        assert_eq!(outfit.score, 0);
    }

    #[test]
    fn test_push_accumulates_score() {
        let mut outfit = Outfit::new(1);
        outfit.push(ClothingItem::new("Tee", Category::Top, "red"), 3);
        outfit.push(ClothingItem::new("Jeans", Category::Bottom, "blue"), 2);
        assert_eq!(outfit.items.len(), 2);
        assert_eq!(outfit.score, 5);
    }
}
