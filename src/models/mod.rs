mod clothing_item;
mod criteria;
mod outfit;

pub use clothing_item::{Category, ClothingItem, NewClothingItem};
pub use criteria::{Criteria, Preferences};
pub use outfit::{GroupedSuggestions, Outfit};
