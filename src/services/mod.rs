pub mod composer;
pub mod description;
pub mod providers;
pub mod rule_filter;
pub mod scoring;
pub mod suggestions;

pub use composer::{compose_outfits, compose_outfits_with_rng};
pub use description::describe_outfit;
pub use providers::{InMemoryWardrobe, WardrobeProvider};
pub use rule_filter::filter_wardrobe;
pub use scoring::score_item;
