//! Item scoring against suggestion criteria.
//!
//! Additive points: exact weather or occasion match +3, a related value from
//! the compatibility tables +1, matching color preference +2, matching style
//! preference +2. Scores fall in `0..=MAX_ITEM_SCORE`.

use crate::models::{ClothingItem, Criteria};

pub const MAX_ITEM_SCORE: u32 = 10;

const EXACT_MATCH: u32 = 3;
const COMPATIBLE_MATCH: u32 = 1;
const PREFERENCE_MATCH: u32 = 2;

/// Seasons an item tagged with `item_weather` also suits, keyed on the item side.
fn compatible_weather(item_weather: &str) -> &'static [&'static str] {
    match item_weather {
        "summer" => &["spring"],
        "winter" => &["fall"],
        "spring" => &["summer", "fall"],
        "fall" => &["winter", "spring"],
        _ => &[],
    }
}

/// Occasions an item tagged with `item_occasion` also suits, keyed on the item side.
fn compatible_occasion(item_occasion: &str) -> &'static [&'static str] {
    match item_occasion {
        "casual" => &["work"],
        "work" => &["casual"],
        "formal" => &["party"],
        "party" => &["formal"],
        _ => &[],
    }
}

pub fn is_weather_compatible(item_weather: &str, target: &str) -> bool {
    compatible_weather(item_weather).iter().any(|w| *w == target)
}

pub fn is_occasion_compatible(item_occasion: &str, target: &str) -> bool {
    compatible_occasion(item_occasion).iter().any(|o| *o == target)
}

fn axis_score(
    item_value: Option<&str>,
    target: Option<&str>,
    compatible: fn(&str, &str) -> bool,
) -> u32 {
    match (item_value, target) {
        (Some(value), Some(target)) if value == target => EXACT_MATCH,
        (Some(value), Some(target)) if compatible(value, target) => COMPATIBLE_MATCH,
        _ => 0,
    }
}

/// Scores how well `item` fits `criteria`
pub fn score_item(item: &ClothingItem, criteria: &Criteria) -> u32 {
    let mut score = axis_score(item.weather(), criteria.weather(), is_weather_compatible);
    score += axis_score(item.occasion(), criteria.occasion(), is_occasion_compatible);

    if criteria.color().is_some_and(|color| color == item.color) {
        score += PREFERENCE_MATCH;
    }

    if let (Some(wanted), Some(style)) = (criteria.style(), item.style()) {
        if wanted == style {
            score += PREFERENCE_MATCH;
        }
    }

    score
}
