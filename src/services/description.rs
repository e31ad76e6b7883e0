use crate::models::ClothingItem;

/// Builds the one-sentence summary shown with a composed outfit
///
/// Lists every category in selection order, every item color, and the style
/// of the first styled item, then mentions the requested weather and occasion.
pub fn describe_outfit(
    items: &[ClothingItem],
    weather: Option<&str>,
    occasion: Option<&str>,
) -> String {
    let categories: Vec<&str> = items.iter().map(|item| item.category.as_str()).collect();
    let mut description = format!("A {} combination", categories.join(" and "));

    if items.iter().any(|item| !item.color.is_empty()) {
        let colors: Vec<&str> = items.iter().map(|item| item.color.as_str()).collect();
        description.push_str(&format!(" featuring {} colors", colors.join(", ")));
    }

    if let Some(style) = items.iter().find_map(|item| item.style()) {
        description.push_str(&format!(" with a {} style", style));
    }

    if let Some(weather) = weather {
        description.push_str(&format!(", perfect for {} weather", weather));
    }

    if let Some(occasion) = occasion {
        description.push_str(&format!(" and ideal for {} occasions", occasion));
    }

    description.push('.');
    description
}
