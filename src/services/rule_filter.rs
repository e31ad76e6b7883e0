use crate::models::{Category, ClothingItem, Criteria, GroupedSuggestions};

/// Wardrobe items split by known category, borrowed from the snapshot
///
/// Items whose category is not one of the four known values land in no list.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub tops: Vec<&'a ClothingItem>,
    pub bottoms: Vec<&'a ClothingItem>,
    pub shoes: Vec<&'a ClothingItem>,
    pub accessories: Vec<&'a ClothingItem>,
}

impl<'a> Partition<'a> {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a ClothingItem>,
    {
        let mut partition = Self::default();
        for item in items {
            match item.category {
                Category::Top => partition.tops.push(item),
                Category::Bottom => partition.bottoms.push(item),
                Category::Shoes => partition.shoes.push(item),
                Category::Accessories => partition.accessories.push(item),
                Category::Other(_) => {}
            }
        }
        partition
    }

    fn into_grouped(self) -> GroupedSuggestions {
        fn owned(items: Vec<&ClothingItem>) -> Vec<ClothingItem> {
            items.into_iter().cloned().collect()
        }

        GroupedSuggestions {
            tops: owned(self.tops),
            bottoms: owned(self.bottoms),
            shoes: owned(self.shoes),
            accessories: owned(self.accessories),
        }
    }
}

/// Whether `item` survives the rule-based filter
///
/// An item with no occasion or weather is never rejected on that axis. Color
/// is compared against the item's color whenever a preference is given.
pub fn matches(item: &ClothingItem, criteria: &Criteria) -> bool {
    if let (Some(target), Some(occasion)) = (criteria.occasion(), item.occasion()) {
        if occasion != target {
            return false;
        }
    }

    if let (Some(target), Some(weather)) = (criteria.weather(), item.weather()) {
        if weather != target {
            return false;
        }
    }

    if let Some(color) = criteria.color() {
        if item.color != color {
            return false;
        }
    }

    true
}

/// Filters a wardrobe by occasion, weather and color, grouped by category
///
/// When nothing matches, the whole wardrobe is grouped instead so the user
/// always has something to choose from.
pub fn filter_wardrobe(wardrobe: &[ClothingItem], criteria: &Criteria) -> GroupedSuggestions {
    if wardrobe.is_empty() {
        return GroupedSuggestions::default();
    }

    let matched: Vec<&ClothingItem> = wardrobe
        .iter()
        .filter(|item| matches(item, criteria))
        .collect();

    let fell_back = matched.is_empty();
    let partition = if fell_back {
        Partition::new(wardrobe)
    } else {
        Partition::new(matched)
    };

    let grouped = partition.into_grouped();

    tracing::debug!(
        wardrobe_size = wardrobe.len(),
        suggested = grouped.total(),
        fell_back,
        "Rule-based filter applied"
    );

    grouped
}
