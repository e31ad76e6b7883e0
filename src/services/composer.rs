//! Outfit composition.
//!
//! Each attempt takes the best-scoring top, bottom and shoes, then adds the
//! best accessory on a weighted coin flip. Attempts are not deduplicated, so
//! outfits differ only when the accessory draw does.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::models::{ClothingItem, Criteria, Outfit};

use super::description::describe_outfit;
use super::rule_filter::Partition;
use super::scoring::score_item;

/// Number of outfits attempted per request
pub const OUTFIT_ATTEMPTS: u32 = 3;

/// Chance that an attempt includes an accessory
pub const ACCESSORY_PROBABILITY: f64 = 0.7;

/// Returns the first item with the highest score, with that score
///
/// Later items must score strictly higher to replace the current best, so
/// ties resolve to input order.
pub fn best_by_score<'a, T, F>(items: &[&'a T], mut scorer: F) -> Option<(&'a T, u32)>
where
    F: FnMut(&T) -> u32,
{
    let mut best: Option<(&'a T, u32)> = None;
    for &item in items {
        let score = scorer(item);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((item, score)),
        }
    }
    best
}

/// Composes up to [`OUTFIT_ATTEMPTS`] outfits, best first
///
/// Draws the accessory coin flips from a generator seeded for this call only.
pub fn compose_outfits(wardrobe: &[ClothingItem], criteria: &Criteria) -> Vec<Outfit> {
    let mut rng = StdRng::from_entropy();
    compose_outfits_with_rng(wardrobe, criteria, &mut rng)
}

/// Composes outfits using the given random source for accessory draws
pub fn compose_outfits_with_rng<R>(
    wardrobe: &[ClothingItem],
    criteria: &Criteria,
    rng: &mut R,
) -> Vec<Outfit>
where
    R: Rng + ?Sized,
{
    let partition = Partition::new(wardrobe);
    let score = |item: &ClothingItem| score_item(item, criteria);

    let mut outfits = Vec::new();

    for id in 1..=OUTFIT_ATTEMPTS {
        let mut outfit = Outfit::new(id);

        for candidates in [&partition.tops, &partition.bottoms, &partition.shoes] {
            if let Some((item, item_score)) = best_by_score(candidates, score) {
                outfit.push(item.clone(), item_score);
            }
        }

        if !partition.accessories.is_empty() && rng.gen_bool(ACCESSORY_PROBABILITY) {
            if let Some((item, item_score)) = best_by_score(&partition.accessories, score) {
                outfit.push(item.clone(), item_score);
            }
        }

        outfit.description =
            describe_outfit(&outfit.items, criteria.weather(), criteria.occasion());

        if outfit.is_empty() {
            continue;
        }
        outfits.push(outfit);
    }

    // Stable, so equal scores keep attempt order
    outfits.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        wardrobe_size = wardrobe.len(),
        outfits = outfits.len(),
        best_score = outfits.first().map(|o| o.score),
        "Outfits composed"
    );

    outfits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Preferences};
    use rand::rngs::mock::StepRng;

    /// Every `gen_bool` draw succeeds
    fn always_accessorize() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Every `gen_bool` draw fails
    fn never_accessorize() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn summer() -> Criteria {
        Criteria {
            weather: Some("summer".to_string()),
            ..Criteria::default()
        }
    }

    fn basics() -> Vec<ClothingItem> {
        vec![
            ClothingItem::new("Tee", Category::Top, "red").with_weather("summer"),
            ClothingItem::new("Jeans", Category::Bottom, "blue").with_weather("summer"),
            ClothingItem::new("Sneakers", Category::Shoes, "white"),
        ]
    }

    #[test]
    fn test_best_by_score_prefers_first_of_equal_scores() {
        let values = [3, 7, 7, 1];
        let refs: Vec<&i32> = values.iter().collect();
        let (best, score) = best_by_score(&refs, |v| *v as u32).unwrap();
        assert!(std::ptr::eq(best, &values[1]));
        assert_eq!(score, 7);
    }

    #[test]
    fn test_best_by_score_empty() {
        let refs: Vec<&i32> = Vec::new();
        assert!(best_by_score(&refs, |v| *v as u32).is_none());
    }

    #[test]
    fn test_empty_wardrobe_yields_no_outfits() {
        let outfits = compose_outfits_with_rng(&[], &summer(), &mut always_accessorize());
        assert!(outfits.is_empty());
        assert!(compose_outfits(&[], &Criteria::default()).is_empty());
    }

    #[test]
    fn test_single_choice_per_category() {
        let wardrobe = basics();
        let outfits = compose_outfits_with_rng(&wardrobe, &summer(), &mut always_accessorize());

        assert_eq!(outfits.len(), 3);
        for (index, outfit) in outfits.iter().enumerate() {
            assert_eq!(outfit.id, index as u32 + 1);
            assert_eq!(outfit.name, format!("Outfit {}", index + 1));
            assert_eq!(outfit.items, wardrobe);
            assert_eq!(outfit.score, 6);
            assert_eq!(
                outfit.description,
                "A top and bottom and shoes combination featuring red, blue, white colors, \
                 perfect for summer weather."
            );
        }
    }

    #[test]
    fn test_picks_highest_scoring_item_per_category() {
        let wardrobe = vec![
            ClothingItem::new("Sweater", Category::Top, "grey").with_weather("winter"),
            ClothingItem::new("Tank", Category::Top, "red").with_weather("summer"),
            ClothingItem::new("Cardigan", Category::Top, "green").with_weather("spring"),
            ClothingItem::new("Shorts", Category::Bottom, "khaki").with_weather("summer"),
        ];

        let outfits = compose_outfits_with_rng(&wardrobe, &summer(), &mut never_accessorize());
        let names: Vec<&str> = outfits[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Tank", "Shorts"]);
        assert_eq!(outfits[0].score, 6);
    }

    #[test]
    fn test_ties_resolve_to_input_order() {
        let wardrobe = vec![
            ClothingItem::new("First tee", Category::Top, "black"),
            ClothingItem::new("Second tee", Category::Top, "black"),
            ClothingItem::new("Third tee", Category::Top, "black"),
        ];
        let criteria = Criteria {
            preferences: Preferences {
                color: Some("black".to_string()),
                style: None,
            },
            ..Criteria::default()
        };

        for _ in 0..10 {
            for outfit in compose_outfits(&wardrobe, &criteria) {
                assert_eq!(outfit.items.len(), 1);
                assert_eq!(outfit.items[0].id, wardrobe[0].id);
            }
        }
    }

    #[test]
    fn test_accessory_included_when_draw_succeeds() {
        let mut wardrobe = basics();
        wardrobe.push(ClothingItem::new("Belt", Category::Accessories, "brown"));
        wardrobe.push(
            ClothingItem::new("Sunglasses", Category::Accessories, "black").with_weather("summer"),
        );

        let outfits = compose_outfits_with_rng(&wardrobe, &summer(), &mut always_accessorize());
        assert_eq!(outfits.len(), 3);
        for outfit in &outfits {
            assert_eq!(outfit.items.len(), 4);
            assert_eq!(outfit.items[3].name, "Sunglasses");
            assert_eq!(outfit.score, 9);
        }
    }

    #[test]
    fn test_accessory_skipped_when_draw_fails() {
        let mut wardrobe = basics();
        wardrobe.push(ClothingItem::new("Belt", Category::Accessories, "brown"));

        let outfits = compose_outfits_with_rng(&wardrobe, &summer(), &mut never_accessorize());
        assert_eq!(outfits.len(), 3);
        assert!(outfits
            .iter()
            .all(|o| o.items.iter().all(|i| i.category != Category::Accessories)));
    }

    #[test]
    fn test_accessory_only_wardrobe() {
        let wardrobe = vec![ClothingItem::new("Hat", Category::Accessories, "tan")];

        let drawn = compose_outfits_with_rng(&wardrobe, &summer(), &mut always_accessorize());
        assert_eq!(drawn.len(), 3);
        assert_eq!(drawn[0].items[0].name, "Hat");

        let skipped = compose_outfits_with_rng(&wardrobe, &summer(), &mut never_accessorize());
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_outfits_sorted_by_score() {
        let mut wardrobe = basics();
        wardrobe.push(
            ClothingItem::new("Sunglasses", Category::Accessories, "black").with_weather("summer"),
        );

        // gen_bool compares a u64 draw against 0.7 * 2^64: fail, succeed, fail
        let mut rng = StepRng::new(u64::MAX, u64::MAX / 2 + 1);
        let outfits = compose_outfits_with_rng(&wardrobe, &summer(), &mut rng);

        assert_eq!(outfits.len(), 3);
        assert_eq!(outfits[0].id, 2);
        assert_eq!(outfits[0].score, 9);
        assert_eq!((outfits[1].id, outfits[1].score), (1, 6));
        assert_eq!((outfits[2].id, outfits[2].score), (3, 6));
    }

    #[test]
    fn test_unknown_categories_never_selected() {
        let wardrobe = vec![
            ClothingItem::new("Raincoat", Category::from("outerwear"), "yellow")
                .with_weather("summer"),
        ];
        let outfits = compose_outfits_with_rng(&wardrobe, &summer(), &mut always_accessorize());
        assert!(outfits.is_empty());
    }
}
