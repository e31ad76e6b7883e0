use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::instrument;

use crate::{
    error::AppResult,
    models::{Criteria, GroupedSuggestions, Outfit},
    services::{composer, providers::WardrobeProvider, rule_filter},
};

pub const EMPTY_WARDROBE_MESSAGE: &str = "No items in wardrobe";

/// Which engine produced a suggestion response
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    RuleBased,
    AiPowered,
}

/// Rule-based suggestions grouped by category
#[derive(Debug, Serialize)]
pub struct RuleBasedSuggestions {
    pub suggestions: GroupedSuggestions,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Composed outfits, best first
///
/// `outfit` is `None` only when the wardrobe is empty.
#[derive(Debug, Serialize)]
pub struct AiSuggestions {
    pub outfit: Option<Vec<Outfit>>,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Filters the user's wardrobe by the request criteria
#[instrument(skip(provider, criteria), fields(provider = provider.name()))]
pub async fn rule_based(
    provider: Arc<dyn WardrobeProvider>,
    user_id: &str,
    criteria: &Criteria,
) -> AppResult<RuleBasedSuggestions> {
    let wardrobe = provider.wardrobe(user_id).await?;

    if wardrobe.is_empty() {
        tracing::info!("Wardrobe is empty, nothing to suggest");
        return Ok(RuleBasedSuggestions {
            suggestions: GroupedSuggestions::default(),
            kind: SuggestionKind::RuleBased,
            message: Some(EMPTY_WARDROBE_MESSAGE.to_string()),
        });
    }

    let suggestions = rule_filter::filter_wardrobe(&wardrobe, criteria);

    tracing::info!(
        wardrobe_size = wardrobe.len(),
        tops = suggestions.tops.len(),
        bottoms = suggestions.bottoms.len(),
        shoes = suggestions.shoes.len(),
        accessories = suggestions.accessories.len(),
        "Rule-based suggestions ready"
    );

    Ok(RuleBasedSuggestions {
        suggestions,
        kind: SuggestionKind::RuleBased,
        message: None,
    })
}

/// Composes scored outfits from the user's wardrobe
#[instrument(skip(provider, criteria), fields(provider = provider.name()))]
pub async fn ai_powered(
    provider: Arc<dyn WardrobeProvider>,
    user_id: &str,
    criteria: &Criteria,
) -> AppResult<AiSuggestions> {
    let start = Instant::now();
    let wardrobe = provider.wardrobe(user_id).await?;

    if wardrobe.is_empty() {
        tracing::info!("Wardrobe is empty, nothing to compose");
        return Ok(AiSuggestions {
            outfit: None,
            kind: SuggestionKind::AiPowered,
            message: Some(EMPTY_WARDROBE_MESSAGE.to_string()),
        });
    }

    let outfits = composer::compose_outfits(&wardrobe, criteria);

    tracing::info!(
        wardrobe_size = wardrobe.len(),
        outfits = outfits.len(),
        best_score = outfits.first().map(|o| o.score),
        processing_time_us = start.elapsed().as_micros() as u64,
        "Outfit suggestions ready"
    );

    Ok(AiSuggestions {
        outfit: Some(outfits),
        kind: SuggestionKind::AiPowered,
        message: None,
    })
}
