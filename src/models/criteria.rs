use serde::{Deserialize, Serialize};

use super::clothing_item::non_empty;

/// Color and style the user would like to wear
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

/// Constraints for one suggestion request
///
/// Every axis is optional; a missing or empty value places no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Criteria {
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub weather: Option<String>,
    #[serde(default)]
    pub occasion: Option<String>,
}

impl Criteria {
    pub fn weather(&self) -> Option<&str> {
        non_empty(&self.weather)
    }

    pub fn occasion(&self) -> Option<&str> {
        non_empty(&self.occasion)
    }

    pub fn color(&self) -> Option<&str> {
        non_empty(&self.preferences.color)
    }

    pub fn style(&self) -> Option<&str> {
        non_empty(&self.preferences.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_preferences_default_to_empty() {
        let criteria: Criteria = serde_json::from_str(r#"{"weather": "winter"}"#).unwrap();
        assert_eq!(criteria.weather(), Some("winter"));
        assert_eq!(criteria.preferences, Preferences::default());
        assert_eq!(criteria.occasion(), None);
    }

    #[test]
    fn test_blank_fields_are_unconstrained() {
        let criteria: Criteria = serde_json::from_str(
            r#"{"preferences": {"color": "", "style": "casual"}, "weather": "", "occasion": null}"#,
        )
        .unwrap();
        assert_eq!(criteria.color(), None);
        assert_eq!(criteria.style(), Some("casual"));
        assert_eq!(criteria.weather(), None);
        assert_eq!(criteria.occasion(), None);
    }
}
