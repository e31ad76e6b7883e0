use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Wardrobe category of a clothing item
///
/// Only the four known categories take part in suggestions. Anything else the
/// client sent is kept verbatim so it round-trips, but it is never bucketed or
/// selected for an outfit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Accessories,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
            Category::Other(raw) => raw,
        }
    }

    /// Whether this is one of the four categories the engine understands
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "top" => Category::Top,
            "bottom" => Category::Bottom,
            "shoes" => Category::Shoes,
            "accessories" => Category::Accessories,
            _ => Category::Other(value),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A clothing item from a user's wardrobe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    /// Season the item suits (summer, winter, spring, fall); not enforced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ClothingItem {
    /// Creates an item with a fresh id and only the attributes scoring cares about
    pub fn new(name: impl Into<String>, category: Category, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            color: color.into(),
            style: None,
            occasion: None,
            weather: None,
            image_url: String::new(),
            tags: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_occasion(mut self, occasion: impl Into<String>) -> Self {
        self.occasion = Some(occasion.into());
        self
    }

    pub fn with_weather(mut self, weather: impl Into<String>) -> Self {
        self.weather = Some(weather.into());
        self
    }

    pub fn style(&self) -> Option<&str> {
        non_empty(&self.style)
    }

    pub fn occasion(&self) -> Option<&str> {
        non_empty(&self.occasion)
    }

    pub fn weather(&self) -> Option<&str> {
        non_empty(&self.weather)
    }
}

/// Request body for adding an item to a wardrobe
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewClothingItem {
    pub name: String,
    pub category: String,
    pub color: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub weather: Option<String>,
    pub image_url: String,
    #[serde(default, deserialize_with = "tag_list")]
    pub tags: Vec<String>,
}

/// Accepts tags as a JSON array or as one comma-separated string
fn tag_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match Option::<Tags>::deserialize(deserializer)? {
        Some(Tags::List(tags)) => tags,
        Some(Tags::Joined(joined)) => joined.split(',').map(str::to_string).collect(),
        None => Vec::new(),
    })
}

/// Empty strings count as unset, matching how clients submit blank form fields
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
