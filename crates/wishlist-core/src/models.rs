//! Wishlist Models
//!
//! Data structures matching the collaborator's `wishes` collection.

use serde::{Deserialize, Serialize};

/// Wish priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Falls back to medium for anything unknown (select values are trusted).
    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }

    /// Badge text, e.g. `HIGH`
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }

    /// Option text in the form selector
    pub fn option_label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// CSS class for the priority badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            Priority::High => "priority-badge priority-high",
            Priority::Medium => "priority-badge priority-medium",
            Priority::Low => "priority-badge priority-low",
        }
    }
}

/// A single wishlist record as stored by the collaborator.
///
/// `id` and `created_at` are assigned once and never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wish {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub priority: Priority,
    pub price: f64,
    pub completed: bool,
    pub created_at: String,
}

/// Draft payload: a wish without identifier and creation timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewWish {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub priority: Priority,
    pub price: f64,
    pub completed: bool,
}

impl From<&Wish> for NewWish {
    fn from(wish: &Wish) -> Self {
        Self {
            title: wish.title.clone(),
            description: wish.description.clone(),
            image_url: wish.image_url.clone(),
            priority: wish.priority,
            price: wish.price,
            completed: wish.completed,
        }
    }
}

/// Partial update; only present fields are sent.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WishPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl WishPatch {
    /// Fields of `edited` that differ from `original`
    pub fn between(original: &Wish, edited: &NewWish) -> Self {
        fn changed<T: PartialEq + Clone>(old: &T, new: &T) -> Option<T> {
            (old != new).then(|| new.clone())
        }

        Self {
            title: changed(&original.title, &edited.title),
            description: changed(&original.description, &edited.description),
            image_url: changed(&original.image_url, &edited.image_url),
            priority: changed(&original.priority, &edited.priority),
            price: changed(&original.price, &edited.price),
            completed: changed(&original.completed, &edited.completed),
        }
    }
}

/// Price as shown on cards, e.g. `$199.99`
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
