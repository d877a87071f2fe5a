//! Wish Form Model
//!
//! Field values behind the create/edit dialog, kept as the raw text the
//! inputs hold.

use crate::models::{NewWish, Priority, Wish, WishPatch};

#[derive(Debug, Clone, PartialEq)]
pub struct WishForm {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: String,
    pub priority: Priority,
    pub completed: bool,
}

impl Default for WishForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image_url: String::new(),
            price: "0".to_string(),
            priority: Priority::Medium,
            completed: false,
        }
    }
}

/// What a submit turns into
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(NewWish),
    Update { id: String, patch: WishPatch },
}

/// Lenient number parsing: anything unparsable is 0.
pub fn parse_price(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .unwrap_or(0.0)
}

impl WishForm {
    /// Prefill from an existing wish for editing
    pub fn from_wish(wish: &Wish) -> Self {
        Self {
            title: wish.title.clone(),
            description: wish.description.clone(),
            image_url: wish.image_url.clone(),
            price: wish.price.to_string(),
            priority: wish.priority,
            completed: wish.completed,
        }
    }

    pub fn to_draft(&self) -> NewWish {
        NewWish {
            title: self.title.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            priority: self.priority,
            price: parse_price(&self.price),
            completed: self.completed,
        }
    }

    /// Create when nothing is being edited, otherwise patch the changed fields.
    pub fn submission(&self, editing: Option<&Wish>) -> Submission {
        let draft = self.to_draft();
        match editing {
            Some(wish) => Submission::Update {
                id: wish.id.clone(),
                patch: WishPatch::between(wish, &draft),
            },
            None => Submission::Create(draft),
        }
    }
}
