//! Recipe content types shared by manual creation and AI generation.

use serde::{Deserialize, Serialize};

/// Maximum length of a recipe title.
pub const MAX_TITLE_LEN: usize = 255;

/// Maximum length of a recipe description.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// An ordered ingredient line. `index` establishes display order and is not
/// required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientDraft {
    pub index: i32,
    pub content: Option<String>,
}

/// An ordered direction line, with the same ordering contract as
/// [`IngredientDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionDraft {
    pub index: i32,
    pub content: Option<String>,
}

/// A complete recipe body, not yet persisted. This is both the shape of a
/// manual creation payload and the shape the model is asked to return, so
/// generated recipes flow through the same validation and persistence path
/// as manual entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub preparation_time: i32,
    pub cook_time: Option<i32>,
    pub serves: i32,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub ingredients: Vec<IngredientDraft>,
    #[serde(default)]
    pub directions: Vec<DirectionDraft>,
}

impl RecipeDraft {
    /// Check the creation constraints. Model output is untrusted input and
    /// goes through the same checks as a manual payload.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title cannot be empty".to_string());
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(format!("Title exceeds {} characters", MAX_TITLE_LEN));
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(format!(
                "Description exceeds {} characters",
                MAX_DESCRIPTION_LEN
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RecipeDraft {
        RecipeDraft {
            title: "Pancakes".to_string(),
            description: "Fluffy".to_string(),
            preparation_time: 10,
            cook_time: Some(5),
            serves: 2,
            is_favorite: false,
            ingredients: vec![IngredientDraft {
                index: 1,
                content: Some("1 cup flour".to_string()),
            }],
            directions: vec![DirectionDraft {
                index: 1,
                content: Some("Mix".to_string()),
            }],
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn empty_title_rejected() {
        let mut d = draft();
        d.title = "   ".to_string();
        assert!(d.validate().is_err());
    }

    #[test]
    fn overlong_title_rejected() {
        let mut d = draft();
        d.title = "x".repeat(MAX_TITLE_LEN + 1);
        assert!(d.validate().is_err());
    }

    #[test]
    fn overlong_description_rejected() {
        let mut d = draft();
        d.description = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        assert!(d.validate().is_err());
    }

    #[test]
    fn missing_optional_fields_default() {
        let draft: RecipeDraft = serde_json::from_str(
            r#"{
                "title": "Toast",
                "description": "Just toast",
                "preparation_time": 1,
                "cook_time": null,
                "serves": 1
            }"#,
        )
        .unwrap();

        assert!(!draft.is_favorite);
        assert!(draft.ingredients.is_empty());
        assert!(draft.directions.is_empty());
    }
}
