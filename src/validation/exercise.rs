// ABOUTME: Request-shape validation for exercise creation payloads
// ABOUTME: Checks name length/content and lowercase category membership without normalizing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{require_string, ValidationErrors, NOT_A_BOOLEAN};
use crate::models::ExerciseCategory;
use serde_json::Value;

/// Maximum length of an exercise name at the request boundary
pub const MAX_NAME_LENGTH: usize = 100;

/// A validated exercise creation payload
///
/// Fields are carried as received: normalization (trimming, casing) is the
/// entity layer's job. The category has been checked to already be lowercase
/// and one of the four fixed values.
#[derive(Debug, Clone)]
pub struct ExercisePayload {
    /// Exercise name as supplied
    pub name: String,
    /// Category as supplied (verified lowercase)
    pub category: String,
    /// Whether equipment is needed, defaulting false
    pub equipment_needed: bool,
}

/// Validate an exercise creation payload
///
/// Checks run in a fixed order and every failure is recorded:
/// name required → length 2-100 → not whitespace-only → no digits;
/// category required → one of the four values → already lowercase;
/// equipment_needed optional boolean.
///
/// # Errors
///
/// Returns the accumulated field failures when any check fails
pub fn validate_exercise(body: &Value) -> Result<ExercisePayload, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = require_string(body, "name", &mut errors).map(|name| {
        let length = name.chars().count();
        if !(2..=MAX_NAME_LENGTH).contains(&length) {
            errors.add("name", "Length must be between 2 and 100.");
        }
        if name.trim().is_empty() {
            errors.add("name", "Name cannot be empty or just whitespace");
        }
        if name.chars().any(|c| c.is_ascii_digit()) {
            errors.add("name", "Exercise name should not contain numbers");
        }
        name.to_owned()
    });

    let category = require_string(body, "category", &mut errors).map(|category| {
        if ExerciseCategory::parse(category).is_err() {
            errors.add(
                "category",
                "Must be one of: strength, cardio, flexibility, sports.",
            );
        } else if category.chars().any(char::is_uppercase) {
            // Request-shape check only: the entity layer would lowercase this,
            // but the request contract demands it arrive lowercase already.
            errors.add("category", "Category must be lowercase");
        }
        category.to_owned()
    });

    let equipment_needed = match body.get("equipment_needed") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(_) => {
            errors.add("equipment_needed", NOT_A_BOOLEAN);
            false
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    // The defaults are unreachable: a missing field always records an error.
    Ok(ExercisePayload {
        name: name.unwrap_or_default(),
        category: category.unwrap_or_default(),
        equipment_needed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_payload() {
        let body = json!({"name": "bench press", "category": "strength"});
        let payload = validate_exercise(&body).unwrap();
        assert_eq!(payload.name, "bench press");
        assert_eq!(payload.category, "strength");
        assert!(!payload.equipment_needed);
    }

    #[test]
    fn test_missing_fields_both_reported() {
        let errors = validate_exercise(&json!({})).unwrap_err();
        assert!(errors.has_field("name"));
        assert!(errors.has_field("category"));
    }

    #[test]
    fn test_short_name_rejected() {
        let errors = validate_exercise(&json!({"name": "a", "category": "cardio"})).unwrap_err();
        assert!(errors.has_field("name"));
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let errors = validate_exercise(&json!({"name": "    ", "category": "cardio"})).unwrap_err();
        assert!(errors.has_field("name"));
    }

    #[test]
    fn test_digits_in_name_rejected() {
        let errors =
            validate_exercise(&json!({"name": "bench 2press", "category": "cardio"})).unwrap_err();
        assert!(errors.has_field("name"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let errors = validate_exercise(&json!({"name": "rowing", "category": "aqua"})).unwrap_err();
        assert!(errors.has_field("category"));
    }

    #[test]
    fn test_uppercase_category_rejected_even_though_valid() {
        let errors =
            validate_exercise(&json!({"name": "rowing", "category": "Cardio"})).unwrap_err();
        assert!(errors.has_field("category"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_equipment_needed_type_checked() {
        let errors = validate_exercise(
            &json!({"name": "rowing", "category": "cardio", "equipment_needed": "yes"}),
        )
        .unwrap_err();
        assert!(errors.has_field("equipment_needed"));
    }

    #[test]
    fn test_untrimmed_name_passes_request_validation() {
        // Trimming belongs to the entity layer; the request validator only
        // rejects names that are entirely whitespace.
        let payload =
            validate_exercise(&json!({"name": "  bench press  ", "category": "strength"})).unwrap();
        assert_eq!(payload.name, "  bench press  ");
    }
}
