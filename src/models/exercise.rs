// ABOUTME: Exercise entity with name normalization and category constraints
// ABOUTME: Enforces trimmed title-case names and the fixed four-value category enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Minimum length of an exercise name after trimming
pub const MIN_NAME_LENGTH: usize = 2;

/// Exercise category, stored lowercase in the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    /// Resistance and weight training
    Strength,
    /// Endurance and aerobic work
    Cardio,
    /// Stretching and mobility
    Flexibility,
    /// Sport-specific activity
    Sports,
}

impl ExerciseCategory {
    /// All valid categories, in canonical order
    pub const ALL: [Self; 4] = [Self::Strength, Self::Cardio, Self::Flexibility, Self::Sports];

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Flexibility => "flexibility",
            Self::Sports => "sports",
        }
    }

    /// Parse from a string, lowercasing first
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when the value is not one of the four
    /// fixed categories
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "cardio" => Ok(Self::Cardio),
            "flexibility" => Ok(Self::Flexibility),
            "sports" => Ok(Self::Sports),
            _ => Err(AppError::invalid_input(
                "Category must be one of: strength, cardio, flexibility, sports",
            )),
        }
    }
}

impl std::fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Title-case a name: every letter starting a word (or following a
/// non-letter, as in "push-ups") is uppercased, the rest lowercased
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Normalize an exercise name: trim, enforce minimum length, title-case
///
/// # Errors
///
/// Returns an invalid-input error when the trimmed name is shorter than
/// [`MIN_NAME_LENGTH`] characters
pub fn normalize_name(raw: &str) -> AppResult<String> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_NAME_LENGTH {
        return Err(AppError::invalid_input(
            "Exercise name must be at least 2 characters long",
        ));
    }
    Ok(title_case(trimmed))
}

/// A stored exercise row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Surrogate key
    pub id: i64,
    /// Unique, title-cased display name
    pub name: String,
    /// Category (stored lowercase)
    pub category: ExerciseCategory,
    /// Whether equipment is needed to perform the exercise
    pub equipment_needed: bool,
}

/// A validated, normalized exercise ready for insertion
#[derive(Debug, Clone)]
pub struct NewExercise {
    /// Normalized (trimmed, title-cased) name
    pub name: String,
    /// Parsed category
    pub category: ExerciseCategory,
    /// Whether equipment is needed
    pub equipment_needed: bool,
}

impl NewExercise {
    /// Build a new exercise, applying entity-level normalization
    ///
    /// The name is trimmed and title-cased; the category is lowercased and
    /// checked against the fixed set. These checks run even when the request
    /// validator has already passed, so storage-layer writes that bypass
    /// request validation cannot corrupt the invariants.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a too-short name or unknown category
    pub fn new(name: &str, category: &str, equipment_needed: bool) -> AppResult<Self> {
        Ok(Self {
            name: normalize_name(name)?,
            category: ExerciseCategory::parse(category)?,
            equipment_needed,
        })
    }
}
