//! Label output shapes: grouped scores, indicator scores, and the
//! 8-character type code derived from them.

use serde::{Deserialize, Serialize};

use crate::types::{AnswerVector, Category, SubIndicator};

/// Summed score per category group, each bounded to [-6, 6].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub logic: i16,
    pub ethics: i16,
    pub aesthetics: i16,
    pub postmodern: i16,
}

impl CategoryScores {
    /// Compute all four group sums for a vector.
    pub fn from_vector(vector: &AnswerVector) -> Self {
        Self {
            logic: Category::Logic.score(vector),
            ethics: Category::Ethics.score(vector),
            aesthetics: Category::Aesthetics.score(vector),
            postmodern: Category::Postmodern.score(vector),
        }
    }

    /// Score for one category.
    #[inline]
    pub fn get(&self, category: Category) -> i16 {
        match category {
            Category::Logic => self.logic,
            Category::Ethics => self.ethics,
            Category::Aesthetics => self.aesthetics,
            Category::Postmodern => self.postmodern,
        }
    }
}

/// Standalone indicator values for questions 13-16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub q13: i16,
    pub q14: i16,
    pub q15: i16,
    pub q16: i16,
}

impl SubScores {
    /// Read the four indicator dimensions of a vector.
    pub fn from_vector(vector: &AnswerVector) -> Self {
        Self {
            q13: SubIndicator::Agnosticism.score(vector),
            q14: SubIndicator::Deontology.score(vector),
            q15: SubIndicator::Scientism.score(vector),
            q16: SubIndicator::Formalism.score(vector),
        }
    }

    /// Score for one indicator.
    #[inline]
    pub fn get(&self, indicator: SubIndicator) -> i16 {
        match indicator {
            SubIndicator::Agnosticism => self.q13,
            SubIndicator::Deontology => self.q14,
            SubIndicator::Scientism => self.q15,
            SubIndicator::Formalism => self.q16,
        }
    }
}

/// The deterministic 8-character classification of a vector.
///
/// `main_label` carries one letter per category group, `sub_label` one per
/// indicator, and `full_label` joins them as `MAIN-SUB`. The scores that
/// produced the letters ride along so callers can render both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeLabel {
    /// Four letters, one per category group, e.g. "NVOP".
    pub main_label: String,
    /// Four letters, one per sub-indicator, e.g. "ADSL".
    pub sub_label: String,
    /// `main_label` and `sub_label` joined with '-', e.g. "NVOP-ADSL".
    pub full_label: String,
    pub category_scores: CategoryScores,
    pub sub_scores: SubScores,
}
