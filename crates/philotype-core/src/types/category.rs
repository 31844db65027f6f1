//! Category groups and sub-indicators over the 16 answer dimensions.
//!
//! The first twelve dimensions form four fixed, non-overlapping triplets
//! whose sums drive the main label; the last four dimensions stand alone
//! and drive the sub label. Both use the same sign rule: a score of zero or
//! above selects the first letter of the pair, below zero the second.

use serde::{Deserialize, Serialize};

use crate::types::AnswerVector;

/// One of the four fixed question-triplet groups.
///
/// Each group's score is the sum of its three dimensions, so it is always
/// in [-6, 6].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Questions 1-3: narrative versus structural orientation.
    Logic,
    /// Questions 4-6: virtue versus act orientation.
    Ethics,
    /// Questions 7-9: ontological versus epistemological orientation.
    Aesthetics,
    /// Questions 10-12: postmodern versus modern orientation.
    Postmodern,
}

impl Category {
    /// All categories in label order.
    #[inline]
    pub fn all() -> [Category; 4] {
        [Self::Logic, Self::Ethics, Self::Aesthetics, Self::Postmodern]
    }

    /// The three vector dimensions summed into this category's score.
    #[inline]
    pub fn dimensions(&self) -> [usize; 3] {
        match self {
            Self::Logic => [0, 1, 2],
            Self::Ethics => [3, 4, 5],
            Self::Aesthetics => [6, 7, 8],
            Self::Postmodern => [9, 10, 11],
        }
    }

    /// Sum of this category's dimensions for the given vector.
    ///
    /// Bounded to [-6, 6] by the per-dimension domain.
    pub fn score(&self, vector: &AnswerVector) -> i16 {
        self.dimensions().iter().map(|&i| vector[i]).sum()
    }

    /// Letter emitted when the score is zero or above.
    #[inline]
    pub fn positive_letter(&self) -> char {
        match self {
            Self::Logic => 'N',      // Narrative
            Self::Ethics => 'V',     // Virtue
            Self::Aesthetics => 'O', // Ontology
            Self::Postmodern => 'P', // Postmodern
        }
    }

    /// Letter emitted when the score is below zero.
    #[inline]
    pub fn negative_letter(&self) -> char {
        match self {
            Self::Logic => 'S',      // Structure
            Self::Ethics => 'A',     // Act
            Self::Aesthetics => 'E', // Epistemology
            Self::Postmodern => 'M', // Modern
        }
    }

    /// Resolve a score to its letter. The zero boundary always resolves to
    /// the positive letter; this is a fixed, non-configurable policy.
    #[inline]
    pub fn letter_for(&self, score: i16) -> char {
        if score >= 0 {
            self.positive_letter()
        } else {
            self.negative_letter()
        }
    }

    /// Human-readable name of this category.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Logic => "logic",
            Self::Ethics => "ethics",
            Self::Aesthetics => "aesthetics",
            Self::Postmodern => "postmodern",
        }
    }
}

/// One of the four standalone indicator dimensions (questions 13-16).
///
/// Unlike [`Category`], these are not summed: each dimension's own value is
/// its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubIndicator {
    /// Question 13: agnostic versus knowable.
    Agnosticism,
    /// Question 14: deontological versus consequentialist.
    Deontology,
    /// Question 15: scientific versus humanistic.
    Scientism,
    /// Question 16: analytic-logical versus phenomenological.
    Formalism,
}

impl SubIndicator {
    /// All sub-indicators in label order (questions 13, 14, 15, 16).
    #[inline]
    pub fn all() -> [SubIndicator; 4] {
        [
            Self::Agnosticism,
            Self::Deontology,
            Self::Scientism,
            Self::Formalism,
        ]
    }

    /// The question number this indicator reads (13..16).
    #[inline]
    pub fn question(&self) -> u8 {
        match self {
            Self::Agnosticism => 13,
            Self::Deontology => 14,
            Self::Scientism => 15,
            Self::Formalism => 16,
        }
    }

    /// The vector dimension this indicator reads (12..15).
    #[inline]
    pub fn dimension(&self) -> usize {
        usize::from(self.question()) - 1
    }

    /// This indicator's value for the given vector.
    #[inline]
    pub fn score(&self, vector: &AnswerVector) -> i16 {
        vector[self.dimension()]
    }

    /// Letter emitted when the score is zero or above.
    #[inline]
    pub fn positive_letter(&self) -> char {
        match self {
            Self::Agnosticism => 'A', // Agnostic
            Self::Deontology => 'D',  // Deontology
            Self::Scientism => 'S',   // Scientific
            Self::Formalism => 'L',   // Logic
        }
    }

    /// Letter emitted when the score is below zero.
    #[inline]
    pub fn negative_letter(&self) -> char {
        match self {
            Self::Agnosticism => 'K', // Knowable
            Self::Deontology => 'C',  // Consequentialism
            Self::Scientism => 'H',   // Humanistic
            Self::Formalism => 'P',   // Phenomenology
        }
    }

    /// Resolve a score to its letter, zero resolving to the positive letter.
    #[inline]
    pub fn letter_for(&self, score: i16) -> char {
        if score >= 0 {
            self.positive_letter()
        } else {
            self.negative_letter()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_dimensions_partition_first_twelve() {
        let mut seen = [false; 12];
        for category in Category::all() {
            for dim in category.dimensions() {
                assert!(dim < 12, "category dimension out of range: {dim}");
                assert!(!seen[dim], "dimension {dim} claimed twice");
                seen[dim] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
        println!("[PASS] Category triplets partition dimensions 0..12");
    }

    #[test]
    fn test_sub_indicator_dimensions_cover_last_four() {
        let dims: Vec<usize> = SubIndicator::all().iter().map(|s| s.dimension()).collect();
        assert_eq!(dims, vec![12, 13, 14, 15]);
    }

    #[test]
    fn test_category_score_bounds() {
        let max = AnswerVector::new([2; 16]).unwrap();
        let min = AnswerVector::new([-2; 16]).unwrap();
        for category in Category::all() {
            assert_eq!(category.score(&max), 6);
            assert_eq!(category.score(&min), -6);
        }
        println!("[PASS] Category scores bounded to [-6, 6]");
    }

    #[test]
    fn test_zero_resolves_to_positive_letter() {
        assert_eq!(Category::Logic.letter_for(0), 'N');
        assert_eq!(Category::Ethics.letter_for(0), 'V');
        assert_eq!(Category::Aesthetics.letter_for(0), 'O');
        assert_eq!(Category::Postmodern.letter_for(0), 'P');
        assert_eq!(SubIndicator::Agnosticism.letter_for(0), 'A');
        assert_eq!(SubIndicator::Deontology.letter_for(0), 'D');
        assert_eq!(SubIndicator::Scientism.letter_for(0), 'S');
        assert_eq!(SubIndicator::Formalism.letter_for(0), 'L');
        println!("[PASS] Zero boundary resolves to first letter of every pair");
    }

    #[test]
    fn test_negative_letters() {
        assert_eq!(Category::Logic.letter_for(-1), 'S');
        assert_eq!(Category::Ethics.letter_for(-6), 'A');
        assert_eq!(Category::Aesthetics.letter_for(-2), 'E');
        assert_eq!(Category::Postmodern.letter_for(-3), 'M');
        assert_eq!(SubIndicator::Agnosticism.letter_for(-1), 'K');
        assert_eq!(SubIndicator::Deontology.letter_for(-2), 'C');
        assert_eq!(SubIndicator::Scientism.letter_for(-1), 'H');
        assert_eq!(SubIndicator::Formalism.letter_for(-2), 'P');
    }

    #[test]
    fn test_sub_indicator_reads_own_dimension() {
        let mut values = [0i16; 16];
        values[12] = 2;
        values[13] = -2;
        values[14] = 1;
        values[15] = -1;
        let v = AnswerVector::new(values).unwrap();
        assert_eq!(SubIndicator::Agnosticism.score(&v), 2);
        assert_eq!(SubIndicator::Deontology.score(&v), -2);
        assert_eq!(SubIndicator::Scientism.score(&v), 1);
        assert_eq!(SubIndicator::Formalism.score(&v), -1);
    }
}
