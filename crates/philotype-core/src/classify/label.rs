//! Type label derivation.

use tracing::debug;

use crate::types::{AnswerVector, Category, CategoryScores, SubIndicator, SubScores, TypeLabel};

/// Derive the deterministic `MAIN-SUB` type label for a vector.
///
/// The main code takes one letter per category group in group order
/// (Logic, Ethics, Aesthetics, Postmodern); the sub code one letter per
/// indicator in question order (13..16). Every pair resolves a score of
/// zero or above to its first letter. Calling this twice on the same
/// vector always yields the same label.
///
/// # Examples
///
/// ```
/// use philotype_core::classify::classify;
/// use philotype_core::types::AnswerVector;
///
/// let v = AnswerVector::new([0; 16]).unwrap();
/// assert_eq!(classify(&v).full_label, "NVOP-ADSL");
/// ```
pub fn classify(vector: &AnswerVector) -> TypeLabel {
    let category_scores = CategoryScores::from_vector(vector);
    let sub_scores = SubScores::from_vector(vector);

    let main_label: String = Category::all()
        .iter()
        .map(|category| category.letter_for(category_scores.get(*category)))
        .collect();

    let sub_label: String = SubIndicator::all()
        .iter()
        .map(|indicator| indicator.letter_for(sub_scores.get(*indicator)))
        .collect();

    let full_label = format!("{}-{}", main_label, sub_label);
    debug!(%full_label, "vector classified");

    TypeLabel {
        main_label,
        sub_label,
        full_label,
        category_scores,
        sub_scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(values: [i16; 16]) -> AnswerVector {
        AnswerVector::new(values).unwrap()
    }

    #[test]
    fn test_all_zero_vector_takes_positive_branch_everywhere() {
        let label = classify(&vector([0; 16]));
        assert_eq!(label.main_label, "NVOP");
        assert_eq!(label.sub_label, "ADSL");
        assert_eq!(label.full_label, "NVOP-ADSL");
        println!("[PASS] All-zero vector maps to NVOP-ADSL");
    }

    #[test]
    fn test_all_negative_vector_takes_negative_branch_everywhere() {
        let label = classify(&vector([-2; 16]));
        assert_eq!(label.main_label, "SAEM");
        assert_eq!(label.sub_label, "KCHP");
        assert_eq!(label.full_label, "SAEM-KCHP");
    }

    #[test]
    fn test_worked_mixed_example() {
        // Logic = 6, Ethics = -6, Aesthetics = 6, Postmodern = -6,
        // Q13 = 2, Q14 = -2, Q15 = 2, Q16 = -2.
        let label = classify(&vector([
            2, 2, 2, -2, -2, -2, 2, 2, 2, -2, -2, -2, 2, -2, 2, -2,
        ]));
        assert_eq!(label.main_label, "NAOM");
        assert_eq!(label.sub_label, "ACSP");
        assert_eq!(label.full_label, "NAOM-ACSP");
        assert_eq!(label.category_scores.logic, 6);
        assert_eq!(label.category_scores.ethics, -6);
        assert_eq!(label.sub_scores.q14, -2);
        println!("[PASS] Worked example yields NAOM-ACSP");
    }

    #[test]
    fn test_classification_is_deterministic() {
        let v = vector([1, -1, 0, 2, -2, 1, 0, 1, -1, 2, 0, -2, 1, 0, -1, 2]);
        let first = classify(&v);
        let second = classify(&v);
        assert_eq!(first, second);
        println!("[PASS] Same vector, same label");
    }

    #[test]
    fn test_group_sum_crosses_zero_boundary() {
        // Logic sums to exactly 0 from mixed answers: must read as >= 0.
        let label = classify(&vector([2, -1, -1, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]));
        assert_eq!(&label.main_label[0..1], "N");
        assert_eq!(&label.main_label[1..2], "A");

        // One answer lower and the same group reads as < 0.
        let label = classify(&vector([2, -2, -1, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]));
        assert_eq!(&label.main_label[0..1], "S");
        println!("[PASS] Zero boundary behavior on group sums");
    }

    #[test]
    fn test_scores_ride_along_with_label() {
        let v = vector([1, 1, 1, -1, -1, -1, 0, 0, 0, 1, 0, 0, 2, 2, -2, -2]);
        let label = classify(&v);
        assert_eq!(label.category_scores.logic, 3);
        assert_eq!(label.category_scores.ethics, -3);
        assert_eq!(label.category_scores.aesthetics, 0);
        assert_eq!(label.category_scores.postmodern, 1);
        assert_eq!(label.sub_scores.q13, 2);
        assert_eq!(label.sub_scores.q16, -2);
        assert_eq!(label.full_label, "NAOP-ADHP");
    }
}
