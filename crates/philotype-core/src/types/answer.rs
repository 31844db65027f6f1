//! Answer vectors and stored answer records.
//!
//! An [`AnswerVector`] is the canonical form every other module consumes:
//! exactly 16 signed integers, each in [-2, 2], positionally mapped to
//! questions 1..16. Validation happens once, at construction; after that the
//! vector is immutable and every computation can rely on its bounds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::constants::{ANSWER_MAX, ANSWER_MIN, VECTOR_DIM};
use crate::error::{CoreError, CoreResult};

/// A validated 16-dimensional questionnaire answer vector.
///
/// Identity is positional: dimension index 0..15 maps to questions 1..16.
/// Construction rejects out-of-range values with a `ValidationError` and
/// wrong-length input with `DimensionMismatch`; nothing is ever clamped.
///
/// # Examples
///
/// ```
/// use philotype_core::types::AnswerVector;
///
/// let v = AnswerVector::new([1; 16]).unwrap();
/// assert_eq!(v[0], 1);
///
/// assert!(AnswerVector::new([3; 16]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i16>", into = "Vec<i16>")]
pub struct AnswerVector([i16; VECTOR_DIM]);

impl AnswerVector {
    /// Create a vector from exactly 16 values, validating each dimension.
    ///
    /// # Errors
    ///
    /// `ValidationError` naming the offending question if any value falls
    /// outside [-2, 2].
    pub fn new(values: [i16; VECTOR_DIM]) -> CoreResult<Self> {
        Self::validate(&values)?;
        Ok(Self(values))
    }

    /// Create a vector from a raw slice, validating length and range.
    ///
    /// This is the conversion point for raw answer and profile records
    /// coming out of storage.
    pub fn from_slice(values: &[i16]) -> CoreResult<Self> {
        let array: [i16; VECTOR_DIM] =
            values
                .try_into()
                .map_err(|_| CoreError::DimensionMismatch {
                    expected: VECTOR_DIM,
                    actual: values.len(),
                })?;
        Self::new(array)
    }

    fn validate(values: &[i16; VECTOR_DIM]) -> CoreResult<()> {
        for (i, &value) in values.iter().enumerate() {
            if !(ANSWER_MIN..=ANSWER_MAX).contains(&value) {
                return Err(CoreError::ValidationError {
                    field: format!("answer_{:02}", i + 1),
                    message: format!("value {} outside [{}, {}]", value, ANSWER_MIN, ANSWER_MAX),
                });
            }
        }
        Ok(())
    }

    /// Borrow the underlying fixed-size array.
    #[inline]
    pub fn as_array(&self) -> &[i16; VECTOR_DIM] {
        &self.0
    }

    /// Iterate over the 16 dimension values.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = i16> + '_ {
        self.0.iter().copied()
    }
}

impl std::ops::Index<usize> for AnswerVector {
    type Output = i16;

    #[inline]
    fn index(&self, index: usize) -> &i16 {
        &self.0[index]
    }
}

impl TryFrom<Vec<i16>> for AnswerVector {
    type Error = CoreError;

    fn try_from(values: Vec<i16>) -> CoreResult<Self> {
        Self::from_slice(&values)
    }
}

impl From<AnswerVector> for Vec<i16> {
    fn from(vector: AnswerVector) -> Self {
        vector.0.to_vec()
    }
}

/// A stored questionnaire submission.
///
/// `user_id` is `None` for anonymous submissions, which are still full
/// population members for statistics purposes. The vector is already
/// validated; records with malformed vectors cannot be constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub id: i64,
    pub user_id: Option<i64>,
    pub vector: AnswerVector,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AnswerRecord {
    /// Create a record stamped with the current time.
    pub fn new(id: i64, user_id: Option<i64>, vector: AnswerVector) -> Self {
        Self {
            id,
            user_id,
            vector,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// The canonical answer vector of this submission.
    #[inline]
    pub fn vector(&self) -> AnswerVector {
        self.vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_vector_accepted() {
        let v = AnswerVector::new([2, -2, 0, 1, -1, 2, 0, 0, 1, -2, 2, 0, 1, -1, 0, 2]).unwrap();
        assert_eq!(v[0], 2);
        assert_eq!(v[15], 2);
        println!("[PASS] In-range vector accepted");
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut values = [0i16; 16];
        values[4] = 3;
        let err = AnswerVector::new(values).unwrap_err();
        match err {
            CoreError::ValidationError { field, .. } => assert_eq!(field, "answer_05"),
            other => panic!("expected ValidationError, got {other:?}"),
        }
        println!("[PASS] Out-of-range value rejected with question name");
    }

    #[test]
    fn test_below_range_rejected() {
        let mut values = [0i16; 16];
        values[0] = -3;
        assert!(AnswerVector::new(values).is_err());
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = AnswerVector::from_slice(&[0; 15]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::DimensionMismatch {
                expected: 16,
                actual: 15
            }
        ));

        let err = AnswerVector::from_slice(&[0; 17]).unwrap_err();
        assert!(matches!(err, CoreError::DimensionMismatch { actual: 17, .. }));
        println!("[PASS] Wrong-length slices rejected");
    }

    #[test]
    fn test_boundary_values_accepted() {
        assert!(AnswerVector::new([-2; 16]).is_ok());
        assert!(AnswerVector::new([2; 16]).is_ok());
    }

    #[test]
    fn test_serde_rejects_invalid_json_vector() {
        // Length 16 but one value out of range: must fail at deserialization,
        // not slip through as an unvalidated vector.
        let json = "[0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,5]";
        let result: Result<AnswerVector, _> = serde_json::from_str(json);
        assert!(result.is_err());

        let json = "[0,0,0]";
        let result: Result<AnswerVector, _> = serde_json::from_str(json);
        assert!(result.is_err());
        println!("[PASS] Serde path goes through validation");
    }

    #[test]
    fn test_serde_round_trip() {
        let v = AnswerVector::new([1, -1, 2, 0, -2, 1, 0, 0, 2, -1, 1, 0, -2, 2, 0, 1]).unwrap();
        let json = serde_json::to_string(&v).unwrap();
        let back: AnswerVector = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }

    #[test]
    fn test_record_holds_vector() {
        let v = AnswerVector::new([0; 16]).unwrap();
        let record = AnswerRecord::new(1, Some(99), v);
        assert_eq!(record.vector(), v);
        assert_eq!(record.user_id, Some(99));
        assert!(record.updated_at.is_none());
    }

    #[test]
    fn test_anonymous_record() {
        let v = AnswerVector::new([0; 16]).unwrap();
        let record = AnswerRecord::new(2, None, v);
        assert!(record.user_id.is_none());
    }
}
