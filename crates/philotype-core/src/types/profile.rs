//! Reference profiles: named answer vectors users are compared against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::AnswerVector;

/// A named reference viewpoint with its own answer vector.
///
/// The integer `id` is stable and doubles as the deterministic secondary
/// key for nearest-profile tie-breaking: stores hand profiles to the engine
/// in ascending-id order, so "first in list wins" is reproducible.
///
/// Soft-deleted profiles (`deleted == true`) are filtered out by the
/// storage collaborator before vectors reach the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceProfile {
    pub id: i64,
    pub name: String,
    pub era: String,
    pub description: String,
    pub vector: AnswerVector,
    #[serde(default)]
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ReferenceProfile {
    /// Create a live profile stamped with the current time.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        era: impl Into<String>,
        description: impl Into<String>,
        vector: AnswerVector,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            era: era.into(),
            description: description.into(),
            vector,
            deleted: false,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// The profile's answer vector.
    #[inline]
    pub fn vector(&self) -> AnswerVector {
        self.vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_is_live() {
        let vector = AnswerVector::new([1; 16]).unwrap();
        let profile = ReferenceProfile::new(3, "Heraclitus", "Ancient", "Flux", vector);
        assert!(!profile.deleted);
        assert_eq!(profile.name, "Heraclitus");
        assert_eq!(profile.vector(), vector);
    }

    #[test]
    fn test_serde_defaults_deleted_to_false() {
        let vector = AnswerVector::new([0; 16]).unwrap();
        let profile = ReferenceProfile::new(1, "Kant", "Modern", "Critique", vector);
        let mut value = serde_json::to_value(&profile).unwrap();
        value.as_object_mut().unwrap().remove("deleted");
        let back: ReferenceProfile = serde_json::from_value(value).unwrap();
        assert!(!back.deleted);
        println!("[PASS] Missing deleted flag deserializes as live");
    }
}
