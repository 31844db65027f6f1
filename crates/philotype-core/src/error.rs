//! Error types for philotype-core.
//!
//! This module defines the central error type [`CoreError`] used throughout
//! the philotype-core crate, along with the [`CoreResult<T>`] type alias.
//!
//! # Examples
//!
//! ```rust
//! use philotype_core::CoreError;
//!
//! fn lookup_answer(id: i64) -> Result<(), CoreError> {
//!     Err(CoreError::AnswerNotFound { id })
//! }
//!
//! let result = lookup_answer(42);
//! assert!(result.is_err());
//! ```

use thiserror::Error;

/// Top-level error type for philotype-core operations.
///
/// Provides structured error variants for all failure modes in the core
/// library. Malformed numeric input is always caught by vector validation
/// before it can reach distance, histogram, or label logic, so the
/// computation modules themselves never panic on caller data.
///
/// # Examples
///
/// ```rust
/// use philotype_core::CoreError;
///
/// let error = CoreError::DimensionMismatch {
///     expected: 16,
///     actual: 12,
/// };
///
/// match &error {
///     CoreError::DimensionMismatch { expected, actual } => {
///         assert_eq!(*expected, 16);
///         assert_eq!(*actual, 12);
///     }
///     _ => panic!("unexpected variant"),
/// }
///
/// assert!(error.to_string().contains("16"));
/// ```
#[derive(Debug, Error)]
pub enum CoreError {
    /// A requested answer record was not found in storage.
    ///
    /// # When This Occurs
    ///
    /// - Looking up an answer by id that does not exist
    /// - Requesting the latest answer of a user who has not answered yet
    #[error("Answer not found: {id}")]
    AnswerNotFound {
        /// The id of the answer that was not found
        id: i64,
    },

    /// A requested reference profile was not found in storage.
    ///
    /// # When This Occurs
    ///
    /// - Looking up a profile by id that does not exist
    /// - Referencing a soft-deleted profile
    #[error("Reference profile not found: {id}")]
    ProfileNotFound {
        /// The id of the profile that was not found
        id: i64,
    },

    /// Answer vector length does not match the expected dimension.
    ///
    /// `Constraint: values.len() == 16`
    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected vector dimension (always 16)
        expected: usize,
        /// Actual number of values provided
        actual: usize,
    },

    /// A field value failed validation constraints.
    ///
    /// # When This Occurs
    ///
    /// - An answer dimension outside the [-2, 2] domain
    /// - A negative or non-finite search radius
    ///
    /// Out-of-range values are rejected, never silently clamped.
    #[error("Validation error: {field} - {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// An error occurred inside the storage collaborator.
    ///
    /// The engine performs no I/O itself; collaborator failures are
    /// propagated unchanged through this variant, never retried here.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
