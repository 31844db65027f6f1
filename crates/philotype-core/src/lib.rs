//! Philotype Core Library
//!
//! Similarity statistics and deterministic classification over
//! 16-dimensional questionnaire answer vectors.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`AnswerVector`, `ReferenceProfile`, `Category`, `TypeLabel`, …)
//! - Pure computation modules (`similarity`, `stats`, `classify`)
//! - Storage collaborator traits (`AnswerStore`, `ProfileStore`) and test stubs
//! - Error types and result aliases
//! - Configuration structures
//!
//! All engine operations are synchronous, side-effect-free functions over
//! caller-supplied immutable snapshots. Population and profile retrieval is
//! the storage collaborator's job and happens before the engine is invoked;
//! concurrent requests need no coordination because nothing here is mutated.
//!
//! # Example
//!
//! ```
//! use philotype_core::classify::classify;
//! use philotype_core::types::AnswerVector;
//!
//! let vector = AnswerVector::new([0; 16]).unwrap();
//! let label = classify(&vector);
//! assert_eq!(label.full_label, "NVOP-ADSL");
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod similarity;
pub mod stats;
pub mod stubs;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use types::{AnswerRecord, AnswerVector, Category, ReferenceProfile, SubIndicator, TypeLabel};
