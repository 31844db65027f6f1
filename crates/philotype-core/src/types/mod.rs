//! Core domain types for the philotype engine.

mod answer;
mod category;
mod label;
mod profile;

pub use answer::{AnswerRecord, AnswerVector};
pub use category::{Category, SubIndicator};
pub use label::{CategoryScores, SubScores, TypeLabel};
pub use profile::ReferenceProfile;
