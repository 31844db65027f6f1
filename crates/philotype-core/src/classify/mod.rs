//! Sign-pattern classification of answer vectors into 8-character type
//! codes.
//!
//! Classification is a pure function of the vector: four category-group
//! letters, a hyphen, four sub-indicator letters. There is no configuration
//! and no state, so there is nothing to instantiate.

mod label;

pub use label::classify;
