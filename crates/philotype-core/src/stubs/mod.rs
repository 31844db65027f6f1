//! Stub implementations for development and testing.
//!
//! In-memory stores with O(n) scans and no persistence; data is lost on
//! drop. They exist so engine and trait tests don't need a real storage
//! backend, and are gated out of production builds: exports are only
//! available in test code or behind the `test-utils` feature.
//!
//! ```ignore
//! // In Cargo.toml for downstream test crates:
//! // [dev-dependencies]
//! // philotype-core = { workspace = true, features = ["test-utils"] }
//!
//! use philotype_core::stubs::{InMemoryAnswerStore, InMemoryProfileStore};
//! ```

#[cfg(any(test, feature = "test-utils"))]
mod store_stub;

#[cfg(any(test, feature = "test-utils"))]
pub use store_stub::{InMemoryAnswerStore, InMemoryProfileStore};
