//! Storage collaborator contracts.
//!
//! The engine performs no I/O. A request-handling layer fetches snapshots
//! through these traits and hands them to the pure computation modules;
//! the engine never calls back into storage mid-computation.
//!
//! # Traits
//!
//! - [`AnswerStore`]: answer submissions by id/user plus the population snapshot
//! - [`ProfileStore`]: reference profiles plus the non-deleted snapshot

mod answer_store;
mod profile_store;

pub use answer_store::AnswerStore;
pub use profile_store::ProfileStore;
