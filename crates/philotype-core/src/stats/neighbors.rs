//! Radius-based neighbor counting over a population snapshot.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{CoreError, CoreResult};
use crate::similarity::euclidean_distance;
use crate::types::{AnswerRecord, AnswerVector};

/// One `(radius, count)` entry of a neighbor distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeighborBucket {
    pub radius: f64,
    pub count: usize,
}

/// Count population members within `radius` of `target`, inclusive.
///
/// The raw inclusive count is decremented by exactly one whenever it is
/// positive. This assumes the target's own submission is part of the
/// population snapshot and discounts that one occurrence; it is not an
/// equality check, so when the target is absent from the population the
/// returned count is lower by one than the true neighbor count. The
/// decrement never takes the result below zero.
///
/// An empty population yields 0, never an error.
///
/// # Errors
///
/// `ValidationError` if `radius` is negative or not finite.
#[instrument(skip(target, population), fields(population_size = population.len()))]
pub fn count_neighbors(
    target: &AnswerVector,
    population: &[AnswerRecord],
    radius: f64,
) -> CoreResult<usize> {
    validate_radius(radius)?;

    let mut count = population
        .iter()
        .filter(|record| euclidean_distance(target, &record.vector) <= radius)
        .count();

    // Discount the target's own occurrence.
    if count > 0 {
        count -= 1;
    }

    debug!(radius, count, "neighbor count");
    Ok(count)
}

/// Compute one neighbor count per radius, in the supplied order.
///
/// Each radius is computed independently via [`count_neighbors`], so the
/// self-exclusion rule applies per entry. Callers typically pass
/// [`crate::config::constants::DEFAULT_RADII`].
pub fn neighbor_distribution(
    target: &AnswerVector,
    population: &[AnswerRecord],
    radii: &[f64],
) -> CoreResult<Vec<NeighborBucket>> {
    radii
        .iter()
        .map(|&radius| {
            Ok(NeighborBucket {
                radius,
                count: count_neighbors(target, population, radius)?,
            })
        })
        .collect()
}

fn validate_radius(radius: f64) -> CoreResult<()> {
    if !(radius >= 0.0) || !radius.is_finite() {
        return Err(CoreError::ValidationError {
            field: "radius".to_string(),
            message: format!("radius must be a non-negative finite number, got {}", radius),
        });
    }
    Ok(())
}
