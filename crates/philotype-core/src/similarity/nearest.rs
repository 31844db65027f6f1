//! Nearest reference profile search.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::similarity::euclidean_distance;
use crate::types::{AnswerVector, ReferenceProfile};

/// A winning profile together with its distance to the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestProfile {
    pub profile: ReferenceProfile,
    pub distance: f64,
}

/// Find the profile with strictly minimal distance to `target`.
///
/// The scan is a linear fold over `profiles` in the supplied order, and a
/// candidate replaces the current best only on a strictly smaller distance.
/// On exact ties the earlier profile therefore wins; callers must supply a
/// stable, deterministic order (ascending id, which is what
/// [`crate::traits::ProfileStore::all_profiles`] guarantees) for
/// reproducible results. A parallel caller splitting the list must resolve
/// cross-chunk ties by profile id, not by completion order.
///
/// An empty list yields `None`, never an error.
pub fn find_nearest(
    target: &AnswerVector,
    profiles: &[ReferenceProfile],
) -> Option<NearestProfile> {
    let nearest = profiles.iter().fold(
        None::<(&ReferenceProfile, f64)>,
        |best, candidate| {
            let distance = euclidean_distance(target, &candidate.vector);
            match best {
                Some((_, best_distance)) if distance >= best_distance => best,
                _ => Some((candidate, distance)),
            }
        },
    );

    nearest.map(|(profile, distance)| {
        debug!(
            profile_id = profile.id,
            profile_name = %profile.name,
            distance,
            "nearest profile selected"
        );
        NearestProfile {
            profile: profile.clone(),
            distance,
        }
    })
}
