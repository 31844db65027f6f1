//! Dense per-category score histograms over a population.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::constants::{CATEGORY_SCORE_MIN, SCORE_BUCKETS};
use crate::types::{AnswerRecord, Category, CategoryScores};

/// One `(score, count)` entry of a category histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBucket {
    pub score: i16,
    pub count: usize,
}

/// The four dense category histograms of a population.
///
/// Each table holds exactly 13 buckets, one per integer score in [-6, 6],
/// ascending, with zero-count buckets included. For every table the bucket
/// counts sum to the population size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDistributions {
    pub logic: Vec<ScoreBucket>,
    pub ethics: Vec<ScoreBucket>,
    pub aesthetics: Vec<ScoreBucket>,
    pub postmodern: Vec<ScoreBucket>,
}

impl CategoryDistributions {
    /// Table for one category.
    #[inline]
    pub fn get(&self, category: Category) -> &[ScoreBucket] {
        match category {
            Category::Logic => &self.logic,
            Category::Ethics => &self.ethics,
            Category::Aesthetics => &self.aesthetics,
            Category::Postmodern => &self.postmodern,
        }
    }
}

/// Build all four category score distributions for a population.
///
/// The score domain is small and dense, so each table is accumulated in a
/// fixed-size array indexed by `score + 6` rather than a map; the "always
/// 13 buckets" shape needs no post-processing. An empty population yields
/// four all-zero tables.
#[instrument(skip(population), fields(population_size = population.len()))]
pub fn category_distributions(population: &[AnswerRecord]) -> CategoryDistributions {
    let mut counts = [[0usize; SCORE_BUCKETS]; 4];

    for record in population {
        let scores = CategoryScores::from_vector(&record.vector);
        for (slot, category) in Category::all().iter().enumerate() {
            counts[slot][bucket_index(scores.get(*category))] += 1;
        }
    }

    debug!("category distributions built");
    CategoryDistributions {
        logic: build_table(&counts[0]),
        ethics: build_table(&counts[1]),
        aesthetics: build_table(&counts[2]),
        postmodern: build_table(&counts[3]),
    }
}

/// Array slot for a category score. Scores are bounded to [-6, 6] by the
/// validated answer domain, so this cannot go out of range.
#[inline]
fn bucket_index(score: i16) -> usize {
    (score - CATEGORY_SCORE_MIN) as usize
}

fn build_table(counts: &[usize; SCORE_BUCKETS]) -> Vec<ScoreBucket> {
    counts
        .iter()
        .enumerate()
        .map(|(slot, &count)| ScoreBucket {
            score: slot as i16 + CATEGORY_SCORE_MIN,
            count,
        })
        .collect()
}
