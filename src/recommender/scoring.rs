//! Weighted path scoring and softmax normalization.
//!
//! All constants here are fixed tuning values; every ranking depends on them.

use tracing::debug;

use crate::domain::{CareerPathCandidate, Category, PathKey};
use crate::recommender::interest::Affinities;
use crate::recommender::performance::CategoryPerformance;

/// Per-path weights over categories, indexed by `Category::index()`.
/// Order: frontend, backend, data, cloud, mobile, security.
pub const PATH_WEIGHTS: [(PathKey, [f64; 6]); 5] = [
  (PathKey::Fullstack, [0.40, 0.40, 0.10, 0.05, 0.05, 0.00]),
  (PathKey::Datascience, [0.05, 0.15, 0.70, 0.05, 0.00, 0.05]),
  (PathKey::Cloud, [0.05, 0.25, 0.10, 0.55, 0.00, 0.05]),
  (PathKey::Mobile, [0.30, 0.15, 0.05, 0.05, 0.45, 0.00]),
  (PathKey::Security, [0.05, 0.20, 0.10, 0.10, 0.00, 0.55]),
];

pub const PERFORMANCE_SCALE: f64 = 100.0;
pub const INTEREST_SCALE: f64 = 10.0;
pub const INTEREST_CAP: f64 = 100.0;
pub const PERFORMANCE_BLEND: f64 = 0.6;
pub const INTEREST_BLEND: f64 = 0.4;
pub const SOFTMAX_TEMPERATURE: f64 = 10.0;

pub fn weights_for(key: PathKey) -> &'static [f64; 6] {
  // PATH_WEIGHTS lists every key, in PathKey::ALL order.
  &PATH_WEIGHTS[key as usize].1
}

/// Combined pre-softmax score for a single path.
pub fn path_score(key: PathKey, performance: &CategoryPerformance, affinities: &Affinities) -> f64 {
  let weights = weights_for(key);
  let mut performance_score = 0.0;
  let mut interest_score = 0.0;

  for category in Category::ALL {
    let weight = weights[category.index()];
    if weight != 0.0 {
      if let Some(accuracy) = performance.accuracy(category) {
        performance_score += accuracy * weight;
      }
    }
    interest_score += affinities.get(category) * weight;
  }

  let normalized_performance = performance_score * PERFORMANCE_SCALE;
  let normalized_interest = (interest_score * INTEREST_SCALE).min(INTEREST_CAP);
  normalized_performance * PERFORMANCE_BLEND + normalized_interest * INTEREST_BLEND
}

/// `exp(s_i / T) / Σ exp(s_j / T)` over the given scores.
pub fn softmax(scores: &[f64]) -> Vec<f64> {
  let exps: Vec<f64> = scores.iter().map(|s| (s / SOFTMAX_TEMPERATURE).exp()).collect();
  let sum: f64 = exps.iter().sum();
  exps.into_iter().map(|e| e / sum).collect()
}

/// Score all five paths and return them sorted by probability, highest first.
/// Equal probabilities keep `PathKey::ALL` order.
pub fn score_paths(performance: &CategoryPerformance, affinities: &Affinities) -> Vec<CareerPathCandidate> {
  let scores: Vec<f64> = PathKey::ALL
    .iter()
    .map(|key| path_score(*key, performance, affinities))
    .collect();
  let probabilities = softmax(&scores);

  let mut candidates: Vec<CareerPathCandidate> = PathKey::ALL
    .iter()
    .zip(scores.iter().zip(probabilities))
    .map(|(key, (score, probability))| {
      debug!(target: "recommender", path = %key, score, probability, "Scored career path");
      CareerPathCandidate { path_key: *key, path_id: None, score: *score, probability }
    })
    .collect();

  candidates.sort_by(|a, b| b.probability.total_cmp(&a.probability));
  candidates
}
