//! Career path recommender.
//!
//! Pipeline, in order:
//!   1. aggregate quiz accuracy per category (`performance`)
//!   2. derive interest affinities from the questionnaire (`interest`)
//!   3. score the five fixed paths and softmax them (`scoring`)
//!   4. resolve path keys to catalog ids (`resolution`)
//!   5. assemble the ranked result with a 0-100 confidence
//!
//! Everything after the storage reads is pure and deterministic.

pub mod interest;
pub mod performance;
pub mod resolution;
pub mod scoring;

use tracing::{info, instrument, warn};

use crate::domain::{
  CareerPathCandidate, CareerPathEntry, InterestResponse, PathId, QuestionAttempt, Recommendation,
  RecommendationWarning,
};
use crate::error::{RecommendError, Result};
use crate::store::CareerStore;

use interest::Affinities;
use performance::CategoryPerformance;
pub use resolution::{PathResolution, ResolvedPaths};

/// Gate on both inputs, then score and rank. Candidates come back without ids.
pub fn rank_paths(attempts: &[QuestionAttempt], responses: &[InterestResponse]) -> Result<Vec<CareerPathCandidate>> {
  if attempts.is_empty() {
    return Err(RecommendError::NoQuizData);
  }
  if responses.is_empty() {
    return Err(RecommendError::AssessmentIncomplete);
  }
  let performance = CategoryPerformance::aggregate(attempts);
  let affinities = Affinities::derive(responses);
  Ok(scoring::score_paths(&performance, &affinities))
}

/// Attach resolved ids to ranked candidates and derive the headline fields.
pub fn assemble(mut ranked: Vec<CareerPathCandidate>, resolved: &ResolvedPaths) -> Recommendation {
  let mut warnings = Vec::new();
  for candidate in ranked.iter_mut() {
    let id = resolved.get(candidate.path_key);
    if !id.is_resolved() {
      warn!(target: "recommender", path = %candidate.path_key, "Career path key did not resolve to a catalog id");
      warnings.push(RecommendationWarning::UnresolvedPath { path_key: candidate.path_key });
    }
    candidate.path_id = Some(id);
  }

  let (recommended_path_id, confidence) = match ranked.first() {
    Some(top) => (
      top.path_id.clone().unwrap_or_else(|| PathId::Unresolved(top.path_key.to_string())),
      top.probability * 100.0,
    ),
    // rank_paths always yields all five paths
    None => (PathId::Unresolved(String::new()), 0.0),
  };

  Recommendation { recommended_path_id, probabilities: ranked, confidence, warnings }
}

/// Full pipeline over already-fetched inputs.
pub fn recommend_from(
  attempts: &[QuestionAttempt],
  responses: &[InterestResponse],
  catalog: &[CareerPathEntry],
  mode: PathResolution,
) -> Result<Recommendation> {
  let ranked = rank_paths(attempts, responses)?;
  let resolved = ResolvedPaths::resolve(catalog, mode);
  Ok(assemble(ranked, &resolved))
}

/// Recommender bound to a storage collaborator.
#[derive(Clone)]
pub struct CareerRecommender<S> {
  store: S,
  mode: PathResolution,
}

impl<S: CareerStore> CareerRecommender<S> {
  pub fn new(store: S, mode: PathResolution) -> Self {
    Self { store, mode }
  }

  pub fn mode(&self) -> PathResolution {
    self.mode
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  /// Fetch the user's history and questionnaire, rank the paths, then resolve ids.
  #[instrument(level = "info", skip(self), fields(%user_id, mode = ?self.mode))]
  pub async fn recommend(&self, user_id: &str) -> Result<Recommendation> {
    let (attempts, responses) = tokio::try_join!(
      self.store.fetch_question_attempts(user_id),
      self.store.fetch_interest_responses(user_id),
    )?;

    let ranked = rank_paths(&attempts, &responses)?;
    let catalog = self.store.fetch_career_path_catalog().await?;
    let resolved = ResolvedPaths::resolve(&catalog, self.mode);
    let recommendation = assemble(ranked, &resolved);

    info!(
      target: "recommender",
      %user_id,
      attempts = attempts.len(),
      responses = responses.len(),
      recommended = %recommendation.recommended_path_id.as_str(),
      confidence = %format!("{:.1}", recommendation.confidence),
      unresolved = recommendation.warnings.len(),
      "Career recommendation computed"
    );
    Ok(recommendation)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::PathKey;

  fn attempts(n_ok: usize, n_bad: usize, category: &str) -> Vec<QuestionAttempt> {
    let mut rows = vec![QuestionAttempt::new(Some(category), true); n_ok];
    rows.extend(vec![QuestionAttempt::new(Some(category), false); n_bad]);
    rows
  }

  #[test]
  fn empty_attempts_fail_before_checking_responses() {
    assert_eq!(rank_paths(&[], &[]), Err(RecommendError::NoQuizData));
    let rows = attempts(1, 0, "data");
    assert_eq!(rank_paths(&rows, &[]), Err(RecommendError::AssessmentIncomplete));
  }

  #[test]
  fn unresolved_keys_become_warnings_and_literal_ids() {
    let rows = attempts(8, 2, "frontend");
    let responses = vec![InterestResponse::new(2, "Frontend")];
    let rec = recommend_from(&rows, &responses, &[], PathResolution::NameSubstring).unwrap();

    assert_eq!(rec.recommended_path_id, PathId::Unresolved("fullstack".into()));
    assert_eq!(rec.warnings.len(), 5);
    assert!(rec.warnings.contains(&RecommendationWarning::UnresolvedPath { path_key: PathKey::Fullstack }));
    assert!(rec.probabilities.iter().all(|c| c.path_id.is_some()));
  }

  #[test]
  fn confidence_is_top_probability_as_percentage() {
    let rows = attempts(3, 1, "security");
    let responses = vec![InterestResponse::new(4, "application security")];
    let rec = recommend_from(&rows, &responses, &[], PathResolution::Slug).unwrap();
    let top = rec.top().unwrap();
    assert_eq!(top.path_key, PathKey::Security);
    assert!((rec.confidence - top.probability * 100.0).abs() < 1e-12);
  }
}
