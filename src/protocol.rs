//! Public protocol structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{
    CareerPathCandidate, InterestResponse, PathKey, QuestionAttempt, Recommendation, RecommendationWarning,
};

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct AttemptsIn {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub attempts: Vec<QuestionAttempt>,
}

#[derive(Debug, Deserialize)]
pub struct AssessmentIn {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub responses: Vec<InterestResponse>,
}

#[derive(Serialize)]
pub struct RecordedOut {
    pub recorded: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateOut {
    pub path_key: PathKey,
    pub path_id: String,
    pub resolved: bool,
    pub score: f64,
    pub probability: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationOut {
    pub recommended_path_id: String,
    pub confidence: f64,
    pub probabilities: Vec<CandidateOut>,
    pub warnings: Vec<RecommendationWarning>,
    /// Whether the top path was stored as the user's career path.
    pub persisted: bool,
}

fn candidate_out(c: &CareerPathCandidate) -> CandidateOut {
    let (path_id, resolved) = match &c.path_id {
        Some(id) => (id.as_str().to_string(), id.is_resolved()),
        None => (c.path_key.as_str().to_string(), false),
    };
    CandidateOut { path_key: c.path_key, path_id, resolved, score: c.score, probability: c.probability }
}

/// Convert an internal `Recommendation` to the public DTO.
pub fn to_out(rec: &Recommendation, persisted: bool) -> RecommendationOut {
    RecommendationOut {
        recommended_path_id: rec.recommended_path_id.as_str().to_string(),
        confidence: rec.confidence,
        probabilities: rec.probabilities.iter().map(candidate_out).collect(),
        warnings: rec.warnings.clone(),
        persisted,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChosenPathOut {
    pub user_id: String,
    pub path_id: String,
    pub confidence: f64,
}

#[derive(Debug, Serialize)]
pub struct ErrorOut {
    pub code: &'static str,
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
