//! Domain models: category tags, career path keys, recorded quiz/questionnaire
//! rows, the catalog entry shape, and the scored recommendation result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six tags used to classify quiz questions and path weight vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
  Frontend,
  Backend,
  Data,
  Cloud,
  Mobile,
  Security,
}

impl Category {
  pub const ALL: [Category; 6] = [
    Category::Frontend,
    Category::Backend,
    Category::Data,
    Category::Cloud,
    Category::Mobile,
    Category::Security,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Frontend => "frontend",
      Category::Backend => "backend",
      Category::Data => "data",
      Category::Cloud => "cloud",
      Category::Mobile => "mobile",
      Category::Security => "security",
    }
  }

  /// Exact tag lookup. Unknown tags yield `None` and are skipped by aggregation.
  pub fn from_tag(tag: &str) -> Option<Self> {
    Category::ALL.into_iter().find(|c| c.as_str() == tag)
  }

  /// Dense index into per-category arrays.
  pub fn index(&self) -> usize {
    *self as usize
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Internal key for one of the five fixed career paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKey {
  Fullstack,
  Datascience,
  Cloud,
  Mobile,
  Security,
}

impl PathKey {
  /// Scoring order. Ties in probability keep this order.
  pub const ALL: [PathKey; 5] = [
    PathKey::Fullstack,
    PathKey::Datascience,
    PathKey::Cloud,
    PathKey::Mobile,
    PathKey::Security,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      PathKey::Fullstack => "fullstack",
      PathKey::Datascience => "datascience",
      PathKey::Cloud => "cloud",
      PathKey::Mobile => "mobile",
      PathKey::Security => "security",
    }
  }

  /// Display-name fragment used by substring resolution against the catalog.
  pub fn name_fragment(&self) -> &'static str {
    match self {
      PathKey::Fullstack => "Full Stack",
      PathKey::Datascience => "Data Science",
      PathKey::Cloud => "Cloud",
      PathKey::Mobile => "Mobile",
      PathKey::Security => "Cybersecurity",
    }
  }
}

impl fmt::Display for PathKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One graded answer to one quiz question. `category` stays a raw tag so that
/// unrecognized values survive storage and are dropped only at aggregation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAttempt {
  #[serde(default)] pub category: Option<String>,
  pub is_correct: bool,
}

impl QuestionAttempt {
  pub fn new(category: Option<&str>, is_correct: bool) -> Self {
    Self { category: category.map(str::to_string), is_correct }
  }
}

/// One answer to one fixed questionnaire item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestResponse {
  pub question_id: i64,
  pub response: String,
}

impl InterestResponse {
  pub fn new(question_id: i64, response: impl Into<String>) -> Self {
    Self { question_id, response: response.into() }
  }
}

/// Persisted catalog entry a path key resolves to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPathEntry {
  pub id: String,
  pub name: String,
  #[serde(default)] pub slug: Option<String>,
}

/// Outcome of resolving a path key against the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum PathId {
  Resolved(String),
  /// No catalog match; carries the literal internal key string.
  Unresolved(String),
}

impl PathId {
  /// The string handed to callers, resolved or not.
  pub fn as_str(&self) -> &str {
    match self {
      PathId::Resolved(id) | PathId::Unresolved(id) => id,
    }
  }

  pub fn is_resolved(&self) -> bool {
    matches!(self, PathId::Resolved(_))
  }
}

/// A scored path. `path_id` is `None` until resolution has run.
#[derive(Clone, Debug, PartialEq)]
pub struct CareerPathCandidate {
  pub path_key: PathKey,
  pub path_id: Option<PathId>,
  pub score: f64,
  pub probability: f64,
}

/// Non-fatal conditions surfaced alongside a recommendation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecommendationWarning {
  UnresolvedPath {
    #[serde(rename = "pathKey")]
    path_key: PathKey,
  },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Recommendation {
  pub recommended_path_id: PathId,
  /// Sorted by probability, highest first.
  pub probabilities: Vec<CareerPathCandidate>,
  /// Top probability as a percentage in 0..=100.
  pub confidence: f64,
  pub warnings: Vec<RecommendationWarning>,
}

impl Recommendation {
  pub fn top(&self) -> Option<&CareerPathCandidate> {
    self.probabilities.first()
  }
}
