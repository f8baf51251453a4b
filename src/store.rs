//! Storage seam for the recommender plus an in-memory implementation.
//!
//! `CareerStore` exposes the three reads the recommender needs. The in-memory
//! store also carries the writes used by the HTTP surface (quiz attempts,
//! questionnaire submissions, catalog replacement).

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::domain::{CareerPathEntry, InterestResponse, QuestionAttempt};
use crate::error::StoreError;

#[async_trait]
pub trait CareerStore: Send + Sync {
  /// Every graded quiz answer for the user, any order.
  async fn fetch_question_attempts(&self, user_id: &str) -> Result<Vec<QuestionAttempt>, StoreError>;

  /// The user's questionnaire answers, any order.
  async fn fetch_interest_responses(&self, user_id: &str) -> Result<Vec<InterestResponse>, StoreError>;

  async fn fetch_career_path_catalog(&self) -> Result<Vec<CareerPathEntry>, StoreError>;
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
  attempts: Arc<RwLock<HashMap<String, Vec<QuestionAttempt>>>>,
  responses: Arc<RwLock<HashMap<String, Vec<InterestResponse>>>>,
  catalog: Arc<RwLock<Vec<CareerPathEntry>>>,
}

impl InMemoryStore {
  pub fn with_catalog(catalog: Vec<CareerPathEntry>) -> Self {
    Self { catalog: Arc::new(RwLock::new(catalog)), ..Default::default() }
  }

  /// Append graded attempts to the user's history. Returns the new history length.
  #[instrument(level = "debug", skip(self, attempts), fields(%user_id, count = attempts.len()))]
  pub async fn record_attempts(&self, user_id: &str, attempts: Vec<QuestionAttempt>) -> usize {
    let mut by_user = self.attempts.write().await;
    let history = by_user.entry(user_id.to_string()).or_default();
    history.extend(attempts);
    debug!(target: "career_backend", %user_id, total = history.len(), "Recorded quiz attempts");
    history.len()
  }

  /// Store a questionnaire submission, replacing any earlier one for the user.
  #[instrument(level = "debug", skip(self, responses), fields(%user_id, count = responses.len()))]
  pub async fn submit_assessment(&self, user_id: &str, responses: Vec<InterestResponse>) -> usize {
    let count = responses.len();
    let previous = self.responses.write().await.insert(user_id.to_string(), responses);
    if previous.is_some() {
      info!(target: "career_backend", %user_id, "Replaced earlier interest assessment");
    }
    count
  }

  pub async fn replace_catalog(&self, entries: Vec<CareerPathEntry>) {
    *self.catalog.write().await = entries;
  }
}

#[async_trait]
impl CareerStore for InMemoryStore {
  async fn fetch_question_attempts(&self, user_id: &str) -> Result<Vec<QuestionAttempt>, StoreError> {
    Ok(self.attempts.read().await.get(user_id).cloned().unwrap_or_default())
  }

  async fn fetch_interest_responses(&self, user_id: &str) -> Result<Vec<InterestResponse>, StoreError> {
    Ok(self.responses.read().await.get(user_id).cloned().unwrap_or_default())
  }

  async fn fetch_career_path_catalog(&self) -> Result<Vec<CareerPathEntry>, StoreError> {
    Ok(self.catalog.read().await.clone())
  }
}
