//! Application state: the in-memory store, the recommender bound to it, and
//! the per-user chosen career path.
//!
//! Only resolved catalog ids are ever persisted as a user's career path; an
//! unresolved internal key is reported back but never stored.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::config::{load_config_from_env, ServiceConfig};
use crate::domain::{PathId, Recommendation};
use crate::recommender::CareerRecommender;
use crate::seeds::seed_catalog;
use crate::store::InMemoryStore;

#[derive(Clone, Debug, PartialEq)]
pub struct ChosenPath {
    pub path_id: String,
    pub confidence: f64,
}

#[derive(Clone)]
pub struct AppState {
    pub store: InMemoryStore,
    pub recommender: CareerRecommender<InMemoryStore>,
    pub chosen: Arc<RwLock<HashMap<String, ChosenPath>>>,
}

impl AppState {
    /// Build state from env: load config, seed catalog, bind recommender.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        Self::from_config(load_config_from_env().unwrap_or_default())
    }

    pub fn from_config(cfg: ServiceConfig) -> Self {
        let configured = cfg.catalog_entries();
        let catalog = if configured.is_empty() {
            info!(target: "career_backend", "Using built-in career path catalog");
            seed_catalog()
        } else {
            info!(target: "career_backend", entries = configured.len(), "Using configured career path catalog");
            configured
        };

        let mode = cfg.recommender.path_resolution;
        info!(target: "career_backend", ?mode, "Career path resolution mode");

        let store = InMemoryStore::with_catalog(catalog);
        Self {
            recommender: CareerRecommender::new(store.clone(), mode),
            store,
            chosen: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Persist the top path for the user if its id resolved. Returns whether it was stored.
    #[instrument(level = "debug", skip(self, rec), fields(%user_id))]
    pub async fn persist_choice(&self, user_id: &str, rec: &Recommendation) -> bool {
        match &rec.recommended_path_id {
            PathId::Resolved(id) => {
                let choice = ChosenPath { path_id: id.clone(), confidence: rec.confidence };
                self.chosen.write().await.insert(user_id.to_string(), choice);
                true
            }
            PathId::Unresolved(key) => {
                warn!(target: "career_backend", %user_id, path_key = %key, "Not persisting unresolved career path");
                false
            }
        }
    }

    pub async fn chosen_path(&self, user_id: &str) -> Option<ChosenPath> {
        self.chosen.read().await.get(user_id).cloned()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(ServiceConfig::default())
    }
}
