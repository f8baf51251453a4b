//! Career path recommendation backend.
//!
//! Combines per-category quiz accuracy with an interest questionnaire to rank
//! five fixed career paths, and serves the result over a small HTTP API.

pub mod config;
pub mod domain;
pub mod error;
pub mod protocol;
pub mod recommender;
pub mod routes;
pub mod seeds;
pub mod state;
pub mod store;
pub mod telemetry;

pub use domain::{CareerPathCandidate, Category, PathId, PathKey, Recommendation};
pub use error::{RecommendError, StoreError};
pub use recommender::{recommend_from, CareerRecommender, PathResolution};
pub use store::{CareerStore, InMemoryStore};
