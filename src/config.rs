//! Loading service configuration (path resolution mode + optional catalog) from TOML.
//!
//! See `ServiceConfig` for the expected schema:
//!
//! ```toml
//! [recommender]
//! path_resolution = "slug"      # or "name_substring" (default)
//!
//! [[catalog]]
//! id = "path-fullstack"         # optional, a UUID is generated when absent
//! name = "Full Stack Web Developer"
//! slug = "fullstack"
//! ```

use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::CareerPathEntry;
use crate::recommender::PathResolution;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct ServiceConfig {
  #[serde(default)]
  pub recommender: RecommenderConfig,
  #[serde(default)]
  pub catalog: Vec<CatalogEntryCfg>,
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct RecommenderConfig {
  #[serde(default)]
  pub path_resolution: PathResolution,
}

/// Catalog entry accepted in TOML configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct CatalogEntryCfg {
  #[serde(default)] pub id: Option<String>,
  pub name: String,
  #[serde(default)] pub slug: Option<String>,
}

impl ServiceConfig {
  pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(s)
  }

  /// Catalog entries from config, with generated ids where missing.
  /// Entries with an empty name are skipped.
  pub fn catalog_entries(&self) -> Vec<CareerPathEntry> {
    self
      .catalog
      .iter()
      .filter_map(|c| {
        if c.name.trim().is_empty() {
          warn!(target: "career_backend", id = ?c.id, "Skipping catalog entry: empty name.");
          return None;
        }
        Some(CareerPathEntry {
          id: c.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string()),
          name: c.name.clone(),
          slug: c.slug.clone(),
        })
      })
      .collect()
  }
}

/// Attempt to load `ServiceConfig` from CAREER_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_config_from_env() -> Option<ServiceConfig> {
  let path = std::env::var("CAREER_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match ServiceConfig::from_toml_str(&s) {
      Ok(cfg) => {
        info!(target: "career_backend", %path, mode = ?cfg.recommender.path_resolution, catalog = cfg.catalog.len(), "Loaded service config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "career_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "career_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_config_uses_defaults() {
    let cfg = ServiceConfig::from_toml_str("").unwrap();
    assert_eq!(cfg.recommender.path_resolution, PathResolution::NameSubstring);
    assert!(cfg.catalog_entries().is_empty());
  }

  #[test]
  fn parses_slug_mode_and_catalog() {
    let cfg = ServiceConfig::from_toml_str(
      r#"
        [recommender]
        path_resolution = "slug"

        [[catalog]]
        id = "fs"
        name = "Full Stack Web Developer"
        slug = "fullstack"

        [[catalog]]
        name = "Mobile App Developer"

        [[catalog]]
        name = "   "
      "#,
    )
    .unwrap();
    assert_eq!(cfg.recommender.path_resolution, PathResolution::Slug);

    let entries = cfg.catalog_entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "fs");
    assert_eq!(entries[0].slug.as_deref(), Some("fullstack"));
    assert!(Uuid::parse_str(&entries[1].id).is_ok());
    assert_eq!(entries[1].slug, None);
  }

  #[test]
  fn rejects_unknown_resolution_mode() {
    assert!(ServiceConfig::from_toml_str("[recommender]\npath_resolution = \"fuzzy\"").is_err());
  }
}
