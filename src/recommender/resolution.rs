//! Resolution of internal path keys to catalog ids.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{CareerPathEntry, PathId, PathKey};

/// How internal keys are matched against catalog entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathResolution {
  /// First entry whose display name contains the key's name fragment.
  #[default]
  NameSubstring,
  /// First entry whose `slug` equals the key.
  Slug,
}

impl PathResolution {
  fn matches(&self, key: PathKey, entry: &CareerPathEntry) -> bool {
    match self {
      PathResolution::NameSubstring => entry.name.contains(key.name_fragment()),
      PathResolution::Slug => entry.slug.as_deref() == Some(key.as_str()),
    }
  }
}

/// Key → id mapping for all five paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPaths(BTreeMap<PathKey, PathId>);

impl ResolvedPaths {
  pub fn resolve(catalog: &[CareerPathEntry], mode: PathResolution) -> Self {
    let map = PathKey::ALL
      .into_iter()
      .map(|key| {
        let id = match catalog.iter().find(|entry| mode.matches(key, entry)) {
          Some(entry) => PathId::Resolved(entry.id.clone()),
          None => PathId::Unresolved(key.as_str().to_string()),
        };
        (key, id)
      })
      .collect();
    Self(map)
  }

  pub fn get(&self, key: PathKey) -> PathId {
    self.0
      .get(&key)
      .cloned()
      .unwrap_or_else(|| PathId::Unresolved(key.as_str().to_string()))
  }

  /// Keys left without a catalog match, in `PathKey::ALL` order.
  pub fn unresolved(&self) -> Vec<PathKey> {
    self.0
      .iter()
      .filter(|(_, id)| !id.is_resolved())
      .map(|(key, _)| *key)
      .collect()
  }
}
