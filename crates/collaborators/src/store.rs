//! Trait-profile corpus persistence
//!
//! The corpus is a JSON document read at startup and written back with a
//! refresh timestamp. An absent document falls back to the built-in base
//! profile; that is never a fatal error.

use crate::error::CollaboratorResult;
use chrono::{DateTime, Utc};
use personaswarm_agent_core::TraitProfile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// On-disk trait-profile corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaCorpus {
    /// The stored trait profile
    pub profile: TraitProfile,
    /// Last refresh timestamp
    pub refreshed_at: DateTime<Utc>,
    /// Number of times the corpus has been written back
    pub refresh_count: u64,
}

impl Default for PersonaCorpus {
    fn default() -> Self {
        Self {
            profile: TraitProfile::base(),
            refreshed_at: Utc::now(),
            refresh_count: 0,
        }
    }
}

/// Loads and saves the persona corpus document
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Store backed by the document at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the corpus, falling back to the built-in default when the
    /// document is missing or unreadable
    pub fn load(&self) -> PersonaCorpus {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str::<PersonaCorpus>(&raw) {
                Ok(corpus) => {
                    info!(path = %self.path.display(), "loaded persona corpus");
                    corpus
                }
                Err(err) => {
                    warn!(path = %self.path.display(), error = %err,
                        "malformed persona corpus, using default profile");
                    PersonaCorpus::default()
                }
            },
            Err(_) => {
                warn!(path = %self.path.display(), "persona corpus not found, using default profile");
                PersonaCorpus::default()
            }
        }
    }

    /// Write the corpus back, stamping the refresh time
    pub fn save(&self, corpus: &mut PersonaCorpus) -> CollaboratorResult<()> {
        corpus.refreshed_at = Utc::now();
        corpus.refresh_count += 1;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(corpus)?;
        std::fs::write(&self.path, raw)?;
        info!(path = %self.path.display(), refresh = corpus.refresh_count, "saved persona corpus");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_document_falls_back_to_base_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("missing.json"));
        let corpus = store.load();
        assert_eq!(corpus.profile, TraitProfile::base());
        assert_eq!(corpus.refresh_count, 0);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("corpus.json"));

        let mut corpus = PersonaCorpus::default();
        corpus.profile.add_characteristic("erudite");
        store.save(&mut corpus).unwrap();
        assert_eq!(corpus.refresh_count, 1);

        let loaded = store.load();
        assert!(loaded.profile.has_characteristic("erudite"));
        assert_eq!(loaded.refresh_count, 1);
    }

    #[test]
    fn test_malformed_document_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.json");
        std::fs::write(&path, "{not json").unwrap();
        let corpus = ProfileStore::new(&path).load();
        assert_eq!(corpus.profile, TraitProfile::base());
    }

    #[test]
    fn test_refresh_count_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("corpus.json"));
        let mut corpus = PersonaCorpus::default();
        store.save(&mut corpus).unwrap();
        store.save(&mut corpus).unwrap();
        assert_eq!(store.load().refresh_count, 2);
    }
}
