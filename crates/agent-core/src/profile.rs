//! Persona trait profiles: the genome evolved by the trainer

use serde::{Deserialize, Serialize};

/// Stylistic marker pools carried by a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StylisticMarkers {
    /// Sardonic phrases woven into generated prose
    pub sardonic_phrases: Vec<String>,
    /// Contrarian argument openers
    pub contrarian_arguments: Vec<String>,
}

/// One candidate trait profile ("individual") in the evolutionary population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitProfile {
    /// Generation this profile was created in
    pub generation: u32,
    /// Characteristic tags
    pub characteristics: Vec<String>,
    /// Stylistic marker pools
    pub stylistic_markers: StylisticMarkers,
    /// Last computed fitness; 0.0 until evaluated
    pub fitness: f64,
}

impl TraitProfile {
    /// The built-in base profile used when no corpus is available
    pub fn base() -> Self {
        Self {
            generation: 0,
            characteristics: vec![
                "intellectual".to_string(),
                "contrarian".to_string(),
                "witty".to_string(),
                "eloquent".to_string(),
            ],
            stylistic_markers: StylisticMarkers {
                sardonic_phrases: vec![
                    "How charming".to_string(),
                    "Delightful".to_string(),
                    "Touching".to_string(),
                ],
                contrarian_arguments: vec![
                    "On the contrary".to_string(),
                    "I disagree".to_string(),
                ],
            },
            fitness: 0.0,
        }
    }

    /// Whether the profile carries a characteristic tag
    pub fn has_characteristic(&self, tag: &str) -> bool {
        self.characteristics.iter().any(|c| c == tag)
    }

    /// Add a characteristic tag if not already present
    pub fn add_characteristic(&mut self, tag: &str) {
        if !self.has_characteristic(tag) {
            self.characteristics.push(tag.to_string());
        }
    }

    /// Add a sardonic phrase if not already present
    pub fn add_sardonic_phrase(&mut self, phrase: &str) {
        if !self
            .stylistic_markers
            .sardonic_phrases
            .iter()
            .any(|p| p == phrase)
        {
            self.stylistic_markers
                .sardonic_phrases
                .push(phrase.to_string());
        }
    }
}

impl Default for TraitProfile {
    fn default() -> Self {
        Self::base()
    }
}
