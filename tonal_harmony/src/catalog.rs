// The catalog of scales and chords that reports run over.
//
// `Catalog::western()` builds the standard set: four heptatonic scales and six
// triad types. A custom catalog can be loaded from JSON with the same shape:
//
//   {
//     "scales": [{ "name": "Major", "intervals": [2, 2, 1, 2, 2, 2, 1] }],
//     "chords": [{ "name": "Major", "intervals": [4, 3] }]
//   }
//
// Scale and chord definitions are validated as they deserialize, so a loaded
// catalog never holds an empty or zero-step scale. Chord order in the catalog
// is the order reports list chords in.

use crate::chord::Chord;
use crate::error::{HarmonyError, Result};
use crate::scale::Scale;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub scales: Vec<Scale>,
    pub chords: Vec<Chord>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::western()
    }
}

/// Built-in scale steps.
const WESTERN_SCALES: &[(&str, &[u32])] = &[
    ("Major", &[2, 2, 1, 2, 2, 2, 1]),
    ("Minor", &[2, 1, 2, 2, 1, 2, 2]),
    ("Melodic Minor", &[2, 1, 2, 2, 1, 3, 1]),
    ("Harmonic Minor", &[2, 1, 2, 2, 2, 2, 1]),
];

/// Built-in triads.
const WESTERN_CHORDS: &[(&str, &[u32])] = &[
    ("Major", &[4, 3]),
    ("Minor", &[3, 4]),
    ("Diminished", &[3, 3]),
    ("Augmented", &[4, 4]),
    ("Sus2", &[2, 5]),
    ("Sus4", &[5, 2]),
];

impl Catalog {
    /// The four standard scales and six triad types.
    pub fn western() -> Self {
        // Table entries are all valid definitions.
        let scales = WESTERN_SCALES
            .iter()
            .filter_map(|&(name, steps)| Scale::new(name, steps.to_vec()).ok())
            .collect();
        let chords = WESTERN_CHORDS
            .iter()
            .filter_map(|&(name, steps)| Chord::new(name, steps.to_vec()).ok())
            .collect();
        Catalog { scales, chords }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            scales = catalog.scales.len(),
            chords = catalog.chords.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// First scale with this name, ignoring ASCII case.
    pub fn scale(&self, name: &str) -> Result<&Scale> {
        self.scales
            .iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| HarmonyError::UnknownScale(name.to_string()))
    }

    /// First chord with this name, ignoring ASCII case.
    pub fn chord(&self, name: &str) -> Result<&Chord> {
        self.chords
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| HarmonyError::UnknownChord(name.to_string()))
    }

    /// Compute (or recompute) every catalog chord against every scale.
    pub fn fit_all(&self) {
        for scale in &self.scales {
            for chord in &self.chords {
                scale.add_chord(chord);
            }
        }
    }
}
