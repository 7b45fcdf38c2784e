// Chord definitions.
//
// A chord is described by the semitone distances between its successive
// notes, starting from the root: a major triad is [4, 3] (root to third is a
// major third, third to fifth is a minor third). The fitting engine in
// fitting.rs consumes these targets one at a time while walking a scale.
//
// Chords are immutable once built. Construction rejects an empty interval
// list; a zero entry is accepted but can never be matched by the walk, so a
// chord containing one simply never fits any scale.

use crate::error::{HarmonyError, Result};
use serde::{Deserialize, Serialize};

/// A named chord type, e.g. "Major" = [4, 3].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ChordDef")]
pub struct Chord {
    name: String,
    intervals: Vec<u32>,
}

/// Unvalidated wire form of a chord, as it appears in catalog JSON.
#[derive(Debug, Deserialize)]
struct ChordDef {
    name: String,
    intervals: Vec<u32>,
}

impl TryFrom<ChordDef> for Chord {
    type Error = HarmonyError;

    fn try_from(def: ChordDef) -> Result<Self> {
        Chord::new(def.name, def.intervals)
    }
}

impl Chord {
    pub fn new(name: impl Into<String>, intervals: Vec<u32>) -> Result<Self> {
        let name = name.into();
        if intervals.is_empty() {
            return Err(HarmonyError::InvalidChordDefinition {
                name,
                reason: "interval list is empty".into(),
            });
        }
        Ok(Chord { name, intervals })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Semitone targets between successive chord notes.
    pub fn intervals(&self) -> &[u32] {
        &self.intervals
    }

    /// Number of notes in the chord, root included.
    pub fn num_notes(&self) -> usize {
        self.intervals.len() + 1
    }

    /// Semitone offset of each non-root note above the root, e.g. [4, 7] for
    /// a major triad.
    pub fn offsets_from_root(&self) -> Vec<u32> {
        self.intervals
            .iter()
            .scan(0, |acc, &iv| {
                *acc += iv;
                Some(*acc)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_triad_offsets() {
        let chord = Chord::new("Major", vec![4, 3]).unwrap();
        assert_eq!(chord.name(), "Major");
        assert_eq!(chord.num_notes(), 3);
        assert_eq!(chord.offsets_from_root(), vec![4, 7]);
    }

    #[test]
    fn test_empty_chord_rejected() {
        let err = Chord::new("Nothing", vec![]).unwrap_err();
        assert!(matches!(err, HarmonyError::InvalidChordDefinition { .. }));
    }

    #[test]
    fn test_zero_interval_accepted() {
        // Never fits anywhere, but is not a construction error.
        let chord = Chord::new("Unison", vec![0, 4]).unwrap();
        assert_eq!(chord.intervals(), &[0, 4]);
    }

    #[test]
    fn test_deserialize_validates() {
        let chord: Chord = serde_json::from_str(r#"{"name":"Sus4","intervals":[5,2]}"#).unwrap();
        assert_eq!(chord.intervals(), &[5, 2]);

        let bad = serde_json::from_str::<Chord>(r#"{"name":"Empty","intervals":[]}"#);
        assert!(bad.is_err());
    }
}
