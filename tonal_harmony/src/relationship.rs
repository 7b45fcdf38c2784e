// Relationship analyzer: how two scales relate through a shared chord type.
//
// If both scales contain a chord, every pairing of a root in the first scale
// with a root in the second suggests a transposition: move the second scale
// so the two chord roots coincide. The distance between the roots (measured
// up from degree 0) is expressed three ways, all reduced into one octave:
//
// - fifths right:   key distance * 7 mod 12 (steps clockwise on the circle
//                   of fifths)
// - fourths left:   the complementary steps counterclockwise
// - semitones right: key distance mod 12
//
// The set of distinct fifths-right values across all pairings is the set of
// keys "reachable" through that chord.
//
// Computation returns plain records; render.rs turns them into text. The
// fitting engine is consulted through `has_chord`, so fits are computed and
// memoized on the scales as a side effect.

use crate::chord::Chord;
use crate::config::{AnalysisConfig, RootBasis};
use crate::scale::Scale;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Semitones in an octave.
pub const SEMITONES_PER_OCTAVE: i64 = 12;

/// Semitones in a perfect fifth; multiplying a semitone distance by this
/// (mod 12) counts steps around the circle of fifths.
pub const FIFTH: i64 = 7;

/// A semitone distance folded onto the circle of fifths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transposition {
    /// Unreduced signed semitone distance.
    pub key_distance: i64,
    pub fifths_right: u8,
    pub fourths_left: u8,
    pub semitones_right: u8,
}

impl Transposition {
    pub fn from_semitones(key_distance: i64) -> Self {
        let fifths_right = (key_distance * FIFTH).rem_euclid(SEMITONES_PER_OCTAVE);
        let fourths_left = (SEMITONES_PER_OCTAVE - fifths_right).rem_euclid(SEMITONES_PER_OCTAVE);
        let semitones_right = key_distance.rem_euclid(SEMITONES_PER_OCTAVE);
        Transposition {
            key_distance,
            fifths_right: fifths_right as u8,
            fourths_left: fourths_left as u8,
            semitones_right: semitones_right as u8,
        }
    }
}

/// One (root in scale 1, root in scale 2) pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootRelationship {
    /// Zero-based root degree in the first scale.
    pub root_1: usize,
    /// Zero-based root degree in the second scale.
    pub root_2: usize,
    pub transposition: Transposition,
}

/// Every pairing for one chord between two scales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordRelationships {
    pub scale_1: String,
    pub scale_2: String,
    pub chord: String,
    /// Ordered by root_1, then root_2. Empty if either scale lacks the chord.
    pub records: Vec<RootRelationship>,
    /// Distinct fifths-right values across `records`.
    pub reachable_fifths: BTreeSet<u8>,
}

/// Relate `scale_1` and `scale_2` through `chord`.
///
/// The first scale is checked first; if it lacks the chord, the second
/// scale's fit is left uncomputed.
pub fn chordal_relationships(
    scale_1: &Scale,
    scale_2: &Scale,
    chord: &Chord,
    config: &AnalysisConfig,
) -> ChordRelationships {
    let mut result = ChordRelationships {
        scale_1: scale_1.name().to_string(),
        scale_2: scale_2.name().to_string(),
        chord: chord.name().to_string(),
        records: Vec::new(),
        reachable_fifths: BTreeSet::new(),
    };

    if !(scale_1.has_chord(chord) && scale_2.has_chord(chord)) {
        debug!(
            scale_1 = scale_1.name(),
            scale_2 = scale_2.name(),
            chord = chord.name(),
            "chord missing from at least one scale"
        );
        return result;
    }

    let second_basis = match config.second_root_basis {
        RootBasis::FirstScale => scale_1,
        RootBasis::SecondScale => scale_2,
    };

    let roots_2 = scale_2.roots(chord.name());
    for root_1 in scale_1.roots(chord.name()) {
        let dist_1 = scale_1.interval_between(0, root_1) as i64;
        for &root_2 in &roots_2 {
            let dist_2 = second_basis.interval_between(0, root_2) as i64;
            let transposition = Transposition::from_semitones(dist_2 - dist_1);
            result.reachable_fifths.insert(transposition.fifths_right);
            result.records.push(RootRelationship {
                root_1,
                root_2,
                transposition,
            });
        }
    }

    debug!(
        scale_1 = scale_1.name(),
        scale_2 = scale_2.name(),
        chord = chord.name(),
        pairs = result.records.len(),
        reachable = ?result.reachable_fifths,
        "chordal relationships"
    );
    result
}

/// Run `chordal_relationships` for each chord, in the order given.
pub fn all_chordal_relationships(
    scale_1: &Scale,
    scale_2: &Scale,
    chords: &[Chord],
    config: &AnalysisConfig,
) -> Vec<ChordRelationships> {
    chords
        .iter()
        .map(|chord| chordal_relationships(scale_1, scale_2, chord, config))
        .collect()
}
