// Tonal Harmony
//
// Models Western scales and chords as interval sequences, finds which chords
// occur on which degrees of which scales, and relates pairs of scales through
// the chords they share, expressed as moves around the circle of fifths.
//
// Architecture:
// - scale.rs: Scale type, cyclic interval arithmetic, per-chord fit memo
// - chord.rs: Chord type (successive semitone targets from the root)
// - fitting.rs: Chord-fitting engine (add_chord / has_chord on Scale)
// - relationship.rs: Transposition records between two scales via a chord
// - catalog.rs: Built-in scales and triads, JSON catalog loading
// - config.rs: Analysis options (how second-scale roots are measured)
// - render.rs: Text output for chord maps and relationship reports
// - error.rs: Construction and loading errors
//
// Everything is single-threaded and deterministic. The `harmony_report`
// binary (main.rs) drives a full report over a catalog.

pub mod catalog;
pub mod chord;
pub mod config;
pub mod error;
pub mod fitting;
pub mod relationship;
pub mod render;
pub mod scale;

pub use catalog::Catalog;
pub use chord::Chord;
pub use config::{AnalysisConfig, RootBasis};
pub use error::{HarmonyError, Result};
pub use relationship::{
    ChordRelationships, RootRelationship, Transposition, all_chordal_relationships,
    chordal_relationships,
};
pub use scale::{FitState, Scale};
