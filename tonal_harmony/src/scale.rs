// Scale definitions and interval arithmetic.
//
// A scale is a cyclic sequence of semitone steps between consecutive degrees.
// Degree indices are not bounded by the number of notes: index N + k refers to
// degree k one cycle higher, so distances between arbitrary indices
// accumulate whole periods correctly.
//
// Each scale also carries a memo of chord fits keyed by chord name. The memo
// is filled lazily by the fitting engine (fitting.rs) and distinguishes
// "never computed" from "computed, no fitting roots" (see `FitState`).
//
// The memo lives behind a `RefCell` so that queries can take `&self` and the
// relationship analyzer can compare a scale with itself. That makes `Scale`
// `!Sync`: a scale belongs to one thread at a time. Callers needing to share
// fit results across threads should use `fitting_roots`, which computes
// without memoizing.

use crate::error::{HarmonyError, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

/// Memoized fit result for one chord name in one scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FitState {
    /// The chord has not been tried against this scale yet.
    Uncomputed,
    /// The chord was tried; these are the root degrees where it fits.
    /// An empty set means it fits nowhere.
    Computed(BTreeSet<usize>),
}

impl FitState {
    pub fn is_computed(&self) -> bool {
        matches!(self, FitState::Computed(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ScaleDef")]
pub struct Scale {
    name: String,
    intervals: Vec<u32>,
    #[serde(skip)]
    fits: RefCell<BTreeMap<String, BTreeSet<usize>>>,
}

/// Unvalidated wire form of a scale, as it appears in catalog JSON.
#[derive(Debug, Deserialize)]
struct ScaleDef {
    name: String,
    intervals: Vec<u32>,
}

impl TryFrom<ScaleDef> for Scale {
    type Error = HarmonyError;

    fn try_from(def: ScaleDef) -> Result<Self> {
        Scale::new(def.name, def.intervals)
    }
}

impl Scale {
    /// Build a scale from its steps. Steps must be non-empty and strictly
    /// positive; a zero step would let the fitting walk spin forever on a
    /// scale made only of zeros.
    pub fn new(name: impl Into<String>, intervals: Vec<u32>) -> Result<Self> {
        let name = name.into();
        if intervals.is_empty() {
            return Err(HarmonyError::InvalidScaleDefinition {
                name,
                reason: "interval list is empty".into(),
            });
        }
        if let Some(pos) = intervals.iter().position(|&iv| iv == 0) {
            return Err(HarmonyError::InvalidScaleDefinition {
                name,
                reason: format!("step {} is zero", pos),
            });
        }
        Ok(Scale {
            name,
            intervals,
            fits: RefCell::new(BTreeMap::new()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn intervals(&self) -> &[u32] {
        &self.intervals
    }

    /// Number of degrees in one cycle of the scale.
    pub fn num_notes(&self) -> usize {
        self.intervals.len()
    }

    /// Semitones spanned by one full cycle (12 for the usual heptatonic scales).
    pub fn period(&self) -> u64 {
        self.intervals.iter().map(|&iv| iv as u64).sum()
    }

    /// Step size leaving degree `index`, wrapping around the cycle.
    pub fn step(&self, index: usize) -> u32 {
        self.intervals[index % self.num_notes()]
    }

    /// Semitone distance between degrees `i` and `j`, in either order.
    /// Indices past the end of the cycle continue into the next octave.
    pub fn interval_between(&self, i: usize, j: usize) -> u64 {
        let (start, end) = if i > j { (j, i) } else { (i, j) };
        (start..end).map(|k| self.step(k) as u64).sum()
    }

    /// Current memo state for a chord name.
    pub fn fit_state(&self, chord_name: &str) -> FitState {
        match self.fits.borrow().get(chord_name) {
            Some(roots) => FitState::Computed(roots.clone()),
            None => FitState::Uncomputed,
        }
    }

    /// Memoized roots for a chord name, or an empty set if not computed yet.
    pub fn roots(&self, chord_name: &str) -> BTreeSet<usize> {
        self.fits
            .borrow()
            .get(chord_name)
            .cloned()
            .unwrap_or_default()
    }

    /// Snapshot of every memoized chord fit, keyed by chord name.
    pub fn chord_fits(&self) -> BTreeMap<String, BTreeSet<usize>> {
        self.fits.borrow().clone()
    }

    /// Install (or overwrite) the memo entry for a chord name.
    pub(crate) fn record_fit(&self, chord_name: &str, roots: BTreeSet<usize>) {
        self.fits.borrow_mut().insert(chord_name.to_string(), roots);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn major() -> Scale {
        Scale::new("Major", vec![2, 2, 1, 2, 2, 2, 1]).unwrap()
    }

    #[test]
    fn test_num_notes_and_period() {
        let scale = major();
        assert_eq!(scale.num_notes(), 7);
        assert_eq!(scale.period(), 12);
    }

    #[test]
    fn test_interval_between_octave() {
        assert_eq!(major().interval_between(0, 7), 12);
    }

    #[test]
    fn test_interval_between_same_index() {
        let scale = major();
        for i in 0..20 {
            assert_eq!(scale.interval_between(i, i), 0);
        }
    }

    #[test]
    fn test_interval_between_symmetric() {
        let scale = Scale::new("Melodic Minor", vec![2, 1, 2, 2, 1, 3, 1]).unwrap();
        for i in 0..16 {
            for j in 0..16 {
                assert_eq!(scale.interval_between(i, j), scale.interval_between(j, i));
            }
        }
    }

    #[test]
    fn test_interval_between_full_cycle() {
        let scale = Scale::new("Harmonic Minor", vec![2, 1, 2, 2, 2, 2, 1]).unwrap();
        let n = scale.num_notes();
        for i in 0..3 * n {
            assert_eq!(scale.interval_between(i, i + n), scale.period());
        }
        // Two full cycles.
        assert_eq!(scale.interval_between(3, 3 + 2 * n), 24);
    }

    #[test]
    fn test_interval_between_partial() {
        let scale = major();
        assert_eq!(scale.interval_between(0, 2), 4); // C to E
        assert_eq!(scale.interval_between(4, 0), 7); // G down to C
        assert_eq!(scale.interval_between(6, 8), 3); // B to D, across the octave
    }

    #[test]
    fn test_non_twelve_period() {
        // Three-note scale spanning 10 semitones; nothing assumes 12.
        let scale = Scale::new("Odd", vec![2, 3, 5]).unwrap();
        assert_eq!(scale.period(), 10);
        assert_eq!(scale.interval_between(1, 4), 10);
    }

    #[test]
    fn test_invalid_scales_rejected() {
        assert!(matches!(
            Scale::new("Empty", vec![]),
            Err(HarmonyError::InvalidScaleDefinition { .. })
        ));
        assert!(matches!(
            Scale::new("Zero", vec![2, 0, 10]),
            Err(HarmonyError::InvalidScaleDefinition { .. })
        ));
    }

    #[test]
    fn test_fit_state_starts_uncomputed() {
        let scale = major();
        assert_eq!(scale.fit_state("Major"), FitState::Uncomputed);
        assert!(scale.roots("Major").is_empty());

        scale.record_fit("Major", BTreeSet::new());
        assert_eq!(scale.fit_state("Major"), FitState::Computed(BTreeSet::new()));
        assert!(scale.fit_state("Major").is_computed());
    }

    #[test]
    fn test_deserialize_validates() {
        let scale: Scale =
            serde_json::from_str(r#"{"name":"Minor","intervals":[2,1,2,2,1,2,2]}"#).unwrap();
        assert_eq!(scale.name(), "Minor");
        assert_eq!(scale.fit_state("Major"), FitState::Uncomputed);

        assert!(serde_json::from_str::<Scale>(r#"{"name":"Bad","intervals":[0]}"#).is_err());
    }
}
