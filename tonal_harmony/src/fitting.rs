// Chord-fitting engine: which scale degrees can root a given chord.
//
// For each candidate root, walk up the scale one degree at a time,
// accumulating semitones. Each chord interval is a target for the running
// sum: hitting it exactly means the next chord note is a scale degree, so the
// sum resets and the walk continues toward the next target from there.
// Overshooting means the chord note falls between scale degrees and the root
// is rejected.
//
// Because every scale step is positive the running sum strictly increases,
// so each target is resolved within a bounded number of steps. Nothing here
// assumes a 12-semitone period.
//
// Results are memoized on the scale per chord name (see scale.rs).
// `add_chord` always recomputes; `has_chord` reuses a computed entry.

use crate::chord::Chord;
use crate::scale::{FitState, Scale};
use std::collections::BTreeSet;
use tracing::{debug, trace};

impl Scale {
    /// Does `chord` fit with its root on degree `root`?
    pub fn chord_fits_at(&self, chord: &Chord, root: usize) -> bool {
        let mut degree = root;
        for &target in chord.intervals() {
            let mut accumulated = 0u64;
            loop {
                accumulated += self.step(degree) as u64;
                degree = (degree + 1) % self.num_notes();
                if accumulated == target as u64 {
                    break;
                }
                if accumulated > target as u64 {
                    return false;
                }
            }
        }
        true
    }

    /// All root degrees in `[0, num_notes)` where `chord` fits. Pure: does
    /// not touch the memo.
    pub fn fitting_roots(&self, chord: &Chord) -> BTreeSet<usize> {
        (0..self.num_notes())
            .filter(|&root| {
                let fits = self.chord_fits_at(chord, root);
                if !fits {
                    trace!(scale = self.name(), chord = chord.name(), root, "chord does not fit");
                }
                fits
            })
            .collect()
    }

    /// Compute the chord's fitting roots from scratch and memoize them,
    /// overwriting any earlier entry. Returns whether any root fits.
    pub fn add_chord(&self, chord: &Chord) -> bool {
        let roots = self.fitting_roots(chord);
        debug!(scale = self.name(), chord = chord.name(), ?roots, "computed chord fit");
        let found = !roots.is_empty();
        self.record_fit(chord.name(), roots);
        found
    }

    /// Whether the chord fits anywhere in the scale, using the memo when
    /// the chord has already been computed.
    pub fn has_chord(&self, chord: &Chord) -> bool {
        match self.fit_state(chord.name()) {
            FitState::Computed(roots) => !roots.is_empty(),
            FitState::Uncomputed => self.add_chord(chord),
        }
    }
}
