// Text rendering for reports.
//
// Two report shapes:
// - chord map: one block per scale listing each computed chord's fitting
//   roots, e.g. `Major::\n{'Major': {0, 3, 4}, 'Augmented': set()}`
// - relationships: one sentence per root pairing, then a summary of the
//   fifths reachable through the chord
//
// Root degrees are zero-based in the chord map and one-based in relationship
// sentences, where they read as scale degrees ("at 5" = the fifth degree).

use crate::chord::Chord;
use crate::relationship::{ChordRelationships, RootRelationship};
use crate::scale::{FitState, Scale};
use std::collections::BTreeSet;
use std::fmt::Display;

/// `{0, 3, 4}`, or `set()` when empty.
pub fn format_set<T: Display>(items: &BTreeSet<T>) -> String {
    if items.is_empty() {
        return "set()".to_string();
    }
    let parts: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("{{{}}}", parts.join(", "))
}

/// The `{'Chord': {roots}, ...}` mapping for a scale, listing chords in the
/// given order and skipping chords that haven't been computed.
pub fn format_chord_map(scale: &Scale, chords: &[Chord]) -> String {
    let entries: Vec<String> = chords
        .iter()
        .filter_map(|chord| match scale.fit_state(chord.name()) {
            FitState::Computed(roots) => Some(format!("'{}': {}", chord.name(), format_set(&roots))),
            FitState::Uncomputed => None,
        })
        .collect();
    format!("{{{}}}", entries.join(", "))
}

/// Scale header followed by its chord map.
pub fn render_chord_map(scale: &Scale, chords: &[Chord]) -> String {
    format!("{}::\n{}\n", scale.name(), format_chord_map(scale, chords))
}

pub fn render_relationship_line(rel: &ChordRelationships, record: &RootRelationship) -> String {
    let t = &record.transposition;
    format!(
        "Distance between {} to {} (via {} chord at {} for the first scale to {} of the second \
         scale) (Looking where Scale 2 is relative to Scale 1) is {} fifths right, or {} fourths \
         left, or {} semitones right.",
        rel.scale_1,
        rel.scale_2,
        rel.chord,
        record.root_1 + 1,
        record.root_2 + 1,
        t.fifths_right,
        t.fourths_left,
        t.semitones_right,
    )
}

pub fn render_summary_line(rel: &ChordRelationships) -> String {
    format!(
        "Using the {} chord, we can reach {}",
        rel.chord,
        format_set(&rel.reachable_fifths)
    )
}

/// All pairing sentences then the summary, each followed by a blank line.
pub fn render_relationships(rel: &ChordRelationships) -> String {
    let mut out = String::new();
    for record in &rel.records {
        out.push_str(&render_relationship_line(rel, record));
        out.push_str("\n\n");
    }
    out.push_str(&render_summary_line(rel));
    out.push_str("\n\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::relationship::chordal_relationships;

    fn major_scale() -> Scale {
        Scale::new("Major", vec![2, 2, 1, 2, 2, 2, 1]).unwrap()
    }

    #[test]
    fn test_format_set() {
        assert_eq!(format_set(&BTreeSet::from([4, 0, 3])), "{0, 3, 4}");
        assert_eq!(format_set::<u8>(&BTreeSet::new()), "set()");
    }

    #[test]
    fn test_chord_map_skips_uncomputed() {
        let scale = major_scale();
        let major = Chord::new("Major", vec![4, 3]).unwrap();
        let aug = Chord::new("Augmented", vec![4, 4]).unwrap();
        let dim = Chord::new("Diminished", vec![3, 3]).unwrap();
        scale.add_chord(&major);
        scale.add_chord(&aug);

        let chords = [major, dim, aug];
        assert_eq!(
            render_chord_map(&scale, &chords),
            "Major::\n{'Major': {0, 3, 4}, 'Augmented': set()}\n"
        );
    }

    #[test]
    fn test_relationship_text() {
        let scale = major_scale();
        let chord = Chord::new("Diminished", vec![3, 3]).unwrap();
        let rel = chordal_relationships(&scale, &scale, &chord, &AnalysisConfig::default());
        assert_eq!(
            render_relationships(&rel),
            "Distance between Major to Major (via Diminished chord at 7 for the first scale to 7 \
             of the second scale) (Looking where Scale 2 is relative to Scale 1) is 0 fifths \
             right, or 0 fourths left, or 0 semitones right.\n\n\
             Using the Diminished chord, we can reach {0}\n\n"
        );
    }

    #[test]
    fn test_summary_for_missing_chord() {
        let scale = major_scale();
        let chord = Chord::new("Augmented", vec![4, 4]).unwrap();
        let rel = chordal_relationships(&scale, &scale, &chord, &AnalysisConfig::default());
        assert_eq!(render_relationships(&rel), "Using the Augmented chord, we can reach set()\n\n");
    }
}
