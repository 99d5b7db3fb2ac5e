//! Universe viability tally
//!
//! The tally counts how many constants sit in their life-permitting band.
//! It is a pure sum over the four per-constant classifications; derived
//! scores never contribute.

use crate::bands::{self, Classification};
use crate::constants::{ConstantKind, ConstantSet};
use crate::scores::{DerivedScores, ScoreKind};
use serde::Serialize;

/// Highest possible tally (one point per constant)
pub const MAX_VIABILITY: u8 = 4;

/// Label per tally, indexed by tally value
const VIABILITY_LABELS: [&str; 5] = [
    "Completely Inhospitable",
    "Hostile Universe",
    "Highly Unstable",
    "Marginally Habitable",
    "Life-Permitting Universe",
];

/// Tally and its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viability {
    pub score: u8,
    pub max: u8,
    pub label: &'static str,
}

impl Viability {
    /// Look up the label for a tally; `None` above `MAX_VIABILITY`
    pub fn from_score(score: u8) -> Option<Self> {
        VIABILITY_LABELS
            .get(score as usize)
            .map(|&label| Viability {
                score,
                max: MAX_VIABILITY,
                label,
            })
    }
}

/// Classify every constant in canonical order
pub fn classify_constants(constants: &ConstantSet) -> [(ConstantKind, Classification); 4] {
    constants
        .entries()
        .map(|(kind, value)| (kind, bands::constant_bands(kind).classify(value)))
}

/// Sum of ok bands over the four per-constant classifications
pub fn tally(classified: &[(ConstantKind, Classification); 4]) -> Viability {
    let score = classified.iter().filter(|(_, c)| c.is_ok()).count();
    Viability {
        score: score as u8,
        max: MAX_VIABILITY,
        label: VIABILITY_LABELS[score],
    }
}

/// Classify the three component scores plus the life gate
pub fn classify_scores(scores: &DerivedScores) -> [(ScoreKind, Classification); 4] {
    ScoreKind::ALL.map(|kind| (kind, bands::score_bands(kind).classify(scores.get(kind))))
}

/// Join the star, atom and cosmos explanations into one paragraph
pub fn explain(scores: &DerivedScores) -> String {
    [ScoreKind::Star, ScoreKind::Atom, ScoreKind::Cosmos]
        .iter()
        .filter_map(|&kind| bands::score_bands(kind).classify(scores.get(kind)).detail)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::compute_scores;

    #[test]
    fn test_reference_universe_is_life_permitting() {
        let classified = classify_constants(&ConstantSet::reference());
        let viability = tally(&classified);
        assert_eq!(viability.score, 4);
        assert_eq!(viability.label, "Life-Permitting Universe");
    }

    #[test]
    fn test_labels_by_score() {
        let label = |score| Viability::from_score(score).map(|v| v.label);
        assert_eq!(label(0), Some("Completely Inhospitable"));
        assert_eq!(label(1), Some("Hostile Universe"));
        assert_eq!(label(2), Some("Highly Unstable"));
        assert_eq!(label(3), Some("Marginally Habitable"));
        assert_eq!(label(4), Some("Life-Permitting Universe"));
    }

    #[test]
    fn test_impossible_tally_is_rejected() {
        assert_eq!(Viability::from_score(5), None);
        assert_eq!(Viability::from_score(9), None);
        assert_eq!(Viability::from_score(u8::MAX), None);
    }

    #[test]
    fn test_warning_does_not_count() {
        let set = ConstantSet::new(1.0, 1.0, 1.0, 0.0).unwrap();
        let classified = classify_constants(&set);
        assert_eq!(tally(&classified).score, 3);
    }

    #[test]
    fn test_everything_out_of_band() {
        let set = ConstantSet::new(10.0, 2.0, 10.0, 2.0).unwrap();
        let classified = classify_constants(&set);
        let viability = tally(&classified);
        assert_eq!(viability.score, 0);
        assert_eq!(viability.label, "Completely Inhospitable");
    }

    #[test]
    fn test_score_bands_do_not_affect_tally() {
        // G = S = 0.3 keeps every constant ok while star_score = 11.1 is an error
        let set = ConstantSet::new(0.3, 1.0, 0.3, 1.0).unwrap();
        let scores = compute_scores(&set);
        let score_classes = classify_scores(&scores);
        assert!(!score_classes[0].1.is_ok());

        let classified = classify_constants(&set);
        assert_eq!(tally(&classified).score, 4);
    }

    #[test]
    fn test_explanation_order() {
        let scores = compute_scores(&ConstantSet::reference());
        assert_eq!(
            explain(&scores),
            "Star formation appears stable and sustained. \
             Atomic structure is stable, allowing for complex molecules. \
             Cosmic expansion and gravitational attraction are well-balanced."
        );
    }
}
