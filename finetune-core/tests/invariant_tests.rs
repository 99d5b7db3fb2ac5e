//! Invariant Tests
//!
//! Property tests for invariants that must hold for every in-range input.

use finetune_core::bands::constant_bands;
use finetune_core::constants::REFERENCE_VALUE;
use finetune_core::viability::{classify_constants, tally};
use finetune_core::{compute_scores, sweep, ConstantKind, ConstantSet};
use proptest::prelude::*;

/// Values just outside each constant's ok band, on both sides
fn out_of_band_values(kind: ConstantKind) -> [f64; 2] {
    match kind {
        ConstantKind::Gravity => [0.2, 3.1],
        ConstantKind::Electromagnetic => [0.04, 1.6],
        ConstantKind::Strong => [0.2, 5.1],
        ConstantKind::Cosmological => [0.0, 1.6],
    }
}

fn constant_set() -> impl Strategy<Value = ConstantSet> {
    (0.1f64..=10.0, 0.01f64..=2.0, 0.1f64..=10.0, 0.0f64..=2.0)
        .prop_map(|(g, a, s, l)| ConstantSet::new(g, a, s, l).unwrap())
}

fn score_of(set: &ConstantSet) -> u8 {
    let classified = classify_constants(set);
    tally(&classified).score
}

#[test]
fn test_leaving_ok_band_costs_exactly_one_point() {
    let home = ConstantSet::reference();
    assert_eq!(score_of(&home), 4);

    for kind in ConstantKind::ALL {
        assert!(constant_bands(kind).classify(REFERENCE_VALUE).is_ok());
        for value in out_of_band_values(kind) {
            let moved = home.with(kind, value).unwrap();
            assert_eq!(
                score_of(&moved),
                3,
                "moving {} to {} should cost one point",
                kind,
                value
            );
        }
    }
}

proptest! {
    /// Property: every derived score is strictly positive and finite.
    #[test]
    fn scores_are_positive_and_finite(set in constant_set()) {
        let s = compute_scores(&set);
        for v in [s.star_score, s.atom_score, s.cosmos_score, s.life_score] {
            prop_assert!(v.is_finite());
            prop_assert!(v > 0.0);
        }
    }

    /// Property: the tally equals the number of ok constant bands.
    #[test]
    fn tally_counts_ok_bands(set in constant_set()) {
        let expected = ConstantKind::ALL
            .iter()
            .filter(|&&kind| constant_bands(kind).classify(set.get(kind)).is_ok())
            .count() as u8;
        prop_assert_eq!(score_of(&set), expected);
        prop_assert!(expected <= 4);
    }

    /// Property: pushing one constant out of its ok band drops the tally by one.
    #[test]
    fn tally_is_monotonic_per_dimension(
        set in constant_set(),
        kind_index in 0usize..4,
        side in 0usize..2,
    ) {
        let kind = ConstantKind::ALL[kind_index];
        let anchored = set.with(kind, REFERENCE_VALUE).unwrap();
        let moved = anchored.with(kind, out_of_band_values(kind)[side]).unwrap();
        prop_assert_eq!(score_of(&anchored), score_of(&moved) + 1);
    }

    /// Property: the sweep is always 50x50 with exact axis endpoints.
    #[test]
    fn sweep_shape_is_fixed(strong in 0.1f64..=10.0, alpha in 0.01f64..=2.0) {
        let grid = sweep(strong, alpha).unwrap();
        prop_assert_eq!(grid.rows(), 50);
        prop_assert_eq!(grid.columns(), 50);
        prop_assert_eq!(grid.g_values[0], 0.1);
        prop_assert_eq!(grid.g_values[49], 10.0);
        prop_assert_eq!(grid.lambda_values[0], 0.01);
        prop_assert_eq!(grid.lambda_values[49], 2.0);
        prop_assert!(grid.values.iter().flatten().all(|v| v.is_finite() && *v > 0.0));
    }

    /// Property: compute_scores is bit-identical across calls.
    #[test]
    fn compute_scores_is_pure(set in constant_set()) {
        let a = compute_scores(&set);
        let b = compute_scores(&set);
        prop_assert_eq!(a.life_score.to_bits(), b.life_score.to_bits());
        prop_assert_eq!(a, b);
    }
}
