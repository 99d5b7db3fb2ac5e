//! Derived viability scores
//!
//! Formulas:
//! - star   = 1 / (G * S)
//! - atom   = α / (S + 0.1)
//! - cosmos = G / (Λ + 0.1)
//! - life   = cbrt(star * atom * cosmos)
//!
//! Global invariants enforced:
//! - Single implementation of each formula (the sweep reuses it)
//! - No clamping of inputs or outputs
//! - Every score is strictly positive for in-range constants

use crate::constants::ConstantSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Additive offset keeping user-controlled denominators away from zero
pub const DENOMINATOR_OFFSET: f64 = 0.1;

/// Identifies one of the derived scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    Star,
    Atom,
    Cosmos,
    Life,
}

impl ScoreKind {
    pub const ALL: [ScoreKind; 4] = [
        ScoreKind::Star,
        ScoreKind::Atom,
        ScoreKind::Cosmos,
        ScoreKind::Life,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreKind::Star => "star_score",
            ScoreKind::Atom => "atom_score",
            ScoreKind::Cosmos => "cosmos_score",
            ScoreKind::Life => "life_score",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ScoreKind::Star => "Star Formation & Stability",
            ScoreKind::Atom => "Atomic & Chemical Stability",
            ScoreKind::Cosmos => "Cosmic Expansion Balance",
            ScoreKind::Life => "Life Potential",
        }
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores derived from one constant set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedScores {
    pub star_score: f64,
    pub atom_score: f64,
    pub cosmos_score: f64,
    pub life_score: f64,
}

impl DerivedScores {
    pub fn get(&self, kind: ScoreKind) -> f64 {
        match kind {
            ScoreKind::Star => self.star_score,
            ScoreKind::Atom => self.atom_score,
            ScoreKind::Cosmos => self.cosmos_score,
            ScoreKind::Life => self.life_score,
        }
    }
}

/// Compute all derived scores for a validated constant set
pub fn compute_scores(constants: &ConstantSet) -> DerivedScores {
    derive(
        constants.gravity(),
        constants.electromagnetic(),
        constants.strong(),
        constants.cosmological(),
    )
}

/// Raw formulas. Callers must pass values already inside their ranges.
pub(crate) fn derive(gravity: f64, alpha: f64, strong: f64, lambda: f64) -> DerivedScores {
    let star_score = 1.0 / (gravity * strong);
    let atom_score = alpha / (strong + DENOMINATOR_OFFSET);
    let cosmos_score = gravity / (lambda + DENOMINATOR_OFFSET);
    let life_score = (star_score * atom_score * cosmos_score).cbrt();

    DerivedScores {
        star_score,
        atom_score,
        cosmos_score,
        life_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_reference_universe_scores() {
        let scores = compute_scores(&ConstantSet::reference());

        assert_eq!(scores.star_score, 1.0);
        assert!(approx(scores.atom_score, 1.0 / 1.1));
        assert!(approx(scores.cosmos_score, 1.0 / 1.1));
        // cbrt(1.0 * (1/1.1)^2)
        assert!(approx(scores.life_score, (1.0f64 / 1.21).cbrt()));
        assert!((scores.life_score - 0.9384).abs() < 1e-4);
    }

    #[test]
    fn test_minimum_gravity_and_strong_give_star_score_100() {
        let set = ConstantSet::new(0.1, 1.0, 0.1, 1.0).unwrap();
        let scores = compute_scores(&set);
        assert!(approx(scores.star_score, 100.0));
    }

    #[test]
    fn test_zero_lambda_is_well_defined() {
        let set = ConstantSet::new(1.0, 1.0, 1.0, 0.0).unwrap();
        let scores = compute_scores(&set);
        assert!(approx(scores.cosmos_score, 10.0));
        assert!(scores.life_score.is_finite());
    }

    #[test]
    fn test_life_score_is_geometric_mean() {
        let set = ConstantSet::new(2.5, 0.4, 3.0, 0.7).unwrap();
        let s = compute_scores(&set);
        let product = s.star_score * s.atom_score * s.cosmos_score;
        assert!(approx(s.life_score.powi(3), product));
    }

    #[test]
    fn test_compute_scores_is_bit_identical() {
        let set = ConstantSet::new(7.3, 1.37, 0.4, 1.99).unwrap();
        let a = compute_scores(&set);
        let b = compute_scores(&set);
        assert_eq!(a.star_score.to_bits(), b.star_score.to_bits());
        assert_eq!(a.atom_score.to_bits(), b.atom_score.to_bits());
        assert_eq!(a.cosmos_score.to_bits(), b.cosmos_score.to_bits());
        assert_eq!(a.life_score.to_bits(), b.life_score.to_bits());
    }

    #[test]
    fn test_get_by_kind() {
        let scores = compute_scores(&ConstantSet::reference());
        assert_eq!(scores.get(ScoreKind::Star), scores.star_score);
        assert_eq!(scores.get(ScoreKind::Life), scores.life_score);
    }
}
