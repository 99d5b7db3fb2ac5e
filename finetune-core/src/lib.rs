//! finetune core library - viability scoring for tweaked fundamental constants

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Every operation is a pure function of its inputs
// - No global mutable state
// - No randomness, clocks, threads, or async
// - Out-of-range input is rejected, never clamped
// - Identical input yields byte-for-byte identical output

pub mod bands;
pub mod config;
pub mod constants;
pub mod error;
pub mod reference;
pub mod report;
pub mod scores;
pub mod sweep;
pub mod viability;

pub use bands::{classify_constant, classify_score, Classification, Severity};
pub use config::ResolvedConfig;
pub use constants::{ConstantKind, ConstantSet};
pub use error::ScoringError;
pub use report::{render_json, render_text, Evaluation, TextOptions};
pub use scores::{compute_scores, DerivedScores, ScoreKind};
pub use sweep::{sweep, ParameterSweepGrid};
pub use viability::Viability;

use report::{ConstantReport, ScoreReport};

#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluateOptions {
    /// Also sweep G and Λ at the current S and α
    pub include_sweep: bool,
}

/// Run one full evaluation pass over a constant set
///
/// Recomputes every score, band and (optionally) the sweep from scratch.
pub fn evaluate(
    constants: &ConstantSet,
    options: EvaluateOptions,
) -> Result<Evaluation, ScoringError> {
    log::debug!("evaluating {:?}", constants);

    let classified = viability::classify_constants(constants);
    let tally = viability::tally(&classified);

    let scores = compute_scores(constants);
    let score_classifications = viability::classify_scores(&scores)
        .iter()
        .map(|&(kind, classification)| ScoreReport {
            kind,
            value: scores.get(kind),
            classification,
        })
        .collect();

    let constant_reports = classified
        .iter()
        .map(|&(kind, classification)| ConstantReport {
            kind,
            name: kind.display_name(),
            symbol: kind.symbol(),
            value: constants.get(kind),
            classification,
        })
        .collect();

    let sweep = if options.include_sweep {
        Some(sweep::sweep(constants.strong(), constants.electromagnetic())?)
    } else {
        None
    };

    Ok(Evaluation {
        constants: constant_reports,
        viability: tally,
        scores,
        score_classifications,
        explanation: viability::explain(&scores),
        comparison: reference::compare_to_reality(constants),
        sweep,
    })
}
