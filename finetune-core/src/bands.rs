//! Threshold band classification
//!
//! Each constant and each derived score has an ordered table of bands. The
//! first matching band wins; every table ends in an unconditional fallback,
//! so classification is total.
//!
//! Global invariants enforced:
//! - Band boundaries are exact: `Below` and `Above` are strict comparisons,
//!   so the boundary value itself lands in the fallback band
//! - Score bands are narrative only and never feed the viability tally

use crate::constants::ConstantKind;
use crate::error::{Result, ScoringError};
use crate::scores::ScoreKind;
use serde::Serialize;

/// How bad a classification is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warning,
    Error,
}

impl Severity {
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Ok => "✓",
            Severity::Warning => "!",
            Severity::Error => "✗",
        }
    }
}

/// Condition a value must meet to fall into a band
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Predicate {
    /// value < bound
    Below(f64),
    /// value > bound
    Above(f64),
    /// low < value < high
    Between(f64, f64),
}

impl Predicate {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Predicate::Below(bound) => value < bound,
            Predicate::Above(bound) => value > bound,
            Predicate::Between(low, high) => value > low && value < high,
        }
    }
}

/// Outcome attached to a band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub severity: Severity,
    /// Short label, e.g. "too weak"
    pub label: &'static str,
    /// One-line consequence for display
    pub message: &'static str,
    /// Longer explanation used in the narrative paragraph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'static str>,
}

impl Classification {
    pub fn is_ok(&self) -> bool {
        self.severity == Severity::Ok
    }
}

/// A predicate and the classification it selects
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub predicate: Predicate,
    pub outcome: Classification,
}

/// Ordered bands plus the classification used when none match
#[derive(Debug, Clone, Copy)]
pub struct BandTable {
    pub bands: &'static [Band],
    pub otherwise: Classification,
}

impl BandTable {
    pub fn classify(&self, value: f64) -> Classification {
        self.bands
            .iter()
            .find(|band| band.predicate.matches(value))
            .map(|band| band.outcome)
            .unwrap_or(self.otherwise)
    }
}

const fn band(
    predicate: Predicate,
    severity: Severity,
    label: &'static str,
    message: &'static str,
) -> Band {
    Band {
        predicate,
        outcome: Classification {
            severity,
            label,
            message,
            detail: None,
        },
    }
}

const fn narrated(
    predicate: Predicate,
    severity: Severity,
    label: &'static str,
    message: &'static str,
    detail: &'static str,
) -> Band {
    Band {
        predicate,
        outcome: Classification {
            severity,
            label,
            message,
            detail: Some(detail),
        },
    }
}

const fn ok(label: &'static str, message: &'static str) -> Classification {
    Classification {
        severity: Severity::Ok,
        label,
        message,
        detail: None,
    }
}

const fn ok_narrated(
    label: &'static str,
    message: &'static str,
    detail: &'static str,
) -> Classification {
    Classification {
        severity: Severity::Ok,
        label,
        message,
        detail: Some(detail),
    }
}

pub const GRAVITY_BANDS: BandTable = BandTable {
    bands: &[
        band(
            Predicate::Below(0.3),
            Severity::Error,
            "too weak",
            "Too weak: no stars or galaxies form.",
        ),
        band(
            Predicate::Above(3.0),
            Severity::Error,
            "too strong",
            "Too strong: stars collapse quickly.",
        ),
    ],
    otherwise: ok("stable", "Gravity supports stable star formation."),
};

pub const ELECTROMAGNETIC_BANDS: BandTable = BandTable {
    bands: &[
        band(
            Predicate::Below(0.05),
            Severity::Error,
            "too weak",
            "Atoms are unstable and chemistry fails.",
        ),
        band(
            Predicate::Above(1.5),
            Severity::Error,
            "too strong",
            "Electron orbits collapse.",
        ),
    ],
    otherwise: ok("stable", "Supports stable atoms and chemistry."),
};

pub const STRONG_BANDS: BandTable = BandTable {
    bands: &[
        band(
            Predicate::Below(0.3),
            Severity::Error,
            "too weak",
            "No nuclei form, only bare protons.",
        ),
        band(
            Predicate::Above(5.0),
            Severity::Error,
            "too strong",
            "Hydrogen fuses instantly and stars do not last.",
        ),
    ],
    otherwise: ok("stable", "Enables atomic nuclei and fusion."),
};

// Λ is the only constant whose low band is a warning.
pub const COSMOLOGICAL_BANDS: BandTable = BandTable {
    bands: &[
        band(
            Predicate::Below(0.01),
            Severity::Warning,
            "too weak",
            "The universe collapses early.",
        ),
        band(
            Predicate::Above(1.5),
            Severity::Error,
            "too strong",
            "Expands too fast for galaxies to form.",
        ),
    ],
    otherwise: ok("stable", "Balanced cosmic expansion."),
};

pub const STAR_BANDS: BandTable = BandTable {
    bands: &[
        narrated(
            Predicate::Below(0.1),
            Severity::Error,
            "too slow",
            "Too little star formation: gravity or fusion is failing.",
            "Gravity or the strong force is too weak, so stars cannot form or sustain fusion.",
        ),
        narrated(
            Predicate::Above(10.0),
            Severity::Error,
            "too rapid",
            "Stars form too rapidly and burn out instantly.",
            "Stars form too rapidly and burn out quickly under overly strong gravity or fusion.",
        ),
    ],
    otherwise: ok_narrated(
        "stable",
        "Star formation occurs at a stable, life-supporting rate.",
        "Star formation appears stable and sustained.",
    ),
};

pub const ATOM_BANDS: BandTable = BandTable {
    bands: &[
        narrated(
            Predicate::Below(0.05),
            Severity::Error,
            "unstable",
            "No stable atoms: chemistry collapses.",
            "The electromagnetic force is too weak to bind electrons to nuclei, so chemistry collapses.",
        ),
        narrated(
            Predicate::Above(5.0),
            Severity::Warning,
            "extreme bonding",
            "Extreme bonding: weird chemistry may dominate.",
            "Bonding is too intense and exotic chemistry may dominate.",
        ),
    ],
    otherwise: ok_narrated(
        "stable",
        "Atoms can form stable, diverse chemical structures.",
        "Atomic structure is stable, allowing for complex molecules.",
    ),
};

pub const COSMOS_BANDS: BandTable = BandTable {
    bands: &[
        narrated(
            Predicate::Below(0.2),
            Severity::Error,
            "collapsing",
            "Universe collapses too soon: gravity dominates.",
            "Gravity overwhelms expansion and the universe collapses prematurely.",
        ),
        narrated(
            Predicate::Above(10.0),
            Severity::Error,
            "runaway expansion",
            "Universe expands too fast: no structures can form.",
            "Expansion dominates and matter never forms galaxies.",
        ),
    ],
    otherwise: ok_narrated(
        "balanced",
        "Expansion is balanced with gravitational pull.",
        "Cosmic expansion and gravitational attraction are well-balanced.",
    ),
};

// The life gate is open on both ends: exactly 0.5 or 5.0 is "unlikely".
pub const LIFE_BANDS: BandTable = BandTable {
    bands: &[band(
        Predicate::Between(0.5, 5.0),
        Severity::Ok,
        "may support life",
        "This universe might support life!",
    )],
    otherwise: Classification {
        severity: Severity::Warning,
        label: "unlikely",
        message: "Too many physical extremes: unlikely to be life-permitting.",
        detail: None,
    },
};

/// Band table for a constant
pub fn constant_bands(kind: ConstantKind) -> &'static BandTable {
    match kind {
        ConstantKind::Gravity => &GRAVITY_BANDS,
        ConstantKind::Electromagnetic => &ELECTROMAGNETIC_BANDS,
        ConstantKind::Strong => &STRONG_BANDS,
        ConstantKind::Cosmological => &COSMOLOGICAL_BANDS,
    }
}

/// Band table for a derived score
pub fn score_bands(kind: ScoreKind) -> &'static BandTable {
    match kind {
        ScoreKind::Star => &STAR_BANDS,
        ScoreKind::Atom => &ATOM_BANDS,
        ScoreKind::Cosmos => &COSMOS_BANDS,
        ScoreKind::Life => &LIFE_BANDS,
    }
}

/// Classify a raw constant value
///
/// Rejects values outside the constant's input range.
pub fn classify_constant(kind: ConstantKind, value: f64) -> Result<Classification> {
    let value = kind.check(value)?;
    Ok(constant_bands(kind).classify(value))
}

/// Classify a raw derived-score value
///
/// Rejects NaN, infinities and negatives, none of which an in-range
/// constant set can produce.
pub fn classify_score(kind: ScoreKind, value: f64) -> Result<Classification> {
    if !value.is_finite() || value < 0.0 {
        return Err(ScoringError::InvalidScore { kind, value });
    }
    Ok(score_bands(kind).classify(value))
}
