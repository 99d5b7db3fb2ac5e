//! Reference data about our universe
//!
//! Fixed tables of measured constants and how finely each one appears to be
//! tuned, plus a comparison of a constant set against reality.

use crate::constants::{ConstantKind, ConstantSet, REFERENCE_VALUE};
use serde::Serialize;

/// A measured constant of our universe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RealConstant {
    pub kind: ConstantKind,
    pub name: &'static str,
    pub value: &'static str,
    pub significance: &'static str,
}

pub const REAL_CONSTANTS: [RealConstant; 4] = [
    RealConstant {
        kind: ConstantKind::Gravity,
        name: "Gravitational Constant (G)",
        value: "6.674 × 10⁻¹¹ m³/kg·s²",
        significance: "Sets the strength of gravity. Altered by 1 part in 10³⁴, stars suitable for life could not exist.",
    },
    RealConstant {
        kind: ConstantKind::Electromagnetic,
        name: "Fine Structure Constant (α)",
        value: "≈ 1/137 (0.007297)",
        significance: "Governs electromagnetic interactions. A 4% change would make stellar fusion impossible.",
    },
    RealConstant {
        kind: ConstantKind::Strong,
        name: "Strong Nuclear Force Coupling (αs)",
        value: "≈ 0.1181 at Z boson mass",
        significance: "Binds nuclei together. A 2% change would prevent the stable elements life needs.",
    },
    RealConstant {
        kind: ConstantKind::Cosmological,
        name: "Cosmological Constant (Λ)",
        value: "≈ 1.1056 × 10⁻⁵² m⁻²",
        significance: "Drives cosmic expansion. Tuned to 1 part in 10¹²⁰, otherwise galaxies could not form.",
    },
];

/// How narrow the life-permitting window is for one constant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TuningPrecision {
    pub kind: ConstantKind,
    pub viable_range: &'static str,
    /// Relative tolerance before life becomes impossible
    pub tolerance: f64,
}

impl TuningPrecision {
    /// Orders of magnitude of precision, `-log10(tolerance)`
    ///
    /// Zero for a non-positive tolerance so the bar chart stays drawable.
    pub fn magnitude(&self) -> f64 {
        if self.tolerance > 0.0 {
            -self.tolerance.log10()
        } else {
            0.0
        }
    }
}

pub const TUNING_PRECISION: [TuningPrecision; 4] = [
    TuningPrecision {
        kind: ConstantKind::Gravity,
        viable_range: "±1 part in 10³⁴",
        tolerance: 1e-34,
    },
    TuningPrecision {
        kind: ConstantKind::Electromagnetic,
        viable_range: "±1 part in 25",
        tolerance: 0.04,
    },
    TuningPrecision {
        kind: ConstantKind::Strong,
        viable_range: "±2%",
        tolerance: 0.02,
    },
    TuningPrecision {
        kind: ConstantKind::Cosmological,
        viable_range: "±1 part in 10¹²⁰",
        tolerance: 1e-120,
    },
];

/// Opening line of the fine-tuning notes
pub const FINE_TUNING_INTRO: &str =
    "The fundamental constants of physics appear to be incredibly fine-tuned for life to exist:";

/// What a small change to each constant would do
pub const FINE_TUNING_NOTES: [(ConstantKind, &str); 4] = [
    (
        ConstantKind::Gravity,
        "If G were slightly stronger, stars would burn too quickly for life to evolve. If weaker, stars wouldn't form at all.",
    ),
    (
        ConstantKind::Electromagnetic,
        "Controls how atoms hold their electrons and interact with light. Small changes would prevent stable atoms or complex chemistry.",
    ),
    (
        ConstantKind::Strong,
        "Holds protons and neutrons together against electromagnetic repulsion. Slight changes would prevent elements heavier than hydrogen or cause all hydrogen to fuse immediately after the Big Bang.",
    ),
    (
        ConstantKind::Cosmological,
        "Drives the expansion of space. The observed value is extremely small but positive. If even slightly larger, matter would disperse too quickly for galaxies to form.",
    ),
];

pub const ANTHROPIC_PRINCIPLE: &str = "This remarkable fine-tuning has led some physicists to propose the Anthropic Principle, which suggests that these values appear fine-tuned because only in such universes could intelligent observers exist to measure them.";

/// One row of the "how far from home" comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Deviation {
    pub kind: ConstantKind,
    pub name: &'static str,
    pub value: f64,
    pub reference: f64,
    pub difference: f64,
}

/// Compare each constant against our universe, in canonical order
pub fn compare_to_reality(constants: &ConstantSet) -> Vec<Deviation> {
    constants
        .entries()
        .iter()
        .map(|&(kind, value)| Deviation {
            kind,
            name: kind.chart_label(),
            value,
            reference: REFERENCE_VALUE,
            difference: value - REFERENCE_VALUE,
        })
        .collect()
}
