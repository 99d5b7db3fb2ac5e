//! The four adjustable constants and their input contract
//!
//! Values are dimensionless multiples of our universe's measured constants,
//! so 1.0 is "reality" for every kind.
//!
//! Global invariants enforced:
//! - A `ConstantSet` can only be built from in-range, finite values
//! - Kind order is fixed: gravity, electromagnetic, strong, cosmological

use crate::error::{Result, ScoringError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference value for every constant (our universe)
pub const REFERENCE_VALUE: f64 = 1.0;

/// Identifies one of the four adjustable constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantKind {
    Gravity,
    Electromagnetic,
    Strong,
    Cosmological,
}

/// Inclusive bounds and slider step for one constant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ValidRange {
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

impl ConstantKind {
    /// All kinds in canonical order
    pub const ALL: [ConstantKind; 4] = [
        ConstantKind::Gravity,
        ConstantKind::Electromagnetic,
        ConstantKind::Strong,
        ConstantKind::Cosmological,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConstantKind::Gravity => "gravity",
            ConstantKind::Electromagnetic => "electromagnetic",
            ConstantKind::Strong => "strong",
            ConstantKind::Cosmological => "cosmological",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ConstantKind::Gravity => "G",
            ConstantKind::Electromagnetic => "α",
            ConstantKind::Strong => "S",
            ConstantKind::Cosmological => "Λ",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ConstantKind::Gravity => "Gravitational Constant (G)",
            ConstantKind::Electromagnetic => "Electromagnetic Force (α)",
            ConstantKind::Strong => "Strong Nuclear Force",
            ConstantKind::Cosmological => "Cosmological Constant (Λ)",
        }
    }

    /// Short label used in comparison charts
    pub fn chart_label(&self) -> &'static str {
        match self {
            ConstantKind::Gravity => "Gravity (G)",
            ConstantKind::Electromagnetic => "Electromagnetism (α)",
            ConstantKind::Strong => "Strong Force",
            ConstantKind::Cosmological => "Cosmological Const. (Λ)",
        }
    }

    /// Valid input range
    ///
    /// | Kind | Range | Step |
    /// |---|---|---|
    /// | gravity | [0.1, 10.0] | 0.1 |
    /// | electromagnetic | [0.01, 2.0] | 0.01 |
    /// | strong | [0.1, 10.0] | 0.1 |
    /// | cosmological | [0.0, 2.0] | 0.01 |
    pub fn range(&self) -> ValidRange {
        match self {
            ConstantKind::Gravity => ValidRange {
                min: 0.1,
                max: 10.0,
                step: 0.1,
            },
            ConstantKind::Electromagnetic => ValidRange {
                min: 0.01,
                max: 2.0,
                step: 0.01,
            },
            ConstantKind::Strong => ValidRange {
                min: 0.1,
                max: 10.0,
                step: 0.1,
            },
            ConstantKind::Cosmological => ValidRange {
                min: 0.0,
                max: 2.0,
                step: 0.01,
            },
        }
    }

    /// Plain-language explanation of what the constant governs
    pub fn description(&self) -> &'static str {
        match self {
            ConstantKind::Gravity => {
                "Gravity decides how matter clumps together. With too little, stars never ignite; with too much, everything collapses quickly."
            }
            ConstantKind::Electromagnetic => {
                "Electromagnetism holds atoms together. Push it too far either way and atoms stop existing."
            }
            ConstantKind::Strong => {
                "The strong force binds protons and neutrons. Without it, nothing heavier than hydrogen survives."
            }
            ConstantKind::Cosmological => {
                "The cosmological constant sets how fast space expands. It has to be tuned finely for structure to form."
            }
        }
    }

    /// Check a raw value against this kind's range
    pub fn check(&self, value: f64) -> Result<f64> {
        let range = self.range();
        if range.contains(value) {
            Ok(value)
        } else {
            Err(ScoringError::OutOfRange {
                kind: *self,
                value,
                min: range.min,
                max: range.max,
            })
        }
    }
}

impl fmt::Display for ConstantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated set of the four constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConstantSet {
    gravity: f64,
    electromagnetic: f64,
    strong: f64,
    cosmological: f64,
}

impl ConstantSet {
    /// Build a constant set, rejecting any value outside its range
    pub fn new(gravity: f64, electromagnetic: f64, strong: f64, cosmological: f64) -> Result<Self> {
        Ok(ConstantSet {
            gravity: ConstantKind::Gravity.check(gravity)?,
            electromagnetic: ConstantKind::Electromagnetic.check(electromagnetic)?,
            strong: ConstantKind::Strong.check(strong)?,
            cosmological: ConstantKind::Cosmological.check(cosmological)?,
        })
    }

    /// Our universe: every constant at 1.0
    pub fn reference() -> Self {
        ConstantSet {
            gravity: REFERENCE_VALUE,
            electromagnetic: REFERENCE_VALUE,
            strong: REFERENCE_VALUE,
            cosmological: REFERENCE_VALUE,
        }
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn electromagnetic(&self) -> f64 {
        self.electromagnetic
    }

    pub fn strong(&self) -> f64 {
        self.strong
    }

    pub fn cosmological(&self) -> f64 {
        self.cosmological
    }

    pub fn get(&self, kind: ConstantKind) -> f64 {
        match kind {
            ConstantKind::Gravity => self.gravity,
            ConstantKind::Electromagnetic => self.electromagnetic,
            ConstantKind::Strong => self.strong,
            ConstantKind::Cosmological => self.cosmological,
        }
    }

    /// Copy of this set with one constant replaced
    pub fn with(&self, kind: ConstantKind, value: f64) -> Result<Self> {
        let value = kind.check(value)?;
        let mut next = *self;
        match kind {
            ConstantKind::Gravity => next.gravity = value,
            ConstantKind::Electromagnetic => next.electromagnetic = value,
            ConstantKind::Strong => next.strong = value,
            ConstantKind::Cosmological => next.cosmological = value,
        }
        Ok(next)
    }

    /// (kind, value) pairs in canonical order
    pub fn entries(&self) -> [(ConstantKind, f64); 4] {
        ConstantKind::ALL.map(|kind| (kind, self.get(kind)))
    }
}

impl Default for ConstantSet {
    fn default() -> Self {
        ConstantSet::reference()
    }
}
