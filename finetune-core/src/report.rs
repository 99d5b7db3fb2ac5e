//! Reporting and output generation
//!
//! Global invariants enforced:
//! - Deterministic output ordering (canonical constant and score order)
//! - Byte-for-byte identical output across runs

use crate::bands::Classification;
use crate::constants::ConstantKind;
use crate::reference::{
    Deviation, ANTHROPIC_PRINCIPLE, FINE_TUNING_INTRO, FINE_TUNING_NOTES, REAL_CONSTANTS,
    TUNING_PRECISION,
};
use crate::scores::{DerivedScores, ScoreKind};
use crate::sweep::ParameterSweepGrid;
use crate::viability::Viability;
use serde::Serialize;

/// Characters used for the text heatmap, low to high
const HEAT_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// One constant with its band
#[derive(Debug, Clone, Serialize)]
pub struct ConstantReport {
    pub kind: ConstantKind,
    pub name: &'static str,
    pub symbol: &'static str,
    pub value: f64,
    pub classification: Classification,
}

/// One derived score with its band
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub kind: ScoreKind,
    pub value: f64,
    pub classification: Classification,
}

/// Everything produced by a single evaluation pass
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub constants: Vec<ConstantReport>,
    pub viability: Viability,
    pub scores: DerivedScores,
    pub score_classifications: Vec<ScoreReport>,
    pub explanation: String,
    pub comparison: Vec<Deviation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweep: Option<ParameterSweepGrid>,
}

impl Evaluation {
    /// Classification of the final life gate
    pub fn life_potential(&self) -> Option<&Classification> {
        self.score_classifications
            .iter()
            .find(|s| s.kind == ScoreKind::Life)
            .map(|s| &s.classification)
    }
}

/// Text rendering knobs
#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    pub precision: usize,
    pub explain: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions {
            precision: crate::config::DEFAULT_PRECISION,
            explain: false,
        }
    }
}

/// Render an evaluation as text output
pub fn render_text(evaluation: &Evaluation, options: &TextOptions) -> String {
    let p = options.precision;
    let mut output = String::new();

    output.push_str("CONSTANTS\n");
    for c in &evaluation.constants {
        output.push_str(&format!(
            "  {} {} {:>8.p$}  {:<12} {}\n",
            c.classification.severity.marker(),
            pad(c.name, 28),
            c.value,
            c.classification.label,
            c.classification.message,
            p = p
        ));
    }

    output.push_str(&format!(
        "\nVIABILITY  {} ({}/{})\n",
        evaluation.viability.label, evaluation.viability.score, evaluation.viability.max
    ));

    output.push_str("\nDERIVED SCORES\n");
    for s in &evaluation.score_classifications {
        output.push_str(&format!(
            "  {} {} {:>8.p$}  {:<18} {}\n",
            s.classification.severity.marker(),
            pad(s.kind.title(), 27),
            s.value,
            s.classification.label,
            s.classification.message,
            p = p
        ));
    }

    output.push_str("\nHOW FAR FROM HOME\n");
    for d in &evaluation.comparison {
        output.push_str(&format!(
            "  {} {:>8.p$}  (real {:.p$}, {:+.p$})\n",
            pad(d.name, 28),
            d.value,
            d.reference,
            d.difference,
            p = p
        ));
    }

    if options.explain {
        output.push_str("\nWHY THIS UNIVERSE BEHAVES THIS WAY\n");
        output.push_str(&format!("  {}\n", evaluation.explanation));
        output.push_str("\nWHAT THE CONSTANTS MEAN\n");
        for c in &evaluation.constants {
            output.push_str(&format!("  {}: {}\n", c.symbol, c.kind.description()));
        }
    }

    if let Some(ref grid) = evaluation.sweep {
        output.push('\n');
        output.push_str(&render_sweep_text(grid, p));
    }

    output
}

/// Render an evaluation as JSON output
pub fn render_json(evaluation: &Evaluation) -> String {
    serde_json::to_string_pretty(evaluation).unwrap_or_else(|_| "{}".to_string())
}

/// Render a sweep as a shaded text heatmap
///
/// Row order matches the grid (first G value first); shading is scaled
/// between the grid's own minimum and maximum.
pub fn render_sweep_text(grid: &ParameterSweepGrid, precision: usize) -> String {
    let (lo, hi) = grid.value_range();
    let span = hi - lo;
    let mut output = format!(
        "LIFE SCORE ACROSS {} AND {} (S={:.p$}, α={:.p$})\n",
        grid.row_axis,
        grid.column_axis,
        grid.fixed_strong,
        grid.fixed_alpha,
        p = precision
    );
    output.push_str(&format!(
        "  {} from {:.p$} to {:.p$}, shaded '{}' (low) to '{}' (high)\n",
        grid.value_label,
        lo,
        hi,
        HEAT_RAMP[0],
        HEAT_RAMP[HEAT_RAMP.len() - 1],
        p = precision
    ));

    for (g, row) in grid.g_values.iter().zip(&grid.values) {
        let shades: String = row.iter().map(|&v| shade(v, lo, span)).collect();
        output.push_str(&format!("  {}={:>6.2} |{}|\n", grid.row_axis, g, shades));
    }

    if let (Some(first), Some(last)) = (grid.lambda_values.first(), grid.lambda_values.last()) {
        output.push_str(&format!(
            "  {:>8} {} from {:.2} to {:.2}\n",
            "",
            grid.column_axis,
            first,
            last
        ));
    }

    output
}

/// Render a sweep as CSV: header row of Λ values, one row per G value
pub fn render_sweep_csv(grid: &ParameterSweepGrid) -> String {
    let mut output = format!("{}\\{}", grid.row_axis, grid.column_axis);
    for lam in &grid.lambda_values {
        output.push_str(&format!(",{}", lam));
    }
    output.push('\n');

    for (g, row) in grid.g_values.iter().zip(&grid.values) {
        output.push_str(&g.to_string());
        for v in row {
            output.push_str(&format!(",{}", v));
        }
        output.push('\n');
    }

    output
}

/// Render a sweep as JSON output
pub fn render_sweep_json(grid: &ParameterSweepGrid) -> String {
    serde_json::to_string_pretty(grid).unwrap_or_else(|_| "{}".to_string())
}

/// Reference tables in one serializable bundle
#[derive(Debug, Clone, Serialize)]
struct ReferenceTables {
    real_constants: Vec<crate::reference::RealConstant>,
    tuning_precision: Vec<PrecisionRow>,
    notes: Vec<NoteRow>,
    summary: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct NoteRow {
    kind: ConstantKind,
    note: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct PrecisionRow {
    kind: ConstantKind,
    viable_range: &'static str,
    tolerance: f64,
    magnitude: f64,
}

/// Render the real-world constants and fine-tuning precision as text
pub fn render_reference_text() -> String {
    let mut output = String::from("REAL-WORLD PHYSICAL CONSTANTS\n");
    for c in &REAL_CONSTANTS {
        output.push_str(&format!("  {} {}\n", pad(c.name, 36), c.value));
        output.push_str(&format!("  {} {}\n", pad("", 36), c.significance));
    }
    output.push_str("  Inputs are relative: 1.0 equals the measured value in our universe.\n");

    output.push_str("\nFINE-TUNING PRECISION (orders of magnitude)\n");
    for t in &TUNING_PRECISION {
        output.push_str(&format!(
            "  {} {:>7.2}  {}\n",
            pad(t.kind.display_name(), 28),
            t.magnitude(),
            t.viable_range
        ));
    }

    output.push_str("\nWHAT DOES THIS MEAN?\n");
    output.push_str(&format!("  {}\n", FINE_TUNING_INTRO));
    for (kind, note) in &FINE_TUNING_NOTES {
        output.push_str(&format!("  - {}: {}\n", kind.display_name(), note));
    }
    output.push_str(&format!("  {}\n", ANTHROPIC_PRINCIPLE));

    output
}

/// Render the reference tables as JSON output
pub fn render_reference_json() -> String {
    let tables = ReferenceTables {
        real_constants: REAL_CONSTANTS.to_vec(),
        tuning_precision: TUNING_PRECISION
            .iter()
            .map(|t| PrecisionRow {
                kind: t.kind,
                viable_range: t.viable_range,
                tolerance: t.tolerance,
                magnitude: t.magnitude(),
            })
            .collect(),
        notes: FINE_TUNING_NOTES
            .iter()
            .map(|&(kind, note)| NoteRow { kind, note })
            .collect(),
        summary: ANTHROPIC_PRINCIPLE,
    };
    serde_json::to_string_pretty(&tables).unwrap_or_else(|_| "{}".to_string())
}

/// Map a value onto the heat ramp
fn shade(value: f64, lo: f64, span: f64) -> char {
    let last = HEAT_RAMP.len() - 1;
    if span <= 0.0 {
        return HEAT_RAMP[last / 2];
    }
    let index = (((value - lo) / span) * last as f64).round() as usize;
    HEAT_RAMP[index.min(last)]
}

/// Pad string to a fixed character width (never truncates)
fn pad(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
