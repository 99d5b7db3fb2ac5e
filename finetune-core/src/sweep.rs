//! Life-score sweep over gravity and the cosmological constant
//!
//! Rows follow G, columns follow Λ, so the grid renders as a heatmap with
//! Λ on the x axis and G on the y axis without re-sorting.
//!
//! Global invariants enforced:
//! - Shape is always SWEEP_SAMPLES × SWEEP_SAMPLES
//! - Row i is computed at `g_values[i]`, column j at `lambda_values[j]`
//! - Axis endpoints are exact

use crate::constants::ConstantKind;
use crate::error::Result;
use crate::scores;
use serde::Serialize;

/// Samples per axis
pub const SWEEP_SAMPLES: usize = 50;

/// Gravity axis bounds (rows)
pub const G_AXIS: (f64, f64) = (0.1, 10.0);

/// Cosmological-constant axis bounds (columns)
pub const LAMBDA_AXIS: (f64, f64) = (0.01, 2.0);

/// Dense life-score grid plus axis coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSweepGrid {
    pub fixed_strong: f64,
    pub fixed_alpha: f64,
    pub row_axis: &'static str,
    pub column_axis: &'static str,
    pub value_label: &'static str,
    pub g_values: Vec<f64>,
    pub lambda_values: Vec<f64>,
    /// `values[i][j]` is the life score at (`g_values[i]`, `lambda_values[j]`)
    pub values: Vec<Vec<f64>>,
}

impl ParameterSweepGrid {
    pub fn rows(&self) -> usize {
        self.values.len()
    }

    pub fn columns(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(column)).copied()
    }

    /// (min, max) over every cell
    pub fn value_range(&self) -> (f64, f64) {
        self.values
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

/// `samples` evenly spaced points from `start` to `end`, both included
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Evaluate the life score across the G/Λ plane with S and α held fixed
///
/// Rejects `fixed_strong` or `fixed_alpha` outside their input ranges.
pub fn sweep(fixed_strong: f64, fixed_alpha: f64) -> Result<ParameterSweepGrid> {
    let strong = ConstantKind::Strong.check(fixed_strong)?;
    let alpha = ConstantKind::Electromagnetic.check(fixed_alpha)?;

    let g_values = linspace(G_AXIS.0, G_AXIS.1, SWEEP_SAMPLES);
    let lambda_values = linspace(LAMBDA_AXIS.0, LAMBDA_AXIS.1, SWEEP_SAMPLES);

    let values = g_values
        .iter()
        .map(|&g| {
            lambda_values
                .iter()
                .map(|&lam| scores::derive(g, alpha, strong, lam).life_score)
                .collect()
        })
        .collect();

    log::debug!(
        "swept {}x{} life scores at S={} α={}",
        SWEEP_SAMPLES,
        SWEEP_SAMPLES,
        strong,
        alpha
    );

    Ok(ParameterSweepGrid {
        fixed_strong: strong,
        fixed_alpha: alpha,
        row_axis: ConstantKind::Gravity.symbol(),
        column_axis: ConstantKind::Cosmological.symbol(),
        value_label: "life score",
        g_values,
        lambda_values,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ConstantSet;
    use crate::scores::compute_scores;

    #[test]
    fn test_linspace_endpoints_are_exact() {
        let points = linspace(0.1, 10.0, 50);
        assert_eq!(points.len(), 50);
        assert_eq!(points[0], 0.1);
        assert_eq!(points[49], 10.0);
        assert!(points.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.5, 1.0, 1), vec![0.5]);
    }

    #[test]
    fn test_sweep_shape_and_axes() {
        let grid = sweep(1.0, 1.0).unwrap();
        assert_eq!(grid.rows(), 50);
        assert_eq!(grid.columns(), 50);
        assert_eq!(grid.g_values[0], 0.1);
        assert_eq!(grid.lambda_values[0], 0.01);
        assert_eq!(grid.g_values[49], 10.0);
        assert_eq!(grid.lambda_values[49], 2.0);
        assert_eq!(grid.row_axis, "G");
        assert_eq!(grid.column_axis, "Λ");
        assert_eq!(grid.value_label, "life score");
    }

    #[test]
    fn test_sweep_corners_match_compute_scores() {
        let grid = sweep(2.0, 0.5).unwrap();

        let first = ConstantSet::new(0.1, 0.5, 2.0, 0.01).unwrap();
        assert_eq!(grid.get(0, 0), Some(compute_scores(&first).life_score));

        let last = ConstantSet::new(10.0, 0.5, 2.0, 2.0).unwrap();
        assert_eq!(grid.get(49, 49), Some(compute_scores(&last).life_score));
    }

    #[test]
    fn test_sweep_rows_follow_gravity() {
        let grid = sweep(1.0, 1.0).unwrap();
        let i = 17;
        let j = 33;
        let set = ConstantSet::new(grid.g_values[i], 1.0, 1.0, grid.lambda_values[j]).unwrap();
        assert_eq!(grid.values[i][j], compute_scores(&set).life_score);
    }

    #[test]
    fn test_sweep_rejects_out_of_range_fixed_values() {
        assert!(sweep(0.0, 1.0).is_err());
        assert!(sweep(1.0, 2.5).is_err());
    }

    #[test]
    fn test_value_range() {
        let grid = sweep(1.0, 1.0).unwrap();
        let (lo, hi) = grid.value_range();
        assert!(lo > 0.0);
        assert!(lo < hi);
        assert_eq!(grid.get(50, 0), None);
    }
}
