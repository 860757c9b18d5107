//! Full table of edge costs between every ordered pair of shreds

use crate::algorithm::cancellation::CancellationToken;
use crate::algorithm::cost::{PixelCost, edge_cost};
use crate::io::error::{Result, UnshredError, invalid_parameter};
use crate::spatial::{PixelSource, ShredLayout};
use ndarray::Array2;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Controls how the cost table is computed
pub struct TableOptions<'a> {
    /// Spread rows across the rayon thread pool
    pub parallel: bool,
    /// Checked before each row; a cancelled token aborts the computation
    pub cancellation: CancellationToken,
    /// Called once per finished row, from whichever thread computed it
    pub on_row: &'a (dyn Fn() + Sync),
}

impl Default for TableOptions<'_> {
    fn default() -> Self {
        Self {
            parallel: true,
            cancellation: CancellationToken::new(),
            on_row: &ignore_row,
        }
    }
}

const fn ignore_row() {}

/// Edge costs indexed by `(left, right)` shred
///
/// The diagonal holds no cost and is never reported.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeCostTable {
    costs: Array2<f64>,
}

impl EdgeCostTable {
    /// Compute every edge cost in parallel without cancellation
    ///
    /// # Errors
    ///
    /// Returns an error if an edge cost is not finite
    pub fn compute<S, M>(source: &S, layout: &ShredLayout, metric: &M) -> Result<Self>
    where
        S: PixelSource + Sync + ?Sized,
        M: PixelCost + Sync + ?Sized,
    {
        Self::compute_with(source, layout, metric, &TableOptions::default())
    }

    /// Compute every edge cost with explicit options
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The cancellation token is triggered before all rows finish
    /// - An edge cost is not finite
    pub fn compute_with<S, M>(
        source: &S,
        layout: &ShredLayout,
        metric: &M,
        options: &TableOptions<'_>,
    ) -> Result<Self>
    where
        S: PixelSource + Sync + ?Sized,
        M: PixelCost + Sync + ?Sized,
    {
        let shred_count = layout.shred_count();
        let completed = AtomicUsize::new(0);
        let start_time = Instant::now();

        let compute_row = |left: usize| -> Result<Vec<f64>> {
            if options.cancellation.is_cancelled() {
                return Err(UnshredError::Cancelled {
                    rows_completed: completed.load(Ordering::Relaxed),
                    rows_total: shred_count,
                });
            }

            let row = (0..shred_count)
                .map(|right| {
                    if left == right {
                        f64::INFINITY
                    } else {
                        edge_cost(source, layout, metric, left, right).unwrap_or(f64::INFINITY)
                    }
                })
                .collect();

            completed.fetch_add(1, Ordering::Relaxed);
            (options.on_row)();
            Ok(row)
        };

        let rows: Vec<Vec<f64>> = if options.parallel {
            (0..shred_count)
                .into_par_iter()
                .map(compute_row)
                .collect::<Result<_>>()?
        } else {
            (0..shred_count).map(compute_row).collect::<Result<_>>()?
        };

        log::debug!(
            "Computed {} edge costs in {:.2?} ({})",
            shred_count * shred_count.saturating_sub(1),
            start_time.elapsed(),
            if options.parallel {
                "parallel"
            } else {
                "sequential"
            }
        );

        let costs = Array2::from_shape_vec(
            (shred_count, shred_count),
            rows.into_iter().flatten().collect(),
        )
        .map_err(|e| invalid_parameter("cost_table", &shred_count, &e))?;

        Self::from_array(costs)
    }

    /// Wrap a precomputed square table
    ///
    /// Diagonal entries are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The table is not square
    /// - An off-diagonal cost is negative, infinite or NaN
    pub fn from_array(costs: Array2<f64>) -> Result<Self> {
        let (rows, cols) = costs.dim();
        if rows != cols {
            return Err(invalid_parameter(
                "cost_table",
                &format!("{rows}x{cols}"),
                &"cost table must be square",
            ));
        }

        for ((left, right), &cost) in costs.indexed_iter() {
            if left != right && !(cost.is_finite() && cost >= 0.0) {
                return Err(invalid_parameter(
                    "cost_table",
                    &cost,
                    &format!("edge {left} -> {right} must have a finite, non-negative cost"),
                ));
            }
        }

        Ok(Self { costs })
    }

    /// Number of shreds covered by the table
    pub fn shred_count(&self) -> usize {
        self.costs.nrows()
    }

    /// Cost of placing `right` immediately after `left`
    pub fn get(&self, left: usize, right: usize) -> Option<f64> {
        if left == right {
            return None;
        }
        self.costs.get((left, right)).copied()
    }

    /// Iterate `(left, right, cost)` over every ordered pair of distinct shreds
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.costs
            .indexed_iter()
            .filter(|((left, right), _)| left != right)
            .map(|((left, right), &cost)| (left, right, cost))
    }
}
