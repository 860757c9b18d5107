//! Pixel dissimilarity metrics and the row-averaged edge cost between shreds

use crate::spatial::{PixelSource, ShredLayout};
use std::sync::LazyLock;

/// Dissimilarity between two pixels with the same channel layout
///
/// Implementors must be pure: equal inputs give bit-identical outputs.
pub trait PixelCost {
    /// Cost of placing pixel `a` directly left of pixel `b`
    fn cost(&self, a: &[u8], b: &[u8]) -> f64;
}

/// `ln(c / 255 + 1 / 255)` for every channel value
///
/// The offset keeps black finite while stretching dark tones, so dark seams
/// weigh more than bright ones.
static LOG_INTENSITY: LazyLock<[f64; 256]> = LazyLock::new(|| {
    let mut table = [0.0; 256];
    for (value, entry) in table.iter_mut().enumerate() {
        *entry = (value as f64 / 255.0 + 1.0 / 255.0).ln();
    }
    table
});

fn log_intensity(value: u8) -> f64 {
    LOG_INTENSITY.get(usize::from(value)).copied().unwrap_or(0.0)
}

/// Sum of squared differences of log-compressed channel intensities
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSquared;

impl PixelCost for LogSquared {
    fn cost(&self, a: &[u8], b: &[u8]) -> f64 {
        a.iter()
            .zip(b)
            .map(|(&first, &second)| (log_intensity(first) - log_intensity(second)).powi(2))
            .sum()
    }
}

/// Sum of absolute channel differences
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsoluteDifference;

impl PixelCost for AbsoluteDifference {
    fn cost(&self, a: &[u8], b: &[u8]) -> f64 {
        a.iter()
            .zip(b)
            .map(|(&first, &second)| f64::from(first.abs_diff(second)))
            .sum()
    }
}

/// Selectable pixel metric
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CostModel {
    /// Squared difference of log intensities, sensitive to dark tones
    #[default]
    LogSquared,
    /// Plain absolute difference per channel
    AbsDiff,
}

impl PixelCost for CostModel {
    fn cost(&self, a: &[u8], b: &[u8]) -> f64 {
        match self {
            Self::LogSquared => LogSquared.cost(a, b),
            Self::AbsDiff => AbsoluteDifference.cost(a, b),
        }
    }
}

/// Row-averaged cost of placing shred `right` immediately after shred `left`
///
/// Compares the rightmost column of `left` with the leftmost column of
/// `right`, one row at a time. Returns `None` when either index is outside
/// the layout.
pub fn edge_cost<S, M>(
    source: &S,
    layout: &ShredLayout,
    metric: &M,
    left: usize,
    right: usize,
) -> Option<f64>
where
    S: PixelSource + ?Sized,
    M: PixelCost + ?Sized,
{
    let left_x = layout.right_column(left)?;
    let right_x = layout.left_column(right)?;
    let height = layout.height();

    let mut total = 0.0;
    for y in 0..height {
        total += metric.cost(source.pixel_at(left_x, y), source.pixel_at(right_x, y));
    }

    Some(total / f64::from(height))
}
