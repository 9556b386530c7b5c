//! Reducing the segments that overlap a region to one value.
use cnvpair_core::models::Profile;
use cnvpair_overlaprs::{ChromIndex, IntoChromIndex};

use crate::errors::{AggregateError, Result};

/// Relative slack allowed on the weighted-mean range check before it counts as a failure.
pub const RANGE_TOLERANCE: f64 = 1e-9;

///
/// Size-weighted mean of `(value, weight)` pairs.
///
/// No pairs, or no positive weight, gives `None`. A single pair gives its value unchanged.
/// Otherwise the mean is checked to lie within the range of the values: drift within
/// [`RANGE_TOLERANCE`] is clamped away, anything larger is an error.
///
/// # Arguments
/// - pairs: value and overlap length of each segment
/// - label: what is being reduced, for the error message
pub fn weighted_mean(pairs: &[(f64, u32)], label: &str) -> Result<Option<f64>> {
    let pairs: Vec<(f64, f64)> = pairs
        .iter()
        .filter(|(_, w)| *w > 0)
        .map(|(v, w)| (*v, f64::from(*w)))
        .collect();

    match pairs.as_slice() {
        [] => Ok(None),
        [(value, _)] => Ok(Some(*value)),
        _ => {
            let total: f64 = pairs.iter().map(|(_, w)| w).sum();
            let mean = pairs.iter().map(|(v, w)| v * w).sum::<f64>() / total;
            let (min, max) = pairs
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (v, _)| {
                    (lo.min(*v), hi.max(*v))
                });

            clamp_to_range(mean, min, max, label).map(Some)
        }
    }
}

///
/// Pull a mean that drifted just outside `[min, max]` back onto the range.
///
/// The allowed drift is [`RANGE_TOLERANCE`] relative to the larger magnitude of the bounds
/// (absolute below 1).
///
/// # Errors
/// [`AggregateError::MeanOutOfRange`] when the mean is not finite or lies further out.
pub(crate) fn clamp_to_range(mean: f64, min: f64, max: f64, label: &str) -> Result<f64> {
    let slack = RANGE_TOLERANCE * min.abs().max(max.abs()).max(1.0);
    if !mean.is_finite() || mean < min - slack || mean > max + slack {
        return Err(AggregateError::MeanOutOfRange {
            label: label.to_string(),
            mean,
            min,
            max,
        });
    }
    Ok(mean.clamp(min, max))
}

///
/// A profile together with its overlap index.
///
/// The index is built once and answers every region of a run.
pub struct IndexedProfile<'a> {
    pub profile: &'a Profile,
    index: ChromIndex,
}

impl<'a> IndexedProfile<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        IndexedProfile {
            profile,
            index: profile.into_chrom_index(),
        }
    }

    ///
    /// Aggregate the segments overlapping `[start, end)` on `chrom`.
    ///
    /// Segments are trimmed to the span and weighted by what is left of them. The chromosome
    /// may use either naming convention.
    ///
    /// # Returns
    /// `None` when nothing overlaps (or the span is empty).
    pub fn value_over(&self, chrom: &str, start: u32, end: u32, label: &str) -> Result<Option<f64>> {
        let pairs: Vec<(f64, u32)> = self
            .index
            .find(chrom, start, end)
            .into_iter()
            .map(|i| {
                let iv = &self.profile.intervals[i];
                (iv.value, iv.overlap_len(start, end))
            })
            .collect();
        weighted_mean(&pairs, label)
    }

    pub fn sample_id(&self) -> &str {
        &self.profile.sample_id
    }

    pub fn has_chrom(&self, chrom: &str) -> bool {
        self.index.contains_chrom(chrom)
    }
}
