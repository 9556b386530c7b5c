use std::fmt::{self, Display};

use crate::errors::ModelError;

/// Label used by segment tables for rows that cover no gene.
pub const NO_LABEL: &str = "-";

///
/// GenomicInterval struct, one segment or bin of a copy number profile.
///
/// Coordinates are 0-based, half-open: `[start, end)`.
///
#[derive(Debug, Clone, PartialEq)]
pub struct GenomicInterval {
    pub chrom: String,
    pub start: u32,
    pub end: u32,
    pub value: f64,

    /// The `gene` column of the source table, `-` when the row covers no gene.
    pub label: String,
    pub probes: Option<u32>,
    pub weight: Option<f64>,
}

impl GenomicInterval {
    ///
    /// Create a new interval, rejecting empty spans and non-finite values.
    ///
    pub fn new(chrom: &str, start: u32, end: u32, value: f64) -> Result<Self, ModelError> {
        if end <= start {
            return Err(ModelError::EmptyInterval {
                chrom: chrom.to_string(),
                start,
                end,
            });
        }
        if !value.is_finite() {
            return Err(ModelError::NonFiniteValue {
                chrom: chrom.to_string(),
                start,
                end,
                value,
            });
        }
        Ok(GenomicInterval {
            chrom: chrom.to_string(),
            start,
            end,
            value,
            label: NO_LABEL.to_string(),
            probes: None,
            weight: None,
        })
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn with_probes(mut self, probes: u32) -> Self {
        self.probes = Some(probes);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn size(&self) -> u32 {
        self.end - self.start
    }

    ///
    /// Length of the part of this interval that falls inside `[start, end)`.
    ///
    /// Zero when the two ranges do not intersect.
    pub fn overlap_len(&self, start: u32, end: u32) -> u32 {
        self.end
            .min(end)
            .saturating_sub(self.start.max(start))
    }

    /// `chrom:start-end`, the coordinate string used as a row label.
    pub fn coord_string(&self) -> String {
        format!("{}:{}-{}", self.chrom, self.start, self.end)
    }
}

impl Display for GenomicInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.chrom, self.start, self.end, self.label, self.value
        )
    }
}
