use std::fs::read_to_string;
use std::path::Path;

use cnvpair_core::chrom::ContigPolicy;
use cnvpair_core::models::NO_LABEL;
use cnvpair_io::{DEFAULT_VALUE_COL, Delimiter};
use serde::{Deserialize, Serialize};

use crate::errors::AggregateError;

/// Regions shorter than this are dropped unless several rows were squashed into them.
pub const DEFAULT_MIN_REGION_SIZE: u32 = 200;

/// Anchor segments need at least this many probes to be compared.
pub const DEFAULT_MIN_PROBES: u32 = 10;

/// Region names that are not genes: unnamed rows, aCGH backbone probes and off-target bins.
pub const DEFAULT_IGNORE_NAMES: [&str; 4] = [NO_LABEL, ".", "CGH", "Background"];

///
/// Settings shared by every aggregation.
///
/// Missing keys in a TOML file take their default:
///
/// ```toml
/// min_region_size = 200
/// ignore_names = ["-", ".", "CGH", "Background"]
/// contigs = "autosomes"
/// keep_partial = false
/// value_column = "log2"
/// min_probes = 10
/// min_weight = 0.0
/// delimiter = "comma"
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AggregateConfig {
    pub min_region_size: u32,
    pub ignore_names: Vec<String>,
    pub contigs: ContigPolicy,
    pub keep_partial: bool,
    pub value_column: String,
    /// `None` lets every anchor segment through.
    pub min_probes: Option<u32>,
    pub min_weight: f64,
    pub delimiter: Delimiter,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        AggregateConfig {
            min_region_size: DEFAULT_MIN_REGION_SIZE,
            ignore_names: DEFAULT_IGNORE_NAMES.iter().map(|n| n.to_string()).collect(),
            contigs: ContigPolicy::Autosomes,
            keep_partial: false,
            value_column: DEFAULT_VALUE_COL.to_string(),
            min_probes: Some(DEFAULT_MIN_PROBES),
            min_weight: 0.0,
            delimiter: Delimiter::Comma,
        }
    }
}

impl AggregateConfig {
    /// Whether rows called `name` are skipped by the region merger. `-` always is.
    pub fn ignores(&self, name: &str) -> bool {
        name == NO_LABEL || self.ignore_names.iter().any(|n| n == name)
    }
}

impl TryFrom<&Path> for AggregateConfig {
    type Error = AggregateError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}
