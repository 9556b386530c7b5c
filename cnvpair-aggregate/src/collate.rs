//! Gene by sample tables from bin-level or segment-level profiles.
use std::collections::BTreeMap;

use cnvpair_core::chrom::ContigPolicy;
use cnvpair_core::models::{GeneTable, NO_LABEL, Profile};
use fxhash::FxHashMap as HashMap;
use tracing::{info, warn};

use crate::config::AggregateConfig;
use crate::pair::prepare;

///
/// One sample's value per gene.
///
/// Only autosomes are used. Rows weighted below `config.min_weight` (when it is positive)
/// and rows labelled `-` are skipped. With `segmented`, a label is a comma-separated gene
/// list and each listed gene takes the segment's value. A gene seen more than once is
/// removed from the sample altogether.
///
/// # Arguments
/// - profile: bins (`.cnr`) or segments (`.cns`) of one sample
/// - segmented: whether labels list several genes
/// - config: weight threshold
pub fn gene_values(
    profile: &Profile,
    segmented: bool,
    config: &AggregateConfig,
) -> BTreeMap<String, f64> {
    let autosomes = AggregateConfig {
        contigs: ContigPolicy::Autosomes,
        ..config.clone()
    };
    let profile = prepare(profile, &autosomes);

    let mut counts: HashMap<&str, usize> = HashMap::default();
    let mut values: BTreeMap<String, f64> = BTreeMap::new();
    let mut light = 0usize;

    for row in &profile {
        if config.min_weight > 0.0 && row.weight.is_some_and(|w| w < config.min_weight) {
            light += 1;
            continue;
        }
        if row.label == NO_LABEL {
            continue;
        }
        let genes: Vec<&str> = if segmented {
            row.label
                .split(',')
                .map(str::trim)
                .filter(|g| !g.is_empty() && *g != NO_LABEL)
                .collect()
        } else {
            vec![row.label.as_str()]
        };
        for gene in genes {
            *counts.entry(gene).or_default() += 1;
            values.insert(gene.to_string(), row.value);
        }
    }

    if light > 0 {
        info!(
            "{}: dropped {} rows with weight below {}",
            profile.sample_id, light, config.min_weight
        );
    }

    let duplicated: Vec<&str> = counts
        .iter()
        .filter(|(_, n)| **n > 1)
        .map(|(g, _)| *g)
        .collect();
    if !duplicated.is_empty() {
        warn!(
            "Found {} duplicated gene names in {}",
            duplicated.len(),
            profile.sample_id
        );
        for gene in duplicated {
            values.remove(gene);
        }
    }
    values
}

///
/// Outer join of several samples' gene values, ordered by gene name.
///
/// Columns follow the order of `profiles`; a gene missing from a sample is `None`.
pub fn collate_by_gene(
    profiles: &[Profile],
    segmented: bool,
    config: &AggregateConfig,
) -> GeneTable {
    let samples: Vec<String> = profiles.iter().map(|p| p.sample_id.clone()).collect();
    let mut rows: BTreeMap<String, Vec<Option<f64>>> = BTreeMap::new();

    for (col, profile) in profiles.iter().enumerate() {
        for (gene, value) in gene_values(profile, segmented, config) {
            rows.entry(gene).or_insert_with(|| vec![None; profiles.len()])[col] = Some(value);
        }
    }

    info!("Collated {} genes across {} samples", rows.len(), samples.len());
    GeneTable {
        samples,
        rows: rows.into_iter().collect(),
    }
}
