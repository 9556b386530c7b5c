//! Segment-anchored comparison: the segments of one profile serve as the regions.
use cnvpair_core::chrom::ContigPolicy;
use cnvpair_core::models::{AggregationResult, AggregationTable, NamedRegion, Profile};
use tracing::{debug, info};

use crate::config::AggregateConfig;
use crate::errors::Result;
use crate::pair::{check_chromosomes, prepare};
use crate::reduce::IndexedProfile;

///
/// Compare two profiles segment by segment.
///
/// Every autosomal segment of `anchor` with at least `config.min_probes` probes becomes a
/// row labelled `chrom:start-end`. `value1` is the segment's own value and `value2` the
/// size-weighted mean of the `other` segments overlapping it. Segments without a probe
/// count are always used. Anchor segments that overlap nothing in `other` are skipped and
/// counted in [`AggregationTable::dropped`].
///
/// # Arguments
/// - anchor: profile whose segments define the regions
/// - other: profile aggregated over those regions
/// - config: probe threshold
pub fn cut_segments(
    anchor: &Profile,
    other: &Profile,
    config: &AggregateConfig,
) -> Result<AggregationTable> {
    let autosomes = AggregateConfig {
        contigs: ContigPolicy::Autosomes,
        ..config.clone()
    };
    let anchor = prepare(anchor, &autosomes);
    let other = prepare(other, &autosomes);
    check_chromosomes(&anchor, &other)?;

    let indexed = IndexedProfile::new(&other);
    let mut table = AggregationTable::new(vec![
        anchor.sample_id.clone(),
        other.sample_id.clone(),
    ]);
    let mut too_few_probes = 0usize;

    for segment in &anchor {
        if let (Some(min), Some(probes)) = (config.min_probes, segment.probes) {
            if probes < min {
                too_few_probes += 1;
                continue;
            }
        }

        let label = segment.coord_string();
        match indexed.value_over(&segment.chrom, segment.start, segment.end, &label)? {
            Some(value) => {
                let region = NamedRegion::new(&segment.chrom, segment.start, segment.end, &label)?;
                table.rows.push(AggregationResult {
                    region,
                    values: vec![Some(segment.value), Some(value)],
                });
            }
            None => {
                debug!("Skipping {label}: covers no {} segments", other.sample_id);
                table.dropped += 1;
            }
        }
    }

    info!(
        "Compared {} segments ({} with too few probes, {} without overlap)",
        table.len(),
        too_few_probes,
        table.dropped
    );
    Ok(table)
}
