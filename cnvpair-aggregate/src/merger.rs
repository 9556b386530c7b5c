//! Squashing raw target rows into named regions.
//!
//! Capture panels list one row per probe or exon; for aggregation a gene should be one
//! region. Consecutive rows sharing chromosome and name are folded into a region spanning
//! their union.
use cnvpair_core::models::NamedRegion;
use tracing::debug;

use crate::config::AggregateConfig;

fn keep(region: &NamedRegion, min_region_size: u32) -> bool {
    region.n_rows > 1 || region.width() >= min_region_size
}

fn same_run(acc: &NamedRegion, row: &NamedRegion) -> bool {
    acc.chrom == row.chrom && acc.name == row.name
}

fn extend(acc: &mut NamedRegion, row: &NamedRegion) {
    acc.end = acc.end.max(row.end);
    acc.n_rows += row.n_rows;
}

///
/// Squash consecutive same-named rows into regions.
///
/// Rows are expected in (chromosome, start) order and are not re-sorted. Rows with an
/// ignored name, or on a chromosome the contig policy excludes, are skipped without
/// breaking a run. A region closed by the next row is kept when it came from more than one
/// row or spans at least `min_region_size` bases; the region still open at the end of the
/// input is always kept. When a dropped region sat between two runs of the same name, the
/// runs are joined, so squashing the output again changes nothing.
///
/// # Arguments
/// - rows: raw region rows, or the output of an earlier squash
/// - config: ignore list, contig policy and size threshold
pub fn squash_regions(rows: &[NamedRegion], config: &AggregateConfig) -> Vec<NamedRegion> {
    let mut squashed: Vec<NamedRegion> = Vec::new();
    let mut current: Option<NamedRegion> = None;
    let mut too_small = 0usize;

    for row in rows {
        if config.ignores(&row.name) || !config.contigs.keeps(&row.chrom) {
            continue;
        }
        if let Some(acc) = current.as_mut().filter(|acc| same_run(acc, row)) {
            extend(acc, row);
            continue;
        }

        let mut next = row.clone();
        if let Some(done) = current.take() {
            if keep(&done, config.min_region_size) {
                squashed.push(done);
            } else {
                debug!("dropping region {} ({} bp, one row)", done.name, done.width());
                too_small += 1;
                // a dropped region between two runs of one name does not split them
                if squashed.last().is_some_and(|prev| same_run(prev, row)) {
                    if let Some(mut prev) = squashed.pop() {
                        extend(&mut prev, row);
                        next = prev;
                    }
                }
            }
        }
        current = Some(next);
    }
    if let Some(last) = current {
        squashed.push(last);
    }

    debug!(
        "squashed {} rows into {} regions, {} too small",
        rows.len(),
        squashed.len(),
        too_small
    );
    squashed
}
