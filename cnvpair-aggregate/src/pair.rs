//! Aggregating several profiles over one region list.
use std::collections::BTreeSet;

use cnvpair_core::chrom::{is_autosome, normalize};
use cnvpair_core::models::{AggregationResult, AggregationTable, NamedRegion, Profile};
use fxhash::FxHashMap as HashMap;
use tracing::{debug, info};

use crate::config::AggregateConfig;
use crate::errors::{AggregateError, Result};
use crate::merger::squash_regions;
use crate::reduce::IndexedProfile;

///
/// Check that two profiles cover the same chromosomes.
///
/// Names are compared after stripping a leading `chr`. Sex chromosomes and unplaced contigs
/// are not considered.
///
/// # Errors
/// [`AggregateError::MismatchedChromosomes`] listing, as spelled in the inputs, every
/// chromosome found in only one of the two.
pub fn check_chromosomes(first: &Profile, other: &Profile) -> Result<()> {
    let names = |p: &Profile| -> HashMap<String, String> {
        p.chromosomes()
            .into_iter()
            .filter(|c| is_autosome(c))
            .map(|c| (normalize(c).to_string(), c.to_string()))
            .collect()
    };
    let a = names(first);
    let b = names(other);

    let mut only: Vec<String> = a
        .iter()
        .filter(|(k, _)| !b.contains_key(*k))
        .chain(b.iter().filter(|(k, _)| !a.contains_key(*k)))
        .map(|(_, name)| name.clone())
        .collect();

    if only.is_empty() {
        return Ok(());
    }
    only.sort();
    Err(AggregateError::MismatchedChromosomes(only))
}

///
/// Check that a region list is in (chromosome, start) order: each chromosome one
/// contiguous block with non-decreasing starts.
///
/// # Errors
/// [`AggregateError::UnsortedRegions`] naming the first row out of place (1-based).
pub fn check_sorted(regions: &[NamedRegion]) -> Result<()> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut prev: Option<&NamedRegion> = None;

    for (i, region) in regions.iter().enumerate() {
        let in_order = match prev {
            Some(p) if p.chrom == region.chrom => region.start >= p.start,
            _ => seen.insert(region.chrom.as_str()),
        };
        if !in_order {
            return Err(AggregateError::UnsortedRegions {
                row: i + 1,
                region: region.as_string().replace('\t', " "),
                previous: prev
                    .map(|p| p.as_string().replace('\t', " "))
                    .unwrap_or_default(),
            });
        }
        prev = Some(region);
    }
    Ok(())
}

fn check_shared(regions: &[NamedRegion], profile: &IndexedProfile) -> Result<()> {
    if regions.is_empty() || profile.profile.is_empty() {
        return Ok(());
    }
    if regions.iter().any(|r| profile.has_chrom(&r.chrom)) {
        Ok(())
    } else {
        Err(AggregateError::NoSharedChromosomes {
            sample: profile.sample_id().to_string(),
        })
    }
}

/// Copy of a profile with excluded contigs removed, sorted.
pub(crate) fn prepare(profile: &Profile, config: &AggregateConfig) -> Profile {
    let mut prepared = profile.clone();
    let removed = prepared.retain_contigs(config.contigs);
    if removed > 0 {
        debug!(
            "{}: skipped {} intervals outside {} contigs",
            prepared.sample_id, removed, config.contigs
        );
    }
    if !prepared.is_sorted() {
        prepared.sort();
    }
    prepared
}

///
/// Aggregate each profile over the squashed region list.
///
/// The region list is squashed once; every resulting region gets one value per profile,
/// the size-weighted mean of the segments overlapping it. The first profile is the
/// reference: every other profile must cover the same chromosomes.
///
/// Regions without a value in every profile are dropped and counted, unless
/// `config.keep_partial` is set, in which case only regions with no value at all are.
///
/// # Arguments
/// - profiles: one or more profiles, the column order of the result
/// - regions: raw region rows in (chromosome, start) order
/// - config: squash and join settings
pub fn aggregate_profiles(
    profiles: &[&Profile],
    regions: &[NamedRegion],
    config: &AggregateConfig,
) -> Result<AggregationTable> {
    let (first, rest) = profiles.split_first().ok_or(AggregateError::NoProfiles)?;
    check_sorted(regions)?;

    let prepared: Vec<Profile> = profiles.iter().map(|&p| prepare(p, config)).collect();
    for other in &prepared[1..] {
        check_chromosomes(&prepared[0], other)?;
    }
    debug!(
        "comparing {} against {} other profile(s)",
        first.sample_id,
        rest.len()
    );

    let merged = squash_regions(regions, config);
    info!("Genes tiled: {}", merged.len());

    let indexed: Vec<IndexedProfile> = prepared.iter().map(IndexedProfile::new).collect();
    for profile in &indexed {
        check_shared(&merged, profile)?;
    }

    let mut table = AggregationTable::new(
        indexed
            .iter()
            .map(|p| p.sample_id().to_string())
            .collect(),
    );

    for region in merged {
        let values = indexed
            .iter()
            .map(|p| p.value_over(&region.chrom, region.start, region.end, &region.name))
            .collect::<Result<Vec<Option<f64>>>>()?;
        let result = AggregationResult { region, values };

        if result.is_complete() || (config.keep_partial && result.has_any()) {
            table.rows.push(result);
        } else {
            debug!(
                "dropping {} {}:{}-{}: no value in every profile",
                result.region.name, result.region.chrom, result.region.start, result.region.end
            );
            table.dropped += 1;
        }
    }

    info!(
        "Genes after dropping missing values: {} ({} dropped)",
        table.len(),
        table.dropped
    );
    Ok(table)
}

///
/// Aggregate two profiles over a region list, the paired comparison.
///
/// See [`aggregate_profiles`].
pub fn pair_profiles(
    first: &Profile,
    second: &Profile,
    regions: &[NamedRegion],
    config: &AggregateConfig,
) -> Result<AggregationTable> {
    aggregate_profiles(&[first, second], regions, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use cnvpair_core::models::GenomicInterval;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn iv(chrom: &str, start: u32, end: u32, value: f64) -> GenomicInterval {
        GenomicInterval::new(chrom, start, end, value).unwrap()
    }

    fn row(chrom: &str, start: u32, end: u32, name: &str) -> NamedRegion {
        NamedRegion::new(chrom, start, end, name).unwrap()
    }

    #[fixture]
    fn regions() -> Vec<NamedRegion> {
        vec![
            row("chr1", 100, 300, "A"),
            row("chr1", 300, 500, "A"),
            row("chr1", 600, 700, "B"),
        ]
    }

    #[fixture]
    fn first() -> Profile {
        Profile::new("first", vec![iv("chr1", 0, 400, 1.0), iv("chr1", 400, 700, 3.0)])
    }

    #[fixture]
    fn second() -> Profile {
        Profile::new("second", vec![iv("chr1", 0, 700, 2.0)])
    }

    #[rstest]
    fn test_pair_end_to_end(first: Profile, second: Profile, regions: Vec<NamedRegion>) {
        let table = pair_profiles(&first, &second, &regions, &AggregateConfig::default()).unwrap();

        assert_eq!(table.labels, vec!["first", "second"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.dropped, 0);

        let a = &table.rows[0];
        assert_eq!((a.region.start, a.region.end, a.region.name.as_str()), (100, 500, "A"));
        assert!((a.values[0].unwrap() - 5.0 / 3.0).abs() < 1e-12);
        assert_eq!(a.values[1], Some(2.0));

        let b = &table.rows[1];
        assert_eq!((b.region.start, b.region.end), (600, 700));
        assert_eq!(b.values, vec![Some(3.0), Some(2.0)]);
    }

    #[rstest]
    fn test_profiles_are_borrowed_across_runs(
        first: Profile,
        second: Profile,
        regions: Vec<NamedRegion>,
    ) {
        let config = AggregateConfig::default();
        let paired = pair_profiles(&first, &second, &regions, &config).unwrap();
        let table = aggregate_profiles(&[&first, &second, &first], &regions, &config).unwrap();

        assert_eq!(table.labels, vec!["first", "second", "first"]);
        assert_eq!(table.len(), paired.len());
        assert_eq!(table.rows[1].values, vec![Some(3.0), Some(2.0), Some(3.0)]);
    }

    #[rstest]
    fn test_mismatched_chromosomes() {
        let a = Profile::new("a", vec![iv("chr1", 0, 10, 0.0), iv("chr2", 0, 10, 0.0)]);
        let b = Profile::new("b", vec![iv("chr1", 0, 10, 0.0), iv("chr3", 0, 10, 0.0)]);

        let err = check_chromosomes(&a, &b).unwrap_err();
        assert_eq!(err.to_string(), "Mismatched chromosomes: chr2 chr3");

        let err = aggregate_profiles(&[&a, &b], &[], &AggregateConfig::default()).unwrap_err();
        assert!(matches!(err, AggregateError::MismatchedChromosomes(ref c) if c.len() == 2));
    }

    #[rstest]
    fn test_chromosome_check_ignores_naming_and_sex_chromosomes() {
        let a = Profile::new(
            "a",
            vec![iv("chr1", 0, 10, 0.0), iv("chrX", 0, 10, 0.0), iv("chrUn_gl000220", 0, 10, 0.0)],
        );
        let b = Profile::new("b", vec![iv("1", 0, 10, 0.0), iv("Y", 0, 10, 0.0)]);
        assert!(check_chromosomes(&a, &b).is_ok());
    }

    #[rstest]
    fn test_regions_with_missing_values_are_dropped(first: Profile, regions: Vec<NamedRegion>) {
        let short = Profile::new("short", vec![iv("chr1", 0, 350, 0.5)]);
        let table =
            aggregate_profiles(&[&first, &short], &regions, &AggregateConfig::default()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.dropped, 1);
        assert_eq!(table.rows[0].region.name, "A");
        assert_eq!(table.rows[0].values[1], Some(0.5));
    }

    #[rstest]
    fn test_keep_partial(first: Profile, regions: Vec<NamedRegion>) {
        let short = Profile::new("short", vec![iv("chr1", 0, 350, 0.5)]);
        let config = AggregateConfig {
            keep_partial: true,
            ..AggregateConfig::default()
        };
        let table = aggregate_profiles(&[&first, &short], &regions, &config).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.dropped, 0);
        assert_eq!(table.rows[1].values, vec![Some(3.0), None]);
    }

    #[rstest]
    fn test_region_without_any_value_is_always_dropped(first: Profile, second: Profile) {
        let regions = vec![row("chr1", 100, 300, "A"), row("chr1", 5000, 6000, "FAR")];
        let config = AggregateConfig {
            keep_partial: true,
            ..AggregateConfig::default()
        };
        let table = pair_profiles(&first, &second, &regions, &config).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.dropped, 1);
    }

    #[rstest]
    fn test_mixed_naming_between_files_is_matched(regions: Vec<NamedRegion>) {
        let bare = Profile::new("bare", vec![iv("1", 0, 400, 1.0), iv("1", 400, 700, 3.0)]);
        let prefixed = Profile::new("prefixed", vec![iv("chr1", 0, 700, 2.0)]);
        let table = pair_profiles(&bare, &prefixed, &regions, &AggregateConfig::default()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].region.chrom, "chr1");
    }

    #[rstest]
    fn test_no_shared_chromosomes(first: Profile) {
        let regions = vec![row("chr5", 0, 1000, "TERT")];
        let err = aggregate_profiles(&[&first], &regions, &AggregateConfig::default()).unwrap_err();
        assert!(matches!(err, AggregateError::NoSharedChromosomes { ref sample } if sample == "first"));
    }

    #[rstest]
    fn test_unsorted_regions_fail_fast(first: Profile, second: Profile) {
        let regions = vec![
            row("chr1", 600, 700, "B"),
            row("chr1", 100, 300, "A"),
        ];
        let err = pair_profiles(&first, &second, &regions, &AggregateConfig::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Region list is not sorted by (chromosome, start): row 2 (chr1 100 300 A) follows chr1 600 700 B"
        );
    }

    #[rstest]
    fn test_split_chromosome_block_is_unsorted() {
        let regions = vec![
            row("chr1", 0, 10, "A"),
            row("chr2", 0, 10, "B"),
            row("chr1", 20, 30, "C"),
        ];
        assert!(matches!(
            check_sorted(&regions),
            Err(AggregateError::UnsortedRegions { row: 3, .. })
        ));
    }

    #[rstest]
    fn test_unsorted_profile_is_sorted_before_joining(regions: Vec<NamedRegion>) {
        let shuffled = Profile::new(
            "shuffled",
            vec![iv("chr1", 400, 700, 3.0), iv("chr1", 0, 400, 1.0)],
        );
        let second = Profile::new("second", vec![iv("chr1", 0, 700, 2.0)]);
        let table =
            pair_profiles(&shuffled, &second, &regions, &AggregateConfig::default()).unwrap();
        assert_eq!(table.rows[1].values[0], Some(3.0));
    }

    #[rstest]
    fn test_no_profiles() {
        assert!(matches!(
            aggregate_profiles(&[], &[], &AggregateConfig::default()),
            Err(AggregateError::NoProfiles)
        ));
    }

    #[rstest]
    fn test_sex_chromosome_regions_are_skipped_when_pairing(first: Profile, second: Profile) {
        let regions = vec![row("chr1", 100, 500, "A"), row("chrX", 0, 1000, "AR")];
        let table = pair_profiles(&first, &second, &regions, &AggregateConfig::default()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.dropped, 0);
    }
}
