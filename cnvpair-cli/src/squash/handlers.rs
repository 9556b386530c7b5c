use anyhow::{Context, Result};
use clap::ArgMatches;

use cnvpair_aggregate::{check_sorted, squash_regions};
use cnvpair_core::chrom::ContigPolicy;
use cnvpair_io::{BedWrite, read_regions};

use crate::common::{describe_output, load_config, output_path};

pub fn run_squash(matches: &ArgMatches) -> Result<()> {
    let regions_path = matches
        .get_one::<String>("regions")
        .expect("A path to the region list is required.");

    let mut config = load_config(matches)?;
    config.contigs = if matches.get_flag("autosomes") {
        ContigPolicy::Autosomes
    } else {
        ContigPolicy::All
    };
    if let Some(size) = matches.get_one::<u32>("min-region-size") {
        config.min_region_size = *size;
    }

    let rows = read_regions(regions_path)
        .with_context(|| format!("Failed to load region list {regions_path}"))?;
    check_sorted(&rows).with_context(|| format!("Cannot squash {regions_path}"))?;
    let squashed = squash_regions(&rows, &config);

    let output = output_path(matches);
    squashed.write_bed(output.as_deref())?;

    eprintln!(
        "Squashed {} rows into {} regions, written to {}",
        rows.len(),
        squashed.len(),
        describe_output(output.as_deref())
    );

    Ok(())
}
