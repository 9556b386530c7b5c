use anyhow::{Context, Result};
use clap::ArgMatches;

use cnvpair_aggregate::pair_profiles;
use cnvpair_io::{TableWrite, read_regions};

use crate::common::{delimiter, describe_output, load_config, load_profile, output_path};

pub fn run_pair(matches: &ArgMatches) -> Result<()> {
    let first = matches
        .get_one::<String>("first")
        .expect("A path to the first segment table is required.");
    let second = matches
        .get_one::<String>("second")
        .expect("A path to the second segment table is required.");
    let interval = matches
        .get_one::<String>("interval")
        .expect("A path to the target region list is required.");

    let mut config = load_config(matches)?;
    if matches.get_flag("keep-partial") {
        config.keep_partial = true;
    }
    if let Some(size) = matches.get_one::<u32>("min-region-size") {
        config.min_region_size = *size;
    }
    if let Some(column) = matches.get_one::<String>("value-column") {
        config.value_column = column.clone();
    }

    let first = load_profile(first, &config)?;
    let second = load_profile(second, &config)?;
    let regions = read_regions(interval)
        .with_context(|| format!("Failed to load region list {interval}"))?;

    let table = pair_profiles(&first, &second, &regions, &config)?;

    let output = output_path(matches);
    table.write_table_to(output.as_deref(), delimiter(matches, &config))?;

    eprintln!(
        "Wrote {} genes to {} ({} dropped for missing values)",
        table.len(),
        describe_output(output.as_deref()),
        table.dropped
    );

    Ok(())
}
