use anyhow::Result;
use clap::ArgMatches;

use cnvpair_aggregate::cut_segments;
use cnvpair_io::TableWrite;

use crate::common::{delimiter, describe_output, load_config, load_profile, output_path};

pub fn run_cut(matches: &ArgMatches) -> Result<()> {
    let first = matches
        .get_one::<String>("first")
        .expect("A path to the first segment table is required.");
    let second = matches
        .get_one::<String>("second")
        .expect("A path to the second segment table is required.");

    let mut config = load_config(matches)?;
    if let Some(probes) = matches.get_one::<u32>("min-probes") {
        config.min_probes = Some(*probes);
    }
    if let Some(column) = matches.get_one::<String>("value-column") {
        config.value_column = column.clone();
    }

    let anchor = load_profile(first, &config)?;
    let other = load_profile(second, &config)?;

    let table = cut_segments(&anchor, &other, &config)?;

    let output = output_path(matches);
    table.write_table_to(output.as_deref(), delimiter(matches, &config))?;

    eprintln!(
        "Wrote {} segments to {} ({} covered nothing in {})",
        table.len(),
        describe_output(output.as_deref()),
        table.dropped,
        other.sample_id
    );

    Ok(())
}
