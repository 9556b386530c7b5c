use anyhow::Result;
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};

use cnvpair_aggregate::collate_by_gene;
use cnvpair_core::models::Profile;
use cnvpair_io::{Delimiter, TableWrite};

use crate::common::{describe_output, load_config, load_profile, output_path};

pub fn run_collate(matches: &ArgMatches) -> Result<()> {
    let files: Vec<&String> = matches
        .get_many::<String>("files")
        .expect("At least one input table is required.")
        .collect();
    let segmented = matches.get_flag("segmented");

    let mut config = load_config(matches)?;
    if let Some(weight) = matches.get_one::<f64>("min-weight") {
        config.min_weight = *weight;
    }
    if let Some(column) = matches.get_one::<String>("value-column") {
        config.value_column = column.clone();
    }

    eprintln!(
        "Expecting {} files",
        if segmented { ".cns" } else { ".cnr" }
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
    )?);
    pb.set_message("Loading samples");

    let mut profiles: Vec<Profile> = Vec::with_capacity(files.len());
    for file in &files {
        profiles.push(load_profile(file, &config)?);
        pb.inc(1);
    }
    pb.finish_and_clear();
    eprintln!("Loaded {} samples", profiles.len());

    let table = collate_by_gene(&profiles, segmented, &config);

    let output = output_path(matches);
    table.write_table_to(output.as_deref(), Delimiter::Tab)?;

    eprintln!(
        "Wrote {} with {} rows",
        describe_output(output.as_deref()),
        table.len()
    );

    Ok(())
}
