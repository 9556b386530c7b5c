use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, arg};

use cnvpair_aggregate::AggregateConfig;
use cnvpair_core::models::Profile;
use cnvpair_io::{Delimiter, read_profile};

pub fn output_arg() -> Arg {
    arg!(-o --output <OUTPUT>)
        .required(false)
        .help("Output file, gzip'd when it ends in .gz (default: stdout)")
}

pub fn config_arg() -> Arg {
    arg!(-c --config <CONFIG>)
        .required(false)
        .help("TOML file with aggregation settings; flags override it")
}

///
/// Settings from `--config` when given, defaults otherwise.
///
pub fn load_config(matches: &ArgMatches) -> Result<AggregateConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => AggregateConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config file {path}")),
        None => Ok(AggregateConfig::default()),
    }
}

pub fn output_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<String>("output").map(PathBuf::from)
}

/// `--tsv` wins over the configured delimiter.
pub fn delimiter(matches: &ArgMatches, config: &AggregateConfig) -> Delimiter {
    if matches.get_flag("tsv") {
        Delimiter::Tab
    } else {
        config.delimiter
    }
}

pub fn load_profile(path: &str, config: &AggregateConfig) -> Result<Profile> {
    read_profile(path, &config.value_column)
        .with_context(|| format!("Failed to load segment table {path}"))
}

/// Where the output went, for the closing message.
pub fn describe_output(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string())
}
