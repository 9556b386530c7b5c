use clap::{Command, arg, value_parser};

use crate::common::{config_arg, output_arg};

pub const PAIR_CMD: &str = "pair";

pub fn create_pair_cli() -> Command {
    Command::new(PAIR_CMD)
        .about("Aggregate two segmented profiles over a target gene list, one row per gene")
        .arg_required_else_help(true)
        .arg(arg!(<first> "First segment table (.cns, .cns.gz)"))
        .arg(arg!(<second> "Second segment table (.cns, .cns.gz)"))
        .arg(
            arg!(-i --interval <INTERVAL>)
                .required(true)
                .help("Target region list, BED4 (chrom, start, end, name)"),
        )
        .arg(output_arg())
        .arg(arg!(--"keep-partial" "Keep genes that have a value in only one profile"))
        .arg(
            arg!(--"min-region-size" <SIZE>)
                .required(false)
                .value_parser(value_parser!(u32))
                .help("Drop single-row genes shorter than this [default: 200]"),
        )
        .arg(
            arg!(--"value-column" <COLUMN>)
                .required(false)
                .help("Column holding the segment value [default: log2]"),
        )
        .arg(arg!(--tsv "Write tab-separated instead of comma-separated output"))
        .arg(config_arg())
}
