use clap::{Command, arg, value_parser};

use crate::common::{config_arg, output_arg};

pub const SQUASH_CMD: &str = "squash";

pub fn create_squash_cli() -> Command {
    Command::new(SQUASH_CMD)
        .about("Squash consecutive same-named target rows into one region per gene (BED4)")
        .arg_required_else_help(true)
        .arg(arg!(<regions> "Target region list, BED4 (chrom, start, end, name)"))
        .arg(arg!(--autosomes "Drop regions on sex chromosomes and unplaced contigs"))
        .arg(
            arg!(--"min-region-size" <SIZE>)
                .required(false)
                .value_parser(value_parser!(u32))
                .help("Drop single-row regions shorter than this [default: 200]"),
        )
        .arg(output_arg())
        .arg(config_arg())
}
