use clap::{Arg, ArgAction, Command, arg, value_parser};

use crate::common::{config_arg, output_arg};

pub const COLLATE_CMD: &str = "collate";

pub fn create_collate_cli() -> Command {
    Command::new(COLLATE_CMD)
        .about("Collect bin (.cnr) or segment (.cns) values into a gene by sample table (TSV)")
        .arg_required_else_help(true)
        .arg(
            Arg::new("files")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append)
                .help("One table per sample"),
        )
        .arg(arg!(-s --segmented "Inputs are segments listing several genes per row"))
        .arg(
            arg!(-w --"min-weight" <WEIGHT>)
                .required(false)
                .value_parser(value_parser!(f64))
                .help("Skip rows weighted below this [default: 0, keep all]"),
        )
        .arg(
            arg!(--"value-column" <COLUMN>)
                .required(false)
                .help("Column holding the value [default: log2]"),
        )
        .arg(output_arg())
        .arg(config_arg())
}
