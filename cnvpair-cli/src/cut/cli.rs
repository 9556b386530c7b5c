use clap::{Command, arg, value_parser};

use crate::common::{config_arg, output_arg};

pub const CUT_CMD: &str = "cut";

pub fn create_cut_cli() -> Command {
    Command::new(CUT_CMD)
        .about("Compare two segmented profiles using the segments of the first as regions")
        .arg_required_else_help(true)
        .arg(arg!(<first> "Segment table whose segments define the regions (.cns)"))
        .arg(arg!(<second> "Segment table aggregated over those segments (.cns)"))
        .arg(output_arg())
        .arg(
            arg!(--"min-probes" <PROBES>)
                .required(false)
                .value_parser(value_parser!(u32))
                .help("Skip first-profile segments with fewer probes [default: 10]"),
        )
        .arg(
            arg!(--"value-column" <COLUMN>)
                .required(false)
                .help("Column holding the segment value [default: log2]"),
        )
        .arg(arg!(--tsv "Write tab-separated instead of comma-separated output"))
        .arg(config_arg())
}
