use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("Invalid interval {chrom}:{start}-{end}: end must be greater than start")]
    EmptyInterval { chrom: String, start: u32, end: u32 },

    #[error("Invalid interval {chrom}:{start}-{end}: value {value} is not finite")]
    NonFiniteValue {
        chrom: String,
        start: u32,
        end: u32,
        value: f64,
    },

    #[error("Invalid region {chrom}:{start}-{end} ({name}): end is before start")]
    InvertedRegion {
        chrom: String,
        start: u32,
        end: u32,
        name: String,
    },

    #[error("Mixed chromosome naming in {source_name}: found both '{prefixed}' and '{bare}'")]
    MixedChromNaming {
        source_name: String,
        prefixed: String,
        bare: String,
    },

    #[error("Unknown contig policy: {0}. Valid options are 'all' or 'autosomes'")]
    UnknownContigPolicy(String),
}
