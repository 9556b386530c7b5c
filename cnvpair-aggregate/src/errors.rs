use cnvpair_core::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregateError {
    /// Chromosomes present in one profile but not the other, as spelled in the inputs.
    #[error("Mismatched chromosomes: {}", .0.join(" "))]
    MismatchedChromosomes(Vec<String>),

    #[error("No chromosome in common between the region list and profile '{sample}'")]
    NoSharedChromosomes { sample: String },

    #[error("Region list is not sorted by (chromosome, start): row {row} ({region}) follows {previous}")]
    UnsortedRegions {
        row: usize,
        region: String,
        previous: String,
    },

    #[error("Weighted mean {mean} for {label} falls outside the range of its values [{min}, {max}]")]
    MeanOutOfRange {
        label: String,
        mean: f64,
        min: f64,
        max: f64,
    },

    #[error("At least one profile is required")]
    NoProfiles,

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AggregateError>;
