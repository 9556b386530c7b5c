pub mod genomic_interval;
pub mod profile;
pub mod region;
pub mod table;

// re-export for cleaner imports
pub use self::genomic_interval::{GenomicInterval, NO_LABEL};
pub use self::profile::Profile;
pub use self::region::NamedRegion;
pub use self::table::{AggregationResult, AggregationTable, GeneTable};
