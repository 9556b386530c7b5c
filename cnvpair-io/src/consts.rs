//! Column names of CNVkit-style segment and bin tables.
pub const CHROM_COL: &str = "chromosome";
pub const START_COL: &str = "start";
pub const END_COL: &str = "end";
pub const GENE_COL: &str = "gene";
pub const PROBES_COL: &str = "probes";
pub const WEIGHT_COL: &str = "weight";
pub const DEFAULT_VALUE_COL: &str = "log2";

/// Number of fields in a headerless table: chrom, start, end, label, value.
pub const HEADERLESS_FIELDS: usize = 5;
