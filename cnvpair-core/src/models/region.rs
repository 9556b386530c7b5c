use std::fmt::{self, Display};

use crate::errors::ModelError;

///
/// NamedRegion struct, a target region such as a gene.
///
/// A region built by squashing several adjacent rows keeps the number of rows that went
/// into it in `n_rows`; a row read straight from a file has `n_rows == 1`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct NamedRegion {
    pub chrom: String,
    pub start: u32,
    pub end: u32,
    pub name: String,
    pub n_rows: u32,
}

impl NamedRegion {
    pub fn new(chrom: &str, start: u32, end: u32, name: &str) -> Result<Self, ModelError> {
        if end < start {
            return Err(ModelError::InvertedRegion {
                chrom: chrom.to_string(),
                start,
                end,
                name: name.to_string(),
            });
        }
        Ok(NamedRegion {
            chrom: chrom.to_string(),
            start,
            end,
            name: name.to_string(),
            n_rows: 1,
        })
    }

    ///
    /// Get length of the region
    ///
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    /// BED4 line for this region.
    pub fn as_string(&self) -> String {
        format!("{}\t{}\t{}\t{}", self.chrom, self.start, self.end, self.name)
    }
}

impl Display for NamedRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
