//! Writing aggregation results and region lists.
//!
//! Tables go to a file (gzip'd when the path ends in `.gz`) or to stdout. Missing values
//! are written as empty fields; floats use Rust's shortest round-trip formatting. Fields
//! holding the delimiter (gene lists like `EGFR,EGFR-AS1`) are quoted.
use std::fmt::{self, Display};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use cnvpair_core::models::{AggregationTable, GeneTable, NamedRegion};
use cnvpair_core::utils::get_dynamic_writer;
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{IoError, Result};

/// Field separator of an output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
}

impl Delimiter {
    pub fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }
}

impl FromStr for Delimiter {
    type Err = IoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comma" | "csv" | "," => Ok(Delimiter::Comma),
            "tab" | "tsv" | "\t" => Ok(Delimiter::Tab),
            _ => Err(IoError::UnknownDelimiter(s.to_string())),
        }
    }
}

impl Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Comma => write!(f, "comma"),
            Delimiter::Tab => write!(f, "tab"),
        }
    }
}

fn format_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn table_writer<W: Write>(writer: W, delimiter: Delimiter) -> csv::Writer<W> {
    WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .from_writer(writer)
}

pub trait TableWrite {
    ///
    /// Write the table, header first.
    ///
    /// # Arguments
    /// - writer: where to write
    /// - delimiter: the field separator
    fn write_table<W: Write>(&self, writer: &mut W, delimiter: Delimiter) -> Result<()>;

    ///
    /// Write the table to a file, or to stdout when `path` is `None` or `-`.
    ///
    fn write_table_to(&self, path: Option<&Path>, delimiter: Delimiter) -> Result<()> {
        let mut writer = get_dynamic_writer(path)?;
        self.write_table(&mut writer, delimiter)?;
        writer.finish()?;
        Ok(())
    }
}

impl TableWrite for AggregationTable {
    fn write_table<W: Write>(&self, writer: &mut W, delimiter: Delimiter) -> Result<()> {
        let mut wtr = table_writer(writer, delimiter);
        wtr.write_record(self.column_names())?;

        for row in &self.rows {
            let region = &row.region;
            let mut fields = vec![
                region.chrom.clone(),
                region.start.to_string(),
                region.end.to_string(),
                region.name.clone(),
            ];
            fields.extend(row.values.iter().map(|v| format_value(*v)));
            wtr.write_record(&fields)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl TableWrite for GeneTable {
    fn write_table<W: Write>(&self, writer: &mut W, delimiter: Delimiter) -> Result<()> {
        let mut wtr = table_writer(writer, delimiter);
        wtr.write_record(std::iter::once("gene").chain(self.samples.iter().map(String::as_str)))?;

        for (gene, values) in &self.rows {
            let fields: Vec<String> = std::iter::once(gene.clone())
                .chain(values.iter().map(|v| format_value(*v)))
                .collect();
            wtr.write_record(&fields)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

pub trait BedWrite {
    ///
    /// Write regions as BED lines: chrom, start, end, name and the number of rows each
    /// region was squashed from, which [`crate::read_regions`] reads back.
    ///
    /// # Arguments
    /// - writer: where to write
    fn write_bed_to<W: Write>(&self, writer: &mut W) -> Result<()>;

    ///
    /// Write regions to a bed (or bed.gz) file, or to stdout when `path` is `None` or `-`.
    ///
    fn write_bed(&self, path: Option<&Path>) -> Result<()> {
        let mut writer = get_dynamic_writer(path)?;
        self.write_bed_to(&mut writer)?;
        writer.finish()?;
        Ok(())
    }
}

impl BedWrite for [NamedRegion] {
    fn write_bed_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for region in self {
            writeln!(writer, "{}\t{}", region.as_string(), region.n_rows)?;
        }
        Ok(())
    }
}
