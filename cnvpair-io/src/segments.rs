//! Reading segment and bin tables into a [`Profile`].
//!
//! Two layouts are accepted:
//!
//! - a tab-delimited table whose first line is a header naming at least `chromosome`,
//!   `start`, `end` and the value column (`log2` unless told otherwise). `gene`, `probes` and
//!   `weight` are picked up when present, anything else is ignored.
//! - a headerless BED-like table: chrom, start, end, label, value.
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use cnvpair_core::chrom::ChromStyle;
use cnvpair_core::models::{GenomicInterval, Profile};
use cnvpair_core::utils::{get_dynamic_reader, sample_id_from_path};
use tracing::debug;

use crate::consts::*;
use crate::error::{IoError, Result};

/// Where each field of a row lives.
#[derive(Debug, Clone)]
struct Schema {
    chrom: usize,
    start: usize,
    end: usize,
    value: usize,
    label: Option<usize>,
    probes: Option<usize>,
    weight: Option<usize>,
    min_fields: usize,
}

impl Schema {
    fn headerless() -> Self {
        Schema {
            chrom: 0,
            start: 1,
            end: 2,
            label: Some(3),
            value: 4,
            probes: None,
            weight: None,
            min_fields: HEADERLESS_FIELDS,
        }
    }

    fn from_header(header: &str, value_column: &str, path: &Path) -> Result<Self> {
        let columns: Vec<&str> = header.split('\t').map(str::trim).collect();

        let find = |name: &str| -> Result<Option<usize>> {
            let mut hits = columns
                .iter()
                .enumerate()
                .filter(|(_, c)| **c == name)
                .map(|(i, _)| i);
            let first = hits.next();
            if hits.next().is_some() {
                return Err(IoError::DuplicateColumn {
                    path: path.to_path_buf(),
                    column: name.to_string(),
                });
            }
            Ok(first)
        };
        let require = |name: &str| -> Result<usize> {
            find(name)?.ok_or_else(|| IoError::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            })
        };

        let schema = Schema {
            chrom: require(CHROM_COL)?,
            start: require(START_COL)?,
            end: require(END_COL)?,
            value: require(value_column)?,
            label: find(GENE_COL)?,
            probes: find(PROBES_COL)?,
            weight: find(WEIGHT_COL)?,
            min_fields: 0,
        };

        let used = [
            Some(schema.chrom),
            Some(schema.start),
            Some(schema.end),
            Some(schema.value),
            schema.label,
            schema.probes,
            schema.weight,
        ];
        for (i, column) in columns.iter().enumerate() {
            if !used.contains(&Some(i)) {
                debug!("{}: ignoring column '{}'", path.display(), column);
            }
        }

        let min_fields = used.iter().flatten().max().map_or(0, |m| m + 1);
        Ok(Schema { min_fields, ..schema })
    }
}

/// A header line names the chromosome column, or at least has no integer start field.
fn is_header(line: &str) -> bool {
    let mut fields = line.split('\t');
    let first = fields.next().unwrap_or_default().trim();
    let second = fields.next().unwrap_or_default().trim();
    first == CHROM_COL || second.parse::<u64>().is_err()
}

fn parse_field<T: FromStr>(field: &str, column: &str, path: &Path, line: usize) -> Result<T> {
    field.trim().parse::<T>().map_err(|_| IoError::Parse {
        path: path.to_path_buf(),
        line,
        msg: format!("invalid {column} '{field}'"),
    })
}

fn parse_optional<T: FromStr>(
    field: Option<&str>,
    column: &str,
    path: &Path,
    line: usize,
) -> Result<Option<T>> {
    match field.map(str::trim) {
        None | Some("") => Ok(None),
        Some(f) => parse_field(f, column, path, line).map(Some),
    }
}

///
/// Parse a segment table from any buffered reader.
///
/// # Arguments
/// - reader: the table contents
/// - path: the file the contents came from, used for the sample id and in error messages
/// - value_column: name of the header column holding the value
pub fn parse_profile<R: BufRead>(reader: R, path: &Path, value_column: &str) -> Result<Profile> {
    let mut schema: Option<Schema> = None;
    let mut intervals = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        if schema.is_none() && is_header(&line) {
            schema = Some(Schema::from_header(&line, value_column, path)?);
            continue;
        }
        let schema = schema.get_or_insert_with(Schema::headerless);

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < schema.min_fields {
            return Err(IoError::Parse {
                path: path.to_path_buf(),
                line: line_no,
                msg: format!(
                    "expected at least {} fields, found {}",
                    schema.min_fields,
                    fields.len()
                ),
            });
        }

        let chrom = fields[schema.chrom].trim();
        let start: u32 = parse_field(fields[schema.start], START_COL, path, line_no)?;
        let end: u32 = parse_field(fields[schema.end], END_COL, path, line_no)?;
        let value: f64 = parse_field(fields[schema.value], value_column, path, line_no)?;

        let mut interval =
            GenomicInterval::new(chrom, start, end, value).map_err(|source| {
                IoError::InvalidRow {
                    path: path.to_path_buf(),
                    line: line_no,
                    source,
                }
            })?;

        if let Some(label) = schema.label.map(|i| fields[i].trim()) {
            if !label.is_empty() {
                interval = interval.with_label(label);
            }
        }
        if let Some(probes) =
            parse_optional(schema.probes.map(|i| fields[i]), PROBES_COL, path, line_no)?
        {
            interval = interval.with_probes(probes);
        }
        if let Some(weight) =
            parse_optional(schema.weight.map(|i| fields[i]), WEIGHT_COL, path, line_no)?
        {
            interval = interval.with_weight(weight);
        }

        intervals.push(interval);
    }

    ChromStyle::detect(
        &path.display().to_string(),
        intervals.iter().map(|iv| iv.chrom.as_str()),
    )?;

    let profile = Profile::new(&sample_id_from_path(path), intervals);

    debug!(
        "{}: read {} intervals for sample '{}'",
        path.display(),
        profile.len(),
        profile.sample_id
    );
    Ok(profile)
}

///
/// Read a segment or bin table from disk; `.gz` files are decompressed.
///
/// # Arguments
/// - path: path to the table
/// - value_column: name of the header column holding the value, `log2` for CNVkit files
pub fn read_profile<P: AsRef<Path>>(path: P, value_column: &str) -> Result<Profile> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;
    parse_profile(reader, path, value_column)
}
