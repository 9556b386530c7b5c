use std::io::BufRead;
use std::path::Path;

use cnvpair_core::chrom::ChromStyle;
use cnvpair_core::models::NamedRegion;
use cnvpair_core::utils::get_dynamic_reader;

use crate::error::{IoError, Result};

/// Fields of a BED4 row: chrom, start, end, name.
const BED4_FIELDS: usize = 4;

/// Browser directives and comments carry no regions.
fn is_directive(line: &str) -> bool {
    line.starts_with('#') || line.starts_with("track") || line.starts_with("browser")
}

///
/// Parse a BED4 region list from any buffered reader.
///
/// Rows are returned in file order. Blank lines, comments, `track`/`browser` lines and one
/// textual column header before the first region are skipped. A positive integer in the
/// fifth column is the number of rows the region was squashed from (see
/// [`crate::BedWrite`]); otherwise a region counts as one row.
///
/// # Arguments
/// - reader: the list contents
/// - path: the file the contents came from, used in error messages
pub fn parse_regions<R: BufRead>(reader: R, path: &Path) -> Result<Vec<NamedRegion>> {
    let mut regions: Vec<NamedRegion> = Vec::new();
    let mut header_allowed = true;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() || is_directive(&line) {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        let start = fields.get(1).and_then(|f| f.parse::<u32>().ok());
        if start.is_none() && header_allowed {
            header_allowed = false;
            continue;
        }
        header_allowed = false;

        if fields.len() < BED4_FIELDS {
            return Err(IoError::Parse {
                path: path.to_path_buf(),
                line: line_no,
                msg: format!(
                    "expected at least {BED4_FIELDS} fields (chrom, start, end, name), found {}",
                    fields.len()
                ),
            });
        }
        let start = start.ok_or_else(|| IoError::Parse {
            path: path.to_path_buf(),
            line: line_no,
            msg: format!("invalid start '{}'", fields[1]),
        })?;
        let end = fields[2].parse::<u32>().map_err(|_| IoError::Parse {
            path: path.to_path_buf(),
            line: line_no,
            msg: format!("invalid end '{}'", fields[2]),
        })?;

        let mut region =
            NamedRegion::new(fields[0], start, end, fields[3]).map_err(|source| {
                IoError::InvalidRow {
                    path: path.to_path_buf(),
                    line: line_no,
                    source,
                }
            })?;
        if let Some(n_rows) = fields
            .get(4)
            .and_then(|f| f.parse::<u32>().ok())
            .filter(|n| *n > 0)
        {
            region.n_rows = n_rows;
        }
        regions.push(region);
    }

    ChromStyle::detect(
        &path.display().to_string(),
        regions.iter().map(|r| r.chrom.as_str()),
    )?;

    Ok(regions)
}

///
/// Read a BED4 region list from disk; `.gz` files are decompressed.
///
pub fn read_regions<P: AsRef<Path>>(path: P) -> Result<Vec<NamedRegion>> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;
    parse_regions(reader, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../tests/data")
            .join(file_name)
    }

    fn parse(text: &str) -> Result<Vec<NamedRegion>> {
        parse_regions(Cursor::new(text), Path::new("targets.bed"))
    }

    #[rstest]
    fn test_read_regions_skips_directives() {
        let regions = read_regions(get_test_path("targets.bed")).unwrap();
        assert_eq!(regions.len(), 8);
        assert_eq!(regions[0].as_string(), "chr1\t100\t300\tA");
        assert_eq!(regions[7].name, "XGENE");
    }

    #[rstest]
    fn test_textual_header_is_skipped() {
        let regions = parse("chrom\tstart\tend\tname\nchr1\t10\t20\tA\n").unwrap();
        assert_eq!(regions.len(), 1);
    }

    #[rstest]
    fn test_bad_start_after_first_row_is_an_error() {
        let err = parse("chr1\t10\t20\tA\nchr1\tx\t30\tB\n").unwrap_err();
        assert_eq!(err.to_string(), "targets.bed:2: invalid start 'x'");
    }

    #[rstest]
    fn test_bed3_is_an_error() {
        let err = parse("chr1\t10\t20\n").unwrap_err().to_string();
        assert!(err.contains("targets.bed:1"), "{err}");
        assert!(err.contains("found 3"), "{err}");
    }

    #[rstest]
    fn test_inverted_region_is_an_error() {
        let err = parse("chr1\t30\t20\tA\n").unwrap_err();
        assert!(matches!(err, IoError::InvalidRow { line: 1, .. }));
    }

    #[rstest]
    #[case("chr1\t10\t20\tA\t3\n", 3)]
    #[case("chr1\t10\t20\tA\t0\n", 1)]
    #[case("chr1\t10\t20\tA\t.\n", 1)]
    #[case("chr1\t10\t20\tA\n", 1)]
    fn test_row_count_column(#[case] text: &str, #[case] expected: u32) {
        assert_eq!(parse(text).unwrap()[0].n_rows, expected);
    }

    #[rstest]
    fn test_mixed_naming_is_rejected() {
        assert!(parse("chr1\t10\t20\tA\n1\t30\t40\tB\n").is_err());
    }
}
