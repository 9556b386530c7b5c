//! Chromosome naming conventions.
//!
//! Segment tables and region lists disagree on whether chromosomes are called `chr1` or `1`.
//! Matching is always done on the [`normalize`]d name (leading `chr` removed); the original
//! spelling is kept for output.
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::ModelError;

pub const CHR_PREFIX: &str = "chr";

///
/// Strip a leading `chr` (any case) from a chromosome name.
///
/// A bare `chr` is returned unchanged.
pub fn normalize(chrom: &str) -> &str {
    match chrom.get(..CHR_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(CHR_PREFIX) && chrom.len() > prefix.len() => {
            &chrom[CHR_PREFIX.len()..]
        }
        _ => chrom,
    }
}

/// Sex chromosomes: X and Y in either naming convention.
pub fn is_sex_chrom(chrom: &str) -> bool {
    matches!(normalize(chrom), "X" | "Y" | "x" | "y")
}

/// Unplaced and unlocalized contigs (`chrUn_*`, `Un_*`, `*_random`).
pub fn is_unplaced_contig(chrom: &str) -> bool {
    chrom.starts_with("chrUn_") || chrom.starts_with("Un_") || chrom.ends_with("_random")
}

pub fn is_autosome(chrom: &str) -> bool {
    !is_sex_chrom(chrom) && !is_unplaced_contig(chrom)
}

/// A canonical chromosome: 1-99, X, Y, M or MT after normalization.
fn is_canonical(chrom: &str) -> bool {
    let bare = normalize(chrom);
    matches!(bare, "X" | "Y" | "M" | "MT")
        || (!bare.is_empty() && bare.len() <= 2 && bare.bytes().all(|b| b.is_ascii_digit()))
}

///
/// Natural sort key for chromosome names: numbered chromosomes first in numeric order,
/// then X, Y and the mitochondrion, then everything else by name.
pub fn sort_key(chrom: &str) -> (u8, u32, &str) {
    let bare = normalize(chrom);
    if let Ok(n) = bare.parse::<u32>() {
        return (0, n, "");
    }
    match bare {
        "X" => (1, 0, ""),
        "Y" => (1, 1, ""),
        "M" | "MT" => (1, 2, ""),
        _ => (2, 0, bare),
    }
}

/// Which naming convention a set of chromosome names follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromStyle {
    /// `chr1`, `chrX`, ...
    Prefixed,
    /// `1`, `X`, ...
    Bare,
}

impl ChromStyle {
    pub fn of(chrom: &str) -> ChromStyle {
        if normalize(chrom).len() < chrom.len() {
            ChromStyle::Prefixed
        } else {
            ChromStyle::Bare
        }
    }

    ///
    /// Detect the naming convention of a collection of chromosome names.
    ///
    /// Only canonical chromosomes are considered, so unplaced contigs such as `GL000192.1`
    /// in a `chr`-prefixed file do not count as a mismatch. Returns `None` when no canonical
    /// chromosome is present.
    ///
    /// # Arguments
    /// - source_name: name of the file or sample, used in the error message
    /// - chroms: the chromosome names to inspect
    pub fn detect<'a, I>(source_name: &str, chroms: I) -> Result<Option<ChromStyle>, ModelError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut prefixed: Option<&str> = None;
        let mut bare: Option<&str> = None;
        for chrom in chroms.into_iter().filter(|c| is_canonical(c)) {
            match ChromStyle::of(chrom) {
                ChromStyle::Prefixed => prefixed = prefixed.or(Some(chrom)),
                ChromStyle::Bare => bare = bare.or(Some(chrom)),
            }
            if let (Some(p), Some(b)) = (prefixed, bare) {
                return Err(ModelError::MixedChromNaming {
                    source_name: source_name.to_string(),
                    prefixed: p.to_string(),
                    bare: b.to_string(),
                });
            }
        }
        Ok(match (prefixed, bare) {
            (Some(_), None) => Some(ChromStyle::Prefixed),
            (None, Some(_)) => Some(ChromStyle::Bare),
            _ => None,
        })
    }
}

///
/// Which chromosomes an operation keeps.
///
/// Paired comparisons use [`ContigPolicy::Autosomes`]; single-profile operations keep
/// everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ContigPolicy {
    #[default]
    All,
    Autosomes,
}

impl ContigPolicy {
    pub fn keeps(&self, chrom: &str) -> bool {
        match self {
            ContigPolicy::All => true,
            ContigPolicy::Autosomes => is_autosome(chrom),
        }
    }
}

impl FromStr for ContigPolicy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ContigPolicy::All),
            "autosomes" => Ok(ContigPolicy::Autosomes),
            _ => Err(ModelError::UnknownContigPolicy(s.to_string())),
        }
    }
}

impl Display for ContigPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContigPolicy::All => write!(f, "all"),
            ContigPolicy::Autosomes => write!(f, "autosomes"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("chr1", "1")]
    #[case("1", "1")]
    #[case("CHR17", "17")]
    #[case("chrUn_gl000220", "Un_gl000220")]
    #[case("chr", "chr")]
    fn test_normalize(#[case] chrom: &str, #[case] expected: &str) {
        assert_eq!(normalize(chrom), expected);
    }

    #[rstest]
    #[case("chrX", false)]
    #[case("Y", false)]
    #[case("chrUn_gl000220", false)]
    #[case("Un_gl000220", false)]
    #[case("chr1_gl000191_random", false)]
    #[case("chr1", true)]
    #[case("22", true)]
    #[case("chrM", true)]
    fn test_is_autosome(#[case] chrom: &str, #[case] expected: bool) {
        assert_eq!(is_autosome(chrom), expected);
    }

    #[rstest]
    fn test_detect_style() {
        let style = ChromStyle::detect("a.cns", ["chr1", "chr2", "chrX"]).unwrap();
        assert_eq!(style, Some(ChromStyle::Prefixed));

        let style = ChromStyle::detect("b.cns", ["1", "2", "GL000192.1"]).unwrap();
        assert_eq!(style, Some(ChromStyle::Bare));

        let style = ChromStyle::detect("c.cns", ["GL000192.1"]).unwrap();
        assert_eq!(style, None);
    }

    #[rstest]
    fn test_detect_mixed_style_names_both() {
        let err = ChromStyle::detect("mixed.cns", ["chr1", "chr2", "3"]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("mixed.cns"));
        assert!(msg.contains("chr1"));
        assert!(msg.contains("'3'"));
    }

    #[rstest]
    fn test_sort_key_is_natural() {
        let mut chroms = vec!["chr10", "chrX", "chr2", "chr1_gl000191_random", "chr1", "chrM"];
        chroms.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
        assert_eq!(
            chroms,
            vec!["chr1", "chr2", "chr10", "chrX", "chrM", "chr1_gl000191_random"]
        );
    }

    #[rstest]
    fn test_contig_policy() {
        assert!(ContigPolicy::All.keeps("chrY"));
        assert!(!ContigPolicy::Autosomes.keeps("chrY"));
        assert!(ContigPolicy::Autosomes.keeps("chr7"));
        assert_eq!("Autosomes".parse::<ContigPolicy>().unwrap(), ContigPolicy::Autosomes);
        assert!("sexy".parse::<ContigPolicy>().is_err());
    }
}
