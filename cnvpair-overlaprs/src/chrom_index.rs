//! Per-chromosome overlap index over the intervals of a [`Profile`].
//!
//! Chromosomes are keyed by their [`normalize`]d name, so a profile written with `chr1`
//! answers queries for `1` and the other way round. Each hit is the position of the
//! interval inside [`Profile::intervals`].
//!
//! # Examples
//!
//! ```
//! use cnvpair_core::models::{GenomicInterval, Profile};
//! use cnvpair_overlaprs::IntoChromIndex;
//!
//! let profile = Profile::new(
//!     "tumor",
//!     vec![
//!         GenomicInterval::new("chr1", 0, 400, 0.5).unwrap(),
//!         GenomicInterval::new("chr1", 400, 700, -0.2).unwrap(),
//!         GenomicInterval::new("chr2", 0, 1000, 0.0).unwrap(),
//!     ],
//! );
//! let index = profile.into_chrom_index();
//!
//! let hits: Vec<usize> = index.find_iter("1", 350, 450).collect();
//! assert_eq!(hits.len(), 2);
//! ```
use cnvpair_core::chrom::normalize;
use cnvpair_core::models::Profile;
use fxhash::FxHashMap as HashMap;

use crate::{AIList, Interval, Overlapper};

/// Interval positions of one profile, one [`AIList`] per chromosome.
#[derive(Debug, Clone, Default)]
pub struct ChromIndex {
    lists: HashMap<String, AIList<u32, usize>>,
}

impl ChromIndex {
    ///
    /// Positions of all intervals on `chrom` that overlap `[start, end)`.
    ///
    /// An unknown chromosome yields nothing.
    pub fn find_iter<'a>(
        &'a self,
        chrom: &str,
        start: u32,
        end: u32,
    ) -> impl Iterator<Item = usize> + 'a {
        self.lists
            .get(normalize(chrom))
            .into_iter()
            .flat_map(move |list| list.find_iter(start, end).map(|iv| iv.val))
    }

    /// Like [`ChromIndex::find_iter`], sorted so hits come back in profile order.
    pub fn find(&self, chrom: &str, start: u32, end: u32) -> Vec<usize> {
        let mut hits: Vec<usize> = self.find_iter(chrom, start, end).collect();
        hits.sort_unstable();
        hits
    }

    pub fn contains_chrom(&self, chrom: &str) -> bool {
        self.lists.contains_key(normalize(chrom))
    }

    /// Normalized names of the indexed chromosomes, unordered.
    pub fn chromosomes(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    /// Total number of indexed intervals.
    pub fn len(&self) -> usize {
        self.lists.values().map(|l| l.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

/// Build a [`ChromIndex`] from a collection of intervals.
pub trait IntoChromIndex {
    fn into_chrom_index(self) -> ChromIndex;
}

impl IntoChromIndex for &Profile {
    fn into_chrom_index(self) -> ChromIndex {
        let mut per_chrom: HashMap<String, Vec<Interval<u32, usize>>> = HashMap::default();

        for (idx, iv) in self.intervals.iter().enumerate() {
            per_chrom
                .entry(normalize(&iv.chrom).to_string())
                .or_default()
                .push(Interval {
                    start: iv.start,
                    end: iv.end,
                    val: idx,
                });
        }

        let lists = per_chrom
            .into_iter()
            .map(|(chrom, intervals)| (chrom, AIList::build(intervals)))
            .collect();

        ChromIndex { lists }
    }
}
