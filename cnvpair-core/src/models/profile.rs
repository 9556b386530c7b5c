use std::collections::BTreeSet;

use crate::chrom::{ContigPolicy, sort_key};
use crate::models::GenomicInterval;

///
/// Profile struct, every segment (or bin) called for one sample.
///
/// Intervals are expected in (chromosome, start) order; use [`Profile::sort`] after building
/// one from unordered rows. Intervals may overlap.
///
#[derive(Clone, Debug)]
pub struct Profile {
    pub sample_id: String,
    pub intervals: Vec<GenomicInterval>,
}

pub struct ProfileIterator<'a> {
    profile: &'a Profile,
    index: usize,
}

impl<'a> Iterator for ProfileIterator<'a> {
    type Item = &'a GenomicInterval;

    fn next(&mut self) -> Option<Self::Item> {
        let interval = self.profile.intervals.get(self.index)?;
        self.index += 1;
        Some(interval)
    }
}

impl<'a> IntoIterator for &'a Profile {
    type Item = &'a GenomicInterval;
    type IntoIter = ProfileIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        ProfileIterator {
            profile: self,
            index: 0,
        }
    }
}

impl Profile {
    pub fn new(sample_id: &str, intervals: Vec<GenomicInterval>) -> Self {
        Profile {
            sample_id: sample_id.to_string(),
            intervals,
        }
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    ///
    /// Sort intervals by (chromosome, start, end), chromosomes in natural order.
    ///
    pub fn sort(&mut self) {
        self.intervals.sort_by(|a, b| {
            sort_key(&a.chrom)
                .cmp(&sort_key(&b.chrom))
                .then(a.start.cmp(&b.start))
                .then(a.end.cmp(&b.end))
        });
    }

    ///
    /// Check that every chromosome forms one contiguous block and that starts never decrease
    /// inside a block. The order of the blocks themselves is not checked.
    ///
    pub fn is_sorted(&self) -> bool {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut prev: Option<&GenomicInterval> = None;
        for iv in &self.intervals {
            match prev {
                Some(p) if p.chrom == iv.chrom => {
                    if iv.start < p.start {
                        return false;
                    }
                }
                _ => {
                    if !seen.insert(iv.chrom.as_str()) {
                        return false;
                    }
                }
            }
            prev = Some(iv);
        }
        true
    }

    /// Unique chromosome names, as spelled in the source table.
    pub fn chromosomes(&self) -> BTreeSet<&str> {
        self.intervals.iter().map(|iv| iv.chrom.as_str()).collect()
    }

    ///
    /// Drop intervals on chromosomes the policy excludes.
    ///
    /// # Returns
    /// The number of intervals removed.
    pub fn retain_contigs(&mut self, policy: ContigPolicy) -> usize {
        let before = self.intervals.len();
        self.intervals.retain(|iv| policy.keeps(&iv.chrom));
        before - self.intervals.len()
    }
}
