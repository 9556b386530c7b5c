use std::ops::Range;

use num_traits::{PrimInt, Unsigned};

use crate::traits::{Interval, Overlapper};

/// An interval is moved to a later sublist when it contains at least this many of the
/// intervals that follow it.
const MIN_COVERAGE: usize = 10;

/// An Augmented Interval List for overlap queries.
///
/// From the following article: <https://academic.oup.com/bioinformatics/article/35/23/4907/5509521>
///
/// Intervals are split into sublists so that long intervals (a whole-arm segment among
/// many short ones) do not defeat the running-maximum pruning of the query. Each sublist
/// is sorted by start and stores the running maximum of the ends.
///
/// # Examples
///
/// ```
/// use cnvpair_overlaprs::{AIList, Interval, Overlapper};
///
/// let segments = vec![
///     Interval { start: 0u32, end: 400, val: 0usize },
///     Interval { start: 400, end: 700, val: 1 },
/// ];
/// let list = AIList::build(segments);
/// assert_eq!(list.find(100, 500).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct AIList<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    starts: Vec<I>,
    ends: Vec<I>,
    max_ends: Vec<I>,
    intervals: Vec<Interval<I, T>>,
    sublists: Vec<Range<usize>>,
}

impl<I, T> Overlapper<I, T> for AIList<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    fn build(intervals: Vec<Interval<I, T>>) -> Self {
        let mut remaining = intervals;
        remaining.sort_by_key(|iv| iv.start);

        let mut list = AIList {
            starts: Vec::with_capacity(remaining.len()),
            ends: Vec::with_capacity(remaining.len()),
            max_ends: Vec::with_capacity(remaining.len()),
            intervals: Vec::with_capacity(remaining.len()),
            sublists: Vec::new(),
        };

        while !remaining.is_empty() {
            remaining = list.push_sublist(remaining);
        }

        list
    }

    fn find(&self, start: I, end: I) -> Vec<Interval<I, T>> {
        self.find_iter(start, end).cloned().collect()
    }

    fn find_iter<'a>(
        &'a self,
        start: I,
        end: I,
    ) -> Box<dyn Iterator<Item = &'a Interval<I, T>> + 'a> {
        Box::new(IterFind {
            list: self,
            start,
            end,
            sublist: 0,
            cursor: None,
        })
    }
}

impl<I, T> AIList<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    ///
    /// Keep the intervals that cover few of their successors as a new sublist and hand
    /// back the rest, still sorted by start.
    ///
    fn push_sublist(&mut self, sorted: Vec<Interval<I, T>>) -> Vec<Interval<I, T>> {
        let first = self.intervals.len();
        let mut deferred = Vec::new();

        for (idx, iv) in sorted.iter().enumerate() {
            let covered = sorted[idx + 1..]
                .iter()
                .take(MIN_COVERAGE * 2 - 1)
                .filter(|next| iv.end > next.end)
                .count();
            if covered >= MIN_COVERAGE {
                deferred.push(iv.clone());
            } else {
                self.starts.push(iv.start);
                self.ends.push(iv.end);
                self.intervals.push(iv.clone());
            }
        }

        let mut running = I::zero();
        for end in &self.ends[first..] {
            running = running.max(*end);
            self.max_ends.push(running);
        }

        self.sublists.push(first..self.intervals.len());
        deferred
    }

    /// Returns the number of intervals in the AIList.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the AIList contains no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Number of sublists the intervals were decomposed into.
    pub fn depth(&self) -> usize {
        self.sublists.len()
    }
}

/// Lazy overlap query over an [`AIList`], created by [`Overlapper::find_iter`].
///
/// Sublists are visited in order; inside a sublist the scan walks backwards from the last
/// interval starting before the query end and stops once the running maximum of the ends
/// falls at or before the query start.
#[derive(Debug)]
pub struct IterFind<'a, I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync + 'a,
{
    list: &'a AIList<I, T>,
    start: I,
    end: I,
    sublist: usize,
    cursor: Option<usize>,
}

impl<'a, I, T> Iterator for IterFind<'a, I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync + 'a,
{
    type Item = &'a Interval<I, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        while let Some(range) = list.sublists.get(self.sublist) {
            let offset = range.start;
            let starts = &list.starts[range.clone()];
            let end = self.end;
            let i = self
                .cursor
                .get_or_insert_with(|| starts.partition_point(|&s| s < end));

            while *i > 0 {
                *i -= 1;
                let at = offset + *i;
                if list.ends[at] > self.start {
                    return Some(&list.intervals[at]);
                }
                if list.max_ends[at] <= self.start {
                    break;
                }
            }

            self.cursor = None;
            self.sublist += 1;
        }
        None
    }
}
