//! A mutable, sorted set of disjoint, non-adjacent codepoint ranges.

use itertools::Itertools;
use uniclass_common::{Result, verify_arg};

use crate::CodepointRange;

/// An ordered collection of closed codepoint ranges.
///
/// Between operations the stored ranges satisfy:
/// - strictly increasing order by `start` (and therefore by `end`);
/// - no overlap and no adjacency: for consecutive ranges `a`, `b`,
///   `a.end() + 1 < b.start()`. Touching ranges are always merged.
///
/// Additions of ranges that arrive in ascending order are O(1) amortized
/// (they either extend the last range or are pushed behind it). Out-of-order
/// additions and removals locate the affected run of ranges with a binary
/// search and splice it, so the invariants hold for any input order.
///
/// Lookups (`contains`, `search`) are O(log n).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntervalSet {
    ranges: Vec<CodepointRange>,
}

impl IntervalSet {
    /// Creates an empty set.
    pub fn new() -> IntervalSet {
        IntervalSet { ranges: Vec::new() }
    }

    /// Builds a set from arbitrary (possibly unsorted, overlapping) ranges.
    pub fn from_ranges(ranges: impl IntoIterator<Item = CodepointRange>) -> IntervalSet {
        let mut set = IntervalSet::new();
        for range in ranges {
            set.add(range);
        }
        set
    }

    /// Inserts `range`, merging it with every stored range it overlaps or
    /// touches.
    pub fn add(&mut self, range: CodepointRange) {
        match self.ranges.last().copied() {
            None => {
                self.ranges.push(range);
                return;
            }
            Some(last) if range.start() >= last.start() => {
                if last.touches(&range) {
                    self.set_last(last.cover(&range));
                } else {
                    self.ranges.push(range);
                }
                return;
            }
            Some(_) => (),
        }

        // General path: `first..past` is the run of ranges touching `range`.
        let first = self
            .ranges
            .partition_point(|r| (r.end() as u64) + 1 < range.start() as u64);
        let past = self
            .ranges
            .partition_point(|r| (r.start() as u64) <= range.end() as u64 + 1);
        if first == past {
            self.ranges.insert(first, range);
        } else {
            let merged = range
                .cover(&self.ranges[first])
                .cover(&self.ranges[past - 1]);
            self.ranges.splice(first..past, std::iter::once(merged));
        }
    }

    /// Adjacent-append insertion for callers that feed ranges in ascending
    /// order.
    ///
    /// Extends the last range when `range` overlaps or directly follows it,
    /// and pushes a new last range otherwise. A `range` that starts before the
    /// start of the current last range violates the ordering contract and is
    /// rejected with an `InvalidArgument` error; the set is left unchanged.
    pub fn append(&mut self, range: CodepointRange) -> Result<()> {
        let Some(last) = self.ranges.last().copied() else {
            self.ranges.push(range);
            return Ok(());
        };
        verify_arg!(range, range.start() >= last.start());
        if last.touches(&range) {
            self.set_last(last.cover(&range));
        } else {
            self.ranges.push(range);
        }
        Ok(())
    }

    /// Removes every codepoint of `range` from the set.
    ///
    /// Stored ranges that partially overlap `range` are split into at most two
    /// remainders. Removing a range that intersects nothing is a no-op.
    pub fn remove(&mut self, range: CodepointRange) {
        let first = self.ranges.partition_point(|r| r.end() < range.start());
        let past = self.ranges.partition_point(|r| r.start() <= range.end());
        if first >= past {
            return;
        }

        let head = self.ranges[first];
        let tail = self.ranges[past - 1];
        let mut remainders = Vec::with_capacity(2);
        if head.start() < range.start() {
            remainders.push(CodepointRange::new_unchecked(head.start(), range.start() - 1));
        }
        if tail.end() > range.end() {
            remainders.push(CodepointRange::new_unchecked(range.end() + 1, tail.end()));
        }
        self.ranges.splice(first..past, remainders);
    }

    /// Removes the single codepoint `cp`.
    pub fn remove_codepoint(&mut self, cp: u32) {
        self.remove(CodepointRange::single(cp));
    }

    /// Restricted removal mode: removes `range`, which must cover exactly one
    /// codepoint.
    ///
    /// # Panics
    ///
    /// Panics if `range` covers more than one codepoint.
    pub fn remove_single(&mut self, range: CodepointRange) {
        assert!(
            range.is_single(),
            "remove_single: expected a single codepoint, got {range:?}"
        );
        self.remove_codepoint(range.start());
    }

    /// Searches for the range containing `cp`.
    ///
    /// Returns `Ok(index)` of the containing range, or `Err(index)` with the
    /// position where a range containing `cp` would be inserted.
    pub fn search(&self, cp: u32) -> std::result::Result<usize, usize> {
        let idx = self.ranges.partition_point(|r| r.end() < cp);
        match self.ranges.get(idx) {
            Some(r) if r.start() <= cp => Ok(idx),
            _ => Err(idx),
        }
    }

    #[inline]
    pub fn contains(&self, cp: u32) -> bool {
        self.search(cp).is_ok()
    }

    /// Number of ranges (not codepoints) in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Total number of codepoints covered by the set.
    pub fn codepoint_count(&self) -> u64 {
        self.ranges.iter().map(CodepointRange::codepoint_count).sum()
    }

    pub fn as_slice(&self) -> &[CodepointRange] {
        &self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CodepointRange> {
        self.ranges.iter()
    }

    fn set_last(&mut self, range: CodepointRange) {
        if let Some(last) = self.ranges.last_mut() {
            *last = range;
        }
    }

    /// Returns the index `i` of the first pair `(ranges[i], ranges[i + 1])`
    /// that overlaps, touches, or is out of order, if any.
    pub fn first_violation(&self) -> Option<usize> {
        first_violation(&self.ranges)
    }
}

/// Returns the index `i` of the first consecutive pair in `ranges` that is
/// not separated by a gap of at least one codepoint (`ranges[i].end() + 1 <
/// ranges[i + 1].start()` fails).
pub fn first_violation(ranges: &[CodepointRange]) -> Option<usize> {
    ranges
        .iter()
        .tuple_windows()
        .position(|(a, b)| (a.end() as u64) + 1 >= b.start() as u64)
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a CodepointRange;
    type IntoIter = std::slice::Iter<'a, CodepointRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

impl FromIterator<CodepointRange> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = CodepointRange>>(iter: I) -> Self {
        IntervalSet::from_ranges(iter)
    }
}

impl Extend<CodepointRange> for IntervalSet {
    fn extend<I: IntoIterator<Item = CodepointRange>>(&mut self, iter: I) {
        for range in iter {
            self.add(range);
        }
    }
}
