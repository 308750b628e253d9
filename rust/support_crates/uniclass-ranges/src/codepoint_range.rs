//! A closed, non-empty interval of codepoints.

use std::{fmt, ops::RangeInclusive};

use uniclass_common::{Error, Result, verify_arg};

/// A closed interval `[start, end]` of codepoints with `start <= end`.
///
/// Unlike the half-open `Range<u32>` used by most of the standard library,
/// both endpoints are included: `[0x41, 0x41]` covers exactly one codepoint.
/// An inverted interval cannot be constructed, so every value of this type is
/// valid input for [`IntervalSet`](crate::IntervalSet) operations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodepointRange {
    start: u32,
    end: u32,
}

impl CodepointRange {
    /// Creates the range `[start, end]`.
    ///
    /// Returns an `InvalidArgument` error if `start > end`.
    pub fn new(start: u32, end: u32) -> Result<CodepointRange> {
        verify_arg!(range, start <= end);
        Ok(CodepointRange { start, end })
    }

    #[inline]
    pub(crate) fn new_unchecked(start: u32, end: u32) -> CodepointRange {
        debug_assert!(start <= end);
        CodepointRange { start, end }
    }

    /// Creates the range covering the single codepoint `cp`.
    pub fn single(cp: u32) -> CodepointRange {
        CodepointRange { start: cp, end: cp }
    }

    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of codepoints in the range.
    #[inline]
    pub fn codepoint_count(&self) -> u64 {
        (self.end - self.start) as u64 + 1
    }

    #[inline]
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn contains(&self, cp: u32) -> bool {
        self.start <= cp && cp <= self.end
    }

    /// Returns `true` if the two ranges share at least one codepoint.
    #[inline]
    pub fn overlaps(&self, other: &CodepointRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns `true` if the two ranges overlap or are directly adjacent, i.e.
    /// their union is a single range.
    #[inline]
    pub fn touches(&self, other: &CodepointRange) -> bool {
        self.start as u64 <= other.end as u64 + 1 && other.start as u64 <= self.end as u64 + 1
    }

    /// Smallest range covering both `self` and `other`.
    #[inline]
    pub fn cover(&self, other: &CodepointRange) -> CodepointRange {
        CodepointRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn iter(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl From<CodepointRange> for RangeInclusive<u32> {
    fn from(range: CodepointRange) -> Self {
        range.start..=range.end
    }
}

impl TryFrom<RangeInclusive<u32>> for CodepointRange {
    type Error = Error;

    fn try_from(range: RangeInclusive<u32>) -> Result<Self> {
        CodepointRange::new(*range.start(), *range.end())
    }
}

impl fmt::Debug for CodepointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:#06X}, {:#06X}]", self.start, self.end)
    }
}

impl fmt::Display for CodepointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{:04X}", self.start)
        } else {
            write!(f, "{:04X}..{:04X}", self.start, self.end)
        }
    }
}
