//! Sorted, disjoint codepoint range sets.
//!
//! - [`CodepointRange`] - a closed, non-empty interval of codepoints
//! - [`IntervalSet`] - an ordered set of non-overlapping, non-adjacent ranges with
//!   merge-on-add and split-on-remove semantics

pub mod codepoint_range;
pub mod interval_set;

pub use codepoint_range::CodepointRange;
pub use interval_set::{IntervalSet, first_violation};
