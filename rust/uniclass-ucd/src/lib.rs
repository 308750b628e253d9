//! Reading preparsed Unicode Character Database (PPUCD) dumps and aggregating
//! their property assignments into per-predicate codepoint sets.
//!
//! Data flows one way: text lines are parsed into [`Record`]s by a
//! [`RecordReader`], and each record is applied to a [`PropertyAggregator`],
//! which owns every [`IntervalSet`](uniclass_ranges::IntervalSet) until
//! [`PropertyAggregator::finish`] hands them out as immutable
//! [`ClassificationSets`].

pub mod aggregator;
pub mod category;
pub mod predicate;
pub mod reader;
pub mod record;

pub use aggregator::{AggregatorOptions, AggregatorStats, ClassificationSets, PropertyAggregator};
pub use category::{GeneralCategory, Subcategory};
pub use predicate::Predicate;
pub use reader::{ReaderOptions, RecordReader};
pub use record::{PropertyValue, Record, RecordKind};
