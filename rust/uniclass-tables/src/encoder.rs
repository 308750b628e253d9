//! Validation and flattening of finished interval sets.

use uniclass_common::{Error, Result, verify_invariant};
use uniclass_ranges::{CodepointRange, IntervalSet, first_violation};
use uniclass_ucd::{ClassificationSets, Predicate};

use crate::TableBinding;

/// A predicate's finished table: `N` ranges flattened into `2N` boundaries.
///
/// Immutable once built; every instance has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTable {
    binding: TableBinding,
    boundaries: Vec<u32>,
}

impl EncodedTable {
    /// Validates and flattens `set`.
    pub fn encode(binding: TableBinding, set: &IntervalSet) -> Result<EncodedTable> {
        EncodedTable::from_ranges(binding, set.as_slice())
    }

    /// Validates and flattens a raw sequence of ranges.
    ///
    /// Every consecutive pair must be separated by a gap of at least one
    /// codepoint; overlapping, touching or unordered ranges fail with
    /// `InvariantViolation` and nothing is produced.
    pub fn from_ranges(binding: TableBinding, ranges: &[CodepointRange]) -> Result<EncodedTable> {
        if let Some(i) = first_violation(ranges) {
            return Err(Error::invariant_violation(
                binding.name.clone(),
                format!(
                    "ranges {:?} and {:?} at index {i} overlap or touch",
                    ranges[i],
                    ranges[i + 1]
                ),
            ));
        }

        let boundaries = ranges
            .iter()
            .flat_map(|r| [r.start(), r.end()])
            .collect::<Vec<_>>();
        verify_invariant!(&binding.name, boundaries.is_sorted());

        Ok(EncodedTable {
            binding,
            boundaries,
        })
    }

    pub fn binding(&self) -> &TableBinding {
        &self.binding
    }

    pub fn name(&self) -> &str {
        &self.binding.name
    }

    /// Number of ranges `N`.
    pub fn range_count(&self) -> usize {
        self.boundaries.len() / 2
    }

    /// The `2N` boundaries, alternating start and end of each range.
    pub fn boundaries(&self) -> &[u32] {
        &self.boundaries
    }

    /// Iterates the `(start, end)` pairs.
    pub fn ranges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.boundaries.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn codepoint_count(&self) -> u64 {
        self.ranges()
            .map(|(start, end)| (end - start) as u64 + 1)
            .sum()
    }

    /// Binary search over the boundaries, as performed by the generated
    /// lookup functions.
    pub fn contains(&self, cp: u32) -> bool {
        let (mut lo, mut hi) = (0, self.range_count());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.boundaries[2 * mid + 1] < cp {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo < self.range_count() && self.boundaries[2 * lo] <= cp
    }
}

#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    /// Also encode one table per general category and subcategory.
    pub include_categories: bool,
}

/// Encodes every table of `sets`, in emission order.
///
/// All tables are validated before any is returned: a single failure fails
/// the whole batch.
pub fn encode_all(sets: &ClassificationSets, options: &EncodeOptions) -> Result<Vec<EncodedTable>> {
    let mut predicates = sets.predicates();
    if options.include_categories {
        predicates.extend(sets.category_predicates());
    }

    let mut tables = Vec::with_capacity(predicates.len());
    for predicate in predicates {
        let Some(set) = sets.get(predicate) else {
            continue;
        };
        let table = encode_predicate(predicate, set)?;
        log::info!(
            "{}: {} ranges, {} codepoints",
            table.name(),
            table.range_count(),
            table.codepoint_count()
        );
        tables.push(table);
    }
    Ok(tables)
}

pub fn encode_predicate(predicate: Predicate, set: &IntervalSet) -> Result<EncodedTable> {
    EncodedTable::encode(TableBinding::for_predicate(predicate), set)
}
