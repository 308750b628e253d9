//! Routing of parsed records into per-predicate interval sets.

use uniclass_common::{Error, Result};
use uniclass_ranges::{CodepointRange, IntervalSet};

use crate::{GeneralCategory, Predicate, Record, RecordKind, Subcategory};

pub const WHITE_SPACE: &str = "WSpace";
pub const XID_START: &str = "XIDS";
pub const XID_CONTINUE: &str = "XIDC";
pub const GENERAL_CATEGORY: &str = "gc";

#[derive(Debug, Clone)]
pub struct AggregatorOptions {
    /// Track general category buckets and derive the graphic predicate from
    /// them. When disabled, only space, id-start and id-continue are built.
    pub track_categories: bool,
}

impl Default for AggregatorOptions {
    fn default() -> Self {
        AggregatorOptions {
            track_categories: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatorStats {
    pub block_records: usize,
    pub codepoint_records: usize,
    pub category_assignments: usize,
    pub revocations: usize,
}

/// Owns the interval sets under construction and applies records to them.
///
/// Each record is applied with "last write wins" semantics: a later record
/// overrides, for its range, whatever an earlier (typically enclosing `block`)
/// record asserted about the same property. Properties a record does not
/// mention are left untouched.
pub struct PropertyAggregator {
    options: AggregatorOptions,
    space: IntervalSet,
    id_start: IntervalSet,
    id_continue: IntervalSet,
    graphic: IntervalSet,
    categories: [IntervalSet; GeneralCategory::COUNT],
    subcategories: [IntervalSet; Subcategory::COUNT],
    stats: AggregatorStats,
}

impl PropertyAggregator {
    pub fn new(options: AggregatorOptions) -> Self {
        PropertyAggregator {
            options,
            space: IntervalSet::new(),
            id_start: IntervalSet::new(),
            id_continue: IntervalSet::new(),
            graphic: IntervalSet::new(),
            categories: std::array::from_fn(|_| IntervalSet::new()),
            subcategories: std::array::from_fn(|_| IntervalSet::new()),
            stats: AggregatorStats::default(),
        }
    }

    pub fn stats(&self) -> &AggregatorStats {
        &self.stats
    }

    /// Applies one record.
    ///
    /// Fails with `UnknownCategory` if the record assigns a `gc` value outside
    /// the known subcategories (only when category tracking is enabled).
    pub fn apply(&mut self, record: &Record) -> Result<()> {
        match record.kind {
            RecordKind::Block => self.stats.block_records += 1,
            RecordKind::Codepoint => self.stats.codepoint_records += 1,
        }
        let range = record.range;

        match record.flag(WHITE_SPACE) {
            Some(true) => self.space.add(range),
            Some(false) => {
                log::debug!(
                    "line {}: ignoring -{WHITE_SPACE} on {} {range}",
                    record.line,
                    record.kind.tag()
                );
            }
            None => (),
        }

        if let Some(value) = record.flag(XID_START) {
            Self::assign(&mut self.id_start, range, value, &mut self.stats);
        }
        if let Some(value) = record.flag(XID_CONTINUE) {
            Self::assign(&mut self.id_continue, range, value, &mut self.stats);
        }

        if self.options.track_categories {
            if let Some(code) = record.value(GENERAL_CATEGORY) {
                let subcategory = Subcategory::from_code(code)
                    .ok_or_else(|| Error::unknown_category(record.line, code))?;
                self.assign_category(range, subcategory);
            }
        }
        Ok(())
    }

    /// Applies every record from `records`, stopping at the first error.
    pub fn apply_all<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<Record>>,
    {
        for record in records {
            self.apply(&record?)?;
        }
        Ok(())
    }

    /// Finalizes the aggregation, handing out the sets as immutable values.
    pub fn finish(self) -> ClassificationSets {
        log::info!(
            "aggregated {} block and {} cp records ({} category assignments, {} revocations)",
            self.stats.block_records,
            self.stats.codepoint_records,
            self.stats.category_assignments,
            self.stats.revocations
        );
        let categories = self.options.track_categories.then(|| CategorySets {
            graphic: self.graphic,
            categories: self.categories,
            subcategories: self.subcategories,
        });
        ClassificationSets {
            space: self.space,
            id_start: self.id_start,
            id_continue: self.id_continue,
            categories,
            stats: self.stats,
        }
    }

    fn assign(set: &mut IntervalSet, range: CodepointRange, value: bool, stats: &mut AggregatorStats) {
        if value {
            set.add(range);
        } else {
            set.remove(range);
            stats.revocations += 1;
        }
    }

    /// Moves `range` into the buckets of `subcategory` and its category,
    /// removing it from all others, then recomputes graphic membership.
    fn assign_category(&mut self, range: CodepointRange, subcategory: Subcategory) {
        self.stats.category_assignments += 1;
        let category = subcategory.category();

        for (i, set) in self.subcategories.iter_mut().enumerate() {
            if i == subcategory.index() {
                set.add(range);
            } else {
                set.remove(range);
            }
        }
        for (i, set) in self.categories.iter_mut().enumerate() {
            if i == category.index() {
                set.add(range);
            } else {
                set.remove(range);
            }
        }

        if subcategory.is_graphic() {
            self.graphic.add(range);
        } else {
            self.graphic.remove(range);
        }
    }
}

struct CategorySets {
    graphic: IntervalSet,
    categories: [IntervalSet; GeneralCategory::COUNT],
    subcategories: [IntervalSet; Subcategory::COUNT],
}

/// The finished, immutable interval sets of one aggregation.
pub struct ClassificationSets {
    space: IntervalSet,
    id_start: IntervalSet,
    id_continue: IntervalSet,
    categories: Option<CategorySets>,
    stats: AggregatorStats,
}

impl ClassificationSets {
    pub fn space(&self) -> &IntervalSet {
        &self.space
    }

    pub fn id_start(&self) -> &IntervalSet {
        &self.id_start
    }

    pub fn id_continue(&self) -> &IntervalSet {
        &self.id_continue
    }

    /// `None` if the aggregation ran without category tracking.
    pub fn graphic(&self) -> Option<&IntervalSet> {
        self.categories.as_ref().map(|c| &c.graphic)
    }

    pub fn category(&self, category: GeneralCategory) -> Option<&IntervalSet> {
        self.categories
            .as_ref()
            .map(|c| &c.categories[category.index()])
    }

    pub fn subcategory(&self, subcategory: Subcategory) -> Option<&IntervalSet> {
        self.categories
            .as_ref()
            .map(|c| &c.subcategories[subcategory.index()])
    }

    pub fn has_categories(&self) -> bool {
        self.categories.is_some()
    }

    pub fn stats(&self) -> &AggregatorStats {
        &self.stats
    }

    pub fn get(&self, predicate: Predicate) -> Option<&IntervalSet> {
        match predicate {
            Predicate::Space => Some(self.space()),
            Predicate::IdStart => Some(self.id_start()),
            Predicate::IdContinue => Some(self.id_continue()),
            Predicate::Graphic => self.graphic(),
            Predicate::Category(c) => self.category(c),
            Predicate::Subcategory(s) => self.subcategory(s),
        }
    }

    /// The classification predicates in emission order: space, id-start,
    /// id-continue, then graphic when available.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Predicate::CORE.to_vec();
        if self.has_categories() {
            predicates.push(Predicate::Graphic);
        }
        predicates
    }

    /// Every category and subcategory predicate, or nothing without category
    /// tracking.
    pub fn category_predicates(&self) -> Vec<Predicate> {
        if !self.has_categories() {
            return Vec::new();
        }
        GeneralCategory::ALL
            .into_iter()
            .map(Predicate::Category)
            .chain(Subcategory::ALL.into_iter().map(Predicate::Subcategory))
            .collect()
    }
}
