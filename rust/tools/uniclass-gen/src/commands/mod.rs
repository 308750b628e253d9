//! Command implementations for uniclass-gen

use anyhow::{Context, Result};
use uniclass_ucd::{
    AggregatorOptions, ClassificationSets, PropertyAggregator, ReaderOptions, RecordReader,
};

use crate::utils;

pub mod generate;
pub mod inspect;

/// Options shared by every command that builds the sets.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub track_categories: bool,
    pub require_sorted: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            track_categories: true,
            require_sorted: true,
        }
    }
}

/// Reads the PPUCD file at `input` and aggregates it into classification sets.
pub fn build_sets(input: &str, options: &BuildOptions) -> Result<ClassificationSets> {
    utils::validate_file_exists(input).with_context(|| format!("Invalid input file: {}", input))?;

    let mut reader = RecordReader::open(
        input,
        ReaderOptions {
            require_sorted: options.require_sorted,
        },
    )?;
    let mut aggregator = PropertyAggregator::new(AggregatorOptions {
        track_categories: options.track_categories,
    });
    aggregator
        .apply_all(reader.by_ref())
        .with_context(|| format!("Failed to process {}", input))?;

    log::info!(
        "read {} lines from {} ({} skipped)",
        reader.lines_read(),
        input,
        reader.lines_skipped()
    );
    Ok(aggregator.finish())
}
