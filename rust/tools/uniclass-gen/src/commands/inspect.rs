//! Inspect command implementation

use anyhow::{Context, Result};
use serde::Serialize;
use uniclass_tables::{EncodeOptions, EncodedTable, encode_all};
use uniclass_ucd::{ClassificationSets, Subcategory};

use super::{BuildOptions, build_sets};
use crate::utils;

#[derive(Serialize)]
struct InspectSummary {
    records: RecordInfo,
    tables: Vec<TableInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    codepoints: Vec<CodepointInfo>,
}

#[derive(Serialize)]
struct RecordInfo {
    block: usize,
    cp: usize,
    category_assignments: usize,
    revocations: usize,
}

#[derive(Serialize)]
struct TableInfo {
    name: String,
    function: String,
    ranges: usize,
    codepoints: u64,
}

#[derive(Serialize)]
struct CodepointInfo {
    codepoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'static str>,
    predicates: Vec<String>,
}

pub fn run(input: String, codepoints: Vec<String>, build: BuildOptions) -> Result<()> {
    let codepoints = codepoints
        .iter()
        .map(|s| utils::parse_codepoint(s))
        .collect::<Result<Vec<_>>>()?;

    let sets = build_sets(&input, &build)?;
    let summary = summarize(&sets, &codepoints)?;
    let json =
        serde_json::to_string_pretty(&summary).context("Failed to serialize inspect summary")?;
    println!("{}", json);
    Ok(())
}

fn summarize(sets: &ClassificationSets, codepoints: &[u32]) -> Result<InspectSummary> {
    let tables = encode_all(sets, &EncodeOptions::default()).context("Failed to encode tables")?;
    let stats = sets.stats();

    Ok(InspectSummary {
        records: RecordInfo {
            block: stats.block_records,
            cp: stats.codepoint_records,
            category_assignments: stats.category_assignments,
            revocations: stats.revocations,
        },
        tables: tables.iter().map(table_info).collect(),
        codepoints: codepoints
            .iter()
            .map(|&cp| codepoint_info(sets, &tables, cp))
            .collect(),
    })
}

fn table_info(table: &EncodedTable) -> TableInfo {
    TableInfo {
        name: table.name().to_string(),
        function: table.binding().function.clone(),
        ranges: table.range_count(),
        codepoints: table.codepoint_count(),
    }
}

fn codepoint_info(sets: &ClassificationSets, tables: &[EncodedTable], cp: u32) -> CodepointInfo {
    let category = Subcategory::ALL
        .into_iter()
        .find(|s| sets.subcategory(*s).is_some_and(|set| set.contains(cp)))
        .map(|s| s.code());
    CodepointInfo {
        codepoint: format!("U+{cp:04X}"),
        category,
        predicates: tables
            .iter()
            .filter(|t| t.contains(cp))
            .map(|t| t.binding().function.clone())
            .collect(),
    }
}
