use std::io::Write;

use serde::Serialize;
use uniclass_common::{Error, Result};

use crate::{EncodedTable, TableWriter};

#[derive(Serialize)]
struct TablesDocument<'a> {
    tables: Vec<TableEntry<'a>>,
}

#[derive(Serialize)]
struct TableEntry<'a> {
    name: &'a str,
    function: &'a str,
    ranges: usize,
    boundaries: &'a [u32],
}

/// Writes `{"tables": [{"name", "function", "ranges", "boundaries"}, ...]}`.
pub struct JsonWriter;

impl TableWriter for JsonWriter {
    fn write_tables(&self, tables: &[EncodedTable], out: &mut dyn Write) -> Result<()> {
        let document = TablesDocument {
            tables: tables
                .iter()
                .map(|table| TableEntry {
                    name: table.name(),
                    function: &table.binding().function,
                    ranges: table.range_count(),
                    boundaries: table.boundaries(),
                })
                .collect(),
        };
        serde_json::to_writer_pretty(&mut *out, &document)
            .map_err(|e| Error::io("writing JSON tables", e.into()))?;
        writeln!(out).map_err(|e| Error::io("writing JSON tables", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::write::test_util::sample_tables;

    #[test]
    fn test_json_document() {
        let out = JsonWriter.render(&sample_tables()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let tables = value["tables"].as_array().unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0]["name"], "SPACE");
        assert_eq!(tables[0]["function"], "is_space");
        assert_eq!(tables[0]["ranges"], 2);
        assert_eq!(tables[0]["boundaries"], serde_json::json!([9, 13, 32, 32]));
        assert_eq!(tables[1]["name"], "ID_START");
    }
}
