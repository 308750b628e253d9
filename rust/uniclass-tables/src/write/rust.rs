use std::io::Write;

use itertools::Itertools;
use uniclass_common::{Error, Result};

use crate::{EncodedTable, TableWriter};

const PAIRS_PER_LINE: usize = 6;

const PRELUDE: &str = "\
// Generated by uniclass-gen. Do not edit.

/// Returns `true` if `cp` lies in one of the ranges of `table`, a flat
/// sequence of non-decreasing `[start, end]` pairs.
#[inline]
fn lookup(table: &[u32], cp: u32) -> bool {
    let (mut lo, mut hi) = (0, table.len() / 2);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if table[2 * mid + 1] < cp {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo < table.len() / 2 && table[2 * lo] <= cp
}
";

/// Writes a self-contained Rust module: one `static` boundary array and one
/// binary-search lookup function per table.
pub struct RustWriter;

impl TableWriter for RustWriter {
    fn write_tables(&self, tables: &[EncodedTable], out: &mut dyn Write) -> Result<()> {
        let io = |e| Error::io("writing Rust tables", e);
        out.write_all(PRELUDE.as_bytes()).map_err(io)?;

        for table in tables {
            let name = table.name();
            write!(
                out,
                "\npub const {name}_RANGES: usize = {};\n\n\
                 #[rustfmt::skip]\n\
                 pub static {name}: [u32; {}] = [\n",
                table.range_count(),
                table.boundaries().len(),
            )
            .map_err(io)?;
            for line in &table.ranges().chunks(PAIRS_PER_LINE) {
                let line = line.map(|(start, end)| format!("{start:#06X}, {end:#06X},")).join(" ");
                writeln!(out, "    {line}").map_err(io)?;
            }
            write!(
                out,
                "];\n\n\
                 pub fn {}(cp: u32) -> bool {{\n    lookup(&{name}, cp)\n}}\n",
                table.binding().function,
            )
            .map_err(io)?;
        }
        Ok(())
    }
}
