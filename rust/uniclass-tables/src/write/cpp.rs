use std::io::Write;

use itertools::Itertools;
use uniclass_common::{Error, Result};

use crate::{EncodedTable, TableWriter};

/// Writes a C++ translation unit:
///
/// ```text
/// std::size_t UNI_SPACE_RANGES = 2;
/// std::uint32_t UNI_SPACE[] = {
///     9,13,32,32
/// };
/// DEFINE_PROP(isSpace, SPACE)
/// ```
///
/// `DEFINE_PROP` is expected to come from `header`, which declares the lookup
/// functions.
pub struct CppWriter {
    pub header: String,
}

impl Default for CppWriter {
    fn default() -> Self {
        CppWriter {
            header: "uni_data.hpp".to_string(),
        }
    }
}

impl TableWriter for CppWriter {
    fn write_tables(&self, tables: &[EncodedTable], out: &mut dyn Write) -> Result<()> {
        let io = |e| Error::io("writing C++ tables", e);
        write!(
            out,
            "#include <cstdint>\n#include <cstddef>\n\n#include \"{}\"\n\n",
            self.header
        )
        .map_err(io)?;

        for table in tables {
            let name = table.name();
            write!(out, "\nstd::size_t UNI_{name}_RANGES = {};\n", table.range_count())
                .map_err(io)?;
            if table.range_count() == 0 {
                // Zero-length arrays are ill-formed; the lookup never reads
                // past `_RANGES`.
                writeln!(out, "std::uint32_t UNI_{name}[1] = {{0}};").map_err(io)?;
            } else {
                write!(
                    out,
                    "std::uint32_t UNI_{name}[] = {{\n\t{}\n}};\n",
                    table.boundaries().iter().join(",")
                )
                .map_err(io)?;
            }
            writeln!(out, "DEFINE_PROP({}, {name})", table.binding().camel_function())
                .map_err(io)?;
        }
        Ok(())
    }
}
