//! Rendering of encoded tables for their consumers.

use std::io::Write;

use uniclass_common::Result;

use crate::EncodedTable;

pub mod cpp;
pub mod json;
pub mod rust;

pub use cpp::CppWriter;
pub use json::JsonWriter;
pub use rust::RustWriter;

/// Renders a batch of tables into a single output document.
pub trait TableWriter {
    fn write_tables(&self, tables: &[EncodedTable], out: &mut dyn Write) -> Result<()>;

    /// Renders into memory, so that nothing reaches the destination unless
    /// every table rendered.
    fn render(&self, tables: &[EncodedTable]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_tables(tables, &mut buf)?;
        Ok(buf)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// C++ source defining `UNI_<NAME>` arrays and `DEFINE_PROP` bindings.
    #[default]
    Cpp,
    /// Rust module with static arrays and lookup functions.
    Rust,
    Json,
}

impl OutputFormat {
    pub fn writer(&self) -> Box<dyn TableWriter> {
        match self {
            OutputFormat::Cpp => Box::new(CppWriter::default()),
            OutputFormat::Rust => Box::new(RustWriter),
            OutputFormat::Json => Box::new(JsonWriter),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Cpp => "cpp",
            OutputFormat::Rust => "rs",
            OutputFormat::Json => "json",
        }
    }
}
