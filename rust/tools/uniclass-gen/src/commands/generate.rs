//! Generate command implementation

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use uniclass_tables::{EncodeOptions, OutputFormat, TableWriter, encode_all, write::CppWriter};

use super::{BuildOptions, build_sets};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub input: String,
    pub output: String,
    pub format: OutputFormat,
    pub cpp_header: String,
    pub build: BuildOptions,
    pub include_categories: bool,
}

pub fn run(options: GenerateOptions) -> Result<()> {
    println!("Generating tables from: {}", options.input);

    let sets = build_sets(&options.input, &options.build)?;
    let tables = encode_all(
        &sets,
        &EncodeOptions {
            include_categories: options.include_categories,
        },
    )
    .context("Failed to encode tables")?;

    let writer: Box<dyn TableWriter> = match options.format {
        OutputFormat::Cpp => Box::new(CppWriter {
            header: options.cpp_header.clone(),
        }),
        format => format.writer(),
    };
    let rendered = writer
        .render(&tables)
        .context("Failed to render tables")?;

    write_atomically(Path::new(&options.output), &rendered)
        .with_context(|| format!("Failed to write tables to file: {}", options.output))?;

    for table in &tables {
        println!(
            "  {:<16} {:>6} ranges {:>8} codepoints",
            table.name(),
            table.range_count(),
            table.codepoint_count()
        );
    }
    println!("Tables written to: {}", options.output);
    Ok(())
}

/// Writes `data` to a temporary file next to `path` and renames it into
/// place, so `path` is either fully replaced or left untouched.
fn write_atomically(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    file.write_all(data)?;
    file.flush()?;
    file.persist(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
# sample dump
ucd;15.1.0
block;0000..007F;blk=ASCII;gc=Cc
cp;0009..000D;gc=Cc;WSpace
cp;0020;gc=Zs;WSpace
cp;0030..0039;gc=Nd;XIDC
cp;0041..005A;gc=Lu;XIDC;XIDS
cp;005F;gc=Pc;XIDC
cp;0061..007A;gc=Ll;XIDC;XIDS
block;0080..00FF;blk=Latin_1_Sup;gc=Lo;XIDC;XIDS
cp;0080..009F;gc=Cc;-XIDC;-XIDS
cp;00A0;gc=Zs;WSpace;-XIDC;-XIDS
cp;00B5;gc=Ll
cp;00D7;gc=Sm;-XIDC;-XIDS
";

    fn options(dir: &TempDir, format: OutputFormat) -> GenerateOptions {
        let input = dir.path().join("ppucd.txt");
        fs::write(&input, SAMPLE).unwrap();
        GenerateOptions {
            input: input.to_string_lossy().into_owned(),
            output: dir
                .path()
                .join(format!("uni_data.{}", format.extension()))
                .to_string_lossy()
                .into_owned(),
            format,
            cpp_header: "uni_data.hpp".to_string(),
            build: BuildOptions::default(),
            include_categories: false,
        }
    }

    #[test]
    fn test_generate_cpp() {
        let dir = TempDir::new().unwrap();
        let options = options(&dir, OutputFormat::Cpp);
        run(options.clone()).unwrap();

        let text = fs::read_to_string(&options.output).unwrap();
        assert!(text.contains(
            "std::size_t UNI_SPACE_RANGES = 3;\nstd::uint32_t UNI_SPACE[] = {\n\t9,13,32,32,160,160\n};"
        ));
        assert!(text.contains("DEFINE_PROP(isIdStart, ID_START)"));
        assert!(text.contains("\t65,90,97,122,161,214,216,255\n"));
        assert!(text.contains("DEFINE_PROP(isGraphic, GRAPHIC)"));
        assert!(text.contains("\t32,32,48,57,65,90,95,95,97,122,160,255\n"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let options = options(&dir, OutputFormat::Rust);
        run(options.clone()).unwrap();
        let first = fs::read(&options.output).unwrap();
        run(options.clone()).unwrap();
        let second = fs::read(&options.output).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_categories_json() {
        let dir = TempDir::new().unwrap();
        let mut options = options(&dir, OutputFormat::Json);
        options.include_categories = true;
        run(options.clone()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&options.output).unwrap()).unwrap();
        let tables = value["tables"].as_array().unwrap();
        assert_eq!(tables.len(), 4 + 7 + 30);
        let nd = tables.iter().find(|t| t["name"] == "GC_ND").unwrap();
        assert_eq!(nd["boundaries"], serde_json::json!([0x30, 0x39]));
    }

    #[test]
    fn test_failure_leaves_output_untouched() {
        let dir = TempDir::new().unwrap();
        let options = options(&dir, OutputFormat::Cpp);
        fs::write(&options.output, "previous").unwrap();
        fs::write(&options.input, "cp;0041;gc=Lu\ncp;00ZZ;gc=Lu\n").unwrap();

        let err = run(options.clone()).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"), "{err:#}");
        assert_eq!(fs::read_to_string(&options.output).unwrap(), "previous");
    }

    #[test]
    fn test_unsorted_input_fails_unless_allowed() {
        let dir = TempDir::new().unwrap();
        let mut options = options(&dir, OutputFormat::Cpp);
        fs::write(&options.input, "cp;0041;gc=Lu;XIDS\ncp;0030;gc=Nd;XIDC\n").unwrap();
        assert!(run(options.clone()).is_err());
        assert!(!Path::new(&options.output).exists());

        options.build.require_sorted = false;
        run(options.clone()).unwrap();
        assert!(Path::new(&options.output).exists());
    }

    #[test]
    fn test_missing_input() {
        let dir = TempDir::new().unwrap();
        let mut options = options(&dir, OutputFormat::Cpp);
        options.input = dir.path().join("missing.txt").to_string_lossy().into_owned();
        assert!(run(options).is_err());
    }
}
