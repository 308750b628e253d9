use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "uniclass-gen")]
#[command(about = "Generates codepoint classification tables from a PPUCD dump")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the tables and write them to a file
    Generate {
        /// Path to the PPUCD file (ppucd.txt)
        #[arg(short, long)]
        input: String,

        /// Output file; written only if every table was built
        /// [default: uni_data.<format extension>]
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Cpp)]
        format: Format,

        /// Header included by the generated C++ file
        #[arg(long, default_value = "uni_data.hpp")]
        header: String,

        #[command(flatten)]
        build: BuildArgs,

        /// Also emit one table per general category and subcategory
        #[arg(long)]
        categories: bool,
    },

    /// Build the tables and print a summary without writing anything
    Inspect {
        /// Path to the PPUCD file (ppucd.txt)
        #[arg(short, long)]
        input: String,

        /// Hex codepoints to classify (e.g. 0041, 00B5)
        #[arg(short, long)]
        codepoint: Vec<String>,

        #[command(flatten)]
        build: BuildArgs,
    },
}

#[derive(clap::Args, Clone)]
struct BuildArgs {
    /// Skip general category tracking and the graphic table
    #[arg(long)]
    no_graphic: bool,

    /// Accept records whose start precedes the previous record's start
    #[arg(long)]
    allow_unsorted: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Cpp,
    Rust,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            input,
            output,
            format,
            header,
            build,
            categories,
        } => {
            let format: uniclass_tables::OutputFormat = format.into();
            commands::generate::run(commands::generate::GenerateOptions {
                input,
                output: output_path(output, format),
                format,
                cpp_header: header,
                build: build.into(),
                include_categories: categories,
            })
        }
        Commands::Inspect {
            input,
            codepoint,
            build,
        } => commands::inspect::run(input, codepoint, build.into()),
    }
}

fn output_path(output: Option<String>, format: uniclass_tables::OutputFormat) -> String {
    output.unwrap_or_else(|| format!("uni_data.{}", format.extension()))
}

impl From<Format> for uniclass_tables::OutputFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Cpp => uniclass_tables::OutputFormat::Cpp,
            Format::Rust => uniclass_tables::OutputFormat::Rust,
            Format::Json => uniclass_tables::OutputFormat::Json,
        }
    }
}

impl From<BuildArgs> for commands::BuildOptions {
    fn from(value: BuildArgs) -> Self {
        commands::BuildOptions {
            track_categories: !value.no_graphic,
            require_sorted: !value.allow_unsorted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_flags_are_negated() {
        let cli = Cli::try_parse_from([
            "uniclass-gen",
            "inspect",
            "-i",
            "ppucd.txt",
            "--no-graphic",
            "--allow-unsorted",
        ])
        .unwrap();
        let Commands::Inspect { build, .. } = cli.command else {
            panic!("expected inspect");
        };
        let options = commands::BuildOptions::from(build);
        assert!(!options.track_categories);
        assert!(!options.require_sorted);

        let cli = Cli::try_parse_from(["uniclass-gen", "inspect", "-i", "ppucd.txt"]).unwrap();
        let Commands::Inspect { build, .. } = cli.command else {
            panic!("expected inspect");
        };
        let options = commands::BuildOptions::from(build);
        assert!(options.track_categories);
        assert!(options.require_sorted);
    }

    #[test]
    fn test_generate_arguments() {
        let cli = Cli::try_parse_from([
            "uniclass-gen",
            "-vv",
            "generate",
            "-i",
            "ppucd.txt",
            "-f",
            "rust",
            "--categories",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Generate {
            output,
            format,
            categories,
            ..
        } = cli.command
        else {
            panic!("expected generate");
        };
        assert!(categories);
        assert_eq!(output_path(output, format.into()), "uni_data.rs");
        assert_eq!(
            output_path(Some("out/tables.cpp".to_string()), Format::Cpp.into()),
            "out/tables.cpp"
        );
    }
}
