//! `matcode`: classify material descriptions and generate codes.
//!
//! ```bash
//! matcode materiais.xlsx
//! matcode lista.csv --column produto --digest sha256 --parallel
//! matcode                      # single table in the current directory
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use matcode_cli::{logging, process, table, Options, Report};
use matcode_types::{AnalyzerConfig, DigestAlgorithm, ExtractorMode};
use tracing::info;

/// Electrical-material classifier and code generator
#[derive(Parser, Debug)]
#[command(name = "matcode", version)]
#[command(about = "Adds category, unit, name and code columns to a material table")]
struct Args {
    /// Input table (.csv, .xlsx, .xls); searched in the current directory when omitted
    input: Option<PathBuf>,

    /// Description column name (case-insensitive)
    #[arg(long, short = 'c', default_value = "descricao")]
    column: String,

    /// Output CSV path [default: <input>_completo.csv]
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// JSON rule file replacing the built-in tables
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Digest behind the code suffix (md5, sha256)
    #[arg(long, default_value = "md5")]
    digest: DigestAlgorithm,

    /// Use the code-generation attribute rules for names too
    #[arg(long)]
    shared_extractor: bool,

    /// Rows shown in the preview
    #[arg(long, default_value_t = 5)]
    preview: usize,

    /// Analyze rows in parallel
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let input = match args.input {
        Some(path) => path,
        None => discover_input()?,
    };

    let options = Options {
        column: args.column,
        output: args.output,
        rules: args.rules,
        config: AnalyzerConfig {
            digest: args.digest,
            extractor: if args.shared_extractor {
                ExtractorMode::Shared
            } else {
                ExtractorMode::Split
            },
            ..AnalyzerConfig::default()
        },
        parallel: args.parallel,
    };

    let outcome = process(&input, &options)?;

    println!("{}", Report::new(&outcome.records, &outcome.stats, args.preview));
    println!("Output: {}", outcome.output.display());
    Ok(())
}

fn discover_input() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("reading current directory")?;
    let mut found = table::discover(&cwd).context("listing current directory")?;

    match found.len() {
        0 => bail!(
            "no .csv/.xlsx/.xls table found in {}; pass the file path, e.g. `matcode materiais.xlsx`",
            cwd.display()
        ),
        1 => {
            let input = found.remove(0);
            info!(path = %input.display(), "processing the only table found");
            Ok(input)
        }
        _ => {
            let names: Vec<String> = found
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect();
            bail!(
                "found {} tables ({}); pass the one to process",
                names.len(),
                names.join(", ")
            )
        }
    }
}
