//! Table front end for the material analyzer.
//!
//! Reads a CSV or spreadsheet, locates the description column, analyzes
//! every row and writes `<input>_completo.csv` next to the input.

pub mod error;
pub mod logging;
pub mod report;
pub mod table;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use matcode_core::{AnalysisStats, Analyzer, RuleSet};
use matcode_types::{AnalyzerConfig, MaterialRecord};
use tracing::info;

pub use error::TableError;
pub use report::Report;
pub use table::Table;

/// Processing options for one table.
#[derive(Debug, Clone)]
pub struct Options {
    /// Preferred description column name.
    pub column: String,
    /// Output path; defaults to [`table::output_path`].
    pub output: Option<PathBuf>,
    /// JSON rule file replacing the built-in tables.
    pub rules: Option<PathBuf>,
    /// Analyzer configuration.
    pub config: AnalyzerConfig,
    /// Analyze rows on the rayon pool.
    pub parallel: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            column: table::DESCRIPTION_CANDIDATES[0].to_owned(),
            output: None,
            rules: None,
            config: AnalyzerConfig::default(),
            parallel: false,
        }
    }
}

/// Result of [`process`].
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Where the coded table was written.
    pub output: PathBuf,
    /// Header of the column that was analyzed.
    pub column: String,
    /// One record per input record, in input order.
    pub records: Vec<MaterialRecord>,
    /// Counts over `records`.
    pub stats: AnalysisStats,
}

/// Reads `input`, analyzes its description column and writes the output table.
///
/// # Errors
///
/// Fails on unreadable rules or tables, an unresolvable column, or an
/// unwritable output path.
pub fn process(input: &Path, options: &Options) -> Result<Outcome> {
    let rules = match &options.rules {
        Some(path) => RuleSet::from_path(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => RuleSet::builtin(),
    };
    let analyzer = Analyzer::with_rules(&rules, options.config);

    let table = Table::read(input).with_context(|| format!("reading {}", input.display()))?;
    let index = table.resolve_column(&options.column)?;
    let column = table.headers()[index].clone();
    info!(path = %input.display(), rows = table.len(), column = %column, "table loaded");

    let descriptions = table.column(index);
    let records = if options.parallel {
        analyzer.analyze_par(&descriptions)
    } else {
        analyzer.analyze_batch(descriptions.iter().copied())
    };

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| table::output_path(input));
    table::write_records(&output, &records)
        .with_context(|| format!("writing {}", output.display()))?;
    info!(path = %output.display(), rows = records.len(), "output written");

    let stats = analyzer.stats(&records);
    Ok(Outcome {
        output,
        column,
        records,
        stats,
    })
}
