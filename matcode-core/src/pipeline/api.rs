//! Row analysis entry points.

use matcode_types::{MaterialRecord, RowIndex};
use tracing::{debug, info};

use crate::pipeline::stats::AnalysisStats;
use crate::pipeline::types::Analyzer;

impl Analyzer {
    /// Analyzes one description.
    ///
    /// Total: any string, including empty and non-ASCII text, yields a record.
    pub fn analyze(&self, description: &str, row: RowIndex) -> MaterialRecord {
        let normalized = self.normalizer.normalize(description);
        let category = self.categories.classify_normalized(&normalized);
        let unit = self.units.classify_normalized(&normalized, category);
        let name = self.names.summarize(description, category);
        let code = self.codes.generate(&name, description, category, row);

        debug!(row, %category, %unit, %code, "analyzed");
        MaterialRecord::new(row, description, category, unit, name, code)
    }

    /// Analyzes a possibly absent description; `None` is treated as empty.
    #[inline]
    pub fn analyze_opt(&self, description: Option<&str>, row: RowIndex) -> MaterialRecord {
        self.analyze(description.unwrap_or_default(), row)
    }

    /// Analyzes rows in order; each row's index is its position.
    pub fn analyze_batch<I, S>(&self, descriptions: I) -> Vec<MaterialRecord>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let records: Vec<MaterialRecord> = descriptions
            .into_iter()
            .enumerate()
            .map(|(row, d)| self.analyze_opt(d.as_ref().map(AsRef::as_ref), row))
            .collect();

        info!(rows = records.len(), "batch analyzed");
        records
    }

    /// Parallel [`Analyzer::analyze_batch`]; output order equals input order.
    #[cfg(feature = "parallel")]
    pub fn analyze_par<S>(&self, descriptions: &[Option<S>]) -> Vec<MaterialRecord>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        let records: Vec<MaterialRecord> = descriptions
            .par_iter()
            .enumerate()
            .map(|(row, d)| self.analyze_opt(d.as_ref().map(AsRef::as_ref), row))
            .collect();

        info!(
            rows = records.len(),
            threads = rayon::current_num_threads(),
            "parallel batch analyzed"
        );
        records
    }

    /// Category and unit counts over `records`.
    pub fn stats(&self, records: &[MaterialRecord]) -> AnalysisStats {
        AnalysisStats::from_records(records)
    }
}
