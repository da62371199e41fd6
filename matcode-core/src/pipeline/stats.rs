//! Batch statistics.

use core::fmt;

use matcode_types::{Category, MaterialRecord, Unit};
use rustc_hash::FxHashMap;

/// Counts per category and per unit over a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisStats {
    /// Number of records.
    pub total: usize,
    /// Records per category.
    pub categories: FxHashMap<Category, usize>,
    /// Records per unit.
    pub units: FxHashMap<Unit, usize>,
}

impl AnalysisStats {
    /// Tallies `records`.
    pub fn from_records(records: &[MaterialRecord]) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.record(record);
        }
        stats
    }

    /// Adds one record to the tallies.
    pub fn record(&mut self, record: &MaterialRecord) {
        self.total += 1;
        *self.categories.entry(record.category()).or_insert(0) += 1;
        *self.units.entry(record.unit()).or_insert(0) += 1;
    }

    /// Categories by descending count; ties in declaration order.
    pub fn categories_by_count(&self) -> Vec<(Category, usize)> {
        by_count(&self.categories)
    }

    /// Units by descending count; ties in declaration order.
    pub fn units_by_count(&self) -> Vec<(Unit, usize)> {
        by_count(&self.units)
    }
}

fn by_count<K: Copy + Ord>(counts: &FxHashMap<K, usize>) -> Vec<(K, usize)> {
    let mut sorted: Vec<(K, usize)> = counts.iter().map(|(k, n)| (*k, *n)).collect();
    sorted.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    sorted
}

impl fmt::Display for AnalysisStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows, {} categories, {} units",
            self.total,
            self.categories.len(),
            self.units.len()
        )
    }
}
