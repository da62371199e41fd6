//! Console summary of a processed table.

use core::fmt;

use matcode_core::AnalysisStats;
use matcode_types::MaterialRecord;

const RULE_WIDTH: usize = 80;
const PREVIEW_DESCRIPTION_CHARS: usize = 70;

/// Counts plus a preview of the first rows.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    records: &'a [MaterialRecord],
    stats: &'a AnalysisStats,
    preview: usize,
}

impl<'a> Report<'a> {
    /// Report over `records`, previewing at most `preview` rows.
    pub const fn new(records: &'a [MaterialRecord], stats: &'a AnalysisStats, preview: usize) -> Self {
        Self {
            records,
            stats,
            preview,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{heavy}")?;
        writeln!(f, "ANALYSIS SUMMARY")?;
        writeln!(f, "{light}")?;
        writeln!(f, "Rows processed: {}", self.stats.total)?;

        writeln!(f, "\nCategories:")?;
        for (category, count) in self.stats.categories_by_count() {
            writeln!(f, "  • {category}: {count} item(s)")?;
        }

        writeln!(f, "\nUnits:")?;
        for (unit, count) in self.stats.units_by_count() {
            writeln!(f, "  • {unit}: {count} item(s)")?;
        }

        if self.preview > 0 && !self.records.is_empty() {
            let shown = self.preview.min(self.records.len());
            writeln!(f, "\n{heavy}")?;
            writeln!(f, "PREVIEW (first {shown} rows)")?;
            writeln!(f, "{light}")?;

            for record in &self.records[..shown] {
                writeln!(f, "\n{}. {}", record.row() + 1, clip(record.description()))?;
                writeln!(f, "   ├─ Category: {}", record.category())?;
                writeln!(f, "   ├─ Unit:     {}", record.unit())?;
                writeln!(f, "   ├─ Name:     {}", record.name())?;
                writeln!(f, "   └─ Code:     {}", record.code())?;
            }

            if self.records.len() > shown {
                writeln!(f, "\n   ... and {} more", self.records.len() - shown)?;
            }
        }

        write!(f, "{heavy}")
    }
}

fn clip(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_DESCRIPTION_CHARS).collect();
    if text.chars().nth(PREVIEW_DESCRIPTION_CHARS).is_some() {
        out.push_str("...");
    }
    out
}
