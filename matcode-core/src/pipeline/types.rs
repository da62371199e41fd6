//! Analyzer type and construction.

use matcode_types::{AnalyzerConfig, ExtractorMode};

use crate::analyzer::attributes::{AttributeExtractor, ExtractionProfile};
use crate::analyzer::normalizer::TextNormalizer;
use crate::classify::category::CategoryClassifier;
use crate::classify::rules::RuleSet;
use crate::classify::unit::UnitClassifier;
use crate::codegen::CodeGenerator;
use crate::naming::NameSummarizer;

/// Per-row material analysis engine.
///
/// Holds compiled rule tables and nothing mutable, so one analyzer can be
/// shared across threads and reused for any number of rows.
#[derive(Debug, Clone)]
pub struct Analyzer {
    pub(crate) normalizer: TextNormalizer,
    pub(crate) categories: CategoryClassifier,
    pub(crate) units: UnitClassifier,
    pub(crate) names: NameSummarizer,
    pub(crate) codes: CodeGenerator,
    pub(crate) config: AnalyzerConfig,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Analyzer over the built-in tables with the default configuration.
    pub fn new() -> Self {
        Self::with_rules(&RuleSet::builtin(), AnalyzerConfig::default())
    }

    /// Analyzer over the built-in tables with a custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self::with_rules(&RuleSet::builtin(), config)
    }

    /// Analyzer over custom tables.
    ///
    /// Tables are not validated here; use [`RuleSet::validate`] (or load
    /// through [`RuleSet::from_path`]) first when they come from outside.
    pub fn with_rules(rules: &RuleSet, config: AnalyzerConfig) -> Self {
        let naming_profile = match config.extractor {
            ExtractorMode::Split => ExtractionProfile::Naming,
            ExtractorMode::Shared => ExtractionProfile::Coding,
        };

        Self {
            normalizer: TextNormalizer::default(),
            categories: CategoryClassifier::new(&rules.categories),
            units: UnitClassifier::new(&rules.units, &rules.packaging),
            names: NameSummarizer::new(
                AttributeExtractor::new(naming_profile),
                config.name_word_limit,
            ),
            codes: CodeGenerator::new(&rules.prefixes, config.digest),
            config,
        }
    }

    /// The active configuration.
    #[inline(always)]
    #[must_use]
    pub const fn config(&self) -> AnalyzerConfig {
        self.config
    }

    /// The category classifier.
    #[inline(always)]
    pub fn categories(&self) -> &CategoryClassifier {
        &self.categories
    }

    /// The unit classifier.
    #[inline(always)]
    pub fn units(&self) -> &UnitClassifier {
        &self.units
    }

    /// The name summarizer.
    #[inline(always)]
    pub fn names(&self) -> &NameSummarizer {
        &self.names
    }

    /// The code generator.
    #[inline(always)]
    pub fn codes(&self) -> &CodeGenerator {
        &self.codes
    }
}
