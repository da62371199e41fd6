//! Short display names.

use matcode_types::Category;

use crate::analyzer::attributes::{AttributeExtractor, ExtractionProfile, NAME_ORDER};

/// Builds the display name of a material.
///
/// When the description carries voltage, amperage, gauge, power or pole
/// count, the name is the category label followed by those tokens in that
/// order. Otherwise it is the leading words of the description as written.
///
/// # Examples
///
/// ```
/// use matcode_core::naming::NameSummarizer;
/// use matcode_types::Category;
///
/// let names = NameSummarizer::default();
/// assert_eq!(
///     names.summarize("Disjuntor monopolar 20A 220V curva C", Category::CircuitBreaker),
///     "Disjuntor 220V 20A"
/// );
/// assert_eq!(
///     names.summarize("Quadro de distribuição embutir", Category::Switchboard),
///     "Quadro de distribuição"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NameSummarizer {
    extractor: AttributeExtractor,
    word_limit: usize,
}

impl Default for NameSummarizer {
    fn default() -> Self {
        Self::new(AttributeExtractor::new(ExtractionProfile::Naming), 3)
    }
}

impl NameSummarizer {
    /// Creates a summarizer; `word_limit` caps the fallback name.
    pub const fn new(extractor: AttributeExtractor, word_limit: usize) -> Self {
        Self {
            extractor,
            word_limit,
        }
    }

    /// Words kept when no attribute is present.
    #[inline(always)]
    pub const fn word_limit(&self) -> usize {
        self.word_limit
    }

    /// Builds the name for `description`. Never fails; empty in, empty out.
    pub fn summarize(&self, description: &str, category: Category) -> String {
        let attributes = self.extractor.extract(description);
        let mut tokens = attributes.select(&NAME_ORDER).peekable();

        if tokens.peek().is_none() {
            return description
                .split_whitespace()
                .take(self.word_limit)
                .collect::<Vec<_>>()
                .join(" ");
        }

        let mut name = String::from(category.label());
        for token in tokens {
            name.push(' ');
            name.push_str(token.as_str());
        }
        name
    }
}
