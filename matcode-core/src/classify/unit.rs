//! Unit-of-measure assignment.
//!
//! Unit rules are tried in table order (no length sorting). Keywords of up to
//! three characters are abbreviations (`m`, `cx`, `par`), longer ones match
//! as substrings. When nothing matches, the category decides:
//!
//! | category group  | unit                                  |
//! |-----------------|---------------------------------------|
//! | linear stock    | [`Unit::Meter`]                       |
//! | small hardware  | [`Unit::Package`] if packaging words, else [`Unit::Unit`] |
//! | tape            | [`Unit::Roll`]                        |
//! | anything else   | [`Unit::Unit`]                        |

use matcode_types::{Category, Unit};

use crate::analyzer::keyword::{any_match, Keyword};
use crate::analyzer::normalizer::TextNormalizer;
use crate::classify::rules::UnitRule;

#[derive(Debug, Clone)]
struct CompiledUnit {
    unit: Unit,
    keywords: Vec<Keyword>,
}

/// Assigns a [`Unit`] to a description given its category.
#[derive(Debug, Clone)]
pub struct UnitClassifier {
    rules: Vec<CompiledUnit>,
    packaging: Vec<Keyword>,
    normalizer: TextNormalizer,
}

impl UnitClassifier {
    /// Compiles the unit table and packaging keywords.
    pub fn new(rules: &[UnitRule], packaging: &[String]) -> Self {
        let normalizer = TextNormalizer::default();
        let compile = |k: &String| Keyword::unit(&normalizer.normalize(k));

        Self {
            rules: rules
                .iter()
                .map(|rule| CompiledUnit {
                    unit: rule.unit,
                    keywords: rule.keywords.iter().map(compile).collect(),
                })
                .collect(),
            packaging: packaging.iter().map(compile).collect(),
            normalizer,
        }
    }

    /// Normalizes `description` and classifies it.
    pub fn classify(&self, description: &str, category: Category) -> Unit {
        self.classify_normalized(&self.normalizer.normalize(description), category)
    }

    /// Classifies text that already went through the classification normalizer.
    pub fn classify_normalized(&self, normalized: &str, category: Category) -> Unit {
        self.rules
            .iter()
            .find(|rule| any_match(&rule.keywords, normalized))
            .map_or_else(|| self.fallback(normalized, category), |rule| rule.unit)
    }

    fn fallback(&self, normalized: &str, category: Category) -> Unit {
        if category.is_linear_stock() {
            Unit::Meter
        } else if category.is_small_hardware() {
            if any_match(&self.packaging, normalized) {
                Unit::Package
            } else {
                Unit::Unit
            }
        } else if category.is_tape() {
            Unit::Roll
        } else {
            Unit::Unit
        }
    }
}
