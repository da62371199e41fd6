//! Category assignment by ordered whole-word keyword matching.

use core::cmp::Reverse;

use matcode_types::Category;

use crate::analyzer::keyword::{any_match, Keyword};
use crate::analyzer::normalizer::TextNormalizer;
use crate::classify::rules::CategoryRule;

#[derive(Debug, Clone)]
struct CompiledCategory {
    category: Category,
    keywords: Vec<Keyword>,
}

/// Assigns a [`Category`] to a description.
///
/// Rules are tried in order of descending label length (character count of
/// [`Category::label`]), so `"disjuntor motor"` resolves to
/// [`Category::MotorCircuitBreaker`] before plain [`Category::CircuitBreaker`]
/// gets a chance. Rules with equally long labels keep their table order.
/// Within a rule, keywords are tried in declaration order and must match as
/// whole words.
///
/// # Examples
///
/// ```
/// use matcode_core::classify::{CategoryClassifier, RuleSet};
/// use matcode_types::Category;
///
/// let classifier = CategoryClassifier::new(&RuleSet::builtin().categories);
/// assert_eq!(classifier.classify("Disjuntor Motor 10A"), Category::MotorCircuitBreaker);
/// assert_eq!(classifier.classify("Disjuntor 20A"), Category::CircuitBreaker);
/// assert_eq!(classifier.classify("parafusadeira"), Category::Generic);
/// ```
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    rules: Vec<CompiledCategory>,
    normalizer: TextNormalizer,
}

impl CategoryClassifier {
    /// Compiles the rule table. Keywords are normalized here so accented
    /// entries match normalized descriptions.
    pub fn new(rules: &[CategoryRule]) -> Self {
        let normalizer = TextNormalizer::default();

        let mut compiled: Vec<CompiledCategory> = rules
            .iter()
            .map(|rule| CompiledCategory {
                category: rule.category,
                keywords: rule
                    .keywords
                    .iter()
                    .map(|k| Keyword::whole_word(&normalizer.normalize(k)))
                    .collect(),
            })
            .collect();

        // stable: equal lengths keep declaration order
        compiled.sort_by_key(|c| Reverse(c.category.label_len()));

        Self {
            rules: compiled,
            normalizer,
        }
    }

    /// Normalizes `description` and classifies it.
    pub fn classify(&self, description: &str) -> Category {
        self.classify_normalized(&self.normalizer.normalize(description))
    }

    /// Classifies text that already went through the classification normalizer.
    pub fn classify_normalized(&self, normalized: &str) -> Category {
        self.rules
            .iter()
            .find(|rule| any_match(&rule.keywords, normalized))
            .map_or(Category::Generic, |rule| rule.category)
    }

    /// Categories in evaluation order.
    pub fn order(&self) -> impl Iterator<Item = Category> + '_ {
        self.rules.iter().map(|r| r.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::rules::RuleSet;

    fn builtin() -> CategoryClassifier {
        CategoryClassifier::new(&RuleSet::builtin().categories)
    }

    fn rule(category: Category, keywords: &[&str]) -> CategoryRule {
        CategoryRule {
            category,
            keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
        }
    }

    #[test]
    fn scenario_descriptions() {
        let c = builtin();
        assert_eq!(c.classify("Cabo PP preto 2x2.5mm rolo 100 metros"), Category::Cable);
        assert_eq!(c.classify("Disjuntor monopolar 20A 220V curva C"), Category::CircuitBreaker);
        assert_eq!(c.classify(""), Category::Generic);
        assert_eq!(c.classify("   "), Category::Generic);
    }

    #[test]
    fn accents_and_case_ignored() {
        let c = builtin();
        assert_eq!(c.classify("LÂMPADA fluorescente"), Category::Lamp);
        assert_eq!(c.classify("Abraçadeira nylon"), Category::Clamp);
        assert_eq!(c.classify("Conduíte corrugado"), Category::Conduit);
        assert_eq!(c.classify("FUSÍVEL NH"), Category::Fuse);
    }

    #[test]
    fn keywords_must_be_whole_words() {
        let c = builtin();
        // "int" is an Interruptor keyword, "fio" is not a word here
        assert_eq!(c.classify("interno fiolux"), Category::Generic);
        assert_eq!(c.classify("int simples"), Category::Switch);
    }

    #[test]
    fn longer_label_evaluated_first() {
        let c = builtin();
        assert_eq!(c.classify("disjuntor motor 10a"), Category::MotorCircuitBreaker);
        // Eletroduto (10) beats Curva (5)
        assert_eq!(c.classify("curva eletroduto 90 graus"), Category::RigidConduit);
        // Luminária (9) beats LED (3)
        assert_eq!(c.classify("luminaria led 18w"), Category::Luminaire);
    }

    #[test]
    fn order_is_by_descending_label_length() {
        let c = builtin();
        let order: Vec<usize> = c.order().map(Category::label_len).collect();
        assert!(order.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(c.order().next(), Some(Category::MotorCircuitBreaker));
    }

    #[test]
    fn equal_lengths_keep_declaration_order() {
        // Cabo and Fita both have 4-char labels and share the keyword
        let rules = [rule(Category::Tape, &["rolo"]), rule(Category::Cable, &["rolo"])];
        assert_eq!(CategoryClassifier::new(&rules).classify("rolo"), Category::Tape);

        let rules = [rule(Category::Cable, &["rolo"]), rule(Category::Tape, &["rolo"])];
        assert_eq!(CategoryClassifier::new(&rules).classify("rolo"), Category::Cable);
    }

    #[test]
    fn shared_keyword_goes_to_longer_label() {
        let rules = [rule(Category::Wire, &["cobre"]), rule(Category::Transformer, &["cobre"])];
        let c = CategoryClassifier::new(&rules);
        assert_eq!(c.classify("bobina de cobre"), Category::Transformer);
    }

    #[test]
    fn rule_keywords_are_normalized() {
        let rules = [rule(Category::Relay, &["RELÉ"])];
        let c = CategoryClassifier::new(&rules);
        assert_eq!(c.classify("rele 12v"), Category::Relay);
    }

    #[test]
    fn empty_table_is_generic() {
        let c = CategoryClassifier::new(&[]);
        assert_eq!(c.classify("cabo"), Category::Generic);
    }

    #[test]
    fn non_ascii_noise_is_total() {
        let c = builtin();
        assert_eq!(c.classify("你好 cabo"), Category::Cable);
        assert_eq!(c.classify("🔌🔌"), Category::Generic);
    }
}
