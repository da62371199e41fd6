//! Identification code synthesis.
//!
//! ```text
//! CODE   := PREFIX ("-" TOKEN)* "-" HASH4
//! ```
//!
//! - **Prefix**: category/name lookup in the prefix table
//! - **Tokens**: coding-profile attributes of `name + " " + description`
//! - **Hash**: digest of `name|description|label|row`, first four hex digits
//!
//! The same `(name, description, category, row)` always yields the same
//! code, and changing only `row` changes only the hash.

pub mod digest;
pub mod prefix;

use matcode_types::{Category, DigestAlgorithm, RowIndex, CODE_DELIMITER};

use crate::analyzer::attributes::{AttributeExtractor, ExtractionProfile, CODE_ORDER};
use crate::classify::rules::PrefixTable;

pub use digest::{hash_suffix, DigestInput};
pub use prefix::{Prefix, PrefixMatcher};

/// Builds codes from classified records.
///
/// # Examples
///
/// ```
/// use matcode_core::classify::RuleSet;
/// use matcode_core::codegen::CodeGenerator;
/// use matcode_types::{Category, DigestAlgorithm};
///
/// let codes = CodeGenerator::new(&RuleSet::builtin().prefixes, DigestAlgorithm::Md5);
/// let code = codes.generate(
///     "Disjuntor 220V 20A",
///     "Disjuntor monopolar 20A 220V curva C",
///     Category::CircuitBreaker,
///     0,
/// );
/// assert_eq!(code, "DIS-220V-20A-3297");
/// ```
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    prefixes: PrefixMatcher,
    extractor: AttributeExtractor,
    digest: DigestAlgorithm,
}

impl CodeGenerator {
    /// Compiles the prefix table and picks the suffix digest.
    pub fn new(prefixes: &PrefixTable, digest: DigestAlgorithm) -> Self {
        Self {
            prefixes: PrefixMatcher::new(prefixes),
            extractor: AttributeExtractor::new(ExtractionProfile::Coding),
            digest,
        }
    }

    /// Digest behind the hash suffix.
    #[inline(always)]
    pub const fn digest(&self) -> DigestAlgorithm {
        self.digest
    }

    /// Prefix lookup only.
    #[inline]
    pub fn prefix(&self, category: Category, name: &str) -> Prefix<'_> {
        self.prefixes.lookup(category, name)
    }

    /// Generates the code. Never fails.
    pub fn generate(
        &self,
        name: &str,
        description: &str,
        category: Category,
        row: RowIndex,
    ) -> String {
        let prefix = self.prefix(category, name);
        let attributes = self.extractor.extract(&format!("{name} {description}"));
        let suffix = hash_suffix(
            self.digest,
            &DigestInput {
                name,
                description,
                label: category.label(),
                row,
            }
            .message(),
        );

        let mut code = String::with_capacity(32);
        code.push_str(prefix.as_str());
        for token in attributes.select(&CODE_ORDER) {
            code.push(CODE_DELIMITER);
            code.push_str(token.as_str());
        }
        code.push(CODE_DELIMITER);
        code.push_str(&suffix);
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::rules::RuleSet;

    fn md5() -> CodeGenerator {
        CodeGenerator::new(&RuleSet::builtin().prefixes, DigestAlgorithm::Md5)
    }

    #[test]
    fn cable_code() {
        let code = md5().generate(
            "Cabo 2.5MM",
            "Cabo PP preto 2x2.5mm rolo 100 metros",
            Category::Cable,
            0,
        );
        assert_eq!(code, "CAB-2.5MM-PRE-A5F5");
    }

    #[test]
    fn breaker_code() {
        let codes = md5();
        let description = "Disjuntor monopolar 20A 220V curva C";
        assert_eq!(
            codes.generate("Disjuntor 220V 20A", description, Category::CircuitBreaker, 0),
            "DIS-220V-20A-3297"
        );
        assert_eq!(
            codes.generate("Disjuntor 220V 20A", description, Category::CircuitBreaker, 1),
            "DIS-220V-20A-E348"
        );
    }

    #[test]
    fn empty_description_is_prefix_and_hash() {
        let codes = md5();
        assert_eq!(codes.generate("", "", Category::Generic, 0), "ELE-F5D1");
        assert_eq!(codes.generate("", "", Category::Generic, 1), "ELE-0583");
    }

    #[test]
    fn poles_come_last() {
        let code = md5().generate(
            "Tomada 250V 10A 2P",
            "Tomada 2P+T 10A 250V branca",
            Category::Outlet,
            3,
        );
        assert_eq!(code, "TOM-250V-10A-2P-8F57");
    }

    #[test]
    fn sha256_only_changes_the_suffix() {
        let codes = CodeGenerator::new(&RuleSet::builtin().prefixes, DigestAlgorithm::Sha256);
        assert_eq!(codes.digest(), DigestAlgorithm::Sha256);
        let code = codes.generate(
            "Cabo 2.5MM",
            "Cabo PP preto 2x2.5mm rolo 100 metros",
            Category::Cable,
            0,
        );
        assert_eq!(code, "CAB-2.5MM-PRE-BAB8");
    }

    #[test]
    fn deterministic() {
        let codes = md5();
        let a = codes.generate("Fita", "Fita isolante 19mm x 20m", Category::Tape, 5);
        let b = codes.generate("Fita", "Fita isolante 19mm x 20m", Category::Tape, 5);
        assert_eq!(a, b);
        assert!(a.starts_with("FIT-19MM-"));
    }

    #[test]
    fn prefix_is_exposed() {
        assert!(md5().prefix(Category::Generic, "").is_default());
    }
}
