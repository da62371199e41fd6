//! Rule-driven classification.
//!
//! [`RuleSet`] holds the tables, [`CategoryClassifier`] and [`UnitClassifier`]
//! compile them into matchers. Classification is total: unmatched text falls
//! back to [`Category::Generic`](matcode_types::Category::Generic) and the
//! category-driven unit defaults.

pub mod category;
pub mod rules;
pub mod unit;

pub use category::CategoryClassifier;
pub use rules::{
    is_prefix_code, CategoryRule, PrefixEntry, PrefixTable, RuleError, RuleSet, UnitRule,
    DEFAULT_PREFIX,
};
pub use unit::UnitClassifier;
