//! Electrical-material classification and code synthesis.
//!
//! Turns free-text material descriptions into a category, a unit of measure,
//! a short display name and a deterministic identification code.
//!
//! ```
//! use matcode_core::Analyzer;
//! use matcode_types::{Category, Unit};
//!
//! let analyzer = Analyzer::new();
//! let record = analyzer.analyze("Disjuntor monopolar 20A 220V curva C", 0);
//!
//! assert_eq!(record.category(), Category::CircuitBreaker);
//! assert_eq!(record.unit(), Unit::Unit);
//! assert_eq!(record.name(), "Disjuntor 220V 20A");
//! assert!(record.code().starts_with("DIS-220V-20A-"));
//! ```

pub mod analyzer;
pub mod classify;
pub mod codegen;
pub mod naming;
pub mod pipeline;

pub use classify::{RuleError, RuleSet};
pub use pipeline::{AnalysisStats, Analyzer};
