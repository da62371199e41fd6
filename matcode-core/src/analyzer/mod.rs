//! Text analysis primitives.
//!
//! - **Normalizer**: folds case, accents and whitespace
//! - **Keyword**: boundary-aware keyword matching over normalized text
//! - **Attributes**: regex extraction of technical specs

pub mod attributes;
pub mod keyword;
pub mod normalizer;

pub use attributes::{AttributeExtractor, AttributeSet, ExtractionProfile};
pub use keyword::{Keyword, MatchMode};
pub use normalizer::{NormalizerConfig, TextNormalizer};
