//! Category prefix lookup.

use core::fmt;

use matcode_types::Category;
use memchr::memmem::Finder;

use crate::analyzer::normalizer::TextNormalizer;
use crate::classify::rules::PrefixTable;

/// Prefix chosen for a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix<'a> {
    /// A table entry's keyword was found.
    Matched(&'a str),
    /// Nothing matched; the table's default code.
    Default(&'a str),
}

impl<'a> Prefix<'a> {
    /// The prefix code.
    #[inline(always)]
    pub const fn as_str(&self) -> &'a str {
        match self {
            Prefix::Matched(code) | Prefix::Default(code) => *code,
        }
    }

    /// Returns `true` for [`Prefix::Default`].
    #[inline(always)]
    pub const fn is_default(&self) -> bool {
        matches!(self, Prefix::Default(_))
    }
}

impl fmt::Display for Prefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
struct CompiledPrefix {
    finder: Finder<'static>,
    code: String,
}

/// Maps a category label and name to a prefix code.
///
/// The haystack is `"{label} {name}"` passed through the code normalizer;
/// entries are scanned in declaration order and the first keyword found as a
/// substring wins.
#[derive(Debug, Clone)]
pub struct PrefixMatcher {
    entries: Vec<CompiledPrefix>,
    default: String,
    normalizer: TextNormalizer,
}

impl PrefixMatcher {
    /// Compiles the table. Keywords go through the code normalizer so
    /// `"lâmpada"` matches `"lampada"`. Earlier catalogs never matched
    /// accented keys and carry the default prefix for those items.
    pub fn new(table: &PrefixTable) -> Self {
        let normalizer = TextNormalizer::code();
        let entries = table
            .entries
            .iter()
            .map(|entry| CompiledPrefix {
                finder: Finder::new(normalizer.normalize(&entry.keyword).as_bytes()).into_owned(),
                code: entry.code.clone(),
            })
            .filter(|entry| !entry.finder.needle().is_empty())
            .collect();

        Self {
            entries,
            default: table.default.clone(),
            normalizer,
        }
    }

    /// Picks the prefix for a named item of `category`.
    pub fn lookup(&self, category: Category, name: &str) -> Prefix<'_> {
        let mut haystack = String::with_capacity(category.label().len() + name.len() + 1);
        haystack.push_str(category.label());
        haystack.push(' ');
        haystack.push_str(name);
        let clean = self.normalizer.normalize(&haystack);

        self.entries
            .iter()
            .find(|entry| entry.finder.find(clean.as_bytes()).is_some())
            .map_or(Prefix::Default(&self.default), |entry| {
                Prefix::Matched(&entry.code)
            })
    }
}
