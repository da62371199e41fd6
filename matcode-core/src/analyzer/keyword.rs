//! Keyword matching over normalized text.
//!
//! Rule tables are lists of plain keywords. Each keyword is compiled once into
//! a [`memchr::memmem::Finder`] and every occurrence in the haystack is then
//! checked against the keyword's boundary policy:
//!
//! ```text
//! WholeWord     "int"  in "int simples"     -> match
//!               "int"  in "interruptor"     -> no match
//! Substring     "rolo" in "rolos"           -> match
//! Abbreviation  "m"    in "barra 3m"        -> match
//!               "m"    in "monopolar"       -> no match
//! ```
//!
//! ## The Input Contract
//!
//! Haystacks are expected to come out of
//! [`TextNormalizer`](super::normalizer::TextNormalizer), so word characters
//! are ASCII letters, digits and `_`. Bytes outside ASCII count as word bytes.

use memchr::memmem::Finder;

/// Keywords up to this many bytes are treated as abbreviations by
/// [`Keyword::unit`].
pub const ABBREVIATION_MAX_LEN: usize = 3;

/// Boundary policy applied around each occurrence of a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Regex-style `\b` on both ends.
    WholeWord,
    /// Anywhere in the text.
    Substring,
    /// Standalone token; may be glued to a preceding number (`100m`).
    Abbreviation,
}

/// A compiled keyword.
#[derive(Debug, Clone)]
pub struct Keyword {
    finder: Finder<'static>,
    mode: MatchMode,
}

impl Keyword {
    /// Compiles `text` with the given policy. `text` should already be normalized.
    pub fn new(text: &str, mode: MatchMode) -> Self {
        Self {
            finder: Finder::new(text.as_bytes()).into_owned(),
            mode,
        }
    }

    /// Whole-word keyword, as used by category rules.
    pub fn whole_word(text: &str) -> Self {
        Self::new(text, MatchMode::WholeWord)
    }

    /// Unit-table keyword: short keywords are abbreviations, the rest substrings.
    pub fn unit(text: &str) -> Self {
        let mode = if text.len() <= ABBREVIATION_MAX_LEN {
            MatchMode::Abbreviation
        } else {
            MatchMode::Substring
        };
        Self::new(text, mode)
    }

    /// The keyword bytes.
    #[inline(always)]
    pub fn needle(&self) -> &[u8] {
        self.finder.needle()
    }

    /// The boundary policy.
    #[inline(always)]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns `true` if the keyword occurs in `haystack` under its policy.
    ///
    /// An empty keyword never matches.
    pub fn is_match(&self, haystack: &str) -> bool {
        let needle_len = self.finder.needle().len();
        if needle_len == 0 {
            return false;
        }

        let bytes = haystack.as_bytes();
        if self.mode == MatchMode::Substring {
            return self.finder.find(bytes).is_some();
        }

        self.finder.find_iter(bytes).any(|start| {
            let end = start + needle_len;
            match self.mode {
                MatchMode::WholeWord => {
                    is_boundary(bytes, start) && is_boundary(bytes, end)
                }
                MatchMode::Abbreviation => {
                    let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphabetic();
                    let after_ok = bytes.get(end).is_none_or(|b| !is_word_byte(*b));
                    before_ok && after_ok
                }
                MatchMode::Substring => true,
            }
        })
    }
}

/// Returns `true` if any keyword in the list matches.
#[inline]
pub fn any_match(keywords: &[Keyword], haystack: &str) -> bool {
    keywords.iter().any(|k| k.is_match(haystack))
}

#[inline(always)]
const fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

/// `\b` at byte offset `at`: exactly one side is a word byte.
#[inline(always)]
fn is_boundary(bytes: &[u8], at: usize) -> bool {
    let before = at
        .checked_sub(1)
        .and_then(|i| bytes.get(i))
        .is_some_and(|b| is_word_byte(*b));
    let after = bytes.get(at).is_some_and(|b| is_word_byte(*b));
    before != after
}
