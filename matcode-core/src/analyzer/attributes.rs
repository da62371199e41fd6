//! Technical attribute extraction.
//!
//! Pulls voltage, amperage, power, gauge, length, pole count and color out of
//! free text and formats each as an [`AttributeToken`]:
//!
//! ```text
//! "Disjuntor monopolar 20A 220V"  ->  [220V, 20A]
//! "Cabo PP preto 2x2.5mm"         ->  [2.5MM, PRE]
//! ```
//!
//! ## Two profiles
//!
//! The naming path and the code path were tuned separately and disagree on a
//! few edge cases, so each keeps its own rule set:
//!
//! | kind     | [`ExtractionProfile::Naming`] | [`ExtractionProfile::Coding`] |
//! |----------|-------------------------------|-------------------------------|
//! | voltage  | `N v`                         | `N v`, `N volt(s)`            |
//! | amperage | `N a` followed by space/end   | `N a`, `N amp(ere(s))`        |
//! | power    | `N w`                         | `N w`, `N watt(s)`            |
//!
//! Given `"2 abracadeiras"` the coding profile reports `2A` while the naming
//! profile reports nothing. Both profiles share the gauge, length, pole and
//! color rules.

use std::sync::LazyLock;

use matcode_types::{AttributeKind, AttributeToken};
use regex::Regex;
use smallvec::SmallVec;

use super::normalizer::TextNormalizer;

/// Colors in priority order; the first one present wins.
pub const COLORS: [&str; 11] = [
    "preto", "branco", "vermelho", "azul", "verde", "amarelo", "marrom", "cinza", "laranja",
    "rosa", "violeta",
];

/// Token order used when a name is assembled.
pub const NAME_ORDER: [AttributeKind; 5] = [
    AttributeKind::Voltage,
    AttributeKind::Amperage,
    AttributeKind::Gauge,
    AttributeKind::Power,
    AttributeKind::Poles,
];

/// Token order used when a code is assembled.
pub const CODE_ORDER: [AttributeKind; 7] = [
    AttributeKind::Voltage,
    AttributeKind::Amperage,
    AttributeKind::Power,
    AttributeKind::Gauge,
    AttributeKind::Length,
    AttributeKind::Color,
    AttributeKind::Poles,
];

/// Which rule set an extractor runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionProfile {
    /// Rules behind display names.
    Naming,
    /// Rules behind generated codes.
    Coding,
}

struct ProfileRules {
    voltage: Regex,
    amperage: Regex,
    power: Regex,
    gauge: Regex,
    length: Regex,
    poles: Regex,
}

const GAUGE: &str = r"(?i)([0-9]+(?:\.[0-9]+)?)\s*mm";
const LENGTH: &str = r"(?i)([0-9]+)\s*m(?:etros?)?\b";
const POLES: &str = r"(?i)([0-9]+)\s*p(?:olos?)?";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("attribute patterns are static literals")
}

static NAMING_RULES: LazyLock<ProfileRules> = LazyLock::new(|| ProfileRules {
    voltage: compile(r"(?i)([0-9]+)\s*v"),
    amperage: compile(r"(?i)([0-9]+)\s*a(?:\s|$)"),
    power: compile(r"(?i)([0-9]+)\s*w"),
    gauge: compile(GAUGE),
    length: compile(LENGTH),
    poles: compile(POLES),
});

static CODING_RULES: LazyLock<ProfileRules> = LazyLock::new(|| ProfileRules {
    voltage: compile(r"(?i)([0-9]+)\s*v(?:olts?)?"),
    amperage: compile(r"(?i)([0-9]+)\s*a(?:mp(?:eres?)?)?"),
    power: compile(r"(?i)([0-9]+)\s*w(?:atts?)?"),
    gauge: compile(GAUGE),
    length: compile(LENGTH),
    poles: compile(POLES),
});

/// Extracted tokens, at most one per [`AttributeKind`], in extraction order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    tokens: SmallVec<[AttributeToken; 7]>,
}

impl AttributeSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token unless one of the same kind is already present.
    ///
    /// Returns `true` if the token was added.
    pub fn insert(&mut self, token: AttributeToken) -> bool {
        if self.contains(token.kind()) {
            return false;
        }
        self.tokens.push(token);
        true
    }

    /// The token of the given kind, if extracted.
    pub fn get(&self, kind: AttributeKind) -> Option<&AttributeToken> {
        self.tokens.iter().find(|t| t.kind() == kind)
    }

    /// Returns `true` if a token of the given kind was extracted.
    #[inline]
    pub fn contains(&self, kind: AttributeKind) -> bool {
        self.get(kind).is_some()
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if nothing was extracted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeToken> {
        self.tokens.iter()
    }

    /// Tokens of the listed kinds, in the listed order, skipping absent ones.
    pub fn select<'a>(
        &'a self,
        order: &'a [AttributeKind],
    ) -> impl Iterator<Item = &'a AttributeToken> + 'a {
        order.iter().filter_map(move |&kind| self.get(kind))
    }
}

/// Regex-driven attribute extractor.
///
/// Matching is case-insensitive and runs on the text as given; only the color
/// lookup works on a code-normalized copy so accents and punctuation do not
/// hide color words.
///
/// # Example
///
/// ```
/// use matcode_core::analyzer::attributes::{AttributeExtractor, ExtractionProfile};
/// use matcode_types::AttributeKind;
///
/// let extractor = AttributeExtractor::new(ExtractionProfile::Coding);
/// let set = extractor.extract("Contator tripolar 25A 220V");
/// assert_eq!(set.get(AttributeKind::Voltage).unwrap().as_str(), "220V");
/// assert_eq!(set.get(AttributeKind::Amperage).unwrap().as_str(), "25A");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AttributeExtractor {
    profile: ExtractionProfile,
    normalizer: TextNormalizer,
}

impl AttributeExtractor {
    /// Creates an extractor running the given profile.
    pub const fn new(profile: ExtractionProfile) -> Self {
        Self {
            profile,
            normalizer: TextNormalizer::code(),
        }
    }

    /// The active profile.
    #[inline(always)]
    pub const fn profile(&self) -> ExtractionProfile {
        self.profile
    }

    fn rules(&self) -> &'static ProfileRules {
        match self.profile {
            ExtractionProfile::Naming => &*NAMING_RULES,
            ExtractionProfile::Coding => &*CODING_RULES,
        }
    }

    /// Extracts every attribute present in `text`.
    ///
    /// Length is only reported when no gauge was found, so `"2.5mm"` is never
    /// read as meters.
    pub fn extract(&self, text: &str) -> AttributeSet {
        let rules = self.rules();
        let mut set = AttributeSet::new();

        capture(&rules.voltage, text, AttributeKind::Voltage, &mut set);
        capture(&rules.amperage, text, AttributeKind::Amperage, &mut set);
        capture(&rules.power, text, AttributeKind::Power, &mut set);
        capture(&rules.gauge, text, AttributeKind::Gauge, &mut set);
        if !set.contains(AttributeKind::Gauge) {
            capture(&rules.length, text, AttributeKind::Length, &mut set);
        }
        capture(&rules.poles, text, AttributeKind::Poles, &mut set);

        if let Some(color) = self.color(text) {
            set.insert(color);
        }

        set
    }

    /// First color of [`COLORS`] present in `text`, as a three-letter code.
    pub fn color(&self, text: &str) -> Option<AttributeToken> {
        let clean = self.normalizer.normalize(text);
        COLORS
            .iter()
            .find(|color| clean.contains(*color))
            .map(|color| {
                AttributeToken::new(AttributeKind::Color, color[..3].to_ascii_uppercase())
            })
    }
}

#[inline]
fn capture(re: &Regex, text: &str, kind: AttributeKind, set: &mut AttributeSet) {
    if let Some(number) = re.captures(text).and_then(|c| c.get(1)) {
        set.insert(AttributeToken::measured(kind, number.as_str()));
    }
}
