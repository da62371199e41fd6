use unicode_normalization::UnicodeNormalization;

/// Normalization switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Applies NFKD and keeps only the ASCII part ("elétrico" becomes
    /// "eletrico", "ﬂ" becomes "fl"); characters with no ASCII
    /// decomposition are dropped.
    pub fold_ascii: bool,
    /// Keeps only alphanumeric characters and single spaces.
    pub alphanumeric_only: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self::classification()
    }
}

impl NormalizerConfig {
    /// Keyword matching: punctuation is kept so word boundaries survive.
    pub const fn classification() -> Self {
        Self {
            fold_ascii: true,
            alphanumeric_only: false,
        }
    }

    /// Code generation: only `[a-z0-9 ]` remains.
    pub const fn code() -> Self {
        Self {
            fold_ascii: true,
            alphanumeric_only: true,
        }
    }
}

/// Unicode text normalizer feeding every matcher.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Collapses runs of whitespace into single spaces
/// - Removes leading/trailing whitespace
/// - Optionally decomposes (NFKD) and drops everything non-ASCII
/// - Optionally removes everything that is not alphanumeric
///
/// Normalization never fails; empty or absent input yields an empty string.
///
/// # Examples
///
/// ```
/// use matcode_core::analyzer::normalizer::{NormalizerConfig, TextNormalizer};
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("  Conduíte  CORRUGADO "), "conduite corrugado");
///
/// let code = TextNormalizer::new(NormalizerConfig::code());
/// assert_eq!(code.normalize("Cabo PP 2x2.5mm"), "cabo pp 2x25mm");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Normalizer for the code-generation path.
    pub const fn code() -> Self {
        Self::new(NormalizerConfig::code())
    }

    /// The active configuration.
    #[inline(always)]
    pub const fn config(&self) -> NormalizerConfig {
        self.config
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let lowered = input.chars().flat_map(char::to_lowercase);
        if self.config.fold_ascii {
            // NFKD leaves combining marks after their base letter
            let folded = lowered
                .nfkd()
                .filter(char::is_ascii)
                .map(|c| c.to_ascii_lowercase());
            self.collect_into(folded, out);
        } else {
            self.collect_into(lowered, out);
        }
    }

    fn collect_into(&self, chars: impl Iterator<Item = char>, out: &mut String) {
        let mut pending_space = false;

        for c in chars {
            if c.is_whitespace() {
                pending_space = !out.is_empty();
                continue;
            }

            if self.config.alphanumeric_only && !c.is_alphanumeric() {
                continue;
            }

            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }

    /// Normalizes an optional value; `None` becomes the empty string.
    #[inline]
    pub fn normalize_opt(&self, input: Option<&str>) -> String {
        input.map(|s| self.normalize(s)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> String {
        TextNormalizer::default().normalize(input)
    }

    fn norm_code(input: &str) -> String {
        TextNormalizer::code().normalize(input)
    }

    #[test]
    fn lowercases_ascii() {
        assert_eq!(norm("CABO PP"), "cabo pp");
        assert_eq!(norm("DisJunTor 20A"), "disjuntor 20a");
    }

    #[test]
    fn portuguese_diacritics_folded() {
        assert_eq!(norm("Lâmpada"), "lampada");
        assert_eq!(norm("Abraçadeira"), "abracadeira");
        assert_eq!(norm("FUSÍVEL"), "fusivel");
        assert_eq!(norm("Relé"), "rele");
        assert_eq!(norm("padrão"), "padrao");
    }

    #[test]
    fn combining_marks_removed() {
        assert_eq!(norm("caf\u{0301}e"), "cafe");
        assert_eq!(norm("İstanbul"), "istanbul");
    }

    #[test]
    fn superscripts_and_ordinals_fold() {
        assert_eq!(norm("4mm²"), "4mm2");
        assert_eq!(norm("1º andar"), "1o andar");
    }

    #[test]
    fn non_latin_dropped() {
        assert_eq!(norm("cabo ПРИВЕТ 10m"), "cabo 10m");
        assert_eq!(norm("sensor 360°"), "sensor 360");
        assert_eq!(norm("你好"), "");
    }

    #[test]
    fn fullwidth_forms_fold() {
        assert_eq!(norm("ＣＡＢＯ ＰＰ ２２０Ｖ"), "cabo pp 220v");
        assert_eq!(norm("cabo\u{3000}azul"), "cabo azul");
    }

    #[test]
    fn ligatures_expand() {
        assert_eq!(norm("Cabo ﬂexível"), "cabo flexivel");
        assert_eq!(norm_code("ﬁo rígido"), "fio rigido");
    }

    #[test]
    fn letters_without_decomposition_dropped() {
        assert_eq!(norm("Straße"), "strae");
        assert_eq!(norm("Cæsar"), "csar");
        assert_eq!(norm("Łódź"), "odz");
    }

    #[test]
    fn compatibility_forms_end_lowercase() {
        assert_eq!(norm("25℃"), "25c");
        assert_eq!(norm("Ⅸ"), "ix");
    }

    #[test]
    fn punctuation_kept_on_classification_path() {
        assert_eq!(norm("2P+T 10A"), "2p+t 10a");
        assert_eq!(norm("127-220V"), "127-220v");
    }

    #[test]
    fn code_path_strips_punctuation() {
        assert_eq!(norm_code("2P+T 10A"), "2pt 10a");
        assert_eq!(norm_code("Material Elétrico Cabo 2.5MM"), "material eletrico cabo 25mm");
    }

    #[test]
    fn code_path_collapses_spaces_left_by_removed_chars() {
        assert_eq!(norm_code("fita - isolante"), "fita isolante");
        assert_eq!(norm_code(" / cabo"), "cabo");
    }

    #[test]
    fn whitespace_collapse_and_trim() {
        assert_eq!(norm("  cabo   flexivel  "), "cabo flexivel");
        assert_eq!(norm("rele\t\nfotoeletrico"), "rele fotoeletrico");
        assert_eq!(norm("\u{00A0}cabo\u{00A0}"), "cabo");
    }

    #[test]
    fn empty_and_whitespace_only() {
        assert_eq!(norm(""), "");
        assert_eq!(norm("   "), "");
        assert_eq!(norm_code(" \t\n "), "");
    }

    #[test]
    fn absent_input_is_empty() {
        let n = TextNormalizer::default();
        assert_eq!(n.normalize_opt(None), "");
        assert_eq!(n.normalize_opt(Some("CABO")), "cabo");
    }

    #[test]
    fn unfolded_mode_keeps_diacritics() {
        let n = TextNormalizer::new(NormalizerConfig {
            fold_ascii: false,
            alphanumeric_only: false,
        });
        assert_eq!(n.normalize("Conduíte"), "conduíte");
    }

    #[test]
    fn normalize_into_reuses_capacity() {
        let normalizer = TextNormalizer::default();
        let mut buf = String::with_capacity(32);
        let cap = buf.capacity();

        normalizer.normalize_into("CABO", &mut buf);
        assert_eq!(buf, "cabo");
        normalizer.normalize_into("FIO", &mut buf);
        assert_eq!(buf, "fio");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn output_is_ascii_when_folding() {
        let inputs = ["Conduíte", "ÜBER Straße", "مرحبا", "Ø 20mm", "ŁÓDŹ"];
        for input in inputs {
            assert!(norm(input).is_ascii(), "{input}");
            assert!(norm_code(input).is_ascii(), "{input}");
        }
    }

    #[test]
    fn idempotent() {
        let samples = ["Cabo PP preto 2x2.5mm", "Lâmpada  LED 9W", "  Fita - isolante "];
        for s in samples {
            let once = norm(s);
            assert_eq!(norm(&once), once);
            let once = norm_code(s);
            assert_eq!(norm_code(&once), once);
        }
    }

    #[test]
    fn no_trailing_or_double_space() {
        let out = norm("cabo   flexível   ");
        assert!(!out.ends_with(' '));
        assert!(!out.contains("  "));
    }
}
