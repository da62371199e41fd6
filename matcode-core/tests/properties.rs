//! Properties that hold for every input.

use std::sync::LazyLock;

use matcode_core::Analyzer;
use matcode_types::{AnalyzerConfig, DigestAlgorithm};
use proptest::prelude::*;
use regex::Regex;

static ANALYZER: LazyLock<Analyzer> = LazyLock::new(Analyzer::new);

static SHA_ANALYZER: LazyLock<Analyzer> = LazyLock::new(|| {
    Analyzer::with_config(AnalyzerConfig {
        digest: DigestAlgorithm::Sha256,
        ..AnalyzerConfig::shared()
    })
});

static CODE_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Z]{2,4}(?:-(?:[0-9]+[VAWP]|[0-9]+(?:\.[0-9]+)?MM|[0-9]+M|[A-Z]{3}))*-[0-9A-F]{4}$",
    )
    .unwrap()
});

fn description() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "\\PC{0,40}",
        "[ a-zA-Z0-9.,/+xçãéíóúâêô-]{0,60}",
        (
            prop::sample::select(vec!["Cabo", "Disjuntor", "Tomada", "Lâmpada", "Fita", "Parafuso", ""]),
            0u32..500,
            prop::sample::select(vec!["V", "A", "W", "mm", "m", "P", " metros", " volts", ""]),
            prop::sample::select(vec!["preto", "azul", "branco", "rolo", "pacote", "cx", ""]),
        )
            .prop_map(|(word, n, unit, tail)| format!("{word} {n}{unit} {tail}")),
    ]
}

proptest! {
    #[test]
    fn analysis_is_total(d in description(), row in 0usize..100_000) {
        let record = ANALYZER.analyze(&d, row);
        prop_assert_eq!(record.description(), d.as_str());
        prop_assert_eq!(record.row(), row);
    }

    #[test]
    fn analysis_is_deterministic(d in description(), row in 0usize..1_000) {
        prop_assert_eq!(ANALYZER.analyze(&d, row), ANALYZER.analyze(&d, row));
        prop_assert_eq!(ANALYZER.analyze(&d, row), Analyzer::new().analyze(&d, row));
    }

    #[test]
    fn codes_follow_grammar(d in description(), row in 0usize..1_000) {
        let code = ANALYZER.analyze(&d, row).code().to_owned();
        prop_assert!(CODE_GRAMMAR.is_match(&code), "{:?} -> {}", d, code);

        let code = SHA_ANALYZER.analyze(&d, row).code().to_owned();
        prop_assert!(CODE_GRAMMAR.is_match(&code), "{:?} -> {}", d, code);
    }

    #[test]
    fn row_only_moves_the_hash(d in description(), a in 0usize..1_000, b in 0usize..1_000) {
        let first = ANALYZER.analyze(&d, a);
        let second = ANALYZER.analyze(&d, b);

        prop_assert_eq!(first.category(), second.category());
        prop_assert_eq!(first.unit(), second.unit());
        prop_assert_eq!(first.name(), second.name());

        let (x, y) = (first.code(), second.code());
        prop_assert_eq!(x.len(), y.len());
        prop_assert_eq!(&x[..x.len() - 4], &y[..y.len() - 4]);
    }

    #[test]
    fn names_are_bounded(d in description()) {
        let name = ANALYZER.analyze(&d, 0).name().to_owned();
        prop_assert!(!name.starts_with(' ') && !name.ends_with(' '));
        if d.trim().is_empty() {
            prop_assert!(name.is_empty());
        }
    }
}

#[cfg(feature = "parallel")]
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn parallel_agrees_with_sequential(rows in prop::collection::vec(prop::option::of(description()), 0..64)) {
        prop_assert_eq!(ANALYZER.analyze_par(&rows), ANALYZER.analyze_batch(rows.clone()));
    }
}
