//! Per-row orchestration.
//!
//! description → normalize → category → unit → name → code → [`MaterialRecord`]
//!
//! Rows are independent: a record depends only on its description, its
//! index and the analyzer's tables, so batches can be split freely.
//!
//! Threading:
//! - [`Analyzer`] is `Send + Sync`; share one instance across workers.
//!
//! [`MaterialRecord`]: matcode_types::MaterialRecord

mod api;
mod stats;
mod types;

pub use stats::AnalysisStats;
pub use types::Analyzer;

#[cfg(test)]
mod tests {
    use super::*;
    use matcode_types::{AnalyzerConfig, Category, DigestAlgorithm, Unit};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn analyzer_is_send_sync() {
        assert_send_sync::<Analyzer>();
    }

    #[test]
    fn cable_scenario() {
        let record = Analyzer::new().analyze("Cabo PP preto 2x2.5mm rolo 100 metros", 0);
        assert_eq!(record.category(), Category::Cable);
        assert_eq!(record.unit(), Unit::Meter);
        assert_eq!(record.name(), "Cabo 2.5MM");
        assert_eq!(record.code(), "CAB-2.5MM-PRE-A5F5");
        assert_eq!(record.description(), "Cabo PP preto 2x2.5mm rolo 100 metros");
        assert_eq!(record.row(), 0);
    }

    #[test]
    fn codes_shared_with_earlier_catalogs() {
        let analyzer = Analyzer::new();
        assert_eq!(
            analyzer.analyze("Disjuntor monopolar 20A 220V curva C", 0).code(),
            "DIS-220V-20A-3297"
        );
        assert_eq!(
            analyzer.analyze("Tomada 2P+T 10A 250V branca", 3).code(),
            "TOM-250V-10A-2P-8F57"
        );
        assert_eq!(analyzer.analyze("", 0).code(), "ELE-F5D1");
    }

    #[test]
    fn codes_that_moved_from_earlier_catalogs() {
        let analyzer = Analyzer::new();
        // accented prefix keyword now matches; was ELE-9W-06C4
        assert_eq!(
            analyzer.analyze("Lâmpada LED bulbo 9W bivolt", 0).code(),
            "LAM-9W-06C4"
        );
        // hashed name carries "2.5MM" instead of "2.5mm"; was CAB-2.5MM-PRE-DD71
        assert_eq!(
            analyzer.analyze("Cabo PP preto 2x2.5mm rolo 100 metros", 0).code(),
            "CAB-2.5MM-PRE-A5F5"
        );
    }

    #[test]
    fn fullwidth_description_classifies() {
        let record = Analyzer::new().analyze("ＣＡＢＯ ＰＰ", 0);
        assert_eq!(record.category(), Category::Cable);
        assert_eq!(record.description(), "ＣＡＢＯ ＰＰ");
    }

    #[test]
    fn absent_description_is_empty() {
        let analyzer = Analyzer::new();
        let absent = analyzer.analyze_opt(None, 0);
        assert_eq!(absent, analyzer.analyze("", 0));
        assert_eq!(absent.code(), "ELE-F5D1");
    }

    #[test]
    fn batch_indexes_by_position() {
        let analyzer = Analyzer::new();
        let rows = [Some("Disjuntor monopolar 20A 220V curva C"), None, Some("Disjuntor monopolar 20A 220V curva C")];
        let records = analyzer.analyze_batch(rows);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].code(), "DIS-220V-20A-3297");
        assert_eq!(records[1].row(), 1);
        assert_eq!(records[1].category(), Category::Generic);
        assert_eq!(records[2].row(), 2);
        assert_eq!(records[0].name(), records[2].name());
        assert_ne!(records[0].code(), records[2].code());
    }

    #[test]
    fn batch_accepts_owned_strings() {
        let rows = vec![Some(String::from("Fita isolante")), None];
        let records = Analyzer::new().analyze_batch(rows);
        assert_eq!(records[0].category(), Category::Tape);
        assert_eq!(records[0].unit(), Unit::Roll);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let analyzer = Analyzer::new();
        let rows: Vec<Option<String>> = (0..200)
            .map(|i| match i % 4 {
                0 => Some(format!("Cabo flexivel {i}mm azul")),
                1 => Some(format!("Disjuntor tripolar {i}A")),
                2 => None,
                _ => Some(format!("Parafuso {i} pacote")),
            })
            .collect();
        assert_eq!(analyzer.analyze_par(&rows), analyzer.analyze_batch(rows.clone()));
    }

    #[test]
    fn config_flows_into_components() {
        let config = AnalyzerConfig {
            digest: DigestAlgorithm::Sha256,
            ..AnalyzerConfig::shared()
        };
        let analyzer = Analyzer::with_config(config);
        assert_eq!(analyzer.config(), config);
        assert_eq!(analyzer.codes().digest(), DigestAlgorithm::Sha256);
        assert_eq!(analyzer.names().word_limit(), 3);

        let record = analyzer.analyze("Cabo PP preto 2x2.5mm rolo 100 metros", 0);
        assert_eq!(record.code(), "CAB-2.5MM-PRE-BAB8");
    }

    #[test]
    fn shared_extractor_changes_names() {
        let split = Analyzer::new().analyze("Abraçadeira 2 abracadeiras", 0);
        let shared = Analyzer::with_config(AnalyzerConfig::shared()).analyze("Abraçadeira 2 abracadeiras", 0);
        assert_eq!(split.name(), "Abraçadeira 2 abracadeiras");
        assert_eq!(shared.name(), "Abraçadeira 2A");
    }

    #[test]
    fn stats_counts() {
        let analyzer = Analyzer::new();
        let records = analyzer.analyze_batch([
            Some("Cabo PP 2x1.5mm"),
            Some("Cabo flexivel 4mm"),
            Some("Tomada 10A"),
            None,
        ]);
        let stats = analyzer.stats(&records);
        assert_eq!(stats.total, 4);
        assert_eq!(
            stats.categories_by_count(),
            vec![(Category::Cable, 2), (Category::Outlet, 1), (Category::Generic, 1)]
        );
        assert_eq!(stats.units_by_count(), vec![(Unit::Meter, 2), (Unit::Unit, 2)]);
        assert_eq!(stats.to_string(), "4 rows, 3 categories, 2 units");
    }

    #[test]
    fn empty_stats() {
        let stats = AnalysisStats::from_records(&[]);
        assert_eq!(stats.total, 0);
        assert!(stats.categories_by_count().is_empty());
    }
}
