//! Rule tables.
//!
//! A [`RuleSet`] bundles every table the engine consults: category keywords,
//! unit keywords, packaging keywords for the small-hardware fallback, and the
//! code prefix table. Tables are plain ordered lists; the engine compiles
//! them once at construction and never mutates them afterwards.
//!
//! The built-in tables cover the usual stock of an electrical storeroom.
//! Custom tables can be loaded from JSON:
//!
//! ```json
//! {
//!   "categories": [{ "category": "Cable", "keywords": ["cabo", "pp"] }],
//!   "units": [{ "unit": "Meter", "keywords": ["rolo", "m"] }],
//!   "packaging": ["pacote"],
//!   "prefixes": { "entries": [{ "keyword": "cabo", "code": "CAB" }], "default": "ELE" }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use matcode_types::{Category, Unit};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analyzer::normalizer::TextNormalizer;

/// Prefix used when no prefix keyword matches.
pub const DEFAULT_PREFIX: &str = "ELE";

/// Errors raised while loading or validating rule tables.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The rules file could not be read.
    #[error("failed to read rules file {path}: {source}")]
    Io {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The rules file is not valid JSON for a [`RuleSet`].
    #[error("invalid rules file: {0}")]
    Json(#[from] serde_json::Error),

    /// A table that must not be empty is empty.
    #[error("{table} table is empty")]
    EmptyTable {
        /// Table name.
        table: &'static str,
    },

    /// A keyword is empty once normalized.
    #[error("empty keyword in {table} table (entry {owner:?})")]
    EmptyKeyword {
        /// Table name.
        table: &'static str,
        /// Tag or keyword owning the empty entry.
        owner: String,
    },

    /// A prefix code does not fit the code grammar.
    #[error("invalid prefix code {code:?} for keyword {keyword:?}: expected 2-4 uppercase ASCII letters")]
    InvalidPrefix {
        /// Keyword of the entry.
        keyword: String,
        /// Rejected code.
        code: String,
    },
}

/// A category and the keywords that detect it, in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Category assigned on match.
    pub category: Category,
    /// Whole-word keywords.
    pub keywords: Vec<String>,
}

/// A unit and the keywords that detect it, in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRule {
    /// Unit assigned on match.
    pub unit: Unit,
    /// Substring or abbreviation keywords.
    pub keywords: Vec<String>,
}

/// Maps a keyword to a short uppercase code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixEntry {
    /// Lowercase keyword, e.g. `"cabo"`.
    pub keyword: String,
    /// Uppercase code, e.g. `"CAB"`.
    pub code: String,
}

/// Ordered prefix entries plus the fallback code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixTable {
    /// Entries scanned in declaration order.
    pub entries: Vec<PrefixEntry>,
    /// Code used when no entry matches.
    #[serde(default = "default_prefix")]
    pub default: String,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_owned()
}

/// Every table the engine needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Category rules in declaration order.
    pub categories: Vec<CategoryRule>,
    /// Unit rules in declaration order.
    pub units: Vec<UnitRule>,
    /// Keywords that turn small hardware into [`Unit::Package`].
    #[serde(default)]
    pub packaging: Vec<String>,
    /// Code prefix table.
    pub prefixes: PrefixTable,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN_CATEGORIES: &[(Category, &[&str])] = &[
    (Category::Cable, &["cabo", "pp", "paralelo"]),
    (Category::Wire, &["fio", "rigido", "flexivel"]),
    (Category::CircuitBreaker, &["disjuntor", "djt"]),
    (Category::Switch, &["interruptor", "int"]),
    (Category::Outlet, &["tomada", "tom"]),
    (Category::Plug, &["plugue", "plug"]),
    (Category::Conduit, &["conduite", "condulete"]),
    (Category::RigidConduit, &["eletroduto"]),
    (Category::Luminaire, &["luminaria"]),
    (Category::Lamp, &["lampada"]),
    (Category::Led, &["led"]),
    (Category::Ballast, &["reator"]),
    (Category::Transformer, &["transformador", "trafo"]),
    (Category::Fuse, &["fusivel", "fus"]),
    (Category::Relay, &["rele"]),
    (Category::Contactor, &["contator"]),
    (Category::TerminalBlock, &["borne"]),
    (Category::Connector, &["conector"]),
    (Category::Clamp, &["abracadeira"]),
    (Category::Tape, &["fita isolante", "fita"]),
    (Category::Box, &["caixa"]),
    (Category::Switchboard, &["quadro"]),
    (Category::Panel, &["painel"]),
    (Category::Sensor, &["sensor"]),
    (Category::Timer, &["timer", "temporizador"]),
    (Category::Socket, &["socket", "soquete"]),
    (Category::Resistor, &["resistor"]),
    (Category::Capacitor, &["capacitor"]),
    (Category::Inductor, &["indutor"]),
    (Category::Driver, &["driver"]),
    (Category::PowerSupply, &["fonte"]),
    (Category::Battery, &["bateria"]),
    (Category::Cell, &["pilha"]),
    (Category::Anchor, &["bucha"]),
    (Category::Screw, &["parafuso"]),
    (Category::Washer, &["arruela"]),
    (Category::Nut, &["porca"]),
    (Category::Terminal, &["terminal"]),
    (Category::CableGland, &["prensa cabo", "prensa"]),
    (Category::Coupling, &["luva"]),
    (Category::Elbow, &["curva"]),
    (Category::CableTray, &["eletrocalha"]),
    (Category::StrutChannel, &["perfilado"]),
    (Category::GroundRod, &["haste"]),
    (Category::Grounding, &["aterramento"]),
    (Category::MotorCircuitBreaker, &["disjuntor motor"]),
    (Category::StaircaseTimer, &["minuteria"]),
    (Category::Dimmer, &["dimmer"]),
    (Category::Varistor, &["varistor"]),
    (Category::Doorbell, &["campainha"]),
    (Category::Siren, &["sirene"]),
    (Category::Floodlight, &["refletor"]),
    (Category::Projector, &["projetor"]),
];

const BUILTIN_UNITS: &[(Unit, &[&str])] = &[
    (Unit::Meter, &["rolo", "metro", "m", "rolo de"]),
    (Unit::Unit, &["unidade", "peça", "peca", "un"]),
    (Unit::Box, &["caixa", "cx"]),
    (Unit::Package, &["pacote", "pct", "pacote com"]),
    (Unit::Set, &["conjunto", "conj"]),
    (Unit::Kit, &["kit"]),
    (Unit::Pair, &["par"]),
    (Unit::Assortment, &["jogo"]),
    (Unit::Bar, &["barra"]),
    (Unit::Roll, &["rolo"]),
];

const BUILTIN_PACKAGING: &[&str] = &["pacote", "pct", "cx", "caixa"];

const BUILTIN_PREFIXES: &[(&str, &str)] = &[
    ("cabo", "CAB"),
    ("fio", "FIO"),
    ("disjuntor", "DIS"),
    ("interruptor", "INT"),
    ("tomada", "TOM"),
    ("plugue", "PLG"),
    ("conduíte", "CND"),
    ("eletroduto", "ELD"),
    ("luminária", "LUM"),
    ("lâmpada", "LAM"),
    ("reator", "REA"),
    ("transformador", "TRF"),
    ("fusível", "FUS"),
    ("relé", "REL"),
    ("contator", "CNT"),
    ("borne", "BOR"),
    ("conector", "CON"),
    ("abraçadeira", "ABR"),
    ("fita", "FIT"),
    ("caixa", "CXA"),
    ("quadro", "QDR"),
    ("painel", "PNL"),
    ("sensor", "SEN"),
    ("timer", "TMR"),
    ("socket", "SCK"),
    ("resistor", "RES"),
    ("capacitor", "CAP"),
    ("indutor", "IND"),
    ("led", "LED"),
    ("driver", "DRV"),
    ("fonte", "FNT"),
    ("bateria", "BAT"),
    ("pilha", "PIL"),
    ("bucha", "BCH"),
    ("parafuso", "PAR"),
    ("arruela", "ARR"),
    ("porca", "POR"),
    ("terminal", "TER"),
    ("prensa", "PRN"),
    ("luva", "LUV"),
    ("curva", "CRV"),
    ("eletrocalha", "ECH"),
    ("perfilado", "PRF"),
    ("haste", "HST"),
    ("aterramento", "ATR"),
];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_owned()).collect()
}

impl RuleSet {
    /// The built-in storeroom tables.
    pub fn builtin() -> Self {
        Self {
            categories: BUILTIN_CATEGORIES
                .iter()
                .map(|(category, keywords)| CategoryRule {
                    category: *category,
                    keywords: owned(keywords),
                })
                .collect(),
            units: BUILTIN_UNITS
                .iter()
                .map(|(unit, keywords)| UnitRule {
                    unit: *unit,
                    keywords: owned(keywords),
                })
                .collect(),
            packaging: owned(BUILTIN_PACKAGING),
            prefixes: PrefixTable {
                entries: BUILTIN_PREFIXES
                    .iter()
                    .map(|(keyword, code)| PrefixEntry {
                        keyword: (*keyword).to_owned(),
                        code: (*code).to_owned(),
                    })
                    .collect(),
                default: default_prefix(),
            },
        }
    }

    /// Parses and validates a JSON rule file.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Json`] on malformed input and any validation error
    /// from [`RuleSet::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, RuleError> {
        let rules: RuleSet = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Reads, parses and validates a JSON rule file.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Io`] if the file cannot be read, otherwise as
    /// [`RuleSet::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| RuleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks that tables are usable.
    ///
    /// Category and unit tables must be non-empty, no keyword may normalize to
    /// the empty string, and every prefix code (including the default) must be
    /// 2-4 uppercase ASCII letters.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), RuleError> {
        let normalizer = TextNormalizer::default();
        let blank = |k: &str| normalizer.normalize(k).is_empty();

        if self.categories.is_empty() {
            return Err(RuleError::EmptyTable { table: "category" });
        }
        if self.units.is_empty() {
            return Err(RuleError::EmptyTable { table: "unit" });
        }

        for rule in &self.categories {
            if rule.keywords.iter().any(|k| blank(k)) {
                return Err(RuleError::EmptyKeyword {
                    table: "category",
                    owner: rule.category.tag().to_owned(),
                });
            }
        }
        for rule in &self.units {
            if rule.keywords.iter().any(|k| blank(k)) {
                return Err(RuleError::EmptyKeyword {
                    table: "unit",
                    owner: rule.unit.tag().to_owned(),
                });
            }
        }
        if self.packaging.iter().any(|k| blank(k)) {
            return Err(RuleError::EmptyKeyword {
                table: "packaging",
                owner: String::new(),
            });
        }

        let code_normalizer = TextNormalizer::code();
        for entry in &self.prefixes.entries {
            if code_normalizer.normalize(&entry.keyword).is_empty() {
                return Err(RuleError::EmptyKeyword {
                    table: "prefix",
                    owner: entry.code.clone(),
                });
            }
            if !is_prefix_code(&entry.code) {
                return Err(RuleError::InvalidPrefix {
                    keyword: entry.keyword.clone(),
                    code: entry.code.clone(),
                });
            }
        }
        if !is_prefix_code(&self.prefixes.default) {
            return Err(RuleError::InvalidPrefix {
                keyword: "default".to_owned(),
                code: self.prefixes.default.clone(),
            });
        }

        Ok(())
    }
}

/// `true` for 2-4 uppercase ASCII letters.
pub fn is_prefix_code(code: &str) -> bool {
    (2..=4).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_uppercase())
}
