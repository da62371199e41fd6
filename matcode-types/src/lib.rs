//! Core types for electrical-material classification.
//!
//! This crate holds the vocabulary shared by the engine and its front ends:
//!
//! - **Tags**: closed enumerations for [`Category`] and [`Unit`], each with an
//!   explicit generic/default variant instead of a sentinel string
//! - **Attributes**: [`AttributeKind`] and [`AttributeToken`] for technical
//!   specs pulled out of free text
//! - **Records**: the immutable [`MaterialRecord`] produced per input row
//! - **Configuration**: [`AnalyzerConfig`] and its knobs

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Zero-based position of a row in the input sequence.
///
/// The index is part of the code digest, so it must be assigned from the
/// original input position before any reordering or parallel dispatch.
pub type RowIndex = usize;

/// Number of hexadecimal characters kept from the content digest.
pub const HASH_SUFFIX_LEN: usize = 4;

/// Separator between the segments of a generated code.
pub const CODE_DELIMITER: char = '-';

macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Display label used in catalogs, names and digests.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            /// Variant identifier, as used in rule files.
            #[must_use]
            pub const fn tag(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant), )+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ParseTagError;

            /// Accepts either the variant identifier or the display label,
            /// ignoring ASCII case.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| {
                        v.tag().eq_ignore_ascii_case(wanted)
                            || v.label().eq_ignore_ascii_case(wanted)
                    })
                    .ok_or_else(|| ParseTagError {
                        kind: stringify!($name),
                        value: wanted.to_owned(),
                    })
            }
        }
    };
}

tag_enum! {
    /// Coarse product type assigned by keyword matching.
    ///
    /// [`Category::Generic`] is returned when no rule matches.
    Category, default = Generic {
        /// Multi-conductor cable.
        Cable => "Cabo",
        /// Single-conductor wire.
        Wire => "Fio",
        /// Circuit breaker.
        CircuitBreaker => "Disjuntor",
        /// Wall switch.
        Switch => "Interruptor",
        /// Wall outlet.
        Outlet => "Tomada",
        /// Plug.
        Plug => "Plugue",
        /// Flexible conduit and conduit bodies.
        Conduit => "Conduíte",
        /// Rigid conduit.
        RigidConduit => "Eletroduto",
        /// Light fixture.
        Luminaire => "Luminária",
        /// Lamp.
        Lamp => "Lâmpada",
        /// LED module or strip.
        Led => "LED",
        /// Lamp ballast.
        Ballast => "Reator",
        /// Transformer.
        Transformer => "Transformador",
        /// Fuse.
        Fuse => "Fusível",
        /// Relay.
        Relay => "Relé",
        /// Contactor.
        Contactor => "Contator",
        /// Terminal block.
        TerminalBlock => "Borne",
        /// Wire connector.
        Connector => "Conector",
        /// Clamp or cable tie.
        Clamp => "Abraçadeira",
        /// Insulating tape.
        Tape => "Fita",
        /// Junction box.
        Box => "Caixa",
        /// Distribution board.
        Switchboard => "Quadro",
        /// Control panel.
        Panel => "Painel",
        /// Sensor.
        Sensor => "Sensor",
        /// Timer.
        Timer => "Timer",
        /// Lamp socket.
        Socket => "Socket",
        /// Resistor.
        Resistor => "Resistor",
        /// Capacitor.
        Capacitor => "Capacitor",
        /// Inductor.
        Inductor => "Indutor",
        /// LED driver.
        Driver => "Driver",
        /// Power supply.
        PowerSupply => "Fonte",
        /// Rechargeable battery.
        Battery => "Bateria",
        /// Dry cell.
        Cell => "Pilha",
        /// Wall anchor.
        Anchor => "Bucha",
        /// Screw.
        Screw => "Parafuso",
        /// Washer.
        Washer => "Arruela",
        /// Nut.
        Nut => "Porca",
        /// Crimp terminal.
        Terminal => "Terminal",
        /// Cable gland.
        CableGland => "Prensa",
        /// Conduit coupling.
        Coupling => "Luva",
        /// Conduit elbow.
        Elbow => "Curva",
        /// Cable tray.
        CableTray => "Eletrocalha",
        /// Strut channel.
        StrutChannel => "Perfilado",
        /// Ground rod.
        GroundRod => "Haste",
        /// Grounding accessory.
        Grounding => "Aterramento",
        /// Motor protection breaker.
        MotorCircuitBreaker => "Disjuntor Motor",
        /// Staircase timer.
        StaircaseTimer => "Minuteria",
        /// Dimmer.
        Dimmer => "Dimmer",
        /// Varistor.
        Varistor => "Varistor",
        /// Doorbell.
        Doorbell => "Campainha",
        /// Siren.
        Siren => "Sirene",
        /// Floodlight.
        Floodlight => "Refletor",
        /// Projector light.
        Projector => "Projetor",
        /// Generic electrical material; nothing more specific matched.
        Generic => "Material Elétrico",
    }
}

impl Category {
    /// Stock sold by length (cable, wire, conduit, raceway).
    #[must_use]
    pub const fn is_linear_stock(self) -> bool {
        matches!(
            self,
            Category::Cable
                | Category::Wire
                | Category::Conduit
                | Category::RigidConduit
                | Category::CableTray
        )
    }

    /// Small fixing hardware, usually sold loose or in packs.
    #[must_use]
    pub const fn is_small_hardware(self) -> bool {
        matches!(
            self,
            Category::Clamp | Category::Screw | Category::Washer | Category::Anchor | Category::Nut
        )
    }

    /// Tape sold by the roll.
    #[must_use]
    pub const fn is_tape(self) -> bool {
        matches!(self, Category::Tape)
    }

    /// Length of the display label in characters.
    ///
    /// Category rules are tried longest label first.
    #[must_use]
    pub fn label_len(self) -> usize {
        self.label().chars().count()
    }
}

tag_enum! {
    /// Unit of measure assigned by keyword matching plus category fallback.
    ///
    /// [`Unit::Unit`] is the global default.
    Unit, default = Unit {
        /// Sold by the meter.
        Meter => "Metro",
        /// Sold per piece.
        Unit => "Unidade",
        /// Sold by the box.
        Box => "Caixa",
        /// Sold by the package.
        Package => "Pacote",
        /// Sold as a set.
        Set => "Conjunto",
        /// Sold as a kit.
        Kit => "Kit",
        /// Sold in pairs.
        Pair => "Par",
        /// Sold as an assortment.
        Assortment => "Jogo",
        /// Sold by the bar.
        Bar => "Barra",
        /// Sold by the roll.
        Roll => "Rolo",
    }
}

/// Error returned when a tag name does not match any variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTagError {
    kind: &'static str,
    value: String,
}

impl ParseTagError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} tag: {:?}", self.kind, self.value)
    }
}

impl core::error::Error for ParseTagError {}

/// Kind of technical attribute extracted from a description.
///
/// `#[repr(u8)]` keeps the discriminant usable as a compact index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum AttributeKind {
    /// Rated voltage, e.g. `220V`.
    Voltage = 0,
    /// Rated current, e.g. `20A`.
    Amperage = 1,
    /// Power, e.g. `9W`.
    Power = 2,
    /// Conductor gauge or dimension in millimeters, e.g. `2.5MM`.
    Gauge = 3,
    /// Length in meters, e.g. `100M`.
    Length = 4,
    /// Pole count, e.g. `2P`.
    Poles = 5,
    /// Color code, e.g. `PRE`.
    Color = 6,
}

impl AttributeKind {
    /// Every kind, in extraction order.
    pub const ALL: [AttributeKind; 7] = [
        AttributeKind::Voltage,
        AttributeKind::Amperage,
        AttributeKind::Power,
        AttributeKind::Gauge,
        AttributeKind::Length,
        AttributeKind::Poles,
        AttributeKind::Color,
    ];

    /// Unit suffix appended to the captured number. Colors have none.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            AttributeKind::Voltage => "V",
            AttributeKind::Amperage => "A",
            AttributeKind::Power => "W",
            AttributeKind::Gauge => "MM",
            AttributeKind::Length => "M",
            AttributeKind::Poles => "P",
            AttributeKind::Color => "",
        }
    }
}

/// A formatted technical attribute, e.g. `Voltage` / `"220V"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributeToken {
    kind: AttributeKind,
    value: String,
}

impl AttributeToken {
    /// Creates a token from an already formatted value.
    pub fn new(kind: AttributeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Creates a token from a captured number and the kind's suffix.
    pub fn measured(kind: AttributeKind, number: &str) -> Self {
        let suffix = kind.suffix();
        let mut value = String::with_capacity(number.len() + suffix.len());
        value.push_str(number);
        value.push_str(suffix);
        Self { kind, value }
    }

    /// The attribute kind.
    #[inline(always)]
    pub const fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// The formatted value.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for AttributeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Result of analyzing one description.
///
/// Built once per row and never mutated; fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MaterialRecord {
    row: RowIndex,
    description: String,
    category: Category,
    unit: Unit,
    name: String,
    code: String,
}

impl MaterialRecord {
    /// Assembles a record from its derived parts.
    pub fn new(
        row: RowIndex,
        description: impl Into<String>,
        category: Category,
        unit: Unit,
        name: String,
        code: String,
    ) -> Self {
        Self {
            row,
            description: description.into(),
            category,
            unit,
            name,
            code,
        }
    }

    /// Position of the source row.
    #[inline(always)]
    pub const fn row(&self) -> RowIndex {
        self.row
    }

    /// Original description, unmodified.
    #[inline(always)]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Derived category.
    #[inline(always)]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Derived unit of measure.
    #[inline(always)]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Short display name.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generated identification code.
    #[inline(always)]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for MaterialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} [{} / {}] {}",
            self.row, self.code, self.category, self.unit, self.name
        )
    }
}

/// Digest used for the uniqueness suffix of generated codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DigestAlgorithm {
    /// MD5. Same digest and message layout as earlier catalogs; codes still
    /// differ where a name carries a gauge or a prefix keyword is accented.
    #[default]
    Md5,
    /// SHA-256.
    Sha256,
}

impl FromStr for DigestAlgorithm {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            other => Err(ParseTagError {
                kind: "DigestAlgorithm",
                value: other.to_owned(),
            }),
        }
    }
}

/// Which attribute rules feed the name summarizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExtractorMode {
    /// Naming and code generation use their own rule profiles.
    #[default]
    Split,
    /// Both paths use the code-generation profile.
    Shared,
}

/// Analyzer configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalyzerConfig {
    /// Digest behind the code suffix.
    pub digest: DigestAlgorithm,
    /// Extractor profile selection.
    pub extractor: ExtractorMode,
    /// Words kept from the description when no attribute was found.
    pub name_word_limit: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::legacy()
    }
}

impl AnalyzerConfig {
    /// Default settings: MD5 suffix and split extractor profiles.
    pub const fn legacy() -> Self {
        Self {
            digest: DigestAlgorithm::Md5,
            extractor: ExtractorMode::Split,
            name_word_limit: 3,
        }
    }

    /// Single extractor profile for both naming and codes.
    pub const fn shared() -> Self {
        Self {
            extractor: ExtractorMode::Shared,
            ..Self::legacy()
        }
    }
}
