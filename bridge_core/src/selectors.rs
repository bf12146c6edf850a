//! # Variant Selectors
//!
//! Closed sets of categorical inputs that pick a clause branch or a
//! barrier/median geometry. Each enum serializes as the label used in
//! IRC 5:2015 drawings (`"Double W-beam"`, `"IRC-5R"`, ...) and parses from
//! the same label. A label outside the set is an input error, never a
//! silent no-op.
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::selectors::{CrashBarrierSubtype, FootpathPresence};
//!
//! let footpath: FootpathPresence = "Single Side".parse().unwrap();
//! assert!(footpath.is_present());
//!
//! assert!("Triple W-beam".parse::<CrashBarrierSubtype>().is_err());
//! ```

use serde::{Deserialize, Serialize};

/// Implements `ALL`, `label()`, `Display` and `FromStr` over the label table.
macro_rules! labelled {
    ($type:ident, $field:literal, [$($variant:ident => $label:literal),+ $(,)?]) => {
        impl $type {
            /// Every member of the closed set, in drawing order
            pub const ALL: &'static [$type] = &[$($type::$variant),+];

            /// Label as printed in IRC 5:2015
            pub fn label(&self) -> &'static str {
                match self {
                    $($type::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl std::str::FromStr for $type {
            type Err = $crate::errors::CalcError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $type::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        let allowed: Vec<&str> = $type::ALL.iter().map(|v| v.label()).collect();
                        $crate::errors::CalcError::invalid_input($field, s, format!("Expected one of: {}", allowed.join(", ")))
                    })
            }
        }
    };
}

pub(crate) use labelled;

/// Footpath provision along the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FootpathPresence {
    /// No footpath; kerbs act as safety kerbs
    #[default]
    #[serde(rename = "None")]
    None,
    /// Footpath on one edge
    #[serde(rename = "Single Side")]
    SingleSide,
    /// Footpath on both edges
    #[serde(rename = "Both Sides")]
    BothSides,
}

labelled!(FootpathPresence, "footpath", [
    None => "None",
    SingleSide => "Single Side",
    BothSides => "Both Sides",
]);

impl FootpathPresence {
    pub fn is_present(&self) -> bool {
        !matches!(self, FootpathPresence::None)
    }
}

/// Edge barrier family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BarrierType {
    /// No edge crash barrier selected
    #[default]
    #[serde(rename = "None")]
    None,
    /// W-beam on steel posts over an RCC kerb
    #[serde(rename = "Metallic")]
    Metallic,
    /// Cast-in-place concrete barrier
    #[serde(rename = "Rigid")]
    Rigid,
}

labelled!(BarrierType, "barrier_type", [
    None => "None",
    Metallic => "Metallic",
    Rigid => "Rigid",
]);

/// Crash barrier sub-type.
///
/// The W-beam members belong to [`BarrierType::Metallic`], the containment
/// levels to [`BarrierType::Rigid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrashBarrierSubtype {
    #[serde(rename = "Single W-beam")]
    SingleWBeam,
    #[serde(rename = "Double W-beam")]
    DoubleWBeam,
    #[serde(rename = "IRC-5R")]
    Irc5R,
    #[serde(rename = "High Containment")]
    HighContainment,
}

labelled!(CrashBarrierSubtype, "crash_barrier_subtype", [
    SingleWBeam => "Single W-beam",
    DoubleWBeam => "Double W-beam",
    Irc5R => "IRC-5R",
    HighContainment => "High Containment",
]);

impl CrashBarrierSubtype {
    /// Barrier family this sub-type belongs to
    pub fn family(&self) -> BarrierType {
        match self {
            CrashBarrierSubtype::SingleWBeam | CrashBarrierSubtype::DoubleWBeam => BarrierType::Metallic,
            CrashBarrierSubtype::Irc5R | CrashBarrierSubtype::HighContainment => BarrierType::Rigid,
        }
    }

    /// Number of W-beam rails (zero for rigid sub-types)
    pub fn beam_count(&self) -> u8 {
        match self {
            CrashBarrierSubtype::SingleWBeam => 1,
            CrashBarrierSubtype::DoubleWBeam => 2,
            _ => 0,
        }
    }
}

/// Railing material on a footpath edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RailingMaterial {
    #[serde(rename = "RCC")]
    Rcc,
    #[serde(rename = "Steel")]
    Steel,
}

labelled!(RailingMaterial, "railing_material", [
    Rcc => "RCC",
    Steel => "Steel",
]);

/// Median treatment between opposing carriageways
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MedianType {
    #[serde(rename = "Raised Kerb")]
    RaisedKerb,
    #[serde(rename = "RCC Crash Barrier")]
    RccCrashBarrier,
    #[serde(rename = "Metallic Crash Barrier")]
    MetallicCrashBarrier,
}

labelled!(MedianType, "median_type", [
    RaisedKerb => "Raised Kerb",
    RccCrashBarrier => "RCC Crash Barrier",
    MetallicCrashBarrier => "Metallic Crash Barrier",
]);

/// Deck wearing coat (Clause 109.5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WearingCoat {
    #[serde(rename = "Bituminous")]
    Bituminous,
    #[serde(rename = "Cement Concrete")]
    CementConcrete,
}

labelled!(WearingCoat, "wearing_coat", [
    Bituminous => "Bituminous",
    CementConcrete => "Cement Concrete",
]);
