//! # Variant Geometry Builders
//!
//! Dimensioned geometry and self-weight for each crash barrier and median
//! variant of IRC 5:2015 (Clause 109.6.3, Fig. 4 and Fig. 5). Each variant
//! follows the same pattern:
//!
//! - a fixed dimension set taken from the code figures
//! - a pure `build` function returning a `*Geometry` struct (JSON-serializable)
//! - `to_record()` flattening the result into namespaced [`DesignRecord`] entries
//!
//! The variant is chosen from a [`VariantSelection`] by explicit enum
//! matching. A selection with no builder is reported as
//! [`GeometryOutcome::NotApplicable`]; it never leaves keys half-written.
//!
//! ## Available Variants
//!
//! - [`metallic`] - Edge metallic barrier (single/double W-beam), median metallic barrier
//! - [`median`] - Median raised kerb, median RCC crash barrier
//! - [`rigid`] - Rigid edge barrier (IRC-5R, high containment), rigid barrier with railing
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::barriers::{GeometryOutcome, VariantSelection};
//! use bridge_core::selectors::{BarrierType, CrashBarrierSubtype};
//!
//! let selection = VariantSelection {
//!     barrier_type: BarrierType::Metallic,
//!     crash_barrier_subtype: Some(CrashBarrierSubtype::DoubleWBeam),
//!     ..Default::default()
//! };
//!
//! let outcome = selection.build(None).unwrap();
//! let record = outcome.to_record();
//! assert_eq!(record.text("crash_barrier_beam"), Some("Double W-beam"));
//! ```

pub mod median;
pub mod metallic;
pub mod rigid;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::section::trapezoidal_area;
use crate::errors::{CalcError, CalcResult};
use crate::record::DesignRecord;
use crate::selectors::{BarrierType, CrashBarrierSubtype, FootpathPresence, MedianType, RailingMaterial};

pub use median::{MedianKerbGeometry, MedianRccGeometry};
pub use metallic::{MedianMetallicGeometry, MetallicBarrierGeometry};
pub use rigid::{RigidEdgeGeometry, RigidProfile, RigidRailingGeometry};

/// Record namespace of edge barrier entries
pub const CRASH_BARRIER_NS: &str = "crash_barrier";

/// Record namespace of median entries
pub const MEDIAN_NS: &str = "median";

/// Decimal places of reported loads
pub const LOAD_DECIMALS: u32 = 3;

// ============================================================================
// Shared sections
// ============================================================================

/// Trapezoidal section with horizontal top and bottom faces (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrapezoidSection {
    pub top_width: f64,
    pub bottom_width: f64,
    pub height: f64,
}

impl TrapezoidSection {
    pub fn area_mm2(&self) -> CalcResult<f64> {
        trapezoidal_area(self.top_width, self.bottom_width, self.height)
    }
}

/// RCC kerb under metallic barriers and along medians (Fig. 4, Fig. 5)
pub const BARRIER_KERB: TrapezoidSection = TrapezoidSection {
    top_width: 500.0,
    bottom_width: 550.0,
    height: 100.0,
};

// ============================================================================
// Selection
// ============================================================================

/// Categorical inputs that pick one geometry builder.
///
/// Exactly one of an edge barrier (`barrier_type` other than `None`) or a
/// `median_type` must be chosen.
///
/// ## JSON Example
///
/// ```json
/// {
///   "barrier_type": "Rigid",
///   "crash_barrier_subtype": null,
///   "footpath": "Single Side",
///   "railing_material": "Steel",
///   "median_type": null
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VariantSelection {
    #[serde(default)]
    pub barrier_type: BarrierType,
    #[serde(default)]
    pub crash_barrier_subtype: Option<CrashBarrierSubtype>,
    #[serde(default)]
    pub footpath: FootpathPresence,
    #[serde(default)]
    pub railing_material: Option<RailingMaterial>,
    #[serde(default)]
    pub median_type: Option<MedianType>,
}

/// A buildable variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", content = "option")]
pub enum Variant {
    /// Fig. 4 metallic barrier at the deck edge
    EdgeMetallic(CrashBarrierSubtype),
    /// Fig. 5(c) median with metallic barrier
    MedianMetallic,
    /// Fig. 5(a) median with raised kerb
    MedianRaisedKerb,
    /// Fig. 5(b) median with RCC crash barrier
    MedianRccBarrier,
    /// Rigid barrier at an edge without footpath
    RigidEdge(CrashBarrierSubtype),
    /// Rigid barrier with railing where a footpath is provided
    RigidWithRailing(RailingMaterial),
}

impl Variant {
    /// Record namespace this variant writes to
    pub fn namespace(&self) -> &'static str {
        match self {
            Variant::MedianMetallic | Variant::MedianRaisedKerb | Variant::MedianRccBarrier => MEDIAN_NS,
            _ => CRASH_BARRIER_NS,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Variant::EdgeMetallic(_) => "Edge metallic crash barrier",
            Variant::MedianMetallic => "Median with metallic crash barrier",
            Variant::MedianRaisedKerb => "Median with raised kerb",
            Variant::MedianRccBarrier => "Median with RCC crash barrier",
            Variant::RigidEdge(_) => "Rigid crash barrier",
            Variant::RigidWithRailing(_) => "Rigid crash barrier with railing",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl VariantSelection {
    /// Short description of the selection for messages
    pub fn describe(&self) -> String {
        let mut parts = vec![format!("barrier={}", self.barrier_type)];
        if let Some(s) = self.crash_barrier_subtype {
            parts.push(format!("subtype={}", s));
        }
        parts.push(format!("footpath={}", self.footpath));
        if let Some(r) = self.railing_material {
            parts.push(format!("railing={}", r));
        }
        if let Some(m) = self.median_type {
            parts.push(format!("median={}", m));
        }
        parts.join(", ")
    }

    /// Namespace a not-applicable marker for this selection belongs to
    pub fn namespace(&self) -> &'static str {
        if self.median_type.is_some() && self.barrier_type == BarrierType::None {
            MEDIAN_NS
        } else {
            CRASH_BARRIER_NS
        }
    }

    /// Map the selection to exactly one variant.
    ///
    /// Fails with [`CalcError::UnhandledVariant`] when no builder matches.
    pub fn resolve(&self) -> CalcResult<Variant> {
        let unhandled = |reason: &str| Err(CalcError::unhandled_variant(self.describe(), reason));

        match (self.barrier_type, self.median_type) {
            (BarrierType::None, None) => unhandled("no crash barrier or median type selected"),
            (BarrierType::Metallic | BarrierType::Rigid, Some(_)) => {
                unhandled("an edge barrier and a median type cannot be built from one selection")
            }
            (BarrierType::None, Some(median)) => {
                if self.crash_barrier_subtype.is_some() {
                    return unhandled("crash barrier sub-type does not apply to a median");
                }
                Ok(match median {
                    MedianType::RaisedKerb => Variant::MedianRaisedKerb,
                    MedianType::RccCrashBarrier => Variant::MedianRccBarrier,
                    MedianType::MetallicCrashBarrier => Variant::MedianMetallic,
                })
            }
            (BarrierType::Metallic, None) => match self.crash_barrier_subtype {
                None => Ok(Variant::EdgeMetallic(CrashBarrierSubtype::SingleWBeam)),
                Some(s) if s.family() == BarrierType::Metallic => Ok(Variant::EdgeMetallic(s)),
                Some(_) => unhandled("containment levels apply only to rigid barriers"),
            },
            (BarrierType::Rigid, None) if self.footpath.is_present() => {
                if self.crash_barrier_subtype.is_some_and(|s| s.family() != BarrierType::Rigid) {
                    return unhandled("W-beam sub-types apply only to metallic barriers");
                }
                match self.railing_material {
                    Some(material) => Ok(Variant::RigidWithRailing(material)),
                    None => unhandled("rigid barrier beside a footpath needs a railing material"),
                }
            }
            (BarrierType::Rigid, None) => match self.crash_barrier_subtype {
                Some(s) if s.family() == BarrierType::Rigid => Ok(Variant::RigidEdge(s)),
                Some(_) => unhandled("W-beam sub-types apply only to metallic barriers"),
                None => unhandled("rigid barrier without footpath needs a containment level"),
            },
        }
    }

    /// Build the geometry for this selection.
    ///
    /// `railing_height_mm` is only read by the rigid-with-railing variant.
    /// Unmatched selections come back as [`GeometryOutcome::NotApplicable`];
    /// invalid dimensions are still errors.
    pub fn build(&self, railing_height_mm: Option<f64>) -> CalcResult<GeometryOutcome> {
        let variant = match self.resolve() {
            Ok(v) => v,
            Err(CalcError::UnhandledVariant { selection, reason }) => {
                debug!(%selection, %reason, "no geometry builder for selection");
                return Ok(GeometryOutcome::NotApplicable {
                    namespace: self.namespace().to_string(),
                    selection,
                    reason,
                });
            }
            Err(other) => return Err(other),
        };

        debug!(%variant, "building barrier geometry");
        let geometry = match variant {
            Variant::EdgeMetallic(subtype) => BarrierGeometry::EdgeMetallic(metallic::edge_metallic_barrier(subtype)?),
            Variant::MedianMetallic => BarrierGeometry::MedianMetallic(metallic::median_metallic_barrier()?),
            Variant::MedianRaisedKerb => BarrierGeometry::MedianRaisedKerb(median::median_raised_kerb()?),
            Variant::MedianRccBarrier => BarrierGeometry::MedianRccBarrier(median::median_rcc_barrier()?),
            Variant::RigidEdge(subtype) => BarrierGeometry::RigidEdge(rigid::rigid_edge_barrier(subtype)?),
            Variant::RigidWithRailing(material) => {
                BarrierGeometry::RigidWithRailing(rigid::rigid_barrier_with_railing(material, railing_height_mm)?)
            }
        };
        Ok(GeometryOutcome::Built(geometry))
    }
}

// ============================================================================
// Built geometry
// ============================================================================

/// Geometry produced by one builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BarrierGeometry {
    EdgeMetallic(MetallicBarrierGeometry),
    MedianMetallic(MedianMetallicGeometry),
    MedianRaisedKerb(MedianKerbGeometry),
    MedianRccBarrier(MedianRccGeometry),
    RigidEdge(RigidEdgeGeometry),
    RigidWithRailing(RigidRailingGeometry),
}

impl BarrierGeometry {
    /// Record namespace this geometry writes to
    pub fn namespace(&self) -> &'static str {
        match self {
            BarrierGeometry::MedianMetallic(_)
            | BarrierGeometry::MedianRaisedKerb(_)
            | BarrierGeometry::MedianRccBarrier(_) => MEDIAN_NS,
            _ => CRASH_BARRIER_NS,
        }
    }

    /// Total self-weight (kN/m, rounded), where the variant computes one
    pub fn total_load_kn_m(&self) -> Option<f64> {
        match self {
            BarrierGeometry::EdgeMetallic(g) => Some(g.total_load_kn_m),
            BarrierGeometry::MedianMetallic(g) => Some(g.total_load_kn_m),
            BarrierGeometry::MedianRaisedKerb(g) => Some(g.total_load_kn_m),
            BarrierGeometry::MedianRccBarrier(g) => Some(g.total_load_kn_m),
            BarrierGeometry::RigidEdge(_) | BarrierGeometry::RigidWithRailing(_) => None,
        }
    }

    pub fn to_record(&self) -> DesignRecord {
        match self {
            BarrierGeometry::EdgeMetallic(g) => g.to_record(),
            BarrierGeometry::MedianMetallic(g) => g.to_record(),
            BarrierGeometry::MedianRaisedKerb(g) => g.to_record(),
            BarrierGeometry::MedianRccBarrier(g) => g.to_record(),
            BarrierGeometry::RigidEdge(g) => g.to_record(),
            BarrierGeometry::RigidWithRailing(g) => g.to_record(),
        }
    }
}

/// Result of [`VariantSelection::build`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome")]
pub enum GeometryOutcome {
    Built(BarrierGeometry),
    NotApplicable {
        namespace: String,
        selection: String,
        reason: String,
    },
}

impl GeometryOutcome {
    pub fn is_applicable(&self) -> bool {
        matches!(self, GeometryOutcome::Built(_))
    }

    /// Record entries for this outcome.
    ///
    /// A not-applicable outcome writes only `<namespace>_status`.
    pub fn to_record(&self) -> DesignRecord {
        match self {
            GeometryOutcome::Built(geometry) => geometry
                .to_record()
                .with(format!("{}_status", geometry.namespace()), "Applicable"),
            GeometryOutcome::NotApplicable { namespace, reason, .. } => {
                DesignRecord::new().with(format!("{}_status", namespace), format!("Not applicable: {}", reason))
            }
        }
    }

    /// Return `design` with this outcome merged in; `design` itself is not changed.
    pub fn apply_to(&self, design: &DesignRecord) -> DesignRecord {
        design.merged(&self.to_record())
    }

    /// Convert a not-applicable outcome into [`CalcError::UnhandledVariant`].
    pub fn into_result(self) -> CalcResult<BarrierGeometry> {
        match self {
            GeometryOutcome::Built(g) => Ok(g),
            GeometryOutcome::NotApplicable { selection, reason, .. } => {
                Err(CalcError::UnhandledVariant { selection, reason })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(barrier_type: BarrierType, subtype: Option<CrashBarrierSubtype>) -> VariantSelection {
        VariantSelection {
            barrier_type,
            crash_barrier_subtype: subtype,
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_metallic_defaults_to_single_beam() {
        let v = edge(BarrierType::Metallic, None).resolve().unwrap();
        assert_eq!(v, Variant::EdgeMetallic(CrashBarrierSubtype::SingleWBeam));

        let v = edge(BarrierType::Metallic, Some(CrashBarrierSubtype::DoubleWBeam)).resolve().unwrap();
        assert_eq!(v, Variant::EdgeMetallic(CrashBarrierSubtype::DoubleWBeam));
    }

    #[test]
    fn test_resolve_rigid_by_footpath() {
        let no_footpath = edge(BarrierType::Rigid, Some(CrashBarrierSubtype::HighContainment));
        assert_eq!(no_footpath.resolve().unwrap(), Variant::RigidEdge(CrashBarrierSubtype::HighContainment));

        let with_footpath = VariantSelection {
            barrier_type: BarrierType::Rigid,
            footpath: FootpathPresence::BothSides,
            railing_material: Some(RailingMaterial::Rcc),
            ..Default::default()
        };
        assert_eq!(with_footpath.resolve().unwrap(), Variant::RigidWithRailing(RailingMaterial::Rcc));

        // a containment level beside a footpath is not an error
        let with_containment = VariantSelection {
            crash_barrier_subtype: Some(CrashBarrierSubtype::Irc5R),
            ..with_footpath
        };
        assert_eq!(with_containment.resolve().unwrap(), Variant::RigidWithRailing(RailingMaterial::Rcc));
    }

    #[test]
    fn test_resolve_medians() {
        for (median, expected) in [
            (MedianType::RaisedKerb, Variant::MedianRaisedKerb),
            (MedianType::RccCrashBarrier, Variant::MedianRccBarrier),
            (MedianType::MetallicCrashBarrier, Variant::MedianMetallic),
        ] {
            let sel = VariantSelection {
                median_type: Some(median),
                ..Default::default()
            };
            assert_eq!(sel.resolve().unwrap(), expected);
            assert_eq!(expected.namespace(), MEDIAN_NS);
        }
    }

    #[test]
    fn test_unhandled_combinations() {
        let cases = [
            VariantSelection::default(),
            VariantSelection {
                barrier_type: BarrierType::Rigid,
                median_type: Some(MedianType::RaisedKerb),
                ..Default::default()
            },
            edge(BarrierType::Metallic, Some(CrashBarrierSubtype::Irc5R)),
            edge(BarrierType::Rigid, Some(CrashBarrierSubtype::SingleWBeam)),
            edge(BarrierType::Rigid, None),
            VariantSelection {
                barrier_type: BarrierType::Rigid,
                footpath: FootpathPresence::SingleSide,
                ..Default::default()
            },
            VariantSelection {
                median_type: Some(MedianType::RccCrashBarrier),
                crash_barrier_subtype: Some(CrashBarrierSubtype::DoubleWBeam),
                ..Default::default()
            },
            VariantSelection {
                barrier_type: BarrierType::Rigid,
                crash_barrier_subtype: Some(CrashBarrierSubtype::SingleWBeam),
                footpath: FootpathPresence::BothSides,
                railing_material: Some(RailingMaterial::Steel),
                median_type: None,
            },
        ];
        for sel in cases {
            assert!(
                matches!(sel.resolve(), Err(CalcError::UnhandledVariant { .. })),
                "expected unhandled for {}",
                sel.describe()
            );
            let outcome = sel.build(Some(1200.0)).unwrap();
            assert!(!outcome.is_applicable());
        }
    }

    #[test]
    fn test_not_applicable_writes_only_marker() {
        let sel = VariantSelection {
            barrier_type: BarrierType::Rigid,
            median_type: Some(MedianType::MetallicCrashBarrier),
            ..Default::default()
        };
        let design = DesignRecord::new().with("design_life_years", 100u32);
        let out = sel.build(None).unwrap().apply_to(&design);

        assert_eq!(out.len(), 2);
        assert!(out.text("crash_barrier_status").unwrap().starts_with("Not applicable"));
        assert_eq!(out.keys_with_prefix("median_").count(), 0);
        assert_eq!(out.number("design_life_years"), Some(100.0));
    }

    #[test]
    fn test_into_result() {
        let err = VariantSelection::default().build(None).unwrap().into_result().unwrap_err();
        assert_eq!(err.error_code(), "UNHANDLED_VARIANT");

        let ok = edge(BarrierType::Metallic, None).build(None).unwrap().into_result().unwrap();
        assert_eq!(ok.namespace(), CRASH_BARRIER_NS);
    }

    #[test]
    fn test_built_record_marks_applicable() {
        let sel = VariantSelection {
            median_type: Some(MedianType::RaisedKerb),
            ..Default::default()
        };
        let record = sel.build(None).unwrap().to_record();
        assert_eq!(record.text("median_status"), Some("Applicable"));
        assert!(record.keys_with_prefix("crash_barrier_").next().is_none());
    }

    #[test]
    fn test_selection_json() {
        let json = r#"{"barrier_type":"Rigid","footpath":"Single Side","railing_material":"Steel"}"#;
        let sel: VariantSelection = serde_json::from_str(json).unwrap();
        assert_eq!(sel.resolve().unwrap(), Variant::RigidWithRailing(RailingMaterial::Steel));

        let bad = r#"{"barrier_type":"Timber"}"#;
        assert!(serde_json::from_str::<VariantSelection>(bad).is_err());
    }

    #[test]
    fn test_barrier_kerb_area() {
        assert_eq!(BARRIER_KERB.area_mm2().unwrap(), 52_500.0);
    }
}
