//! # Design Input
//!
//! The JSON document a caller hands to [`crate::session::DesignSession::evaluate`].
//! Selectors are written with their drawing labels and the cross-section as
//! a list of element labels; an unknown label fails to deserialize.
//!
//! Numeric inputs are optional. A clause whose value is absent reports
//! `MissingInput` rather than failing the whole evaluation.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "engineer": "A. Engineer",
//!   "job_id": "BR-017",
//!   "bridge_name": "Canal crossing",
//!   "selection": {
//!     "barrier_type": "Metallic",
//!     "crash_barrier_subtype": "Double W-beam",
//!     "footpath": "None"
//!   },
//!   "wearing_coat": "Bituminous",
//!   "kerb_width_mm": 750.0,
//!   "carriageway_width_m": 7.5,
//!   "num_lanes": 2,
//!   "railing_height_mm": 1100.0,
//!   "skew_angle_deg": 35.0,
//!   "longitudinal_gradient_percent": 0.5,
//!   "bridge_length_m": 24.0,
//!   "cross_section": ["Railing", "Carriageway", "Railing"]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::barriers::VariantSelection;
use crate::cross_section::{CrossSectionLayout, SectionElement};
use crate::errors::CalcResult;
use crate::selectors::{BarrierType, CrashBarrierSubtype, FootpathPresence, RailingMaterial, WearingCoat};

/// Everything needed to evaluate one cross-section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignInput {
    pub engineer: String,
    pub job_id: String,
    pub bridge_name: String,

    /// Barrier/median selectors; `selection.footpath` also drives the footpath clauses
    pub selection: VariantSelection,
    pub wearing_coat: Option<WearingCoat>,

    /// Kerb width where no footpath is provided (mm)
    pub kerb_width_mm: Option<f64>,
    pub carriageway_width_m: Option<f64>,
    pub num_lanes: Option<u32>,
    pub footpath_clear_width_m: Option<f64>,
    pub railing_height_mm: Option<f64>,
    pub skew_angle_deg: Option<f64>,
    /// Signed; the clause checks the magnitude
    pub longitudinal_gradient_percent: Option<f64>,
    /// Length on a single horizontal curve (m)
    pub bridge_length_m: Option<f64>,

    pub cross_section: CrossSectionLayout,
}

impl DesignInput {
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn footpath(&self) -> FootpathPresence {
        self.selection.footpath
    }

    /// Two-lane bridge with a footpath on one side and a rigid barrier with
    /// steel railing.
    pub fn sample() -> Self {
        use SectionElement::*;

        DesignInput {
            engineer: "Design Engineer".to_string(),
            job_id: "BR-001".to_string(),
            bridge_name: "Sample two-lane bridge".to_string(),
            selection: VariantSelection {
                barrier_type: BarrierType::Rigid,
                crash_barrier_subtype: Some(CrashBarrierSubtype::Irc5R),
                footpath: FootpathPresence::SingleSide,
                railing_material: Some(RailingMaterial::Steel),
                median_type: None,
            },
            wearing_coat: Some(WearingCoat::Bituminous),
            kerb_width_mm: None,
            carriageway_width_m: Some(7.5),
            num_lanes: Some(2),
            footpath_clear_width_m: Some(1.5),
            railing_height_mm: Some(1000.0),
            skew_angle_deg: Some(35.0),
            longitudinal_gradient_percent: Some(-0.5),
            bridge_length_m: Some(28.0),
            cross_section: CrossSectionLayout::new(vec![Railing, Footpath, Carriageway, SafetyKerb, Railing]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn test_parse_minimal() {
        let input = DesignInput::from_json("{}").unwrap();
        assert_eq!(input.selection, VariantSelection::default());
        assert!(input.cross_section.is_empty());
        assert_eq!(input.kerb_width_mm, None);
    }

    #[test]
    fn test_parse_labels() {
        let json = r#"{
            "selection": {"barrier_type": "Metallic", "crash_barrier_subtype": "Double W-beam"},
            "wearing_coat": "Cement Concrete",
            "num_lanes": 3,
            "cross_section": ["Railing", "Cycle Track", "Carriageway", "Railing"]
        }"#;
        let input = DesignInput::from_json(json).unwrap();
        assert_eq!(input.selection.crash_barrier_subtype, Some(CrashBarrierSubtype::DoubleWBeam));
        assert_eq!(input.wearing_coat, Some(WearingCoat::CementConcrete));
        assert_eq!(input.num_lanes, Some(3));
        assert_eq!(input.cross_section.len(), 4);
        assert_eq!(input.footpath(), FootpathPresence::None);
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = DesignInput::from_json(r#"{"cross_section": ["Railing", "Tram Line"]}"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let err = DesignInput::from_json(r#"{"wearing_coat": "Gravel"}"#).unwrap_err();
        assert!(matches!(err, CalcError::SerializationError { .. }));
    }

    #[test]
    fn test_sample_survives_json() {
        let sample = DesignInput::sample();
        let json = sample.to_json_pretty().unwrap();
        assert!(json.contains("\"Single Side\""));
        assert_eq!(DesignInput::from_json(&json).unwrap(), sample);
    }
}
