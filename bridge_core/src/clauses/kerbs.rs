//! Kerb clauses of IRC 5:2015.
//!
//! - 101.41: where no footpath is provided the kerb doubles as a safety
//!   kerb for occasional pedestrians and must be at least 750 mm wide.
//! - 109.8.1: standard road kerb outline.
//! - 109.8.3: a safety kerb has the road kerb outline except that its top
//!   width is not less than 750 mm.

use serde::{Deserialize, Serialize};

use super::{ClauseId, ClauseResult, Limit};
use crate::equations::section::{kerb_profile_area, round_to};
use crate::errors::{ensure_dimension, CalcResult};
use crate::materials::rcc_load_from_area;
use crate::record::DesignRecord;
use crate::selectors::FootpathPresence;

/// Minimum top width of a safety kerb (mm)
pub const SAFETY_KERB_MIN_WIDTH_MM: f64 = 750.0;

/// Kerb outline dimensions, all in mm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KerbOutline {
    pub width: f64,
    pub effective_width: f64,
    pub height: f64,
    pub effective_height: f64,
    pub edge_radius: f64,
}

/// Clause 109.8.1 road kerb
pub const ROAD_KERB: KerbOutline = KerbOutline {
    width: 225.0,
    effective_width: 175.0,
    height: 225.0,
    effective_height: 200.0,
    edge_radius: 25.0,
};

impl KerbOutline {
    /// Composite profile area (mm²)
    pub fn area_mm2(&self) -> CalcResult<f64> {
        kerb_profile_area(self.effective_width, self.height, self.effective_height, self.edge_radius)
    }

    /// Entries `<prefix>_width`, `<prefix>_effective_width`, ... for a design record
    pub fn to_record(&self, prefix: &str) -> DesignRecord {
        DesignRecord::new()
            .with(format!("{}_width", prefix), self.width)
            .with(format!("{}_effective_width", prefix), self.effective_width)
            .with(format!("{}_height", prefix), self.height)
            .with(format!("{}_effective_height", prefix), self.effective_height)
            .with(format!("{}_edge_radius", prefix), self.edge_radius)
    }
}

/// Clause 109.8.1 road kerb outline as record entries under `road_kerb_`.
pub fn road_kerb_outline() -> DesignRecord {
    ROAD_KERB
        .to_record("road_kerb")
        .with("road_kerb_clause", ClauseId::RoadKerbOutline.citation())
}

/// Safety kerb derived from the road kerb (Clause 109.8.3)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyKerbOutline {
    /// Road kerb outline with the top width raised to the minimum
    pub outline: KerbOutline,
    pub min_required_top_width: f64,
    /// Composite profile area (mm²)
    pub area_mm2: f64,
    /// RCC self-weight (kN/m), rounded to 3 places
    pub load_kn_m: f64,
}

impl SafetyKerbOutline {
    /// Build from the standard road kerb.
    pub fn from_road_kerb() -> CalcResult<Self> {
        let outline = KerbOutline {
            width: ROAD_KERB.width.max(SAFETY_KERB_MIN_WIDTH_MM),
            ..ROAD_KERB
        };
        let area_mm2 = outline.area_mm2()?;
        let load_kn_m = round_to(rcc_load_from_area(area_mm2)?, 3);
        Ok(SafetyKerbOutline {
            outline,
            min_required_top_width: SAFETY_KERB_MIN_WIDTH_MM,
            area_mm2,
            load_kn_m,
        })
    }

    pub fn to_record(&self) -> DesignRecord {
        self.outline
            .to_record("safety_kerb")
            .with("safety_kerb_min_required_top_width", self.min_required_top_width)
            .with("safety_kerb_is_width_compliant", self.outline.width >= self.min_required_top_width)
            .with("safety_kerb_area_mm2", round_to(self.area_mm2, 1))
            .with("safety_kerb_load_kNm", self.load_kn_m)
            .with("safety_kerb_clause", ClauseId::SafetyKerbOutline.citation())
    }
}

/// Clause 109.8.3 safety kerb outline as record entries under `safety_kerb_`.
pub fn safety_kerb_outline() -> CalcResult<DesignRecord> {
    Ok(SafetyKerbOutline::from_road_kerb()?.to_record())
}

/// Clause 101.41 - kerb width where no footpath is provided.
///
/// # Example
/// ```rust
/// use bridge_core::clauses::{safety_kerb_width, ClauseStatus};
/// use bridge_core::selectors::FootpathPresence;
///
/// let r = safety_kerb_width(700.0, FootpathPresence::None).unwrap();
/// assert_eq!(r.status, ClauseStatus::NonCompliant);
/// assert_eq!(r.threshold, Some(750.0));
/// ```
pub fn safety_kerb_width(kerb_width_mm: f64, footpath: FootpathPresence) -> CalcResult<ClauseResult> {
    let clause = ClauseId::SafetyKerbWidth;
    if footpath.is_present() {
        return Ok(ClauseResult::not_applicable(
            clause,
            format!("{} not applicable as footpath is provided ({}).", clause.citation(), footpath),
        ));
    }

    let width = ensure_dimension("kerb_width_mm", kerb_width_mm)?;
    Ok(ClauseResult::check(
        clause,
        Limit::AtLeast,
        SAFETY_KERB_MIN_WIDTH_MM,
        width,
        "mm",
        format!(
            "Kerb width {} mm satisfies the {} mm minimum for occasional pedestrian use.",
            width, SAFETY_KERB_MIN_WIDTH_MM
        ),
        format!(
            "Kerb width {} mm is less than the {} mm minimum required when no footpath is provided.",
            width, SAFETY_KERB_MIN_WIDTH_MM
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clauses::ClauseStatus;
    use crate::errors::CalcError;

    #[test]
    fn test_safety_kerb_width_narrow() {
        let r = safety_kerb_width(700.0, FootpathPresence::None).unwrap();
        assert_eq!(r.status, ClauseStatus::NonCompliant);
        assert!(r.applicable);
        assert!(!r.is_compliant);
        assert_eq!(r.threshold, Some(750.0));
        assert_eq!(r.provided_value, Some(700.0));
    }

    #[test]
    fn test_safety_kerb_width_ok() {
        let r = safety_kerb_width(800.0, FootpathPresence::None).unwrap();
        assert_eq!(r.status, ClauseStatus::Compliant);
        assert!(r.is_compliant);

        let exact = safety_kerb_width(750.0, FootpathPresence::None).unwrap();
        assert!(exact.is_compliant);
    }

    #[test]
    fn test_safety_kerb_width_with_footpath() {
        for footpath in [FootpathPresence::SingleSide, FootpathPresence::BothSides] {
            let r = safety_kerb_width(300.0, footpath).unwrap();
            assert_eq!(r.status, ClauseStatus::NotApplicable);
            assert!(!r.applicable);
        }
    }

    #[test]
    fn test_safety_kerb_width_negative() {
        assert!(matches!(
            safety_kerb_width(-10.0, FootpathPresence::None),
            Err(CalcError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_road_kerb_outline() {
        let record = road_kerb_outline();
        assert_eq!(record.number("road_kerb_width"), Some(225.0));
        assert_eq!(record.number("road_kerb_effective_width"), Some(175.0));
        assert_eq!(record.number("road_kerb_height"), Some(225.0));
        assert_eq!(record.number("road_kerb_effective_height"), Some(200.0));
        assert_eq!(record.number("road_kerb_edge_radius"), Some(25.0));
        assert_eq!(record.text("road_kerb_clause"), Some("IRC 5:2015 Clause 109.8.1"));
    }

    #[test]
    fn test_safety_kerb_clamps_top_width() {
        let kerb = SafetyKerbOutline::from_road_kerb().unwrap();
        assert_eq!(kerb.outline.width, 750.0);
        assert_eq!(kerb.outline.effective_width, ROAD_KERB.effective_width);
        assert_eq!(kerb.outline.height, ROAD_KERB.height);

        // 39375 + 490.874 + 4375 + 2500 = 46740.874 mm² → ×25e-6 = 1.169 kN/m
        assert!((kerb.area_mm2 - 46_740.874).abs() < 0.001);
        assert_eq!(kerb.load_kn_m, 1.169);
    }

    #[test]
    fn test_safety_kerb_record() {
        let record = safety_kerb_outline().unwrap();
        assert_eq!(record.number("safety_kerb_width"), Some(750.0));
        assert_eq!(record.flag("safety_kerb_is_width_compliant"), Some(true));
        assert_eq!(record.number("safety_kerb_min_required_top_width"), Some(750.0));
        assert!(record.keys_with_prefix("safety_kerb_").count() >= 9);
        assert!(record.keys_with_prefix("road_kerb_").next().is_none());
    }
}
