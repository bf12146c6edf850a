//! Roadway and alignment clauses of IRC 5:2015.
//!
//! Widths here are in meters, gradients in percent, angles in degrees.

use serde::{Deserialize, Serialize};

use super::{ClauseId, ClauseResult, Limit};
use crate::errors::{ensure_dimension, CalcError, CalcResult};
use crate::record::DesignRecord;
use crate::selectors::{FootpathPresence, WearingCoat};

/// Assumed design life of a bridge (years), Table 104.1.3.4
pub const DESIGN_LIFE_YEARS: u32 = 100;

/// Single-lane carriageway width (m)
pub const SINGLE_LANE_WIDTH_M: f64 = 4.25;

/// Two-lane carriageway width (m)
pub const TWO_LANE_WIDTH_M: f64 = 7.5;

/// Added width per lane beyond two (m)
pub const EXTRA_LANE_WIDTH_M: f64 = 3.5;

/// Minimum clear width of a footpath (m)
pub const FOOTPATH_MIN_CLEAR_WIDTH_M: f64 = 1.5;

/// Skew angle threshold (degrees)
pub const SKEW_ANGLE_THRESHOLD_DEG: f64 = 30.0;

/// Minimum longitudinal gradient for deck drainage (%)
pub const MIN_LONGITUDINAL_GRADIENT_PERCENT: f64 = 0.3;

/// Maximum bridge length on a single curve (m)
pub const MAX_SINGLE_CURVE_LENGTH_M: f64 = 30.0;

/// Table 104.1.3.4 - assumed design life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignLife {
    pub years: u32,
}

impl DesignLife {
    pub fn to_record(&self) -> DesignRecord {
        DesignRecord::new()
            .with("design_life_years", self.years)
            .with("design_life_clause", ClauseId::DesignLife.citation())
    }
}

/// Assumed design life per Table 104.1.3.4
pub fn design_life() -> DesignLife {
    DesignLife { years: DESIGN_LIFE_YEARS }
}

/// Clause 104.3.1 - required carriageway width (m) for `lanes` lanes.
///
/// 4.25 m for one lane, 7.5 m for two, plus 3.5 m for every further lane.
///
/// Prefer [`carriageway_width`], which compares a provided width against this value.
///
/// # Example
/// ```rust
/// use bridge_core::clauses::required_carriageway_width_m;
///
/// assert_eq!(required_carriageway_width_m(1).unwrap(), 4.25);
/// assert_eq!(required_carriageway_width_m(4).unwrap(), 14.5);
/// ```
pub fn required_carriageway_width_m(lanes: u32) -> CalcResult<f64> {
    match lanes {
        0 => Err(CalcError::invalid_input("num_lanes", "0", "A carriageway needs at least one lane")),
        1 => Ok(SINGLE_LANE_WIDTH_M),
        2 => Ok(TWO_LANE_WIDTH_M),
        n => Ok(TWO_LANE_WIDTH_M + EXTRA_LANE_WIDTH_M * f64::from(n - 2)),
    }
}

/// Clause 104.3.1 - provided carriageway width against the lane requirement.
pub fn carriageway_width(provided_width_m: f64, lanes: u32) -> CalcResult<ClauseResult> {
    let required = required_carriageway_width_m(lanes)?;
    let provided = ensure_dimension("carriageway_width_m", provided_width_m)?;
    Ok(ClauseResult::check(
        ClauseId::CarriagewayWidth,
        Limit::AtLeast,
        required,
        provided,
        "m",
        format!("Carriageway width {:.2} m satisfies the {:.2} m required for {} lane(s).", provided, required, lanes),
        format!(
            "Provided width {:.2} m is less than minimum {:.2} m required for {} lane(s).",
            provided, required, lanes
        ),
    ))
}

/// Clause 104.3.6 - minimum clear width of footpath.
///
/// Not applicable without a footpath; a footpath with no width given is
/// reported as missing input.
pub fn footpath_clear_width(footpath: FootpathPresence, clear_width_m: Option<f64>) -> CalcResult<ClauseResult> {
    let clause = ClauseId::FootpathWidth;
    if !footpath.is_present() {
        return Ok(ClauseResult::not_applicable(clause, "Footpath not provided; clause not applicable."));
    }

    let Some(width) = clear_width_m else {
        return Ok(ClauseResult::missing_input(
            clause,
            Some(Limit::AtLeast),
            Some(FOOTPATH_MIN_CLEAR_WIDTH_M),
            "m",
            "Footpath provided but clear width not specified.",
        ));
    };
    let width = ensure_dimension("footpath_clear_width_m", width)?;

    Ok(ClauseResult::check(
        clause,
        Limit::AtLeast,
        FOOTPATH_MIN_CLEAR_WIDTH_M,
        width,
        "m",
        format!("Footpath clear width {:.2} m satisfies {}.", width, clause.citation()),
        format!(
            "Footpath clear width {:.2} m is less than the {:.1} m minimum of {}.",
            width,
            FOOTPATH_MIN_CLEAR_WIDTH_M,
            clause.citation()
        ),
    ))
}

/// Clause 105.3.3 - skew angle must exceed 30 degrees.
pub fn skew_angle(skew_deg: f64) -> CalcResult<ClauseResult> {
    if !skew_deg.is_finite() || !(0.0..90.0).contains(&skew_deg) {
        return Err(CalcError::invalid_input(
            "skew_angle_deg",
            skew_deg.to_string(),
            "Skew angle must be in [0, 90) degrees",
        ));
    }
    Ok(ClauseResult::check(
        ClauseId::SkewAngle,
        Limit::GreaterThan,
        SKEW_ANGLE_THRESHOLD_DEG,
        skew_deg,
        "deg",
        format!("Skew angle {} deg is greater than {} deg.", skew_deg, SKEW_ANGLE_THRESHOLD_DEG),
        format!("Skew angle {} deg does not exceed {} deg.", skew_deg, SKEW_ANGLE_THRESHOLD_DEG),
    ))
}

/// Clause 105.3.6 - longitudinal gradient of at least 0.3 %.
///
/// The magnitude |g| is compared, not the signed value: a falling grade
/// drains as well as a rising one. `provided_value` holds |g|, so -0.5 %
/// is reported as 0.5 % and a shortfall reads the same on either slope.
pub fn longitudinal_gradient(gradient_percent: f64) -> CalcResult<ClauseResult> {
    if !gradient_percent.is_finite() {
        return Err(CalcError::invalid_input(
            "longitudinal_gradient_percent",
            gradient_percent.to_string(),
            "Gradient must be a finite number",
        ));
    }
    let magnitude = gradient_percent.abs();
    Ok(ClauseResult::check(
        ClauseId::LongitudinalGradient,
        Limit::AtLeast,
        MIN_LONGITUDINAL_GRADIENT_PERCENT,
        magnitude,
        "%",
        format!("Longitudinal gradient {} % meets the {} % minimum.", magnitude, MIN_LONGITUDINAL_GRADIENT_PERCENT),
        format!(
            "Longitudinal gradient {} % is less than the minimum requirement of {} %.",
            magnitude, MIN_LONGITUDINAL_GRADIENT_PERCENT
        ),
    ))
}

/// Clause 105.3.10 - bridge length on a single curve not more than 30 m.
pub fn bridge_length_single_curve(bridge_length_m: f64) -> CalcResult<ClauseResult> {
    let length = ensure_dimension("bridge_length_m", bridge_length_m)?;
    Ok(ClauseResult::check(
        ClauseId::SingleCurveLength,
        Limit::AtMost,
        MAX_SINGLE_CURVE_LENGTH_M,
        length,
        "m",
        format!("Bridge length {} m is within the {} m single-curve limit.", length, MAX_SINGLE_CURVE_LENGTH_M),
        format!(
            "Bridge length {} m exceeds the maximum limit of {} m for single curve alignment.",
            length, MAX_SINGLE_CURVE_LENGTH_M
        ),
    ))
}

/// Clause 109.5 - wearing coat must be bituminous or cement concrete.
pub fn wearing_coat(coat: Option<WearingCoat>) -> ClauseResult {
    let clause = ClauseId::WearingCoat;
    match coat {
        Some(c) => ClauseResult::accepted(clause, format!("{} wearing coat permitted by {}.", c, clause.citation())),
        None => ClauseResult::missing_input(clause, None, None, "", "Wearing coat type not specified."),
    }
}
