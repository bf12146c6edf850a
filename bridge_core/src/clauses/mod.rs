//! # Clause Evaluator
//!
//! Stateless checks for the numbered clauses of IRC 5:2015 that govern a
//! bridge cross-section. Every threshold check returns the same
//! [`ClauseResult`] shape:
//!
//! - `Compliant` / `NonCompliant` - the provided value was compared to the code limit
//! - `NotApplicable` - the clause does not govern this design (e.g. footpath rules with no footpath)
//! - `MissingInput` - the clause governs but the value it checks was not supplied
//!
//! A non-compliant result is an ordinary return value. It is logged, but the
//! result itself is the channel the caller must inspect; one failing clause
//! never stops the others from being evaluated.
//!
//! Sizing rules also expose their required value as a plain number
//! (e.g. [`roadway::required_carriageway_width_m`]) and code defaults are
//! plain constants ([`kerbs::ROAD_KERB`], [`roadway::DESIGN_LIFE_YEARS`]).
//!
//! ## Modules
//!
//! - [`kerbs`] - Clauses 101.41, 109.8.1, 109.8.3
//! - [`roadway`] - Table 104.1.3.4, Clauses 104.3.1, 104.3.6, 105.3.3, 105.3.6, 105.3.10, 109.5
//! - [`railing`] - Clause 109.7.2.3
//!
//! The placement rule of Clause 105.2.1 lives in [`crate::cross_section`] and
//! the barrier shapes of Clause 109.6.3 in [`crate::barriers`].

pub mod kerbs;
pub mod railing;
pub mod roadway;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::record::DesignRecord;

pub use kerbs::{road_kerb_outline, safety_kerb_outline, safety_kerb_width, KerbOutline, SafetyKerbOutline};
pub use railing::railing_height;
pub use roadway::{
    bridge_length_single_curve, carriageway_width, design_life, footpath_clear_width,
    longitudinal_gradient, required_carriageway_width_m, skew_angle, wearing_coat,
};

/// Edition of the governing code
pub const CODE_EDITION: &str = "IRC 5:2015";

// ============================================================================
// Clause Identification
// ============================================================================

/// Clauses of IRC 5:2015 implemented by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClauseId {
    /// 101.41 - Safety kerb width where no footpath is provided
    SafetyKerbWidth,
    /// Table 104.1.3.4 - Assumed design life
    DesignLife,
    /// 104.3.1 - Width of carriageway
    CarriagewayWidth,
    /// 104.3.6 - Clear width of footpath
    FootpathWidth,
    /// 105.2.1 - Protection to users at the edges of the structure
    ProtectionToUser,
    /// 105.3.3 - Skew angle
    SkewAngle,
    /// 105.3.6 - Longitudinal gradient
    LongitudinalGradient,
    /// 105.3.10 - Bridge length on a single curve
    SingleCurveLength,
    /// 109.5 - Wearing coat
    WearingCoat,
    /// 109.6.3 - Shapes of crash barriers
    CrashBarrierShapes,
    /// 109.7.2.3 - Height of railings and parapets
    RailingHeight,
    /// 109.8.1 - Road kerb outline
    RoadKerbOutline,
    /// 109.8.3 - Safety kerb outline
    SafetyKerbOutline,
}

impl ClauseId {
    /// Clause or table number as printed in the code
    pub fn number(&self) -> &'static str {
        match self {
            ClauseId::SafetyKerbWidth => "101.41",
            ClauseId::DesignLife => "104.1.3.4",
            ClauseId::CarriagewayWidth => "104.3.1",
            ClauseId::FootpathWidth => "104.3.6",
            ClauseId::ProtectionToUser => "105.2.1",
            ClauseId::SkewAngle => "105.3.3",
            ClauseId::LongitudinalGradient => "105.3.6",
            ClauseId::SingleCurveLength => "105.3.10",
            ClauseId::WearingCoat => "109.5",
            ClauseId::CrashBarrierShapes => "109.6.3",
            ClauseId::RailingHeight => "109.7.2.3",
            ClauseId::RoadKerbOutline => "109.8.1",
            ClauseId::SafetyKerbOutline => "109.8.3",
        }
    }

    /// Short title of the clause
    pub fn title(&self) -> &'static str {
        match self {
            ClauseId::SafetyKerbWidth => "Safety kerb width",
            ClauseId::DesignLife => "Assumed design life",
            ClauseId::CarriagewayWidth => "Width of carriageway",
            ClauseId::FootpathWidth => "Clear width of footpath",
            ClauseId::ProtectionToUser => "Protection to user",
            ClauseId::SkewAngle => "Skew angle",
            ClauseId::LongitudinalGradient => "Longitudinal gradient",
            ClauseId::SingleCurveLength => "Bridge length on single curve",
            ClauseId::WearingCoat => "Wearing coat",
            ClauseId::CrashBarrierShapes => "Shapes of crash barriers",
            ClauseId::RailingHeight => "Railing height",
            ClauseId::RoadKerbOutline => "Road kerb outline",
            ClauseId::SafetyKerbOutline => "Safety kerb outline",
        }
    }

    /// Citation for reports, e.g. `"IRC 5:2015 Clause 101.41"`
    pub fn citation(&self) -> String {
        match self {
            ClauseId::DesignLife => format!("{} Table {}", CODE_EDITION, self.number()),
            _ => format!("{} Clause {}", CODE_EDITION, self.number()),
        }
    }

    /// Prefix for this clause's entries in a [`DesignRecord`], e.g. `clause_101_41`
    pub fn record_prefix(&self) -> String {
        format!("clause_{}", self.number().replace('.', "_"))
    }
}

impl std::fmt::Display for ClauseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.citation(), self.title())
    }
}

// ============================================================================
// Clause Result
// ============================================================================

/// Outcome of a clause check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClauseStatus {
    Compliant,
    NonCompliant,
    NotApplicable,
    MissingInput,
}

impl ClauseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ClauseStatus::Compliant => "Compliant",
            ClauseStatus::NonCompliant => "Non-compliant",
            ClauseStatus::NotApplicable => "Not applicable",
            ClauseStatus::MissingInput => "Missing input",
        }
    }
}

/// How the provided value is compared to the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Limit {
    /// provided ≥ threshold
    AtLeast,
    /// provided > threshold
    GreaterThan,
    /// provided ≤ threshold
    AtMost,
}

impl Limit {
    pub fn is_satisfied(&self, provided: f64, threshold: f64) -> bool {
        match self {
            Limit::AtLeast => provided >= threshold,
            Limit::GreaterThan => provided > threshold,
            Limit::AtMost => provided <= threshold,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Limit::AtLeast => ">=",
            Limit::GreaterThan => ">",
            Limit::AtMost => "<=",
        }
    }
}

/// Result of one clause check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "clause": "SafetyKerbWidth",
///   "status": "NonCompliant",
///   "applicable": true,
///   "is_compliant": false,
///   "limit": "AtLeast",
///   "threshold": 750.0,
///   "provided_value": 700.0,
///   "adopted_value": null,
///   "unit": "mm",
///   "remark": "Kerb width 700 mm is less than the 750 mm minimum required when no footpath is provided."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseResult {
    pub clause: ClauseId,
    pub status: ClauseStatus,
    /// Whether the clause governs this design
    pub applicable: bool,
    /// False only for `NonCompliant` and `MissingInput`
    pub is_compliant: bool,
    pub limit: Option<Limit>,
    /// Required minimum (maximum for [`Limit::AtMost`])
    pub threshold: Option<f64>,
    pub provided_value: Option<f64>,
    /// Value carried forward into the design, where the clause fixes one
    pub adopted_value: Option<f64>,
    pub unit: String,
    pub remark: String,
}

impl ClauseResult {
    /// Compare `provided` against `threshold` and build the verdict.
    pub fn check(
        clause: ClauseId,
        limit: Limit,
        threshold: f64,
        provided: f64,
        unit: &str,
        pass_remark: impl Into<String>,
        fail_remark: impl Into<String>,
    ) -> Self {
        let passes = limit.is_satisfied(provided, threshold);
        let (status, remark) = if passes {
            (ClauseStatus::Compliant, pass_remark.into())
        } else {
            (ClauseStatus::NonCompliant, fail_remark.into())
        };

        if !passes {
            warn!(
                clause = clause.number(),
                provided,
                threshold,
                "{}: {}",
                clause.citation(),
                remark
            );
        }

        ClauseResult {
            clause,
            status,
            applicable: true,
            is_compliant: passes,
            limit: Some(limit),
            threshold: Some(threshold),
            provided_value: Some(provided),
            adopted_value: None,
            unit: unit.to_string(),
            remark,
        }
    }

    /// The clause does not govern this design.
    pub fn not_applicable(clause: ClauseId, remark: impl Into<String>) -> Self {
        ClauseResult {
            clause,
            status: ClauseStatus::NotApplicable,
            applicable: false,
            is_compliant: true,
            limit: None,
            threshold: None,
            provided_value: None,
            adopted_value: None,
            unit: String::new(),
            remark: remark.into(),
        }
    }

    /// A categorical clause that passes without a numeric comparison.
    pub fn accepted(clause: ClauseId, remark: impl Into<String>) -> Self {
        ClauseResult {
            clause,
            status: ClauseStatus::Compliant,
            applicable: true,
            is_compliant: true,
            limit: None,
            threshold: None,
            provided_value: None,
            adopted_value: None,
            unit: String::new(),
            remark: remark.into(),
        }
    }

    /// A categorical clause that fails without a numeric comparison.
    pub fn rejected(clause: ClauseId, remark: impl Into<String>) -> Self {
        let remark = remark.into();
        warn!(clause = clause.number(), "{}: {}", clause.citation(), remark);
        ClauseResult {
            clause,
            status: ClauseStatus::NonCompliant,
            applicable: true,
            is_compliant: false,
            limit: None,
            threshold: None,
            provided_value: None,
            adopted_value: None,
            unit: String::new(),
            remark,
        }
    }

    /// The clause governs but the value to check is absent.
    pub fn missing_input(clause: ClauseId, limit: Option<Limit>, threshold: Option<f64>, unit: &str, remark: impl Into<String>) -> Self {
        let remark = remark.into();
        warn!(clause = clause.number(), "{}: {}", clause.citation(), remark);
        ClauseResult {
            clause,
            status: ClauseStatus::MissingInput,
            applicable: true,
            is_compliant: false,
            limit,
            threshold,
            provided_value: None,
            adopted_value: None,
            unit: unit.to_string(),
            remark,
        }
    }

    /// Attach the value the design adopts as a result of this clause.
    pub fn with_adopted(mut self, value: f64) -> Self {
        self.adopted_value = Some(value);
        self
    }

    pub fn is_non_compliant(&self) -> bool {
        self.status == ClauseStatus::NonCompliant
    }

    /// Write this verdict into `record` under the clause prefix.
    ///
    /// Absent optional values are not written.
    pub fn record_into(&self, record: &mut DesignRecord) {
        let prefix = self.clause.record_prefix();
        record.insert(format!("{}_status", prefix), self.status.label());
        record.insert(format!("{}_applicable", prefix), self.applicable);
        record.insert(format!("{}_is_compliant", prefix), self.is_compliant);
        record.insert(format!("{}_remark", prefix), self.remark.as_str());
        if let Some(t) = self.threshold {
            record.insert(format!("{}_threshold", prefix), t);
        }
        if let Some(p) = self.provided_value {
            record.insert(format!("{}_provided", prefix), p);
        }
        if let Some(a) = self.adopted_value {
            record.insert(format!("{}_adopted", prefix), a);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citations() {
        assert_eq!(ClauseId::SafetyKerbWidth.citation(), "IRC 5:2015 Clause 101.41");
        assert_eq!(ClauseId::DesignLife.citation(), "IRC 5:2015 Table 104.1.3.4");
        assert_eq!(ClauseId::RailingHeight.record_prefix(), "clause_109_7_2_3");
    }

    #[test]
    fn test_limit_boundaries() {
        assert!(Limit::AtLeast.is_satisfied(750.0, 750.0));
        assert!(!Limit::GreaterThan.is_satisfied(30.0, 30.0));
        assert!(Limit::AtMost.is_satisfied(30.0, 30.0));
        assert!(!Limit::AtMost.is_satisfied(30.1, 30.0));
    }

    #[test]
    fn test_check_builds_consistent_flags() {
        let fail = ClauseResult::check(ClauseId::FootpathWidth, Limit::AtLeast, 1.5, 1.2, "m", "ok", "too narrow");
        assert_eq!(fail.status, ClauseStatus::NonCompliant);
        assert!(fail.applicable);
        assert!(!fail.is_compliant);
        assert_eq!(fail.remark, "too narrow");

        let pass = ClauseResult::check(ClauseId::FootpathWidth, Limit::AtLeast, 1.5, 1.8, "m", "ok", "too narrow");
        assert_eq!(pass.status, ClauseStatus::Compliant);
        assert!(pass.is_compliant);
    }

    #[test]
    fn test_not_applicable_and_missing() {
        let na = ClauseResult::not_applicable(ClauseId::FootpathWidth, "no footpath");
        assert!(!na.applicable);
        assert!(na.is_compliant);

        let missing = ClauseResult::missing_input(ClauseId::FootpathWidth, Some(Limit::AtLeast), Some(1.5), "m", "width not given");
        assert_eq!(missing.status, ClauseStatus::MissingInput);
        assert!(!missing.is_compliant);
        assert!(!missing.is_non_compliant());
    }

    #[test]
    fn test_record_into() {
        let mut record = DesignRecord::new().with("crash_barrier_width", 550.0);
        ClauseResult::check(ClauseId::SafetyKerbWidth, Limit::AtLeast, 750.0, 700.0, "mm", "ok", "narrow")
            .record_into(&mut record);

        assert_eq!(record.text("clause_101_41_status"), Some("Non-compliant"));
        assert_eq!(record.flag("clause_101_41_is_compliant"), Some(false));
        assert_eq!(record.number("clause_101_41_threshold"), Some(750.0));
        assert_eq!(record.number("clause_101_41_provided"), Some(700.0));
        assert!(!record.contains_key("clause_101_41_adopted"));
        assert_eq!(record.number("crash_barrier_width"), Some(550.0));
    }
}
