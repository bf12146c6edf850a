//! # Design Session
//!
//! One evaluation of a bridge cross-section. The session owns its
//! [`DesignRecord`], its [`CrossSectionLayout`] and the clause verdicts;
//! nothing is shared between sessions, so independent sessions can run in
//! parallel.
//!
//! ## Structure
//!
//! ```text
//! DesignSession
//! ├── meta: SessionMetadata (id, engineer, job, bridge, code, created)
//! ├── record: DesignRecord (geometry, loads, verdict keys)
//! ├── layout: CrossSectionLayout
//! ├── clauses: Vec<ClauseResult>
//! └── geometry: Option<GeometryOutcome>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::input::DesignInput;
//! use bridge_core::session::DesignSession;
//!
//! let session = DesignSession::evaluate(&DesignInput::sample()).unwrap();
//! assert_eq!(session.record.number("design_life_years"), Some(100.0));
//! assert!(session.layout.is_normalized());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::barriers::{GeometryOutcome, Variant};
use crate::clauses::{
    self, kerbs::SAFETY_KERB_MIN_WIDTH_MM, roadway, ClauseId, ClauseResult, ClauseStatus, Limit, CODE_EDITION,
};
use crate::cross_section::{CrossSectionLayout, SectionElement};
use crate::errors::CalcResult;
use crate::input::DesignInput;
use crate::record::DesignRecord;

/// Who ran the session, on what, and under which code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMetadata {
    pub id: Uuid,
    pub engineer: String,
    pub job_id: String,
    pub bridge_name: String,
    /// Governing code edition
    pub code: String,
    pub created: DateTime<Utc>,
}

impl SessionMetadata {
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, bridge_name: impl Into<String>) -> Self {
        SessionMetadata {
            id: Uuid::new_v4(),
            engineer: engineer.into(),
            job_id: job_id.into(),
            bridge_name: bridge_name.into(),
            code: CODE_EDITION.to_string(),
            created: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignSession {
    pub meta: SessionMetadata,
    pub record: DesignRecord,
    pub layout: CrossSectionLayout,
    pub clauses: Vec<ClauseResult>,
    pub geometry: Option<GeometryOutcome>,
}

impl DesignSession {
    /// Start an empty session.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bridge_core::session::DesignSession;
    ///
    /// let session = DesignSession::new("A. Engineer", "BR-017", "Canal crossing");
    /// assert_eq!(session.meta.code, "IRC 5:2015");
    /// assert!(session.record.is_empty());
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, bridge_name: impl Into<String>) -> Self {
        DesignSession {
            meta: SessionMetadata::new(engineer, job_id, bridge_name),
            record: DesignRecord::new(),
            layout: CrossSectionLayout::default(),
            clauses: Vec::new(),
            geometry: None,
        }
    }

    pub fn with_layout(mut self, layout: CrossSectionLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Separate carriageways from footpaths and cycle tracks in the owned
    /// layout and record Clause 105.2.1. Returns the number of barriers inserted.
    pub fn normalize_layout(&mut self) -> usize {
        let inserted = self.layout.normalize_in_place();
        let result = self.layout.protection_to_user(inserted);
        self.record_clause(result);
        inserted
    }

    /// Keep a clause verdict and write its keys under the clause prefix.
    ///
    /// Re-recording a clause replaces the earlier verdict.
    pub fn record_clause(&mut self, result: ClauseResult) {
        result.record_into(&mut self.record);
        self.clauses.retain(|c| c.clause != result.clause);
        self.clauses.push(result);
    }

    /// Merge a geometry outcome into the record and keep it.
    ///
    /// A not-applicable outcome writes only its `<namespace>_status` marker.
    /// Returns whether a geometry was built.
    pub fn apply_geometry(&mut self, outcome: GeometryOutcome) -> bool {
        self.record.merge(&outcome.to_record());
        let shapes = ClauseId::CrashBarrierShapes;
        let result = match &outcome {
            GeometryOutcome::Built(geometry) => ClauseResult::accepted(
                shapes,
                format!("{} geometry built per {}.", geometry.namespace(), shapes.citation()),
            ),
            GeometryOutcome::NotApplicable { selection, reason, .. } => {
                ClauseResult::not_applicable(shapes, format!("No shape for {}: {}.", selection, reason))
            }
        };
        self.record_clause(result);

        let applicable = outcome.is_applicable();
        self.geometry = Some(outcome);
        applicable
    }

    /// Merge design life and the road and safety kerb outlines.
    pub fn apply_code_defaults(&mut self) -> CalcResult<()> {
        self.record.merge(&clauses::design_life().to_record());
        self.record.merge(&clauses::road_kerb_outline());
        self.record.merge(&clauses::safety_kerb_outline()?);
        Ok(())
    }

    pub fn clause(&self, id: ClauseId) -> Option<&ClauseResult> {
        self.clauses.iter().find(|c| c.clause == id)
    }

    /// Verdicts that failed their limit
    pub fn non_compliant(&self) -> Vec<&ClauseResult> {
        self.clauses.iter().filter(|c| c.is_non_compliant()).collect()
    }

    /// Verdicts whose input was not supplied
    pub fn missing_inputs(&self) -> Vec<&ClauseResult> {
        self.clauses
            .iter()
            .filter(|c| c.status == ClauseStatus::MissingInput)
            .collect()
    }

    /// Run the whole evaluation for one input document.
    ///
    /// Order: normalize the layout, check every clause, merge code
    /// defaults, then build the selected barrier or median. A failing
    /// clause never stops the rest; only invalid dimensions are errors.
    pub fn evaluate(input: &DesignInput) -> CalcResult<Self> {
        let mut session = DesignSession::new(&input.engineer, &input.job_id, &input.bridge_name)
            .with_layout(input.cross_section.clone());
        debug!(session = %session.meta.id, bridge = %input.bridge_name, "evaluating design");

        let inserted = session.normalize_layout();
        debug!(inserted, layout = %session.layout, "layout normalized");

        for result in clause_checks(input)? {
            session.record_clause(result);
        }
        session.apply_code_defaults()?;

        let outcome = input.selection.build(input.railing_height_mm)?;
        session.apply_geometry(outcome);

        Ok(session)
    }
}

/// Clause checks driven by the numeric and categorical inputs
fn clause_checks(input: &DesignInput) -> CalcResult<Vec<ClauseResult>> {
    let footpath = input.footpath();

    let safety_kerb = match input.kerb_width_mm {
        Some(width) => clauses::safety_kerb_width(width, footpath)?,
        None if footpath.is_present() => ClauseResult::not_applicable(
            ClauseId::SafetyKerbWidth,
            format!("Footpath provided ({}); kerb is not a safety kerb.", footpath),
        ),
        None => missing(ClauseId::SafetyKerbWidth, Limit::AtLeast, Some(SAFETY_KERB_MIN_WIDTH_MM), "mm", "kerb width"),
    };

    let carriageway = match (input.carriageway_width_m, input.num_lanes) {
        (Some(width), Some(lanes)) => clauses::carriageway_width(width, lanes)?,
        (None, Some(lanes)) => missing(
            ClauseId::CarriagewayWidth,
            Limit::AtLeast,
            Some(clauses::required_carriageway_width_m(lanes)?),
            "m",
            "carriageway width",
        ),
        (_, None) => missing(ClauseId::CarriagewayWidth, Limit::AtLeast, None, "m", "number of lanes"),
    };

    let skew = match input.skew_angle_deg {
        Some(deg) => clauses::skew_angle(deg)?,
        None => missing(ClauseId::SkewAngle, Limit::GreaterThan, Some(roadway::SKEW_ANGLE_THRESHOLD_DEG), "deg", "skew angle"),
    };

    let gradient = match input.longitudinal_gradient_percent {
        Some(g) => clauses::longitudinal_gradient(g)?,
        None => missing(
            ClauseId::LongitudinalGradient,
            Limit::AtLeast,
            Some(roadway::MIN_LONGITUDINAL_GRADIENT_PERCENT),
            "%",
            "longitudinal gradient",
        ),
    };

    let curve = match input.bridge_length_m {
        Some(len) => clauses::bridge_length_single_curve(len)?,
        None => missing(
            ClauseId::SingleCurveLength,
            Limit::AtMost,
            Some(roadway::MAX_SINGLE_CURVE_LENGTH_M),
            "m",
            "bridge length",
        ),
    };

    let railing = if railing_present(input) {
        clauses::railing_height(input.railing_height_mm)?
    } else {
        ClauseResult::not_applicable(ClauseId::RailingHeight, "No railing in the cross-section.")
    };

    Ok(vec![
        safety_kerb,
        carriageway,
        clauses::footpath_clear_width(footpath, input.footpath_clear_width_m)?,
        skew,
        gradient,
        curve,
        clauses::wearing_coat(input.wearing_coat),
        railing,
    ])
}

/// A railing runs along the deck, or the selected barrier carries one.
fn railing_present(input: &DesignInput) -> bool {
    input.cross_section.contains(SectionElement::Railing)
        || matches!(input.selection.resolve(), Ok(Variant::RigidWithRailing(_)))
}

fn missing(clause: ClauseId, limit: Limit, threshold: Option<f64>, unit: &str, what: &str) -> ClauseResult {
    ClauseResult::missing_input(clause, Some(limit), threshold, unit, format!("No {} given.", what))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barriers::VariantSelection;
    use crate::selectors::{BarrierType, FootpathPresence, MedianType};

    #[test]
    fn test_new_session() {
        let a = DesignSession::new("Eng", "J-1", "Bridge");
        let b = DesignSession::new("Eng", "J-1", "Bridge");
        assert_ne!(a.meta.id, b.meta.id);
        assert_eq!(a.meta.code, CODE_EDITION);
        assert!(a.clauses.is_empty());
        assert!(a.geometry.is_none());
    }

    #[test]
    fn test_normalize_layout_records_protection() {
        let layout = CrossSectionLayout::from_labels(["Railing", "Footpath", "Carriageway", "Cycle Track", "Railing"]).unwrap();
        let mut session = DesignSession::new("", "", "").with_layout(layout);

        assert_eq!(session.normalize_layout(), 2);
        assert_eq!(session.layout.len(), 7);
        let protection = session.clause(ClauseId::ProtectionToUser).unwrap();
        assert_eq!(protection.status, ClauseStatus::Compliant);
        assert_eq!(session.record.text("clause_105_2_1_status"), Some("Compliant"));

        // second pass inserts nothing and keeps one verdict
        assert_eq!(session.normalize_layout(), 0);
        assert_eq!(session.clauses.len(), 1);
    }

    #[test]
    fn test_record_clause_replaces() {
        let mut session = DesignSession::new("", "", "");
        session.record_clause(clauses::railing_height(Some(900.0)).unwrap());
        session.record_clause(clauses::railing_height(Some(1200.0)).unwrap());
        assert_eq!(session.clauses.len(), 1);
        assert!(session.non_compliant().is_empty());
        assert_eq!(session.record.number("clause_109_7_2_3_provided"), Some(1200.0));
    }

    #[test]
    fn test_apply_not_applicable_geometry() {
        let mut session = DesignSession::new("", "", "");
        let selection = VariantSelection {
            barrier_type: BarrierType::Metallic,
            median_type: Some(MedianType::RaisedKerb),
            ..Default::default()
        };
        let applied = session.apply_geometry(selection.build(None).unwrap());

        assert!(!applied);
        assert_eq!(session.record.keys_with_prefix("crash_barrier_").count(), 1);
        assert_eq!(session.record.keys_with_prefix("median_").count(), 0);
        assert_eq!(
            session.clause(ClauseId::CrashBarrierShapes).map(|c| c.status),
            Some(ClauseStatus::NotApplicable)
        );
    }

    #[test]
    fn test_evaluate_sample() {
        let session = DesignSession::evaluate(&DesignInput::sample()).unwrap();

        // Footpath next to carriageway gets a barrier
        assert_eq!(session.layout.barrier_count(), 1);

        // 1000 mm railing is raised to 1100 mm and flagged
        assert_eq!(session.record.number("railing_height"), Some(1100.0));
        let failing: Vec<ClauseId> = session.non_compliant().iter().map(|c| c.clause).collect();
        assert_eq!(failing, vec![ClauseId::RailingHeight]);

        // Falling gradient of 0.5 % drains
        assert!(session.clause(ClauseId::LongitudinalGradient).unwrap().is_compliant);
        assert_eq!(
            session.clause(ClauseId::SafetyKerbWidth).unwrap().status,
            ClauseStatus::NotApplicable
        );

        assert_eq!(session.record.text("crash_barrier_status"), Some("Applicable"));
        assert_eq!(session.record.number("safety_kerb_width"), Some(750.0));
        assert_eq!(session.record.number("road_kerb_width"), Some(225.0));
    }

    #[test]
    fn test_evaluate_continues_past_failures() {
        let input = DesignInput {
            selection: VariantSelection {
                median_type: Some(MedianType::RccCrashBarrier),
                ..Default::default()
            },
            kerb_width_mm: Some(700.0),
            carriageway_width_m: Some(7.0),
            num_lanes: Some(2),
            skew_angle_deg: Some(20.0),
            ..Default::default()
        };
        let session = DesignSession::evaluate(&input).unwrap();

        let failing: Vec<ClauseId> = session.non_compliant().iter().map(|c| c.clause).collect();
        assert!(failing.contains(&ClauseId::SafetyKerbWidth));
        assert!(failing.contains(&ClauseId::CarriagewayWidth));
        assert!(failing.contains(&ClauseId::SkewAngle));

        let missing: Vec<ClauseId> = session.missing_inputs().iter().map(|c| c.clause).collect();
        assert!(missing.contains(&ClauseId::LongitudinalGradient));
        assert!(missing.contains(&ClauseId::WearingCoat));
        assert!(!missing.contains(&ClauseId::RailingHeight));

        assert_eq!(session.record.text("median_status"), Some("Applicable"));
        assert!(session.record.number("median_load_kNm").is_some());
    }

    #[test]
    fn test_railing_height_needs_a_railing() {
        let input = DesignInput {
            selection: VariantSelection {
                median_type: Some(MedianType::RaisedKerb),
                ..Default::default()
            },
            cross_section: CrossSectionLayout::from_labels([
                "Safety Kerb",
                "Carriageway",
                "Median",
                "Carriageway",
                "Safety Kerb",
            ])
            .unwrap(),
            ..Default::default()
        };
        let session = DesignSession::evaluate(&input).unwrap();

        let railing = session.clause(ClauseId::RailingHeight).unwrap();
        assert_eq!(railing.status, ClauseStatus::NotApplicable);
        assert_eq!(railing.adopted_value, None);
        assert!(!session.record.contains_key("clause_109_7_2_3_adopted"));
        assert!(session.missing_inputs().iter().all(|c| c.clause != ClauseId::RailingHeight));
    }

    #[test]
    fn test_railing_height_checked_for_railed_layout_or_barrier() {
        let railed = DesignInput {
            cross_section: CrossSectionLayout::from_labels(["Railing", "Carriageway", "Railing"]).unwrap(),
            ..Default::default()
        };
        let r = DesignSession::evaluate(&railed).unwrap();
        assert_eq!(r.clause(ClauseId::RailingHeight).unwrap().status, ClauseStatus::MissingInput);

        // rigid barrier with railing, no railing element in the layout
        let barrier = DesignInput {
            selection: VariantSelection {
                barrier_type: BarrierType::Rigid,
                footpath: FootpathPresence::SingleSide,
                railing_material: Some(crate::selectors::RailingMaterial::Rcc),
                ..Default::default()
            },
            railing_height_mm: Some(1000.0),
            ..Default::default()
        };
        let b = DesignSession::evaluate(&barrier).unwrap();
        assert!(b.clause(ClauseId::RailingHeight).unwrap().is_non_compliant());
    }

    #[test]
    fn test_evaluate_rejects_bad_dimension() {
        let input = DesignInput {
            kerb_width_mm: Some(-5.0),
            selection: VariantSelection {
                footpath: FootpathPresence::None,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(DesignSession::evaluate(&input).is_err());
    }

    #[test]
    fn test_carriageway_missing_width_keeps_requirement() {
        let input = DesignInput {
            num_lanes: Some(4),
            ..Default::default()
        };
        let checks = clause_checks(&input).unwrap();
        let carriageway = checks.iter().find(|c| c.clause == ClauseId::CarriagewayWidth).unwrap();
        assert_eq!(carriageway.status, ClauseStatus::MissingInput);
        assert_eq!(carriageway.threshold, Some(14.5));
    }
}
