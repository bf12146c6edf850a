//! Rigid (concrete) crash barriers, Clause 109.6.3.
//!
//! ```text
//!        top notch
//!        ┌──┐
//!        │  │ ← radius 1
//!        │   \   middle length
//!        │    \
//!        │     │ ← radius 2
//!        │     │ base notch
//!        └─────┘
//!         width
//! ```
//!
//! Only the profile dimensions are fixed here; no area is computed for
//! rigid barriers.

use serde::{Deserialize, Serialize};

use crate::clauses::{railing_height, ClauseResult};
use crate::errors::{CalcError, CalcResult};
use crate::record::DesignRecord;
use crate::selectors::{CrashBarrierSubtype, RailingMaterial};

/// Rigid barrier profile (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidProfile {
    pub height: f64,
    pub width: f64,
    pub radius1: f64,
    pub radius2: f64,
    pub top_notch: f64,
    pub base_notch: f64,
    pub middle_length: f64,
}

/// IRC-5R barrier at an edge without footpath
pub const IRC_5R_PROFILE: RigidProfile = RigidProfile {
    height: 1100.0,
    width: 450.0,
    radius1: 50.0,
    radius2: 250.0,
    top_notch: 175.0,
    base_notch: 100.0,
    middle_length: 750.0,
};

/// High containment barrier at an edge without footpath
pub const HIGH_CONTAINMENT_PROFILE: RigidProfile = RigidProfile {
    height: 1550.0,
    width: 525.0,
    radius1: 50.0,
    radius2: 250.0,
    top_notch: 250.0,
    base_notch: 100.0,
    middle_length: 1200.0,
};

/// Barrier between carriageway and footpath, topped by a railing
pub const WITH_RAILING_PROFILE: RigidProfile = RigidProfile {
    height: 900.0,
    width: 450.0,
    radius1: 50.0,
    radius2: 250.0,
    top_notch: 175.0,
    base_notch: 100.0,
    middle_length: 550.0,
};

impl RigidProfile {
    pub fn to_record(&self) -> DesignRecord {
        DesignRecord::new()
            .with("crash_barrier_height", self.height)
            .with("crash_barrier_width", self.width)
            .with("crash_barrier_radius1", self.radius1)
            .with("crash_barrier_radius2", self.radius2)
            .with("crash_barrier_top_notch", self.top_notch)
            .with("crash_barrier_base_notch", self.base_notch)
            .with("crash_barrier_middle_length", self.middle_length)
    }
}

/// Rigid barrier at an edge without footpath
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidEdgeGeometry {
    /// IRC-5R or High Containment
    pub containment: CrashBarrierSubtype,
    pub profile: RigidProfile,
}

impl RigidEdgeGeometry {
    pub fn to_record(&self) -> DesignRecord {
        self.profile
            .to_record()
            .with("crash_barrier_variant", "Rigid")
            .with("crash_barrier_containment", self.containment.label())
    }
}

/// Profile for a rigid containment level.
pub fn rigid_edge_barrier(containment: CrashBarrierSubtype) -> CalcResult<RigidEdgeGeometry> {
    let profile = match containment {
        CrashBarrierSubtype::Irc5R => IRC_5R_PROFILE,
        CrashBarrierSubtype::HighContainment => HIGH_CONTAINMENT_PROFILE,
        other => {
            return Err(CalcError::unhandled_variant(
                format!("barrier=Rigid, subtype={}", other),
                "rigid barriers take a containment level",
            ))
        }
    };
    Ok(RigidEdgeGeometry { containment, profile })
}

/// Railing width on a rigid barrier (mm)
pub fn railing_width_mm(material: RailingMaterial) -> f64 {
    match material {
        RailingMaterial::Rcc => 275.0,
        RailingMaterial::Steel => 200.0,
    }
}

/// Rigid barrier with railing where a footpath is provided
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidRailingGeometry {
    pub profile: RigidProfile,
    pub railing_material: RailingMaterial,
    pub railing_width_mm: f64,
    /// Height adopted under Clause 109.7.2.3
    pub railing_height_mm: f64,
    pub railing_check: ClauseResult,
}

impl RigidRailingGeometry {
    pub fn to_record(&self) -> DesignRecord {
        self.profile
            .to_record()
            .with("crash_barrier_variant", "Rigid with railing")
            .with("railing_type", self.railing_material.label())
            .with("railing_width", self.railing_width_mm)
            .with("railing_height", self.railing_height_mm)
            .with("railing_height_status", self.railing_check.status.label())
    }
}

/// Build the rigid barrier with railing.
///
/// The railing height is settled by Clause 109.7.2.3: a short or missing
/// height is raised to the 1100 mm minimum and the verdict is kept with
/// the geometry.
pub fn rigid_barrier_with_railing(material: RailingMaterial, railing_height_mm: Option<f64>) -> CalcResult<RigidRailingGeometry> {
    let railing_check = railing_height(railing_height_mm)?;
    let adopted = railing_check
        .adopted_value
        .ok_or_else(|| CalcError::missing_input("railing_height_mm"))?;

    Ok(RigidRailingGeometry {
        profile: WITH_RAILING_PROFILE,
        railing_material: material,
        railing_width_mm: railing_width_mm(material),
        railing_height_mm: adopted,
        railing_check,
    })
}
