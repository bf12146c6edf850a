//! Metallic crash barriers: W-beam rails on ISMC 150 posts over an RCC kerb.
//!
//! ```text
//!   ┌─┐  ═══ W-beam (3 mm, 750 mm developed)
//!   │ │  ═══ second rail for Double W-beam
//!   │ │ post + spacer: ISMC 150, 950 + 330 mm, at 1.0 m centers
//!  ┌┴─┴──────┐
//!  └─────────┘ RCC kerb 500/550 × 100
//! ```
//!
//! Steel is smeared over the post spacing so that post and rail areas add
//! to one equivalent steel area per meter run.

use serde::{Deserialize, Serialize};

use super::{BARRIER_KERB, LOAD_DECIMALS};
use crate::equations::section::round_to;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{rcc_load_from_area, steel_load_from_area};
use crate::record::DesignRecord;
use crate::selectors::CrashBarrierSubtype;
use crate::units::{Meters, Millimeters};

/// Cross-sectional area of ISMC 150 (mm²), SP 6
pub const ISMC_150_AREA_MM2: f64 = 2088.0;

/// Post height above kerb (mm)
pub const POST_HEIGHT_MM: f64 = 950.0;

/// Spacer height (mm)
pub const SPACER_HEIGHT_MM: f64 = 330.0;

/// Post spacing (mm)
pub const POST_SPACING_MM: f64 = 1000.0;

/// W-beam thickness (mm), IRC 119
pub const W_BEAM_THICKNESS_MM: f64 = 3.0;

/// W-beam developed length (mm), IRC 119
pub const W_BEAM_DEVELOPED_LENGTH_MM: f64 = 750.0;

/// Edge barrier overall width from the kerb (mm)
pub const EDGE_WIDTH_MM: f64 = 550.0;

/// Median width, metallic or RCC (mm)
pub const MEDIAN_WIDTH_MM: f64 = 1200.0;

/// Steel post height plus RCC kerb (mm)
pub const METALLIC_TOTAL_HEIGHT_MM: f64 = POST_HEIGHT_MM + 100.0;

/// Post and spacer steel smeared over one post spacing (mm² per meter run).
///
/// ISMC 150 × (950 + 330) / 1000 = 2672.64 mm²
pub fn post_and_spacer_area_mm2() -> f64 {
    ISMC_150_AREA_MM2 * (POST_HEIGHT_MM + SPACER_HEIGHT_MM) / POST_SPACING_MM
}

/// W-beam rail area for `beam_count` rails (mm²)
pub fn w_beam_area_mm2(beam_count: u8) -> f64 {
    f64::from(beam_count) * W_BEAM_THICKNESS_MM * W_BEAM_DEVELOPED_LENGTH_MM
}

/// Fig. 4 metallic crash barrier at the deck edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetallicBarrierGeometry {
    pub beam: CrashBarrierSubtype,
    pub width_mm: f64,
    pub height_mm: f64,
    pub post_spacing_m: f64,
    pub post_area_mm2: f64,
    pub w_beam_area_mm2: f64,
    /// Post + spacer + W-beam
    pub steel_area_mm2: f64,
    pub kerb_area_mm2: f64,
    pub steel_load_kn_m: f64,
    pub kerb_load_kn_m: f64,
    /// Steel + kerb load, rounded to 3 places
    pub total_load_kn_m: f64,
}

impl MetallicBarrierGeometry {
    pub fn to_record(&self) -> DesignRecord {
        DesignRecord::new()
            .with("crash_barrier_variant", "Edge metallic")
            .with("crash_barrier_beam", self.beam.label())
            .with("crash_barrier_width", self.width_mm)
            .with("crash_barrier_height", self.height_mm)
            .with("crash_barrier_post_spacing_m", self.post_spacing_m)
            .with("crash_barrier_post_area_mm2", round_to(self.post_area_mm2, 2))
            .with("crash_barrier_w_beam_area_mm2", self.w_beam_area_mm2)
            .with("crash_barrier_steel_area_mm2", round_to(self.steel_area_mm2, 1))
            .with("crash_barrier_kerb_area_mm2", round_to(self.kerb_area_mm2, 1))
            .with("crash_barrier_steel_load_kNm", round_to(self.steel_load_kn_m, LOAD_DECIMALS))
            .with("crash_barrier_kerb_load_kNm", round_to(self.kerb_load_kn_m, LOAD_DECIMALS))
            .with("crash_barrier_load_kNm", self.total_load_kn_m)
    }
}

/// Build the edge metallic barrier for a W-beam sub-type.
///
/// # Example
/// ```rust
/// use bridge_core::barriers::metallic::edge_metallic_barrier;
/// use bridge_core::selectors::CrashBarrierSubtype;
///
/// let g = edge_metallic_barrier(CrashBarrierSubtype::SingleWBeam).unwrap();
/// assert!((g.steel_area_mm2 - 4922.64).abs() < 1e-9);
/// ```
pub fn edge_metallic_barrier(beam: CrashBarrierSubtype) -> CalcResult<MetallicBarrierGeometry> {
    if beam.beam_count() == 0 {
        return Err(CalcError::unhandled_variant(
            format!("barrier=Metallic, subtype={}", beam),
            "metallic barriers take a W-beam sub-type",
        ));
    }

    let post_area_mm2 = post_and_spacer_area_mm2();
    let w_beam_area_mm2 = w_beam_area_mm2(beam.beam_count());
    let steel_area_mm2 = post_area_mm2 + w_beam_area_mm2;
    let kerb_area_mm2 = BARRIER_KERB.area_mm2()?;

    let steel_load_kn_m = steel_load_from_area(steel_area_mm2)?;
    let kerb_load_kn_m = rcc_load_from_area(kerb_area_mm2)?;

    Ok(MetallicBarrierGeometry {
        beam,
        width_mm: EDGE_WIDTH_MM,
        height_mm: METALLIC_TOTAL_HEIGHT_MM,
        post_spacing_m: Meters::from(Millimeters(POST_SPACING_MM)).value(),
        post_area_mm2,
        w_beam_area_mm2,
        steel_area_mm2,
        kerb_area_mm2,
        steel_load_kn_m,
        kerb_load_kn_m,
        total_load_kn_m: round_to(steel_load_kn_m + kerb_load_kn_m, LOAD_DECIMALS),
    })
}

/// Fig. 5(c) median with metallic crash barrier (single W-beam)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedianMetallicGeometry {
    pub width_mm: f64,
    pub height_mm: f64,
    pub steel_area_mm2: f64,
    pub kerb_area_mm2: f64,
    pub steel_load_kn_m: f64,
    pub kerb_load_kn_m: f64,
    pub total_load_kn_m: f64,
}

impl MedianMetallicGeometry {
    pub fn to_record(&self) -> DesignRecord {
        DesignRecord::new()
            .with("median_type", "Metallic Crash Barrier")
            .with("median_width_mm", self.width_mm)
            .with("median_height_mm", self.height_mm)
            .with("median_steel_area_mm2", round_to(self.steel_area_mm2, 1))
            .with("median_kerb_area_mm2", round_to(self.kerb_area_mm2, 1))
            .with("median_steel_load_kNm", round_to(self.steel_load_kn_m, LOAD_DECIMALS))
            .with("median_kerb_load_kNm", round_to(self.kerb_load_kn_m, LOAD_DECIMALS))
            .with("median_load_kNm", self.total_load_kn_m)
    }
}

/// Build the median metallic barrier; the median always carries one W-beam.
pub fn median_metallic_barrier() -> CalcResult<MedianMetallicGeometry> {
    let steel_area_mm2 = post_and_spacer_area_mm2() + w_beam_area_mm2(1);
    let kerb_area_mm2 = BARRIER_KERB.area_mm2()?;
    let steel_load_kn_m = steel_load_from_area(steel_area_mm2)?;
    let kerb_load_kn_m = rcc_load_from_area(kerb_area_mm2)?;

    Ok(MedianMetallicGeometry {
        width_mm: MEDIAN_WIDTH_MM,
        height_mm: METALLIC_TOTAL_HEIGHT_MM,
        steel_area_mm2,
        kerb_area_mm2,
        steel_load_kn_m,
        kerb_load_kn_m,
        total_load_kn_m: round_to(steel_load_kn_m + kerb_load_kn_m, LOAD_DECIMALS),
    })
}
