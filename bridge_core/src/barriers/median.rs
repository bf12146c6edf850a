//! Concrete medians of IRC 5:2015 Fig. 5(a) and 5(b).

use serde::{Deserialize, Serialize};

use super::metallic::MEDIAN_WIDTH_MM;
use super::{TrapezoidSection, BARRIER_KERB, LOAD_DECIMALS};
use crate::equations::section::round_to;
use crate::errors::CalcResult;
use crate::materials::rcc_load_from_area;
use crate::record::DesignRecord;

/// RCC barrier above a median kerb, Fig. 5(b); same profile as the edge RCC barrier
pub const MEDIAN_RCC_BARRIER: TrapezoidSection = TrapezoidSection {
    top_width: 175.0,
    bottom_width: 450.0,
    height: 900.0,
};

/// Fig. 5(a) median with raised kerb
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedianKerbGeometry {
    pub width_mm: f64,
    pub kerb: TrapezoidSection,
    pub kerb_area_mm2: f64,
    pub kerb_load_kn_m: f64,
    pub total_load_kn_m: f64,
}

impl MedianKerbGeometry {
    pub fn to_record(&self) -> DesignRecord {
        DesignRecord::new()
            .with("median_type", "Raised Kerb")
            .with("median_width_mm", self.width_mm)
            .with("median_height_mm", self.kerb.height)
            .with("median_kerb_height_mm", self.kerb.height)
            .with("median_kerb_top_width_mm", self.kerb.top_width)
            .with("median_kerb_bottom_width_mm", self.kerb.bottom_width)
            .with("median_kerb_area_mm2", round_to(self.kerb_area_mm2, 1))
            .with("median_kerb_load_kNm", round_to(self.kerb_load_kn_m, LOAD_DECIMALS))
            .with("median_load_kNm", self.total_load_kn_m)
    }
}

/// Build the raised-kerb median (minimum width 1200 mm).
pub fn median_raised_kerb() -> CalcResult<MedianKerbGeometry> {
    let kerb_area_mm2 = BARRIER_KERB.area_mm2()?;
    let kerb_load_kn_m = rcc_load_from_area(kerb_area_mm2)?;
    Ok(MedianKerbGeometry {
        width_mm: MEDIAN_WIDTH_MM,
        kerb: BARRIER_KERB,
        kerb_area_mm2,
        kerb_load_kn_m,
        total_load_kn_m: round_to(kerb_load_kn_m, LOAD_DECIMALS),
    })
}

/// Fig. 5(b) median with RCC crash barrier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedianRccGeometry {
    pub width_mm: f64,
    /// Barrier plus kerb
    pub height_mm: f64,
    pub barrier: TrapezoidSection,
    pub kerb: TrapezoidSection,
    pub barrier_area_mm2: f64,
    pub kerb_area_mm2: f64,
    pub barrier_load_kn_m: f64,
    pub kerb_load_kn_m: f64,
    pub total_load_kn_m: f64,
}

impl MedianRccGeometry {
    pub fn to_record(&self) -> DesignRecord {
        DesignRecord::new()
            .with("median_type", "RCC Crash Barrier")
            .with("median_width_mm", self.width_mm)
            .with("median_height_mm", self.height_mm)
            .with("median_rcc_barrier_height_mm", self.barrier.height)
            .with("median_rcc_barrier_top_width_mm", self.barrier.top_width)
            .with("median_rcc_barrier_bottom_width_mm", self.barrier.bottom_width)
            .with("median_rcc_barrier_area_mm2", round_to(self.barrier_area_mm2, 1))
            .with("median_rcc_barrier_load_kNm", round_to(self.barrier_load_kn_m, LOAD_DECIMALS))
            .with("median_kerb_height_mm", self.kerb.height)
            .with("median_kerb_top_width_mm", self.kerb.top_width)
            .with("median_kerb_bottom_width_mm", self.kerb.bottom_width)
            .with("median_kerb_area_mm2", round_to(self.kerb_area_mm2, 1))
            .with("median_kerb_load_kNm", round_to(self.kerb_load_kn_m, LOAD_DECIMALS))
            .with("median_load_kNm", self.total_load_kn_m)
    }
}

/// Build the RCC crash barrier median.
pub fn median_rcc_barrier() -> CalcResult<MedianRccGeometry> {
    let barrier_area_mm2 = MEDIAN_RCC_BARRIER.area_mm2()?;
    let kerb_area_mm2 = BARRIER_KERB.area_mm2()?;
    let barrier_load_kn_m = rcc_load_from_area(barrier_area_mm2)?;
    let kerb_load_kn_m = rcc_load_from_area(kerb_area_mm2)?;

    Ok(MedianRccGeometry {
        width_mm: MEDIAN_WIDTH_MM,
        height_mm: MEDIAN_RCC_BARRIER.height + BARRIER_KERB.height,
        barrier: MEDIAN_RCC_BARRIER,
        kerb: BARRIER_KERB,
        barrier_area_mm2,
        kerb_area_mm2,
        barrier_load_kn_m,
        kerb_load_kn_m,
        total_load_kn_m: round_to(barrier_load_kn_m + kerb_load_kn_m, LOAD_DECIMALS),
    })
}
