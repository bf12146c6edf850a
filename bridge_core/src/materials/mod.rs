//! # Material Load Converter
//!
//! Converts a cross-sectional area into a self-weight line load using the
//! unit weights of IRC 6. Only two materials appear in the barrier and
//! median profiles of IRC 5:2015: structural steel and reinforced concrete.
//!
//! The unit weights are fixed constants defined once here. Callers use the
//! bound converters ([`steel_load_from_area`], [`rcc_load_from_area`]) so a
//! steel area can never be priced at concrete density by accident.
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::materials::{rcc_load_from_area, steel_load_from_area};
//!
//! // 500/550 × 100 RCC kerb = 52 500 mm²
//! let kerb = rcc_load_from_area(52_500.0).unwrap();
//! assert!((kerb - 1.3125).abs() < 1e-12);
//!
//! let steel = steel_load_from_area(4922.64).unwrap();
//! assert!((steel - 0.38396592).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_dimension, CalcResult};
use crate::units::{KnPerCubicMeter, KnPerMeter, SquareMillimeters};

/// Unit weight of structural steel (kN/m³), IRC 6
pub const STEEL_UNIT_WEIGHT_KN_M3: f64 = 78.0;

/// Unit weight of reinforced cement concrete (kN/m³), IRC 6
pub const RCC_UNIT_WEIGHT_KN_M3: f64 = 25.0;

/// Materials whose self-weight is derived from a profile area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    /// Structural steel (posts, spacers, W-beams)
    Steel,
    /// Reinforced cement concrete (kerbs, rigid barriers)
    #[serde(rename = "RCC")]
    ReinforcedConcrete,
}

impl Material {
    /// Unit weight of the material
    pub fn unit_weight(&self) -> KnPerCubicMeter {
        match self {
            Material::Steel => KnPerCubicMeter(STEEL_UNIT_WEIGHT_KN_M3),
            Material::ReinforcedConcrete => KnPerCubicMeter(RCC_UNIT_WEIGHT_KN_M3),
        }
    }

    /// Get display name for this material
    pub fn display_name(&self) -> &'static str {
        match self {
            Material::Steel => "Steel",
            Material::ReinforcedConcrete => "RCC",
        }
    }

    /// Line load for `area_mm2` of this material (kN/m)
    pub fn line_load(&self, area_mm2: f64) -> CalcResult<f64> {
        load_from_area(area_mm2, self.unit_weight().value())
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Convert an area in mm² to a line load in kN/m.
///
/// load = (area / 10⁶) × unit weight
pub fn load_from_area(area_mm2: f64, unit_weight_kn_m3: f64) -> CalcResult<f64> {
    let area = ensure_dimension("area_mm2", area_mm2)?;
    let gamma = ensure_dimension("unit_weight_kn_m3", unit_weight_kn_m3)?;
    let load: KnPerMeter = SquareMillimeters(area).line_load(KnPerCubicMeter(gamma));
    Ok(load.value())
}

/// Steel line load (kN/m) for an area in mm²
pub fn steel_load_from_area(area_mm2: f64) -> CalcResult<f64> {
    Material::Steel.line_load(area_mm2)
}

/// RCC line load (kN/m) for an area in mm²
pub fn rcc_load_from_area(area_mm2: f64) -> CalcResult<f64> {
    Material::ReinforcedConcrete.line_load(area_mm2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_weights() {
        assert_eq!(Material::Steel.unit_weight().value(), 78.0);
        assert_eq!(Material::ReinforcedConcrete.unit_weight().value(), 25.0);
    }

    #[test]
    fn test_load_is_linear_in_area() {
        for gamma in [STEEL_UNIT_WEIGHT_KN_M3, RCC_UNIT_WEIGHT_KN_M3, 1.0] {
            for area in [0.0, 2250.0, 52_500.0, 281_250.0] {
                let single = load_from_area(area, gamma).unwrap();
                let double = load_from_area(2.0 * area, gamma).unwrap();
                assert!((double - 2.0 * single).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_bound_converters_use_their_density() {
        let area = 1_000_000.0; // 1 m²
        assert!((steel_load_from_area(area).unwrap() - 78.0).abs() < 1e-12);
        assert!((rcc_load_from_area(area).unwrap() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_area_rejected() {
        assert!(steel_load_from_area(-1.0).is_err());
        assert!(load_from_area(100.0, -25.0).is_err());
    }

    #[test]
    fn test_material_serialization() {
        let json = serde_json::to_string(&Material::ReinforcedConcrete).unwrap();
        assert_eq!(json, "\"RCC\"");
        let parsed: Material = serde_json::from_str("\"Steel\"").unwrap();
        assert_eq!(parsed, Material::Steel);
    }
}
