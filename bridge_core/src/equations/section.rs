//! # Cross-Section Area Formulas
//!
//! Area formulas for the kerb, barrier and median profiles of IRC 5:2015.
//! Inputs and outputs share units: millimeter inputs give mm² areas.
//!
//! Every primitive rejects a negative or non-finite dimension with
//! [`CalcError::InvalidDimension`](crate::errors::CalcError::InvalidDimension).
//! Nothing is clamped.
//!
//! ## Notation
//!
//! - `b` = width of a rectangle
//! - `d` = depth (height)
//! - `r` = edge radius of a kerb fillet
//!
//! ## References
//!
//! - IRC 5:2015 Fig. 4, Fig. 5 and Clause 109.8 (profiles)

use std::f64::consts::PI;

use crate::errors::{ensure_dimension, CalcResult};

// =============================================================================
// BASIC SHAPES
// =============================================================================

/// Area of a trapezoid with parallel top and bottom edges
///
/// ```text
///       top
///     ┌─────┐
///    /       \   height
///   └─────────┘
///     bottom
/// ```
///
/// # Formula
/// A = (top + bottom) / 2 × height
///
/// # Example
/// ```rust
/// use bridge_core::equations::section::trapezoidal_area;
///
/// // RCC kerb under a metallic barrier: 500 top, 550 bottom, 100 high
/// let area = trapezoidal_area(500.0, 550.0, 100.0).unwrap();
/// assert_eq!(area, 52_500.0);
/// ```
pub fn trapezoidal_area(top_width: f64, bottom_width: f64, height: f64) -> CalcResult<f64> {
    let top = ensure_dimension("top_width", top_width)?;
    let bottom = ensure_dimension("bottom_width", bottom_width)?;
    let h = ensure_dimension("height", height)?;
    Ok((top + bottom) / 2.0 * h)
}

/// Area of a rectangle
///
/// # Formula
/// A = b × d
///
/// # Example
/// ```rust
/// use bridge_core::equations::section::rectangular_area;
///
/// let area = rectangular_area(175.0, 225.0).unwrap();
/// assert_eq!(area, 39_375.0);
/// ```
pub fn rectangular_area(width: f64, height: f64) -> CalcResult<f64> {
    let b = ensure_dimension("width", width)?;
    let d = ensure_dimension("height", height)?;
    Ok(b * d)
}

/// Area of a quarter circle of radius `r`
///
/// # Formula
/// A = π r² / 4
pub fn quarter_circle_area(radius: f64) -> CalcResult<f64> {
    let r = ensure_dimension("edge_radius", radius)?;
    Ok(PI * r * r / 4.0)
}

// =============================================================================
// KERB PROFILE
// =============================================================================

/// Composite area of a kerb with a rounded traffic-side edge
///
/// ```text
///        r ╭──────┐
///          │      │
///          │      │ height
///   ───────┘      │
///          └──────┘
///       effective width
/// ```
///
/// # Formula
/// A = b·h + π r²/4 + b·r + ½·r·hₑ
///
/// where `b` is the effective width, `h` the height, `hₑ` the effective
/// height and `r` the edge radius. All four terms are additive.
///
/// # Example
/// ```rust
/// use bridge_core::equations::section::kerb_profile_area;
///
/// // IRC 5 Clause 109.8.1 road kerb: 175 / 225 / 200 / r25
/// let area = kerb_profile_area(175.0, 225.0, 200.0, 25.0).unwrap();
/// assert!((area - 46_740.874).abs() < 0.001);
/// ```
pub fn kerb_profile_area(effective_width: f64, height: f64, effective_height: f64, edge_radius: f64) -> CalcResult<f64> {
    let b = ensure_dimension("effective_width", effective_width)?;
    let h = ensure_dimension("height", height)?;
    let he = ensure_dimension("effective_height", effective_height)?;
    let r = ensure_dimension("edge_radius", edge_radius)?;

    let body = rectangular_area(b, h)?;
    let fillet = quarter_circle_area(r)?;
    let cap = rectangular_area(b, r)?;
    let toe = 0.5 * r * he;

    Ok(body + fillet + cap + toe)
}

/// Round a reported quantity to a fixed number of decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn test_trapezoid_is_symmetric() {
        for top in [0.0, 175.0, 500.0, 1200.0] {
            for bottom in [0.0, 450.0, 550.0] {
                for height in [0.0, 100.0, 900.0] {
                    let a = trapezoidal_area(top, bottom, height).unwrap();
                    let b = trapezoidal_area(bottom, top, height).unwrap();
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_trapezoid_matches_mean_rectangle() {
        for (top, bottom, height) in [(175.0, 450.0, 900.0), (500.0, 550.0, 100.0), (0.0, 10.0, 3.0)] {
            let trap = trapezoidal_area(top, bottom, height).unwrap();
            let rect = rectangular_area((top + bottom) / 2.0, height).unwrap();
            assert!((trap - rect).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rcc_barrier_trapezoid() {
        // (175 + 450) / 2 × 900
        let area = trapezoidal_area(175.0, 450.0, 900.0).unwrap();
        assert_eq!(area, 281_250.0);
    }

    #[test]
    fn test_kerb_profile_terms() {
        let r: f64 = 25.0;
        let expected = 175.0 * 225.0 + PI * r * r / 4.0 + 175.0 * r + 0.5 * r * 200.0;
        let area = kerb_profile_area(175.0, 225.0, 200.0, 25.0).unwrap();
        assert!((area - expected).abs() < 1e-9);
    }

    #[test]
    fn test_kerb_profile_without_fillet() {
        let area = kerb_profile_area(100.0, 50.0, 40.0, 0.0).unwrap();
        assert_eq!(area, 5000.0);
    }

    #[test]
    fn test_negative_dimension_rejected() {
        assert!(matches!(
            trapezoidal_area(-1.0, 10.0, 10.0),
            Err(CalcError::InvalidDimension { .. })
        ));
        assert!(rectangular_area(10.0, -0.5).is_err());
        assert!(quarter_circle_area(-25.0).is_err());

        match kerb_profile_area(175.0, 225.0, -200.0, 25.0) {
            Err(CalcError::InvalidDimension { field, .. }) => assert_eq!(field, "effective_height"),
            other => panic!("expected InvalidDimension, got {:?}", other),
        }
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.696_465_92, 3), 1.696);
        assert_eq!(round_to(4922.64, 1), 4922.6);
    }
}
