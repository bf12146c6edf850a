//! # Unit Types
//!
//! Type-safe wrappers for the SI units used by IRC 5:2015 and IRC 6.
//! They are plain `f64` newtypes so JSON stays clean (just numbers).
//!
//! ## Conventions
//!
//! - Profile dimensions and areas: millimeters (mm, mm²)
//! - Roadway widths and bridge lengths: meters (m)
//! - Unit weight of materials: kilonewtons per cubic meter (kN/m³)
//! - Line load along the bridge: kilonewtons per meter (kN/m)
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::units::{KnPerCubicMeter, Meters, Millimeters, SquareMillimeters};
//!
//! let width: Meters = Millimeters(1500.0).into();
//! assert_eq!(width.0, 1.5);
//!
//! let load = SquareMillimeters(52_500.0).line_load(KnPerCubicMeter(25.0));
//! assert!((load.0 - 1.3125).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimeters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

impl From<SquareMillimeters> for SquareMeters {
    fn from(mm2: SquareMillimeters) -> Self {
        SquareMeters(mm2.0 / 1e6)
    }
}

impl From<SquareMeters> for SquareMillimeters {
    fn from(m2: SquareMeters) -> Self {
        SquareMillimeters(m2.0 * 1e6)
    }
}

impl SquareMillimeters {
    /// Self-weight per meter run of a prism with this cross-section.
    pub fn line_load(self, unit_weight: KnPerCubicMeter) -> KnPerMeter {
        let m2: SquareMeters = self.into();
        KnPerMeter(m2.0 * unit_weight.0)
    }
}

// ============================================================================
// Load Units
// ============================================================================

/// Unit weight in kilonewtons per cubic meter (kN/m³)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerCubicMeter(pub f64);

/// Line load in kilonewtons per meter (kN/m)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerMeter(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(SquareMillimeters);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(KnPerCubicMeter);
impl_arithmetic!(KnPerMeter);
