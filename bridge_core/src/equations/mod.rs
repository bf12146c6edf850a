//! # Geometry Primitives
//!
//! Pure area formulas used by every variant builder. Keeping them in one
//! place makes it easy to verify a profile against the figures of
//! IRC 5:2015 and to keep units consistent (mm in, mm² out).
//!
//! ## Modules
//!
//! - [`section`] - Trapezoid, rectangle and composite kerb-profile areas

pub mod section;

// Re-export commonly used items
pub use section::{
    kerb_profile_area,
    quarter_circle_area,
    rectangular_area,
    round_to,
    trapezoidal_area,
};
