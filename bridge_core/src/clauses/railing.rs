//! Clause 109.7.2.3 - railings or parapets shall have a minimum height of
//! 1.1 m above the adjacent roadway or footway safety kerb surface.
//!
//! The clause applies wherever a railing exists, whatever the footpath
//! arrangement. Besides the verdict it fixes the height carried into the
//! design: the provided height, raised to the minimum when short.

use super::{ClauseId, ClauseResult, Limit};
use crate::errors::{ensure_dimension, CalcResult};

/// Minimum railing height (mm)
pub const RAILING_MIN_HEIGHT_MM: f64 = 1100.0;

/// Check a railing height (mm) and return the adopted height with the verdict.
///
/// A missing height yields `MissingInput` with the minimum adopted.
///
/// # Example
/// ```rust
/// use bridge_core::clauses::{railing_height, ClauseStatus};
///
/// let r = railing_height(Some(1000.0)).unwrap();
/// assert_eq!(r.status, ClauseStatus::NonCompliant);
/// assert_eq!(r.adopted_value, Some(1100.0));
/// ```
pub fn railing_height(railing_height_mm: Option<f64>) -> CalcResult<ClauseResult> {
    let clause = ClauseId::RailingHeight;

    let Some(height) = railing_height_mm else {
        return Ok(ClauseResult::missing_input(
            clause,
            Some(Limit::AtLeast),
            Some(RAILING_MIN_HEIGHT_MM),
            "mm",
            format!("Railing height not specified; minimum {} mm adopted.", RAILING_MIN_HEIGHT_MM),
        )
        .with_adopted(RAILING_MIN_HEIGHT_MM));
    };
    let height = ensure_dimension("railing_height_mm", height)?;

    Ok(ClauseResult::check(
        clause,
        Limit::AtLeast,
        RAILING_MIN_HEIGHT_MM,
        height,
        "mm",
        format!("Railing height {} mm satisfies the {} mm minimum.", height, RAILING_MIN_HEIGHT_MM),
        format!(
            "Railing height {} mm is less than the minimum railing height, adjusted to {} mm.",
            height, RAILING_MIN_HEIGHT_MM
        ),
    )
    .with_adopted(height.max(RAILING_MIN_HEIGHT_MM)))
}
