//! # Combined Compression and Flexure
//!
//! Evaluates the H1-1 interaction ratio from required and available
//! strengths. The result carries the ratio and which equation produced it;
//! whether it passes is the caller's decision (see [`InteractionResult::passes`]).
//!
//! ## Example
//!
//! ```rust
//! use aisc_core::calculations::{AxialFlexureInteraction, InteractionEquation};
//! use aisc_core::units::{Quantity, KILONEWTON, KILONEWTON_METER};
//!
//! let check = AxialFlexureInteraction {
//!     required_axial: Quantity::new(100.0, KILONEWTON),
//!     available_axial: Quantity::new(250.0, KILONEWTON),
//!     required_major_moment: Quantity::new(6.0, KILONEWTON_METER),
//!     available_major_moment: Quantity::new(15.0, KILONEWTON_METER),
//!     required_minor_moment: Quantity::new(0.0, KILONEWTON_METER),
//!     available_minor_moment: Quantity::new(4.0, KILONEWTON_METER),
//! };
//! let result = check.evaluate().unwrap();
//! assert_eq!(result.equation, InteractionEquation::HighAxial);
//! assert!((result.ratio - (0.4 + 8.0 / 9.0 * 0.4)).abs() < 1e-12);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::interaction::{interaction_h1_1a, interaction_h1_1b, AXIAL_RATIO_THRESHOLD};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Dimension, Quantity};

/// Which H1-1 equation governs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionEquation {
    /// Pr/Pc ≥ 0.2 (H1-1a)
    #[serde(rename = "H1-1a")]
    HighAxial,
    /// Pr/Pc < 0.2 (H1-1b)
    #[serde(rename = "H1-1b")]
    LowAxial,
}

impl InteractionEquation {
    pub fn code(&self) -> &'static str {
        match self {
            InteractionEquation::HighAxial => "H1-1a",
            InteractionEquation::LowAxial => "H1-1b",
        }
    }
}

impl fmt::Display for InteractionEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionResult {
    pub ratio: f64,
    pub axial_ratio: f64,
    pub major_ratio: f64,
    pub minor_ratio: f64,
    pub equation: InteractionEquation,
}

impl InteractionResult {
    /// A ratio equal to the limit passes
    pub fn passes(&self, limit: f64) -> bool {
        self.ratio <= limit
    }
}

/// Required (Pr, Mrx, Mry) and available (Pc, Mcx, Mcy) strengths of a member.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxialFlexureInteraction {
    pub required_axial: Quantity,
    pub available_axial: Quantity,
    pub required_major_moment: Quantity,
    pub available_major_moment: Quantity,
    pub required_minor_moment: Quantity,
    pub available_minor_moment: Quantity,
}

fn demand_ratio(field: &str, required: Quantity, available: Quantity, dimension: Dimension) -> CalcResult<f64> {
    required.ensure_dimension(dimension, field)?;
    available.ensure_dimension(dimension, field)?;
    if !available.is_positive() {
        return Err(CalcError::invalid_input(
            field,
            available.to_string(),
            "Available strength must be positive",
        ));
    }
    Ok(required.value().abs() / available.value())
}

impl AxialFlexureInteraction {
    pub fn evaluate(&self) -> CalcResult<InteractionResult> {
        if self.required_axial.value() < 0.0 {
            return Err(CalcError::invalid_input(
                "required_axial",
                self.required_axial.to_string(),
                "Axial demand must be compressive (non-negative)",
            ));
        }
        let axial_ratio = demand_ratio("axial", self.required_axial, self.available_axial, Dimension::FORCE)?;
        let major_ratio = demand_ratio(
            "major_moment",
            self.required_major_moment,
            self.available_major_moment,
            Dimension::MOMENT,
        )?;
        let minor_ratio = demand_ratio(
            "minor_moment",
            self.required_minor_moment,
            self.available_minor_moment,
            Dimension::MOMENT,
        )?;

        let (equation, ratio) = if axial_ratio >= AXIAL_RATIO_THRESHOLD {
            (InteractionEquation::HighAxial, interaction_h1_1a(axial_ratio, major_ratio, minor_ratio))
        } else {
            (InteractionEquation::LowAxial, interaction_h1_1b(axial_ratio, major_ratio, minor_ratio))
        };
        debug!(axial_ratio, major_ratio, minor_ratio, %equation, ratio, "combined axial and flexure");

        Ok(InteractionResult {
            ratio,
            axial_ratio,
            major_ratio,
            minor_ratio,
            equation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{KILONEWTON, KILONEWTON_METER, MEGAPASCAL};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    fn check(pr: f64, mrx: f64, mry: f64) -> AxialFlexureInteraction {
        AxialFlexureInteraction {
            required_axial: Quantity::new(pr, KILONEWTON),
            available_axial: Quantity::new(100.0, KILONEWTON),
            required_major_moment: Quantity::new(mrx, KILONEWTON_METER),
            available_major_moment: Quantity::new(10.0, KILONEWTON_METER),
            required_minor_moment: Quantity::new(mry, KILONEWTON_METER),
            available_minor_moment: Quantity::new(5.0, KILONEWTON_METER),
        }
    }

    #[test]
    fn test_high_axial() {
        let result = check(50.0, 3.0, 1.0).evaluate().unwrap();
        assert_eq!(result.equation, InteractionEquation::HighAxial);
        assert!(approx_eq(result.ratio, 0.5 + 8.0 / 9.0 * (0.3 + 0.2)));
        assert!(result.passes(1.0));
    }

    #[test]
    fn test_low_axial() {
        let result = check(10.0, 6.0, 2.0).evaluate().unwrap();
        assert_eq!(result.equation, InteractionEquation::LowAxial);
        assert!(approx_eq(result.ratio, 0.05 + 0.6 + 0.4));
        assert!(!result.passes(1.0));
    }

    #[test]
    fn test_threshold_uses_h1_1a() {
        let result = check(20.0, 0.0, 0.0).evaluate().unwrap();
        assert_eq!(result.equation, InteractionEquation::HighAxial);
        assert!(approx_eq(result.ratio, 0.2));
    }

    #[test]
    fn test_negative_moments_use_magnitude() {
        let a = check(10.0, -6.0, 2.0).evaluate().unwrap();
        let b = check(10.0, 6.0, 2.0).evaluate().unwrap();
        assert_eq!(a.ratio, b.ratio);
    }

    #[test]
    fn test_ratio_at_limit_passes() {
        let result = check(0.0, 10.0, 0.0).evaluate().unwrap();
        assert!(approx_eq(result.ratio, 1.0));
        assert!(result.passes(1.0));
    }

    #[test]
    fn test_invalid_inputs() {
        let mut bad = check(10.0, 1.0, 1.0);
        bad.available_axial = Quantity::new(100.0, MEGAPASCAL);
        assert_eq!(bad.evaluate().unwrap_err().error_code(), "DIMENSION_MISMATCH");

        let mut bad = check(10.0, 1.0, 1.0);
        bad.available_minor_moment = Quantity::new(0.0, KILONEWTON_METER);
        assert_eq!(bad.evaluate().unwrap_err().error_code(), "INVALID_INPUT");

        assert_eq!(check(-1.0, 1.0, 1.0).evaluate().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_equation_codes() {
        assert_eq!(InteractionEquation::LowAxial.to_string(), "H1-1b");
        let json = serde_json::to_string(&InteractionEquation::HighAxial).unwrap();
        assert_eq!(json, "\"H1-1a\"");
    }
}
