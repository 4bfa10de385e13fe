//! # Safety Factors and Design Criteria
//!
//! A [`SafetyFactor`] turns a theoretical (nominal) strength into an
//! available strength under one of the two AISC design conventions:
//!
//! ```text
//! ASD:   allowable = Rn / Ω
//! LRFD:  allowable = φ · Rn
//! ```
//!
//! A [`Criteria`] pairs a required (demand) quantity with a safety factor and
//! reports whether the demand stays below the available strength. Criteria
//! compare and order by their ratio `allowable / calculated` only.
//!
//! ## Example
//!
//! ```rust
//! use aisc_core::criteria::{Criteria, SafetyFactor, SafetyFactorType};
//! use aisc_core::units::{Quantity, KILONEWTON};
//!
//! let nominal = Quantity::new(469.23, KILONEWTON);
//! let factor = SafetyFactor::new(nominal, 1.67, SafetyFactorType::Asd).unwrap();
//! let check = Criteria::new(Quantity::new(200.0, KILONEWTON), factor).unwrap();
//!
//! assert!(check.passes());
//! assert!(check.ratio() > 1.0);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Quantity;

/// Design convention used to factor a theoretical strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SafetyFactorType {
    /// Allowable Strength Design - divide by Ω
    #[default]
    #[serde(rename = "ASD")]
    Asd,
    /// Load and Resistance Factor Design - multiply by φ
    #[serde(rename = "LRFD")]
    Lrfd,
}

impl SafetyFactorType {
    /// Short abbreviation
    pub fn code(&self) -> &'static str {
        match self {
            SafetyFactorType::Asd => "ASD",
            SafetyFactorType::Lrfd => "LRFD",
        }
    }

    /// Apply the convention to a theoretical limit value
    pub fn allowable(&self, theoretical_limit_value: Quantity, factor: f64) -> Quantity {
        match self {
            SafetyFactorType::Asd => theoretical_limit_value / factor,
            SafetyFactorType::Lrfd => theoretical_limit_value * factor,
        }
    }
}

impl FromStr for SafetyFactorType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ASD" => Ok(SafetyFactorType::Asd),
            "LRFD" => Ok(SafetyFactorType::Lrfd),
            other => Err(CalcError::missing_table_key("safety factor type", other)),
        }
    }
}

impl fmt::Display for SafetyFactorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Safety Factor
// ============================================================================

/// Theoretical strength paired with its Ω or φ factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyFactor {
    pub theoretical_limit_value: Quantity,
    pub safety_factor: f64,
    pub factor_type: SafetyFactorType,
}

impl SafetyFactor {
    pub fn new(
        theoretical_limit_value: Quantity,
        safety_factor: f64,
        factor_type: SafetyFactorType,
    ) -> CalcResult<Self> {
        if !(safety_factor > 0.0 && safety_factor.is_finite()) {
            return Err(CalcError::invalid_input(
                "safety_factor",
                safety_factor.to_string(),
                "Safety factor must be a positive number",
            ));
        }
        Ok(SafetyFactor {
            theoretical_limit_value,
            safety_factor,
            factor_type,
        })
    }

    /// Available strength: Rn/Ω (ASD) or φ·Rn (LRFD)
    pub fn allowable_value(&self) -> Quantity {
        self.factor_type
            .allowable(self.theoretical_limit_value, self.safety_factor)
    }
}

// ============================================================================
// Criteria
// ============================================================================

/// Demand-versus-capacity check.
///
/// Both the calculated value and the limit value are stored simplified to
/// base units, and they must share a dimension.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Criteria {
    pub calculated_value: Quantity,
    pub safety_factor: SafetyFactor,
}

impl Criteria {
    pub fn new(calculated_value: Quantity, safety_factor: SafetyFactor) -> CalcResult<Self> {
        let calculated_value = calculated_value.simplified();
        let limit = safety_factor.theoretical_limit_value.simplified();
        calculated_value.ensure_same_dimension(&limit, "criteria")?;
        if !limit.is_positive() {
            return Err(CalcError::invalid_input(
                "theoretical_limit_value",
                limit.to_string(),
                "Limit value must be positive",
            ));
        }
        if !(calculated_value.value() >= 0.0 && calculated_value.value().is_finite()) {
            return Err(CalcError::invalid_input(
                "calculated_value",
                calculated_value.to_string(),
                "Calculated value must be a non-negative number",
            ));
        }
        Ok(Criteria {
            calculated_value,
            safety_factor: SafetyFactor {
                theoretical_limit_value: limit,
                ..safety_factor
            },
        })
    }

    pub fn allowable_value(&self) -> Quantity {
        self.safety_factor.allowable_value()
    }

    /// Demand strictly below the available strength
    pub fn passes(&self) -> bool {
        self.calculated_value.value() < self.allowable_value().value()
    }

    /// allowable / calculated; above 1.0 means reserve capacity.
    ///
    /// Zero demand gives `f64::INFINITY`, which compares equal to itself.
    pub fn ratio(&self) -> f64 {
        self.allowable_value().value() / self.calculated_value.value()
    }
}

impl PartialEq for Criteria {
    fn eq(&self, other: &Self) -> bool {
        self.ratio() == other.ratio()
    }
}

impl PartialOrd for Criteria {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.ratio().partial_cmp(&other.ratio())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{KILONEWTON, MEGAPASCAL, NEWTON};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_asd_divides() {
        let sf = SafetyFactor::new(Quantity::new(167.0, KILONEWTON), 1.67, SafetyFactorType::Asd).unwrap();
        let allowable = sf.allowable_value().value_in(KILONEWTON).unwrap();
        assert!((allowable - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_lrfd_multiplies() {
        let sf = SafetyFactor::new(Quantity::new(100.0, KILONEWTON), 0.9, SafetyFactorType::Lrfd).unwrap();
        let allowable = sf.allowable_value().value_in(KILONEWTON).unwrap();
        assert!((allowable - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_invalid_factor() {
        let result = SafetyFactor::new(Quantity::new(1.0, NEWTON), 0.0, SafetyFactorType::Asd);
        assert!(result.is_err());
    }

    #[test]
    fn test_criteria_pass_and_ratio() {
        let sf = SafetyFactor::new(Quantity::new(200.0, KILONEWTON), 2.0, SafetyFactorType::Asd).unwrap();
        let check = Criteria::new(Quantity::new(50.0, KILONEWTON), sf).unwrap();
        assert!(check.passes());
        assert!((check.ratio() - 2.0).abs() < EPSILON);

        let at_limit = Criteria::new(Quantity::new(100.0, KILONEWTON), sf).unwrap();
        assert!(!at_limit.passes());
    }

    #[test]
    fn test_criteria_degenerate_values() {
        let sf = SafetyFactor::new(Quantity::new(200.0, KILONEWTON), 2.0, SafetyFactorType::Asd).unwrap();
        let idle = Criteria::new(Quantity::new(0.0, KILONEWTON), sf).unwrap();
        assert!(idle.passes());
        assert_eq!(idle.ratio(), f64::INFINITY);
        assert_eq!(idle, idle);

        let zero_limit = SafetyFactor::new(Quantity::new(0.0, KILONEWTON), 2.0, SafetyFactorType::Asd).unwrap();
        let err = Criteria::new(Quantity::new(0.0, KILONEWTON), zero_limit).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = Criteria::new(Quantity::new(-1.0, KILONEWTON), sf).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_criteria_dimension_mismatch() {
        let sf = SafetyFactor::new(Quantity::new(200.0, KILONEWTON), 2.0, SafetyFactorType::Asd).unwrap();
        let err = Criteria::new(Quantity::new(50.0, MEGAPASCAL), sf).unwrap_err();
        assert_eq!(err.error_code(), "DIMENSION_MISMATCH");
    }

    #[test]
    fn test_criteria_ordering_uses_ratio_only() {
        let small = Criteria::new(
            Quantity::new(1.0, KILONEWTON),
            SafetyFactor::new(Quantity::new(2.0, KILONEWTON), 1.0, SafetyFactorType::Lrfd).unwrap(),
        )
        .unwrap();
        let large = Criteria::new(
            Quantity::new(500.0, KILONEWTON),
            SafetyFactor::new(Quantity::new(1000.0, KILONEWTON), 1.0, SafetyFactorType::Lrfd).unwrap(),
        )
        .unwrap();
        assert_eq!(small, large);

        let tighter = Criteria::new(
            Quantity::new(900.0, KILONEWTON),
            SafetyFactor::new(Quantity::new(1000.0, KILONEWTON), 1.0, SafetyFactorType::Lrfd).unwrap(),
        )
        .unwrap();
        assert!(tighter < large);
    }

    #[test]
    fn test_factor_type_parsing() {
        assert_eq!("asd".parse::<SafetyFactorType>().unwrap(), SafetyFactorType::Asd);
        assert_eq!("LRFD".parse::<SafetyFactorType>().unwrap(), SafetyFactorType::Lrfd);
        let err = "WSD".parse::<SafetyFactorType>().unwrap_err();
        assert_eq!(err.error_code(), "MISSING_TABLE_KEY");
    }
}
