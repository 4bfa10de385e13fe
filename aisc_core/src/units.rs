//! # Physical Quantities
//!
//! Dimension-checked physical quantities for steel design. A [`Quantity`]
//! carries a magnitude in base units (metre, newton) and a [`Dimension`]
//! exponent vector, so lengths, stresses, moments and section properties can
//! be mixed freely in products and quotients while sums, comparisons and
//! conversions between incompatible dimensions fail loudly.
//!
//! ## Base Units
//!
//! Structural steel design only needs two base dimensions:
//! - Length (L): metre
//! - Force (F): newton
//!
//! Everything else is derived: stress = F·L⁻², moment = F·L,
//! inertia = L⁴, warping constant = L⁶.
//!
//! ## Example
//!
//! ```rust
//! use aisc_core::units::{Quantity, MILLIMETER, METER, MEGAPASCAL, SQUARE_MILLIMETER, KILONEWTON};
//!
//! let span = Quantity::new(1500.0, MILLIMETER);
//! assert!((span.value_in(METER).unwrap() - 1.5).abs() < 1e-12);
//!
//! let force = Quantity::new(355.0, MEGAPASCAL) * Quantity::new(1000.0, SQUARE_MILLIMETER);
//! assert!((force.value_in(KILONEWTON).unwrap() - 355.0).abs() < 1e-9);
//!
//! // Adding a length to a stress is a modelling error
//! assert!(span.try_add(Quantity::new(1.0, MEGAPASCAL)).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, Mul, Neg};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Dimensions
// ============================================================================

/// Exponents of the base dimensions (length, force) of a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimension {
    /// Exponent of length (L)
    pub length: i8,
    /// Exponent of force (F)
    pub force: i8,
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension::new(0, 0);
    pub const LENGTH: Dimension = Dimension::new(1, 0);
    pub const AREA: Dimension = Dimension::new(2, 0);
    /// Section modulus (L³)
    pub const SECTION_MODULUS: Dimension = Dimension::new(3, 0);
    /// Second moment of area and torsional constant (L⁴)
    pub const INERTIA: Dimension = Dimension::new(4, 0);
    /// Warping constant (L⁶)
    pub const WARPING: Dimension = Dimension::new(6, 0);
    pub const FORCE: Dimension = Dimension::new(0, 1);
    pub const STRESS: Dimension = Dimension::new(-2, 1);
    pub const MOMENT: Dimension = Dimension::new(1, 1);
    /// Weight density (F·L⁻³)
    pub const DENSITY: Dimension = Dimension::new(-3, 1);

    pub const fn new(length: i8, force: i8) -> Self {
        Dimension { length, force }
    }

    /// Dimension of a product of two quantities
    pub const fn product(self, other: Dimension) -> Dimension {
        Dimension::new(self.length + other.length, self.force + other.force)
    }

    /// Dimension of a quotient of two quantities
    pub const fn quotient(self, other: Dimension) -> Dimension {
        Dimension::new(self.length - other.length, self.force - other.force)
    }

    /// Dimension raised to an integer power
    pub const fn powi(self, n: i8) -> Dimension {
        Dimension::new(self.length * n, self.force * n)
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Dimension::DIMENSIONLESS
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }
        let mut parts = Vec::with_capacity(2);
        match self.force {
            0 => {}
            1 => parts.push("N".to_string()),
            n => parts.push(format!("N^{}", n)),
        }
        match self.length {
            0 => {}
            1 => parts.push("m".to_string()),
            n => parts.push(format!("m^{}", n)),
        }
        write!(f, "{}", parts.join("·"))
    }
}

// ============================================================================
// Units
// ============================================================================

/// A named unit: scale factor to base units plus its dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    pub symbol: &'static str,
    /// Multiplier from this unit to base units (m, N)
    pub factor: f64,
    pub dimension: Dimension,
}

impl Unit {
    pub const fn new(symbol: &'static str, factor: f64, dimension: Dimension) -> Self {
        Unit {
            symbol,
            factor,
            dimension,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

pub const DIMENSIONLESS: Unit = Unit::new("", 1.0, Dimension::DIMENSIONLESS);

// Length
pub const METER: Unit = Unit::new("m", 1.0, Dimension::LENGTH);
pub const DECIMETER: Unit = Unit::new("dm", 1e-1, Dimension::LENGTH);
pub const CENTIMETER: Unit = Unit::new("cm", 1e-2, Dimension::LENGTH);
pub const MILLIMETER: Unit = Unit::new("mm", 1e-3, Dimension::LENGTH);

// Area and section properties
pub const SQUARE_MILLIMETER: Unit = Unit::new("mm²", 1e-6, Dimension::AREA);
pub const SQUARE_CENTIMETER: Unit = Unit::new("cm²", 1e-4, Dimension::AREA);
pub const CUBIC_MILLIMETER: Unit = Unit::new("mm³", 1e-9, Dimension::SECTION_MODULUS);
pub const CUBIC_CENTIMETER: Unit = Unit::new("cm³", 1e-6, Dimension::SECTION_MODULUS);
pub const MILLIMETER_4: Unit = Unit::new("mm⁴", 1e-12, Dimension::INERTIA);
pub const CENTIMETER_4: Unit = Unit::new("cm⁴", 1e-8, Dimension::INERTIA);
pub const MILLIMETER_6: Unit = Unit::new("mm⁶", 1e-18, Dimension::WARPING);
pub const CENTIMETER_6: Unit = Unit::new("cm⁶", 1e-12, Dimension::WARPING);
pub const DECIMETER_6: Unit = Unit::new("dm⁶", 1e-6, Dimension::WARPING);

// Force
pub const NEWTON: Unit = Unit::new("N", 1.0, Dimension::FORCE);
pub const KILONEWTON: Unit = Unit::new("kN", 1e3, Dimension::FORCE);

// Stress
pub const PASCAL: Unit = Unit::new("Pa", 1.0, Dimension::STRESS);
pub const MEGAPASCAL: Unit = Unit::new("MPa", 1e6, Dimension::STRESS);
pub const GIGAPASCAL: Unit = Unit::new("GPa", 1e9, Dimension::STRESS);

// Moment
pub const NEWTON_METER: Unit = Unit::new("N·m", 1.0, Dimension::MOMENT);
pub const KILONEWTON_METER: Unit = Unit::new("kN·m", 1e3, Dimension::MOMENT);

/// Standard gravity, used to express mass density as a weight density
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// Mass density in kg/m³, stored as weight per volume (N/m³)
pub const KILOGRAM_PER_CUBIC_METER: Unit =
    Unit::new("kg/m³", STANDARD_GRAVITY, Dimension::DENSITY);

// ============================================================================
// Quantity
// ============================================================================

/// A magnitude in base units tagged with its physical dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    value: f64,
    dimension: Dimension,
}

impl Quantity {
    /// Create a quantity from a magnitude expressed in `unit`
    pub fn new(magnitude: f64, unit: Unit) -> Self {
        Quantity {
            value: magnitude * unit.factor,
            dimension: unit.dimension,
        }
    }

    /// Create a quantity from a magnitude already in base units
    pub const fn from_base(value: f64, dimension: Dimension) -> Self {
        Quantity { value, dimension }
    }

    /// A dimensionless quantity
    pub const fn scalar(value: f64) -> Self {
        Quantity {
            value,
            dimension: Dimension::DIMENSIONLESS,
        }
    }

    /// Magnitude in base units (m, N and their products)
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Magnitude expressed in `unit`.
    pub fn value_in(&self, unit: Unit) -> CalcResult<f64> {
        self.ensure_dimension(unit.dimension, "convert")?;
        Ok(self.value / unit.factor)
    }

    /// Reduce to base units. Storage is always in base units, so this only
    /// exists to mirror the normalize step callers expect before comparing.
    pub fn simplified(self) -> Quantity {
        self
    }

    /// Fail unless this quantity has the given dimension.
    pub fn ensure_dimension(&self, expected: Dimension, operation: &str) -> CalcResult<()> {
        if self.dimension == expected {
            Ok(())
        } else {
            Err(CalcError::dimension_mismatch(operation, self.dimension, expected))
        }
    }

    /// Fail unless both quantities share the same dimension.
    pub fn ensure_same_dimension(&self, other: &Quantity, operation: &str) -> CalcResult<()> {
        self.ensure_dimension(other.dimension, operation)
    }

    pub fn try_add(self, rhs: Quantity) -> CalcResult<Quantity> {
        self.ensure_same_dimension(&rhs, "add")?;
        Ok(Quantity::from_base(self.value + rhs.value, self.dimension))
    }

    pub fn try_sub(self, rhs: Quantity) -> CalcResult<Quantity> {
        self.ensure_same_dimension(&rhs, "subtract")?;
        Ok(Quantity::from_base(self.value - rhs.value, self.dimension))
    }

    pub fn try_cmp(&self, rhs: &Quantity) -> CalcResult<Ordering> {
        self.ensure_same_dimension(rhs, "compare")?;
        Ok(self.value.total_cmp(&rhs.value))
    }

    /// Smaller of two quantities of the same dimension
    pub fn try_min(self, rhs: Quantity) -> CalcResult<Quantity> {
        Ok(match self.try_cmp(&rhs)? {
            Ordering::Greater => rhs,
            _ => self,
        })
    }

    pub fn powi(self, n: i8) -> Quantity {
        Quantity::from_base(self.value.powi(n as i32), self.dimension.powi(n))
    }

    /// Square root; every dimension exponent must be even.
    pub fn sqrt(self) -> CalcResult<Quantity> {
        let Dimension { length, force } = self.dimension;
        if length % 2 != 0 || force % 2 != 0 {
            return Err(CalcError::dimension_mismatch(
                "sqrt",
                self.dimension,
                Dimension::new(length - length % 2, force - force % 2),
            ));
        }
        Ok(Quantity::from_base(
            self.value.sqrt(),
            Dimension::new(length / 2, force / 2),
        ))
    }

    /// Magnitude of a dimensionless quantity
    pub fn as_scalar(&self) -> CalcResult<f64> {
        self.ensure_dimension(Dimension::DIMENSIONLESS, "as_scalar")?;
        Ok(self.value)
    }

    pub fn abs(self) -> Quantity {
        Quantity::from_base(self.value.abs(), self.dimension)
    }

    pub fn is_positive(&self) -> bool {
        self.value > 0.0 && self.value.is_finite()
    }
}

impl Mul for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity::from_base(self.value * rhs.value, self.dimension.product(rhs.dimension))
    }
}

impl Div for Quantity {
    type Output = Quantity;
    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::from_base(self.value / rhs.value, self.dimension.quotient(rhs.dimension))
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: f64) -> Quantity {
        Quantity::from_base(self.value * rhs, self.dimension)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;
    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;
    fn div(self, rhs: f64) -> Quantity {
        Quantity::from_base(self.value / rhs, self.dimension)
    }
}

impl Neg for Quantity {
    type Output = Quantity;
    fn neg(self) -> Quantity {
        Quantity::from_base(-self.value, self.dimension)
    }
}

/// Quantities of different dimension are unordered.
impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Quantity) -> Option<Ordering> {
        if self.dimension != other.dimension {
            return None;
        }
        self.value.partial_cmp(&other.value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dimension.is_dimensionless() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.dimension)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_unit_conversion() {
        let length = Quantity::new(2.5, METER);
        assert!(approx_eq(length.value_in(MILLIMETER).unwrap(), 2500.0));
        assert!(approx_eq(length.value_in(DECIMETER).unwrap(), 25.0));

        let warping = Quantity::new(0.002, DECIMETER_6);
        assert!(approx_eq(warping.value_in(CENTIMETER_6).unwrap(), 2000.0));
    }

    #[test]
    fn test_products_combine_dimensions() {
        let stress = Quantity::new(355.0, MEGAPASCAL);
        let modulus = Quantity::new(84.0, CUBIC_CENTIMETER);
        let moment = stress * modulus;
        assert_eq!(moment.dimension(), Dimension::MOMENT);
        assert!(approx_eq(moment.value_in(NEWTON_METER).unwrap(), 29_820.0));

        let ratio = Quantity::new(200.0, GIGAPASCAL) / stress;
        assert!(approx_eq(ratio.as_scalar().unwrap(), 200_000.0 / 355.0));
    }

    #[test]
    fn test_dimension_mismatch() {
        let force = Quantity::new(10.0, KILONEWTON);
        let stress = Quantity::new(10.0, MEGAPASCAL);

        let err = force.try_add(stress).unwrap_err();
        assert_eq!(err.error_code(), "DIMENSION_MISMATCH");
        assert!(force.try_cmp(&stress).is_err());
        assert!(force.value_in(MEGAPASCAL).is_err());
        assert!(force.partial_cmp(&stress).is_none());
    }

    #[test]
    fn test_sqrt() {
        let inertia = Quantity::new(56.0, CENTIMETER_4);
        let area = Quantity::new(16.5, SQUARE_CENTIMETER);
        let radius = (inertia / area).sqrt().unwrap();
        assert_eq!(radius.dimension(), Dimension::LENGTH);
        assert!((radius.value_in(MILLIMETER).unwrap() - 18.4226).abs() < 1e-3);

        assert!(Quantity::new(1.0, MILLIMETER).sqrt().is_err());
    }

    #[test]
    fn test_min_and_ordering() {
        let a = Quantity::new(1.0, KILONEWTON);
        let b = Quantity::new(900.0, NEWTON);
        assert!(a > b);
        assert_eq!(a.try_min(b).unwrap(), b);
    }

    #[test]
    fn test_serialization() {
        let q = Quantity::new(7.6, MILLIMETER);
        let json = serde_json::to_string(&q).unwrap();
        let roundtrip: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(q, roundtrip);
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimension::STRESS.to_string(), "N·m^-2");
        assert_eq!(Dimension::MOMENT.to_string(), "N·m");
        assert_eq!(Quantity::scalar(2.0).to_string(), "2");
    }
}
