//! # Materials
//!
//! Isotropic structural-steel material properties and a catalog of rolled
//! I-shapes.
//!
//! A material is created once per steel grade and shared, read-only, by every
//! profile built from it.
//!
//! ## Example
//!
//! ```rust
//! use aisc_core::materials::{IsotropicMaterial, Material, SteelGrade};
//! use aisc_core::units::MEGAPASCAL;
//!
//! let steel = IsotropicMaterial::from_grade(SteelGrade::S355);
//! assert_eq!(steel.yield_stress().value_in(MEGAPASCAL).unwrap(), 355.0);
//! ```

pub mod shapes;

pub use shapes::{builtin_rolled_shapes, RolledShape, ShapeCatalog, ShapeFamily};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::report::{row, TableRow, Tabular};
use crate::units::{Dimension, Quantity, GIGAPASCAL, KILOGRAM_PER_CUBIC_METER, MEGAPASCAL};

/// Read-only contract every material offers to the strength formulas.
pub trait Material: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;
    /// Elastic modulus E
    fn modulus_linear(&self) -> Quantity;
    /// Shear modulus G
    fn modulus_shear(&self) -> Quantity;
    fn poisson_ratio(&self) -> f64;
    /// Specified minimum yield stress Fy
    fn yield_stress(&self) -> Quantity;
    fn density(&self) -> Option<Quantity>;
}

/// Tabular projection shared by every [`Material`] implementation
pub fn material_table(material: &dyn Material) -> Vec<TableRow> {
    let mut rows = vec![
        row("name", material.name()),
        row("modulus_linear", material.modulus_linear()),
        row("modulus_shear", material.modulus_shear()),
        row("poisson_ratio", material.poisson_ratio()),
        row("yield_stress", material.yield_stress()),
    ];
    if let Some(density) = material.density() {
        rows.push(row("density", density));
    }
    rows
}

// ============================================================================
// Steel Grades
// ============================================================================

/// Common structural steel grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// EN 10025 S235
    S235,
    /// EN 10025 S275
    S275,
    /// EN 10025 S355
    S355,
    /// ASTM A36
    A36,
    /// ASTM A992 (wide-flange shapes)
    A992,
}

impl SteelGrade {
    pub const ALL: [SteelGrade; 5] = [
        SteelGrade::S235,
        SteelGrade::S275,
        SteelGrade::S355,
        SteelGrade::A36,
        SteelGrade::A992,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SteelGrade::S235 => "S235",
            SteelGrade::S275 => "S275",
            SteelGrade::S355 => "S355",
            SteelGrade::A36 => "A36",
            SteelGrade::A992 => "A992",
        }
    }

    /// Specified minimum yield stress in MPa
    pub fn yield_stress_mpa(&self) -> f64 {
        match self {
            SteelGrade::S235 => 235.0,
            SteelGrade::S275 => 275.0,
            SteelGrade::S355 => 355.0,
            SteelGrade::A36 => 250.0,
            SteelGrade::A992 => 345.0,
        }
    }
}

impl FromStr for SteelGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_uppercase().replace([' ', '-'], "");
        SteelGrade::ALL
            .into_iter()
            .find(|grade| grade.code() == key)
            .ok_or_else(|| CalcError::missing_table_key("steel grade", s))
    }
}

impl fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Isotropic Material
// ============================================================================

/// Linear-elastic isotropic material record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsotropicMaterial {
    name: String,
    modulus_linear: Quantity,
    modulus_shear: Quantity,
    poisson_ratio: f64,
    yield_stress: Quantity,
    density: Option<Quantity>,
}

impl IsotropicMaterial {
    /// Create a material, checking every stress has the dimension of stress.
    pub fn new(
        name: impl Into<String>,
        modulus_linear: Quantity,
        modulus_shear: Quantity,
        poisson_ratio: f64,
        yield_stress: Quantity,
        density: Option<Quantity>,
    ) -> CalcResult<Self> {
        for (field, value) in [
            ("modulus_linear", modulus_linear),
            ("modulus_shear", modulus_shear),
            ("yield_stress", yield_stress),
        ] {
            value.ensure_dimension(Dimension::STRESS, field)?;
            if !value.is_positive() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"));
            }
        }
        if !(poisson_ratio > 0.0 && poisson_ratio < 0.5) {
            return Err(CalcError::invalid_input(
                "poisson_ratio",
                poisson_ratio.to_string(),
                "Poisson ratio must lie in (0, 0.5)",
            ));
        }
        if let Some(density) = density {
            density.ensure_dimension(Dimension::DENSITY, "density")?;
        }
        Ok(IsotropicMaterial {
            name: name.into(),
            modulus_linear,
            modulus_shear,
            poisson_ratio,
            yield_stress,
            density,
        })
    }

    /// Structural steel of the given grade: E = 200 GPa, G = 77 GPa, ν = 0.3
    pub fn from_grade(grade: SteelGrade) -> Self {
        IsotropicMaterial {
            name: grade.code().to_string(),
            modulus_linear: Quantity::new(200.0, GIGAPASCAL),
            modulus_shear: Quantity::new(77.0, GIGAPASCAL),
            poisson_ratio: 0.3,
            yield_stress: Quantity::new(grade.yield_stress_mpa(), MEGAPASCAL),
            density: Some(Quantity::new(7850.0, KILOGRAM_PER_CUBIC_METER)),
        }
    }
}

impl Material for IsotropicMaterial {
    fn name(&self) -> &str {
        &self.name
    }

    fn modulus_linear(&self) -> Quantity {
        self.modulus_linear
    }

    fn modulus_shear(&self) -> Quantity {
        self.modulus_shear
    }

    fn poisson_ratio(&self) -> f64 {
        self.poisson_ratio
    }

    fn yield_stress(&self) -> Quantity {
        self.yield_stress
    }

    fn density(&self) -> Option<Quantity> {
        self.density
    }
}

impl Tabular for IsotropicMaterial {
    fn table(&self) -> Vec<TableRow> {
        material_table(self)
    }
}

impl fmt::Display for IsotropicMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{KILONEWTON, MILLIMETER};

    #[test]
    fn test_grade_properties() {
        let steel = IsotropicMaterial::from_grade(SteelGrade::A992);
        assert_eq!(steel.yield_stress().value_in(MEGAPASCAL).unwrap(), 345.0);
        assert_eq!(steel.modulus_linear().value_in(GIGAPASCAL).unwrap(), 200.0);
        assert_eq!(steel.name(), "A992");
    }

    #[test]
    fn test_grade_parsing() {
        assert_eq!("s355".parse::<SteelGrade>().unwrap(), SteelGrade::S355);
        assert_eq!("A 992".parse::<SteelGrade>().unwrap(), SteelGrade::A992);
        let err = "S460".parse::<SteelGrade>().unwrap_err();
        assert_eq!(err.error_code(), "MISSING_TABLE_KEY");
    }

    #[test]
    fn test_rejects_wrong_dimension() {
        let result = IsotropicMaterial::new(
            "bad",
            Quantity::new(200.0, GIGAPASCAL),
            Quantity::new(77.0, GIGAPASCAL),
            0.3,
            Quantity::new(355.0, KILONEWTON),
            None,
        );
        assert_eq!(result.unwrap_err().error_code(), "DIMENSION_MISMATCH");
    }

    #[test]
    fn test_rejects_invalid_poisson_ratio() {
        let result = IsotropicMaterial::new(
            "bad",
            Quantity::new(200.0, GIGAPASCAL),
            Quantity::new(77.0, GIGAPASCAL),
            0.7,
            Quantity::new(355.0, MEGAPASCAL),
            None,
        );
        assert_eq!(result.unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_table_excluding() {
        let steel = IsotropicMaterial::from_grade(SteelGrade::S355);
        let names: Vec<&str> = steel.table().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            ["name", "modulus_linear", "modulus_shear", "poisson_ratio", "yield_stress", "density"]
        );

        let filtered = steel.table_excluding(&["density", "name"]);
        assert_eq!(filtered.len(), 4);
        assert!(filtered.iter().all(|r| r.name != "density"));

        // lengths are not a stress
        assert!(Quantity::new(1.0, MILLIMETER)
            .ensure_dimension(Dimension::STRESS, "check")
            .is_err());
    }
}
