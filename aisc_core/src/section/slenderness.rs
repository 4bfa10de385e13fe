//! # Slenderness Classification
//!
//! Classifies the flange and web plates of a doubly-symmetric I-shape against
//! the width-to-thickness limits of AISC 360-16 Table B4.1.
//!
//! ## Classification Rules
//!
//! | Behaviour          | Ratio below limit | Ratio at or above limit |
//! |--------------------|-------------------|-------------------------|
//! | Axial compression  | NonSlender        | Slender                 |
//!
//! | Behaviour | λ < λp  | λp ≤ λ < λr | λ ≥ λr  |
//! |-----------|---------|-------------|---------|
//! | Flexure   | Compact | NonCompact  | Slender |
//!
//! A ratio equal to a limit takes the more severe class. A whole section is
//! axially slender if any plate is; its flexural class about an axis is the
//! worst class of the plates contributing to that axis (flange and web for
//! the major axis, flange only for the minor axis).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::local_buckling::{
    flange_axial_limit_built_up, flange_axial_limit_rolled, flange_flexural_compact_limit,
    flange_flexural_slender_limit_built_up, flange_flexural_slender_limit_rolled, kc_coefficient,
    web_axial_limit, web_flexural_compact_limit, web_flexural_slender_limit,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;
use crate::section::dimensions::DoublySymmetricIDimensions;

/// How the section was fabricated. Selects the flange limit formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstructionType {
    #[default]
    Rolled,
    BuiltUp,
}

impl ConstructionType {
    pub fn code(&self) -> &'static str {
        match self {
            ConstructionType::Rolled => "ROLLED",
            ConstructionType::BuiltUp => "BUILT_UP",
        }
    }
}

impl FromStr for ConstructionType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace([' ', '-'], "_").as_str() {
            "ROLLED" => Ok(ConstructionType::Rolled),
            "BUILT_UP" => Ok(ConstructionType::BuiltUp),
            _ => Err(CalcError::missing_table_key("construction type", s)),
        }
    }
}

impl fmt::Display for ConstructionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Element class under uniform axial compression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxialSlenderness {
    NonSlender,
    Slender,
}

impl AxialSlenderness {
    pub fn classify(ratio: f64, limit: f64) -> Self {
        if ratio < limit {
            AxialSlenderness::NonSlender
        } else {
            AxialSlenderness::Slender
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AxialSlenderness::NonSlender => "NON_SLENDER",
            AxialSlenderness::Slender => "SLENDER",
        }
    }
}

impl FromStr for AxialSlenderness {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NON_SLENDER" => Ok(AxialSlenderness::NonSlender),
            "SLENDER" => Ok(AxialSlenderness::Slender),
            _ => Err(CalcError::missing_table_key("axial slenderness", s)),
        }
    }
}

/// Element class in flexure, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlexuralSlenderness {
    Compact,
    NonCompact,
    Slender,
}

impl FlexuralSlenderness {
    pub fn classify(ratio: f64, compact_limit: f64, slender_limit: f64) -> Self {
        if ratio < compact_limit {
            FlexuralSlenderness::Compact
        } else if ratio < slender_limit {
            FlexuralSlenderness::NonCompact
        } else {
            FlexuralSlenderness::Slender
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            FlexuralSlenderness::Compact => "COMPACT",
            FlexuralSlenderness::NonCompact => "NON_COMPACT",
            FlexuralSlenderness::Slender => "SLENDER",
        }
    }
}

impl FromStr for FlexuralSlenderness {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "COMPACT" => Ok(FlexuralSlenderness::Compact),
            "NON_COMPACT" => Ok(FlexuralSlenderness::NonCompact),
            "SLENDER" => Ok(FlexuralSlenderness::Slender),
            _ => Err(CalcError::missing_table_key("flexural slenderness", s)),
        }
    }
}

impl fmt::Display for FlexuralSlenderness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl fmt::Display for AxialSlenderness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One plate under axial compression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxialElement {
    pub ratio: f64,
    pub limit: f64,
    pub class: AxialSlenderness,
}

impl AxialElement {
    pub fn new(ratio: f64, limit: f64) -> Self {
        AxialElement {
            ratio,
            limit,
            class: AxialSlenderness::classify(ratio, limit),
        }
    }
}

/// One plate in flexure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlexuralElement {
    pub ratio: f64,
    pub compact_limit: f64,
    pub slender_limit: f64,
    pub class: FlexuralSlenderness,
}

impl FlexuralElement {
    pub fn new(ratio: f64, compact_limit: f64, slender_limit: f64) -> Self {
        FlexuralElement {
            ratio,
            compact_limit,
            slender_limit,
            class: FlexuralSlenderness::classify(ratio, compact_limit, slender_limit),
        }
    }
}

/// Classification of every plate of a section, for every behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionSlenderness {
    pub construction: ConstructionType,
    pub kc: f64,
    pub flange_axial: AxialElement,
    pub web_axial: AxialElement,
    pub flange_flexural_major_axis: FlexuralElement,
    pub flange_flexural_minor_axis: FlexuralElement,
    pub web_flexural_major_axis: FlexuralElement,
}

impl SectionSlenderness {
    pub fn evaluate(
        dimensions: &DoublySymmetricIDimensions,
        material: &dyn Material,
        construction: ConstructionType,
    ) -> Self {
        let e = material.modulus_linear().value();
        let fy = material.yield_stress().value();
        let kc = kc_coefficient(dimensions.web_height().value(), dimensions.web_thickness().value());
        let flange_ratio = dimensions.flange_ratio();
        let web_ratio = dimensions.web_ratio();

        let (flange_axial_limit, flange_major_slender_limit) = match construction {
            ConstructionType::Rolled => (
                flange_axial_limit_rolled(e, fy),
                flange_flexural_slender_limit_rolled(e, fy),
            ),
            ConstructionType::BuiltUp => (
                flange_axial_limit_built_up(e, fy, kc),
                flange_flexural_slender_limit_built_up(e, fy, kc),
            ),
        };
        let flange_compact_limit = flange_flexural_compact_limit(e, fy);

        let slenderness = SectionSlenderness {
            construction,
            kc,
            flange_axial: AxialElement::new(flange_ratio, flange_axial_limit),
            web_axial: AxialElement::new(web_ratio, web_axial_limit(e, fy)),
            flange_flexural_major_axis: FlexuralElement::new(
                flange_ratio,
                flange_compact_limit,
                flange_major_slender_limit,
            ),
            // Table B4.1b case 13: rolled limits for either construction
            flange_flexural_minor_axis: FlexuralElement::new(
                flange_ratio,
                flange_compact_limit,
                flange_flexural_slender_limit_rolled(e, fy),
            ),
            web_flexural_major_axis: FlexuralElement::new(
                web_ratio,
                web_flexural_compact_limit(e, fy),
                web_flexural_slender_limit(e, fy),
            ),
        };
        debug!(
            %construction,
            flange_ratio,
            web_ratio,
            axial = %slenderness.axial(),
            major = %slenderness.flexural_major_axis(),
            minor = %slenderness.flexural_minor_axis(),
            "classified section slenderness"
        );
        slenderness
    }

    /// Slender if any plate is slender
    pub fn axial(&self) -> AxialSlenderness {
        self.flange_axial.class.max(self.web_axial.class)
    }

    /// Worst of flange and web
    pub fn flexural_major_axis(&self) -> FlexuralSlenderness {
        self.flange_flexural_major_axis
            .class
            .max(self.web_flexural_major_axis.class)
    }

    /// The flange alone carries minor-axis bending
    pub fn flexural_minor_axis(&self) -> FlexuralSlenderness {
        self.flange_flexural_minor_axis.class
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{IsotropicMaterial, SteelGrade};
    use crate::units::{Quantity, MILLIMETER};

    fn mm(v: f64) -> Quantity {
        Quantity::new(v, MILLIMETER)
    }

    fn fixture(construction: ConstructionType) -> SectionSlenderness {
        let dims =
            DoublySymmetricIDimensions::new(mm(76.0), mm(7.6), mm(4.0), mm(127.0), Some(mm(96.6))).unwrap();
        let steel = IsotropicMaterial::from_grade(SteelGrade::S355);
        SectionSlenderness::evaluate(&dims, &steel, construction)
    }

    #[test]
    fn test_boundary_takes_higher_severity() {
        assert_eq!(AxialSlenderness::classify(13.0, 13.0), AxialSlenderness::Slender);
        assert_eq!(AxialSlenderness::classify(12.999, 13.0), AxialSlenderness::NonSlender);
        assert_eq!(FlexuralSlenderness::classify(9.0, 9.0, 20.0), FlexuralSlenderness::NonCompact);
        assert_eq!(FlexuralSlenderness::classify(20.0, 9.0, 20.0), FlexuralSlenderness::Slender);
        assert_eq!(FlexuralSlenderness::classify(8.0, 9.0, 20.0), FlexuralSlenderness::Compact);
    }

    #[test]
    fn test_fixture_limits() {
        let rolled = fixture(ConstructionType::Rolled);
        assert!((rolled.flange_axial.limit - 13.292).abs() < 1e-3);

        let built_up = fixture(ConstructionType::BuiltUp);
        assert_eq!(built_up.kc, 0.76);
        assert!((built_up.flange_axial.limit - 13.243).abs() < 1e-3);
    }

    #[test]
    fn test_fixture_is_compact() {
        let s = fixture(ConstructionType::Rolled);
        assert_eq!(s.axial(), AxialSlenderness::NonSlender);
        assert_eq!(s.flexural_major_axis(), FlexuralSlenderness::Compact);
        assert_eq!(s.flexural_minor_axis(), FlexuralSlenderness::Compact);
    }

    #[test]
    fn test_section_takes_worst_element() {
        // thin web: 300/2 = 150 > 5.70·√(E/Fy) ≈ 135.3
        let dims = DoublySymmetricIDimensions::new(mm(150.0), mm(12.0), mm(2.0), mm(324.0), None).unwrap();
        let steel = IsotropicMaterial::from_grade(SteelGrade::S355);
        let s = SectionSlenderness::evaluate(&dims, &steel, ConstructionType::BuiltUp);
        assert_eq!(s.web_flexural_major_axis.class, FlexuralSlenderness::Slender);
        assert_eq!(s.flexural_major_axis(), FlexuralSlenderness::Slender);
        assert_eq!(s.axial(), AxialSlenderness::Slender);
        assert_eq!(s.flexural_minor_axis(), FlexuralSlenderness::Compact);
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("built-up".parse::<ConstructionType>().unwrap(), ConstructionType::BuiltUp);
        assert_eq!("ROLLED".parse::<ConstructionType>().unwrap(), ConstructionType::Rolled);
        assert_eq!("non_compact".parse::<FlexuralSlenderness>().unwrap(), FlexuralSlenderness::NonCompact);
        assert_eq!("SLENDER".parse::<AxialSlenderness>().unwrap(), AxialSlenderness::Slender);
        let err = "WELDED".parse::<ConstructionType>().unwrap_err();
        assert_eq!(err.error_code(), "MISSING_TABLE_KEY");
        assert!("SEMI_COMPACT".parse::<FlexuralSlenderness>().is_err());
    }
}
