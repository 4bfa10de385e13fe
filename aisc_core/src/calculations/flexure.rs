//! # Flexural Member Strength
//!
//! Nominal flexural strength of doubly-symmetric I-shapes per AISC 360-16
//! Sections F2 (major axis, compact), F3 (major axis, noncompact flanges) and
//! F6 (minor axis).
//!
//! | Limit state                | Major axis | Minor axis |
//! |----------------------------|------------|------------|
//! | Yielding                   | F2-1       | F6-1       |
//! | Lateral-torsional buckling | F2-2, F2-3 | -          |
//! | Flange local buckling      | F3-1       | F6-2       |
//!
//! Limit states that do not apply (LTB with Lb ≤ Lp, FLB of compact flanges)
//! are left out of the strength table rather than entered as zero. Slender
//! flanges are not covered and fail with `NotImplemented`.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use aisc_core::calculations::BeamFlexureDoublySymmetric;
//! use aisc_core::materials::{builtin_rolled_shapes, IsotropicMaterial, SteelGrade};
//! use aisc_core::section::DoublySymmetricIUserDefined;
//! use aisc_core::units::{Quantity, METER, NEWTON_METER};
//!
//! let steel = Arc::new(IsotropicMaterial::from_grade(SteelGrade::S355));
//! let shape = builtin_rolled_shapes().lookup("127X76X13").unwrap().clone();
//! let profile = DoublySymmetricIUserDefined::from_catalog(&shape, steel).unwrap();
//!
//! let beam = BeamFlexureDoublySymmetric::new(&profile, Quantity::new(1.0, METER), 1.0).unwrap();
//! let mn = beam.nominal_strength_major_axis().unwrap().value_in(NEWTON_METER).unwrap();
//! assert!((mn - 28_617.6).abs() < 0.5);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::compression::ensure_positive_length;
use crate::equations::flexure::{
    flange_local_buckling_noncompact, lateral_torsional_critical_stress, lateral_torsional_inelastic_moment,
    minor_axis_yield_moment, moment_gradient_factor, plastic_moment, DOUBLY_SYMMETRIC_C,
};
use crate::errors::{CalcError, CalcResult};
use crate::report::StrengthTable;
use crate::section::{FlexuralElement, FlexuralSlenderness, SectionProfile};
use crate::units::{Dimension, Quantity};

pub const STRENGTH_YIELD: &str = "strength yield";
pub const STRENGTH_LATERAL_TORSION: &str = "strength lateral torsion";
pub const STRENGTH_FLANGE_LOCAL_BUCKLING: &str = "strength flange local buckling";

// ============================================================================
// Moment gradient
// ============================================================================

/// Moments along an unbraced segment, for the Cb factor (F1-1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentDiagram {
    /// Maximum absolute moment in the segment
    pub max: Quantity,
    /// Moment at the quarter point (MA)
    pub quarter: Quantity,
    /// Moment at the centerline (MB)
    pub mid: Quantity,
    /// Moment at the three-quarter point (MC)
    pub three_quarter: Quantity,
}

impl MomentDiagram {
    /// Uniform moment over the segment (Cb = 1)
    pub fn uniform(moment: Quantity) -> Self {
        MomentDiagram {
            max: moment,
            quarter: moment,
            mid: moment,
            three_quarter: moment,
        }
    }

    pub fn cb(&self) -> CalcResult<f64> {
        for (field, value) in [
            ("max", self.max),
            ("quarter", self.quarter),
            ("mid", self.mid),
            ("three_quarter", self.three_quarter),
        ] {
            value.ensure_dimension(Dimension::MOMENT, field)?;
        }
        if self.max.value() == 0.0 {
            return Err(CalcError::invalid_input(
                "max",
                self.max.to_string(),
                "Maximum moment must be non-zero",
            ));
        }
        let peak = self.max.value().abs();
        for (field, value) in [("quarter", self.quarter), ("mid", self.mid), ("three_quarter", self.three_quarter)] {
            if value.value().abs() > peak {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Moment exceeds the maximum moment of the segment",
                ));
            }
        }
        Ok(moment_gradient_factor(
            self.max.value(),
            self.quarter.value(),
            self.mid.value(),
            self.three_quarter.value(),
        ))
    }
}

// ============================================================================
// Lateral-torsional buckling zones
// ============================================================================

/// Range of the unbraced length relative to Lp and Lr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LateralTorsionZone {
    /// Lb ≤ Lp: no lateral-torsional buckling
    Plastic,
    /// Lp < Lb ≤ Lr: inelastic buckling (F2-2)
    Inelastic,
    /// Lb > Lr: elastic buckling (F2-3)
    Elastic,
}

// ============================================================================
// Flexure calculation
// ============================================================================

/// Flexural strength of a doubly-symmetric I-shape over an unbraced length Lb.
#[derive(Debug, Clone, Copy)]
pub struct BeamFlexureDoublySymmetric<'a> {
    profile: &'a dyn SectionProfile,
    unbraced_length: Quantity,
    cb: f64,
}

impl<'a> BeamFlexureDoublySymmetric<'a> {
    pub fn new(profile: &'a dyn SectionProfile, unbraced_length: Quantity, cb: f64) -> CalcResult<Self> {
        ensure_positive_length("unbraced_length", unbraced_length)?;
        if !(cb > 0.0 && cb.is_finite()) {
            return Err(CalcError::invalid_input("cb", cb.to_string(), "Cb must be positive"));
        }
        Ok(BeamFlexureDoublySymmetric {
            profile,
            unbraced_length,
            cb,
        })
    }

    /// Cb computed from the moment diagram of the segment
    pub fn with_moment_diagram(
        profile: &'a dyn SectionProfile,
        unbraced_length: Quantity,
        diagram: &MomentDiagram,
    ) -> CalcResult<Self> {
        Self::new(profile, unbraced_length, diagram.cb()?)
    }

    pub fn cb(&self) -> f64 {
        self.cb
    }

    pub fn unbraced_length(&self) -> Quantity {
        self.unbraced_length
    }

    fn fy(&self) -> f64 {
        self.profile.material().yield_stress().value()
    }

    fn moment(value: f64) -> Quantity {
        Quantity::from_base(value, Dimension::MOMENT)
    }

    // ------------------------------------------------------------------
    // Yielding
    // ------------------------------------------------------------------

    /// Mp = Fy·Zx (F2-1)
    pub fn strength_major_axis_yield(&self) -> Quantity {
        let zx = self.profile.area_properties().major_axis_plastic_section_modulus();
        Self::moment(plastic_moment(self.fy(), zx.value()))
    }

    /// Mp = Fy·Zy ≤ 1.6·Fy·Sy (F6-1)
    pub fn strength_minor_axis_yield(&self) -> Quantity {
        let props = self.profile.area_properties();
        Self::moment(minor_axis_yield_moment(
            self.fy(),
            props.minor_axis_plastic_section_modulus().value(),
            props.minor_axis_elastic_section_modulus().value(),
        ))
    }

    // ------------------------------------------------------------------
    // Lateral-torsional buckling
    // ------------------------------------------------------------------

    pub fn lateral_torsion_zone(&self) -> LateralTorsionZone {
        let lb = self.unbraced_length.value();
        if lb <= self.profile.limit_length_yield().value() {
            LateralTorsionZone::Plastic
        } else if lb <= self.profile.limit_length_torsional_buckling().value() {
            LateralTorsionZone::Inelastic
        } else {
            LateralTorsionZone::Elastic
        }
    }

    /// F2-2 evaluated at Lb, capped at Mp
    pub fn strength_lateral_torsion_case_b(&self) -> Quantity {
        let sx = self.profile.area_properties().major_axis_elastic_section_modulus();
        Self::moment(lateral_torsional_inelastic_moment(
            self.cb,
            self.strength_major_axis_yield().value(),
            self.fy(),
            sx.value(),
            self.unbraced_length.value(),
            self.profile.limit_length_yield().value(),
            self.profile.limit_length_torsional_buckling().value(),
        ))
    }

    /// Fcr (F2-4) evaluated at Lb
    pub fn critical_stress_lateral_torsion(&self) -> Quantity {
        let props = self.profile.area_properties();
        Quantity::from_base(
            lateral_torsional_critical_stress(
                self.cb,
                self.profile.material().modulus_linear().value(),
                self.unbraced_length.value(),
                self.profile.effective_radius_of_gyration().value(),
                props.torsional_constant().value(),
                DOUBLY_SYMMETRIC_C,
                props.major_axis_elastic_section_modulus().value(),
                self.profile.dimensions().distance_between_centroids().value(),
            ),
            Dimension::STRESS,
        )
    }

    /// Fcr·Sx without the Mp cap
    pub fn moment_lateral_torsion_elastic(&self) -> Quantity {
        self.critical_stress_lateral_torsion() * self.profile.area_properties().major_axis_elastic_section_modulus()
    }

    /// F2-3: min(Fcr·Sx, Mp)
    pub fn strength_lateral_torsion_case_c(&self) -> Quantity {
        let mn = self.moment_lateral_torsion_elastic().value();
        Self::moment(mn.min(self.strength_major_axis_yield().value()))
    }

    /// Lateral-torsional buckling strength for the zone Lb falls in, `None`
    /// when the member is braced closely enough for LTB not to apply
    pub fn strength_lateral_torsion(&self) -> Option<Quantity> {
        let zone = self.lateral_torsion_zone();
        debug!(
            lb = self.unbraced_length.value(),
            lp = self.profile.limit_length_yield().value(),
            lr = self.profile.limit_length_torsional_buckling().value(),
            ?zone,
            "lateral-torsional buckling zone"
        );
        match zone {
            LateralTorsionZone::Plastic => None,
            LateralTorsionZone::Inelastic => Some(self.strength_lateral_torsion_case_b()),
            LateralTorsionZone::Elastic => Some(self.strength_lateral_torsion_case_c()),
        }
    }

    // ------------------------------------------------------------------
    // Flange local buckling
    // ------------------------------------------------------------------

    fn flange_local_buckling(
        &self,
        flange: &FlexuralElement,
        mp: Quantity,
        elastic_modulus: Quantity,
        axis: &str,
    ) -> CalcResult<Option<Quantity>> {
        debug!(axis, ratio = flange.ratio, class = %flange.class, "flange local buckling");
        match flange.class {
            FlexuralSlenderness::Compact => Ok(None),
            FlexuralSlenderness::NonCompact => Ok(Some(Self::moment(flange_local_buckling_noncompact(
                mp.value(),
                self.fy(),
                elastic_modulus.value(),
                flange.ratio,
                flange.compact_limit,
                flange.slender_limit,
            )))),
            FlexuralSlenderness::Slender => Err(CalcError::not_implemented(format!(
                "{} flange local buckling of slender flanges",
                axis
            ))),
        }
    }

    /// F3-1, classified on the major-axis flange slenderness
    pub fn strength_major_axis_flange_local_buckling(&self) -> CalcResult<Option<Quantity>> {
        let flange = self.profile.slenderness().flange_flexural_major_axis;
        let sx = self.profile.area_properties().major_axis_elastic_section_modulus();
        self.flange_local_buckling(&flange, self.strength_major_axis_yield(), sx, "major axis")
    }

    /// F6-2, classified on the minor-axis flange slenderness
    pub fn strength_minor_axis_flange_local_buckling(&self) -> CalcResult<Option<Quantity>> {
        let flange = self.profile.slenderness().flange_flexural_minor_axis;
        let sy = self.profile.area_properties().minor_axis_elastic_section_modulus();
        self.flange_local_buckling(&flange, self.strength_minor_axis_yield(), sy, "minor axis")
    }

    // ------------------------------------------------------------------
    // Summary
    // ------------------------------------------------------------------

    pub fn major_axis_strength_table(&self) -> CalcResult<StrengthTable> {
        Ok(StrengthTable::new("flexure major axis")
            .with(STRENGTH_YIELD, Some(self.strength_major_axis_yield()))
            .with(STRENGTH_LATERAL_TORSION, self.strength_lateral_torsion())
            .with(STRENGTH_FLANGE_LOCAL_BUCKLING, self.strength_major_axis_flange_local_buckling()?))
    }

    pub fn minor_axis_strength_table(&self) -> CalcResult<StrengthTable> {
        Ok(StrengthTable::new("flexure minor axis")
            .with(STRENGTH_YIELD, Some(self.strength_minor_axis_yield()))
            .with(STRENGTH_FLANGE_LOCAL_BUCKLING, self.strength_minor_axis_flange_local_buckling()?))
    }

    /// Governing nominal strength Mnx
    pub fn nominal_strength_major_axis(&self) -> CalcResult<Quantity> {
        Ok(self.major_axis_strength_table()?.governing()?.value)
    }

    /// Governing nominal strength Mny
    pub fn nominal_strength_minor_axis(&self) -> CalcResult<Quantity> {
        Ok(self.minor_axis_strength_table()?.governing()?.value)
    }
}
