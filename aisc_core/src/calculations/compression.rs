//! # Compression Member Strength
//!
//! Nominal compressive strength of a doubly-symmetric I-shape member per
//! AISC 360-16 Chapter E:
//!
//! - Flexural buckling (E3), about whichever principal axis is more slender
//! - Torsional buckling (E4), with the E4-2 elastic stress placed on the E3
//!   critical-stress curve
//!
//! The governing nominal strength Pn is the lower of the two.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use aisc_core::calculations::{BeamCompressionEffectiveLength, EffectiveLengthFactors};
//! use aisc_core::materials::{builtin_rolled_shapes, IsotropicMaterial, SteelGrade};
//! use aisc_core::section::DoublySymmetricIUserDefined;
//! use aisc_core::units::{Quantity, KILONEWTON, METER};
//!
//! let steel = Arc::new(IsotropicMaterial::from_grade(SteelGrade::S355));
//! let shape = builtin_rolled_shapes().lookup("127X76X13").unwrap().clone();
//! let profile = DoublySymmetricIUserDefined::from_catalog(&shape, steel).unwrap();
//!
//! let column = BeamCompressionEffectiveLength::new(
//!     &profile,
//!     Quantity::new(1.0, METER),
//!     EffectiveLengthFactors::default(),
//! ).unwrap();
//!
//! let pn = column.strength_flexural_buckling().value_in(KILONEWTON).unwrap();
//! assert!((pn - 469.23).abs() < 0.05);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::equations::compression::{
    critical_stress, elastic_buckling_stress, equivalent_slenderness, is_inelastic,
    torsional_elastic_buckling_stress,
};
use crate::errors::{CalcError, CalcResult};
use crate::report::StrengthTable;
use crate::section::{AxialSlenderness, SectionProfile};
use crate::units::{Dimension, Quantity};

/// Names of the compression limit states in strength tables
pub const STRENGTH_FLEXURAL_BUCKLING: &str = "strength flexural buckling";
pub const STRENGTH_TORSIONAL_BUCKLING: &str = "strength torsional buckling";

/// Effective length factors K per buckling axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveLengthFactors {
    /// Kx, flexural buckling about the major axis
    pub major_axis: f64,
    /// Ky, flexural buckling about the minor axis
    pub minor_axis: f64,
    /// Kz, torsional buckling about the longitudinal axis
    pub torsion: f64,
}

impl Default for EffectiveLengthFactors {
    /// Pinned at both ends in every direction
    fn default() -> Self {
        EffectiveLengthFactors {
            major_axis: 1.0,
            minor_axis: 1.0,
            torsion: 1.0,
        }
    }
}

impl EffectiveLengthFactors {
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("major_axis", self.major_axis),
            ("minor_axis", self.minor_axis),
            ("torsion", self.torsion),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Effective length factor must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Which branch of the E3 curve produced a critical stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BucklingRegime {
    /// E3-2, KL/r ≤ 4.71√(E/Fy)
    Inelastic,
    /// E3-3
    Elastic,
}

pub(crate) fn ensure_positive_length(field: &str, length: Quantity) -> CalcResult<()> {
    length.ensure_dimension(Dimension::LENGTH, field)?;
    if !length.is_positive() {
        return Err(CalcError::invalid_input(field, length.to_string(), "Length must be positive"));
    }
    Ok(())
}

/// Compression strength of a member with one unbraced length L and
/// per-axis effective length factors.
#[derive(Debug, Clone, Copy)]
pub struct BeamCompressionEffectiveLength<'a> {
    profile: &'a dyn SectionProfile,
    unbraced_length: Quantity,
    factors: EffectiveLengthFactors,
}

impl<'a> BeamCompressionEffectiveLength<'a> {
    pub fn new(
        profile: &'a dyn SectionProfile,
        unbraced_length: Quantity,
        factors: EffectiveLengthFactors,
    ) -> CalcResult<Self> {
        ensure_positive_length("unbraced_length", unbraced_length)?;
        factors.validate()?;
        if profile.slenderness().axial() == AxialSlenderness::Slender {
            warn!(
                profile = profile.label(),
                "section has slender elements under compression; strengths ignore local buckling"
            );
        }
        Ok(BeamCompressionEffectiveLength {
            profile,
            unbraced_length,
            factors,
        })
    }

    pub fn unbraced_length(&self) -> Quantity {
        self.unbraced_length
    }

    pub fn factors(&self) -> EffectiveLengthFactors {
        self.factors
    }

    fn e(&self) -> f64 {
        self.profile.material().modulus_linear().value()
    }

    fn fy(&self) -> f64 {
        self.profile.material().yield_stress().value()
    }

    fn stress(value: f64) -> Quantity {
        Quantity::from_base(value, Dimension::STRESS)
    }

    // ------------------------------------------------------------------
    // Slenderness
    // ------------------------------------------------------------------

    /// Kx·L/rx
    pub fn major_axis_slenderness(&self) -> f64 {
        let props = self.profile.area_properties();
        self.factors.major_axis * self.unbraced_length.value() / props.major_axis_radius_of_gyration().value()
    }

    /// Ky·L/ry
    pub fn minor_axis_slenderness(&self) -> f64 {
        let props = self.profile.area_properties();
        self.factors.minor_axis * self.unbraced_length.value() / props.minor_axis_radius_of_gyration().value()
    }

    /// Governing flexural slenderness, the larger of the two axes
    pub fn flexural_slenderness(&self) -> f64 {
        self.major_axis_slenderness().max(self.minor_axis_slenderness())
    }

    /// Kz·L/r̄o, for reporting.
    ///
    /// The torsional branch of the E3 curve is chosen from the equivalent
    /// slenderness π√(E/Fe) instead; see [`Self::torsional_buckling_regime`].
    pub fn torsional_slenderness(&self) -> f64 {
        let props = self.profile.area_properties();
        self.factors.torsion * self.unbraced_length.value() / props.torsional_radius_of_gyration().value()
    }

    // ------------------------------------------------------------------
    // Flexural buckling (E3)
    // ------------------------------------------------------------------

    /// Fe (E3-4) at the governing flexural slenderness
    pub fn elastic_flexural_buckling_stress(&self) -> Quantity {
        Self::stress(elastic_buckling_stress(self.e(), self.flexural_slenderness()))
    }

    pub fn flexural_buckling_regime(&self) -> BucklingRegime {
        regime(self.flexural_slenderness(), self.e(), self.fy())
    }

    /// Fcr (E3-2 / E3-3)
    pub fn critical_stress_flexural_buckling(&self) -> Quantity {
        let slenderness = self.flexural_slenderness();
        let fe = self.elastic_flexural_buckling_stress().value();
        let fcr = critical_stress(slenderness, fe, self.e(), self.fy());
        debug!(
            slenderness,
            fe,
            fcr,
            regime = ?self.flexural_buckling_regime(),
            "flexural buckling critical stress"
        );
        Self::stress(fcr)
    }

    /// Pn = Fcr·Ag (E3-1)
    pub fn strength_flexural_buckling(&self) -> Quantity {
        self.critical_stress_flexural_buckling() * self.profile.area_properties().area()
    }

    // ------------------------------------------------------------------
    // Torsional buckling (E4)
    // ------------------------------------------------------------------

    /// Fe (E4-2) with Lcz = Kz·L
    pub fn elastic_torsional_buckling_stress(&self) -> Quantity {
        let props = self.profile.area_properties();
        let g = self.profile.material().modulus_shear().value();
        Self::stress(torsional_elastic_buckling_stress(
            self.e(),
            g,
            props.warping_constant().value(),
            props.torsional_constant().value(),
            self.factors.torsion * self.unbraced_length.value(),
            props.major_axis_inertia().value(),
            props.minor_axis_inertia().value(),
        ))
    }

    /// Slenderness at which E3-4 gives the torsional Fe, π√(E/Fe)
    pub fn torsional_equivalent_slenderness(&self) -> f64 {
        equivalent_slenderness(self.e(), self.elastic_torsional_buckling_stress().value())
    }

    /// Inelastic when Fe ≥ 0.44·Fy, i.e. π√(E/Fe) ≤ 4.71√(E/Fy)
    pub fn torsional_buckling_regime(&self) -> BucklingRegime {
        regime(self.torsional_equivalent_slenderness(), self.e(), self.fy())
    }

    /// Fcr from the E3 curve with the torsional Fe
    pub fn critical_stress_torsional_buckling(&self) -> Quantity {
        let slenderness = self.torsional_equivalent_slenderness();
        let fe = self.elastic_torsional_buckling_stress().value();
        let fcr = critical_stress(slenderness, fe, self.e(), self.fy());
        debug!(
            slenderness,
            fe,
            fcr,
            regime = ?self.torsional_buckling_regime(),
            "torsional buckling critical stress"
        );
        Self::stress(fcr)
    }

    /// Pn = Fcr·Ag (E4-1)
    pub fn strength_torsional_buckling(&self) -> Quantity {
        self.critical_stress_torsional_buckling() * self.profile.area_properties().area()
    }

    // ------------------------------------------------------------------
    // Summary
    // ------------------------------------------------------------------

    /// Nominal strengths of every compression limit state
    pub fn strength_table(&self) -> StrengthTable {
        StrengthTable::new("compression")
            .with(STRENGTH_FLEXURAL_BUCKLING, Some(self.strength_flexural_buckling()))
            .with(STRENGTH_TORSIONAL_BUCKLING, Some(self.strength_torsional_buckling()))
    }

    /// Governing nominal strength Pn
    pub fn nominal_strength(&self) -> CalcResult<Quantity> {
        Ok(self.strength_table().governing()?.value)
    }
}

fn regime(slenderness: f64, e: f64, fy: f64) -> BucklingRegime {
    if is_inelastic(slenderness, e, fy) {
        BucklingRegime::Inelastic
    } else {
        BucklingRegime::Elastic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::equations::compression::inelastic_slenderness_limit;
    use crate::materials::{builtin_rolled_shapes, IsotropicMaterial, SteelGrade};
    use crate::section::DoublySymmetricIUserDefined;
    use crate::units::{KILONEWTON, MEGAPASCAL, METER, MILLIMETER};

    fn profile() -> DoublySymmetricIUserDefined {
        let shape = builtin_rolled_shapes().lookup("127X76X13").unwrap().clone();
        DoublySymmetricIUserDefined::from_catalog(&shape, Arc::new(IsotropicMaterial::from_grade(SteelGrade::S355)))
            .unwrap()
    }

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_flexural_buckling_1m() {
        let profile = profile();
        let column =
            BeamCompressionEffectiveLength::new(&profile, Quantity::new(1.0, METER), EffectiveLengthFactors::default())
                .unwrap();

        assert!(approx_eq(column.minor_axis_slenderness(), 54.281, 1e-3));
        assert_eq!(column.flexural_slenderness(), column.minor_axis_slenderness());
        assert!(approx_eq(column.elastic_flexural_buckling_stress().value_in(MEGAPASCAL).unwrap(), 669.94, 0.01));
        assert!(approx_eq(column.critical_stress_flexural_buckling().value_in(MEGAPASCAL).unwrap(), 284.38, 0.01));
        assert!(approx_eq(column.strength_flexural_buckling().value_in(KILONEWTON).unwrap(), 469.23, 0.01));
        assert_eq!(column.flexural_buckling_regime(), BucklingRegime::Inelastic);
    }

    #[test]
    fn test_torsional_buckling_1m() {
        let profile = profile();
        let column =
            BeamCompressionEffectiveLength::new(&profile, Quantity::new(1.0, METER), EffectiveLengthFactors::default())
                .unwrap();

        let fe = column.elastic_torsional_buckling_stress().value_in(MEGAPASCAL).unwrap();
        assert!(approx_eq(fe, 1161.123, 0.01), "Fe = {}", fe);
        let fcr = column.critical_stress_torsional_buckling().value_in(MEGAPASCAL).unwrap();
        assert!(approx_eq(fcr, 355.0 * 0.658_f64.powf(355.0 / fe), 1e-6));
        assert!(column.strength_torsional_buckling().value() > column.strength_flexural_buckling().value());
    }

    #[test]
    fn test_torsional_slenderness_1m() {
        let profile = profile();
        let column =
            BeamCompressionEffectiveLength::new(&profile, Quantity::new(1.0, METER), EffectiveLengthFactors::default())
                .unwrap();
        assert!(approx_eq(column.torsional_slenderness(), 17.661, 1e-3));
    }

    #[test]
    fn test_torsional_regime_follows_elastic_stress() {
        // Kz·L/r̄o = 176.6 lies past 4.71√(E/Fy) = 111.8, yet Fe = 422 MPa > 0.44·Fy
        let profile = profile();
        let column =
            BeamCompressionEffectiveLength::new(&profile, Quantity::new(10.0, METER), EffectiveLengthFactors::default())
                .unwrap();
        assert!(column.torsional_slenderness() > inelastic_slenderness_limit(200e9, 355e6));
        assert!(approx_eq(column.torsional_equivalent_slenderness(), 68.368, 1e-3));
        assert_eq!(column.torsional_buckling_regime(), BucklingRegime::Inelastic);

        let fe = column.elastic_torsional_buckling_stress().value_in(MEGAPASCAL).unwrap();
        assert!(approx_eq(fe, 422.302, 1e-2));
        let fcr = column.critical_stress_torsional_buckling().value_in(MEGAPASCAL).unwrap();
        assert!(approx_eq(fcr, 249.703, 1e-2));
        assert!(fcr < 355.0);
    }

    #[test]
    fn test_governing_strength() {
        let profile = profile();
        let column =
            BeamCompressionEffectiveLength::new(&profile, Quantity::new(1.0, METER), EffectiveLengthFactors::default())
                .unwrap();
        let table = column.strength_table();
        assert_eq!(table.governing().unwrap().name, STRENGTH_FLEXURAL_BUCKLING);
        assert_eq!(column.nominal_strength().unwrap(), column.strength_flexural_buckling());
    }

    #[test]
    fn test_elastic_regime_for_long_member() {
        let profile = profile();
        let column =
            BeamCompressionEffectiveLength::new(&profile, Quantity::new(5.0, METER), EffectiveLengthFactors::default())
                .unwrap();
        assert!(column.flexural_slenderness() > inelastic_slenderness_limit(200e9, 355e6));
        assert_eq!(column.flexural_buckling_regime(), BucklingRegime::Elastic);
        let fe = column.elastic_flexural_buckling_stress();
        assert!(approx_eq(
            column.critical_stress_flexural_buckling().value(),
            0.877 * fe.value(),
            1e-3
        ));
    }

    #[test]
    fn test_major_axis_can_govern() {
        let profile = profile();
        let factors = EffectiveLengthFactors {
            major_axis: 4.0,
            minor_axis: 0.5,
            torsion: 1.0,
        };
        let column = BeamCompressionEffectiveLength::new(&profile, Quantity::new(1.0, METER), factors).unwrap();
        assert!(column.major_axis_slenderness() > column.minor_axis_slenderness());
        assert_eq!(column.flexural_slenderness(), column.major_axis_slenderness());
    }

    #[test]
    fn test_invalid_inputs() {
        let profile = profile();
        let err = BeamCompressionEffectiveLength::new(
            &profile,
            Quantity::new(1.0, KILONEWTON),
            EffectiveLengthFactors::default(),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "DIMENSION_MISMATCH");

        let factors = EffectiveLengthFactors {
            torsion: 0.0,
            ..EffectiveLengthFactors::default()
        };
        let err = BeamCompressionEffectiveLength::new(&profile, Quantity::new(1000.0, MILLIMETER), factors).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
