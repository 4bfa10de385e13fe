//! # Member Check
//!
//! A [`Beam`] is a section profile over an unbraced length, with effective
//! length factors for compression and a Cb factor for flexure. It hands out
//! the compression and flexure calculators, and [`Beam::check`] runs the full
//! demand-versus-capacity check for one set of required strengths.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use aisc_core::calculations::{Beam, EffectiveLengthFactors, MemberDemand};
//! use aisc_core::materials::{builtin_rolled_shapes, IsotropicMaterial, SteelGrade};
//! use aisc_core::section::DoublySymmetricIUserDefined;
//! use aisc_core::settings::DesignSettings;
//! use aisc_core::units::{Quantity, KILONEWTON, KILONEWTON_METER, METER};
//!
//! let steel = Arc::new(IsotropicMaterial::from_grade(SteelGrade::S355));
//! let shape = builtin_rolled_shapes().lookup("127X76X13").unwrap().clone();
//! let profile = Arc::new(DoublySymmetricIUserDefined::from_catalog(&shape, steel).unwrap());
//!
//! let beam = Beam::new(profile, Quantity::new(1.0, METER), EffectiveLengthFactors::default()).unwrap();
//! let demand = MemberDemand {
//!     axial: Quantity::new(100.0, KILONEWTON),
//!     major_moment: Quantity::new(5.0, KILONEWTON_METER),
//!     minor_moment: Quantity::new(1.0, KILONEWTON_METER),
//! };
//!
//! let check = beam.check(&demand, &DesignSettings::asd()).unwrap();
//! assert!(check.passes);
//! println!("{}", serde_json::to_string_pretty(&check).unwrap());
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::compression::{ensure_positive_length, BeamCompressionEffectiveLength, EffectiveLengthFactors};
use crate::calculations::flexure::{BeamFlexureDoublySymmetric, MomentDiagram};
use crate::calculations::interaction::{AxialFlexureInteraction, InteractionResult};
use crate::criteria::{Criteria, SafetyFactorType};
use crate::errors::{CalcError, CalcResult};
use crate::report::StrengthTable;
use crate::section::SectionProfile;
use crate::settings::{DesignSettings, LimitStateKind};
use crate::units::{Dimension, Quantity};

/// Required strengths acting on a member.
///
/// Axial force is compression-positive; moment signs are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemberDemand {
    /// Pr
    pub axial: Quantity,
    /// Mrx
    pub major_moment: Quantity,
    /// Mry
    pub minor_moment: Quantity,
}

impl MemberDemand {
    pub fn validate(&self) -> CalcResult<()> {
        self.axial.ensure_dimension(Dimension::FORCE, "axial")?;
        self.major_moment.ensure_dimension(Dimension::MOMENT, "major_moment")?;
        self.minor_moment.ensure_dimension(Dimension::MOMENT, "minor_moment")?;
        Ok(())
    }
}

/// Outcome of [`Beam::check`].
#[derive(Debug, Clone, Serialize)]
pub struct MemberCheck {
    pub label: String,
    pub design_method: SafetyFactorType,

    // === Available strengths ===
    pub compression: StrengthTable,
    pub flexure_major_axis: StrengthTable,
    pub flexure_minor_axis: StrengthTable,

    // === Demand vs capacity ===
    pub axial: Criteria,
    pub major_moment: Criteria,
    pub minor_moment: Criteria,
    pub interaction: InteractionResult,

    /// Every criterion and the interaction check pass
    pub passes: bool,
}

/// Section profile over an unbraced length.
#[derive(Debug, Clone)]
pub struct Beam {
    profile: Arc<dyn SectionProfile>,
    unbraced_length: Quantity,
    factors: EffectiveLengthFactors,
    cb: f64,
}

impl Beam {
    /// Member with uniform moment (Cb = 1)
    pub fn new(
        profile: Arc<dyn SectionProfile>,
        unbraced_length: Quantity,
        factors: EffectiveLengthFactors,
    ) -> CalcResult<Self> {
        ensure_positive_length("unbraced_length", unbraced_length)?;
        factors.validate()?;
        Ok(Beam {
            profile,
            unbraced_length,
            factors,
            cb: 1.0,
        })
    }

    pub fn with_cb(mut self, cb: f64) -> CalcResult<Self> {
        if !(cb > 0.0 && cb.is_finite()) {
            return Err(CalcError::invalid_input("cb", cb.to_string(), "Cb must be positive"));
        }
        self.cb = cb;
        Ok(self)
    }

    pub fn with_moment_diagram(self, diagram: &MomentDiagram) -> CalcResult<Self> {
        let cb = diagram.cb()?;
        self.with_cb(cb)
    }

    pub fn profile(&self) -> &dyn SectionProfile {
        self.profile.as_ref()
    }

    pub fn unbraced_length(&self) -> Quantity {
        self.unbraced_length
    }

    pub fn factors(&self) -> EffectiveLengthFactors {
        self.factors
    }

    pub fn cb(&self) -> f64 {
        self.cb
    }

    pub fn compression(&self) -> CalcResult<BeamCompressionEffectiveLength<'_>> {
        BeamCompressionEffectiveLength::new(self.profile.as_ref(), self.unbraced_length, self.factors)
    }

    pub fn flexure(&self) -> CalcResult<BeamFlexureDoublySymmetric<'_>> {
        BeamFlexureDoublySymmetric::new(self.profile.as_ref(), self.unbraced_length, self.cb)
    }

    /// Check the member against `demand` under `settings`.
    ///
    /// Available strengths are the governing nominal strengths reduced by
    /// the compression or flexure factor of the design method.
    pub fn check(&self, demand: &MemberDemand, settings: &DesignSettings) -> CalcResult<MemberCheck> {
        settings.validate()?;
        demand.validate()?;

        let compression = self.compression()?.strength_table();
        let flexure = self.flexure()?;
        let flexure_major_axis = flexure.major_axis_strength_table()?;
        let flexure_minor_axis = flexure.minor_axis_strength_table()?;

        let axial = Criteria::new(
            demand.axial,
            settings.safety_factor(compression.governing()?.value, LimitStateKind::Compression)?,
        )?;
        let major_moment = Criteria::new(
            demand.major_moment.abs(),
            settings.safety_factor(flexure_major_axis.governing()?.value, LimitStateKind::Flexure)?,
        )?;
        let minor_moment = Criteria::new(
            demand.minor_moment.abs(),
            settings.safety_factor(flexure_minor_axis.governing()?.value, LimitStateKind::Flexure)?,
        )?;

        let interaction = AxialFlexureInteraction {
            required_axial: demand.axial,
            available_axial: axial.allowable_value(),
            required_major_moment: demand.major_moment,
            available_major_moment: major_moment.allowable_value(),
            required_minor_moment: demand.minor_moment,
            available_minor_moment: minor_moment.allowable_value(),
        }
        .evaluate()?;

        let passes = axial.passes()
            && major_moment.passes()
            && minor_moment.passes()
            && interaction.passes(settings.interaction_limit);
        debug!(
            profile = self.profile.label(),
            method = %settings.design_method,
            interaction = interaction.ratio,
            passes,
            "member check"
        );

        Ok(MemberCheck {
            label: self.profile.label().to_string(),
            design_method: settings.design_method,
            compression: compression.allowable(settings, LimitStateKind::Compression)?,
            flexure_major_axis: flexure_major_axis.allowable(settings, LimitStateKind::Flexure)?,
            flexure_minor_axis: flexure_minor_axis.allowable(settings, LimitStateKind::Flexure)?,
            axial,
            major_moment,
            minor_moment,
            interaction,
            passes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::interaction::InteractionEquation;
    use crate::materials::{builtin_rolled_shapes, IsotropicMaterial, SteelGrade};
    use crate::section::DoublySymmetricIUserDefined;
    use crate::units::{KILONEWTON, KILONEWTON_METER, MEGAPASCAL, METER};

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn beam(length_m: f64) -> Beam {
        let steel = Arc::new(IsotropicMaterial::from_grade(SteelGrade::S355));
        let shape = builtin_rolled_shapes().lookup("127X76X13").unwrap().clone();
        let profile = Arc::new(DoublySymmetricIUserDefined::from_catalog(&shape, steel).unwrap());
        Beam::new(profile, Quantity::new(length_m, METER), EffectiveLengthFactors::default()).unwrap()
    }

    fn demand(axial_kn: f64, major_knm: f64, minor_knm: f64) -> MemberDemand {
        MemberDemand {
            axial: Quantity::new(axial_kn, KILONEWTON),
            major_moment: Quantity::new(major_knm, KILONEWTON_METER),
            minor_moment: Quantity::new(minor_knm, KILONEWTON_METER),
        }
    }

    #[test]
    fn test_check_asd() {
        let check = beam(1.0).check(&demand(100.0, 5.0, 1.0), &DesignSettings::asd()).unwrap();
        assert_eq!(check.design_method, SafetyFactorType::Asd);
        assert_eq!(check.interaction.equation, InteractionEquation::HighAxial);
        assert!(approx_eq(check.interaction.axial_ratio, 0.355899, 1e-5));
        assert!(approx_eq(check.interaction.ratio, 0.800281, 1e-5));
        assert!(check.passes);
        assert_eq!(check.compression.title, "compression (ASD)");
    }

    #[test]
    fn test_check_lrfd() {
        let check = beam(1.0).check(&demand(100.0, 5.0, 1.0), &DesignSettings::lrfd()).unwrap();
        assert!(approx_eq(check.interaction.ratio, 0.532456, 1e-5));
        let pc = check.axial.allowable_value().value_in(KILONEWTON).unwrap();
        assert!(approx_eq(pc, 0.9 * 469.2346, 1e-3));
    }

    #[test]
    fn test_overloaded_member_fails() {
        let check = beam(1.0).check(&demand(300.0, 5.0, 1.0), &DesignSettings::asd()).unwrap();
        assert!(!check.axial.passes());
        assert!(!check.passes);
    }

    #[test]
    fn test_interaction_alone_can_fail() {
        // every ratio below one, their combination above
        let check = beam(1.0).check(&demand(150.0, 8.0, 1.0), &DesignSettings::asd()).unwrap();
        assert!(check.axial.passes() && check.major_moment.passes() && check.minor_moment.passes());
        assert!(check.interaction.ratio > 1.0);
        assert!(!check.passes);
    }

    #[test]
    fn test_cb_from_diagram() {
        let diagram = MomentDiagram {
            max: Quantity::new(10.0, KILONEWTON_METER),
            quarter: Quantity::new(7.5, KILONEWTON_METER),
            mid: Quantity::new(10.0, KILONEWTON_METER),
            three_quarter: Quantity::new(7.5, KILONEWTON_METER),
        };
        let graded = beam(2.0).with_moment_diagram(&diagram).unwrap();
        assert!(approx_eq(graded.cb(), 1.136364, 1e-6));
        let a = beam(2.0).flexure().unwrap().nominal_strength_major_axis().unwrap();
        let b = graded.flexure().unwrap().nominal_strength_major_axis().unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_demand_dimensions_checked() {
        let mut bad = demand(100.0, 5.0, 1.0);
        bad.major_moment = Quantity::new(5.0, MEGAPASCAL);
        let err = beam(1.0).check(&bad, &DesignSettings::asd()).unwrap_err();
        assert_eq!(err.error_code(), "DIMENSION_MISMATCH");
    }

    #[test]
    fn test_invalid_member() {
        let b = beam(1.0);
        let profile: Arc<dyn SectionProfile> = Arc::clone(&b.profile);
        assert!(Beam::new(Arc::clone(&profile), Quantity::new(0.0, METER), EffectiveLengthFactors::default()).is_err());
        assert!(b.with_cb(-1.0).is_err());
    }

    #[test]
    fn test_check_serializes() {
        let check = beam(1.0).check(&demand(100.0, 5.0, 1.0), &DesignSettings::asd()).unwrap();
        let json = serde_json::to_string(&check).unwrap();
        assert!(json.contains("\"design_method\":\"ASD\""));
        assert!(json.contains("strength lateral torsion"));
        assert!(json.contains("H1-1a"));
    }
}
