//! # Design Settings
//!
//! Design-wide configuration: the design convention (ASD or LRFD) and the
//! resistance factors per limit state. Defaults follow AISC 360 Chapters E
//! and F (Ωc = Ωb = 1.67, φc = φb = 0.90). Settings are plain data and load
//! from JSON.
//!
//! ## Example
//!
//! ```rust
//! use aisc_core::settings::DesignSettings;
//! use aisc_core::criteria::SafetyFactorType;
//!
//! let settings = DesignSettings::from_json(r#"{ "design_method": "LRFD" }"#).unwrap();
//! assert_eq!(settings.design_method, SafetyFactorType::Lrfd);
//! assert_eq!(settings.compression_factor(), 0.90);
//! ```

use serde::{Deserialize, Serialize};

use crate::criteria::{SafetyFactor, SafetyFactorType};
use crate::errors::{CalcError, CalcResult};
use crate::units::Quantity;

/// Safety factor Ωc for compression members (AISC 360 E1)
pub const OMEGA_COMPRESSION: f64 = 1.67;
/// Resistance factor φc for compression members (AISC 360 E1)
pub const PHI_COMPRESSION: f64 = 0.90;
/// Safety factor Ωb for flexural members (AISC 360 F1)
pub const OMEGA_FLEXURE: f64 = 1.67;
/// Resistance factor φb for flexural members (AISC 360 F1)
pub const PHI_FLEXURE: f64 = 0.90;

/// Limit state family, used to pick a factor from the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitStateKind {
    Compression,
    Flexure,
}

/// Global design settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Design convention applied to every strength
    pub design_method: SafetyFactorType,

    pub omega_compression: f64,
    pub phi_compression: f64,
    pub omega_flexure: f64,
    pub phi_flexure: f64,

    /// H1-1 interaction ratio at or below which a member passes
    pub interaction_limit: f64,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            design_method: SafetyFactorType::Asd,
            omega_compression: OMEGA_COMPRESSION,
            phi_compression: PHI_COMPRESSION,
            omega_flexure: OMEGA_FLEXURE,
            phi_flexure: PHI_FLEXURE,
            interaction_limit: 1.0,
        }
    }
}

impl DesignSettings {
    /// ASD settings with AISC default factors
    pub fn asd() -> Self {
        Self::default()
    }

    /// LRFD settings with AISC default factors
    pub fn lrfd() -> Self {
        DesignSettings {
            design_method: SafetyFactorType::Lrfd,
            ..Self::default()
        }
    }

    /// Parse settings from JSON; omitted fields take their defaults.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: DesignSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> CalcResult<()> {
        let factors = [
            ("omega_compression", self.omega_compression),
            ("phi_compression", self.phi_compression),
            ("omega_flexure", self.omega_flexure),
            ("phi_flexure", self.phi_flexure),
            ("interaction_limit", self.interaction_limit),
        ];
        for (field, value) in factors {
            if !(value > 0.0 && value.is_finite()) {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Factor must be a positive number",
                ));
            }
        }
        Ok(())
    }

    /// Numeric factor for a limit state under the active design method
    pub fn factor(&self, kind: LimitStateKind) -> f64 {
        match (self.design_method, kind) {
            (SafetyFactorType::Asd, LimitStateKind::Compression) => self.omega_compression,
            (SafetyFactorType::Lrfd, LimitStateKind::Compression) => self.phi_compression,
            (SafetyFactorType::Asd, LimitStateKind::Flexure) => self.omega_flexure,
            (SafetyFactorType::Lrfd, LimitStateKind::Flexure) => self.phi_flexure,
        }
    }

    pub fn compression_factor(&self) -> f64 {
        self.factor(LimitStateKind::Compression)
    }

    pub fn flexure_factor(&self) -> f64 {
        self.factor(LimitStateKind::Flexure)
    }

    /// Wrap a nominal strength in the safety factor for its limit state
    pub fn safety_factor(&self, nominal: Quantity, kind: LimitStateKind) -> CalcResult<SafetyFactor> {
        SafetyFactor::new(nominal, self.factor(kind), self.design_method)
    }
}
