//! # aisc_core - Steel Member Capacity Engine
//!
//! `aisc_core` checks doubly-symmetric I-shaped steel members for axial
//! compression, flexure and their interaction following AISC 360-16. Every
//! quantity carries its physical dimension, and mixing dimensions fails with a
//! structured error instead of producing a wrong number.
//!
//! ## Design Philosophy
//!
//! - **Layered**: dimensions → area properties → slenderness → strengths → criteria
//! - **Pure**: derived values are functions of immutable inputs, computed once
//! - **JSON-First**: results, tables and settings implement Serialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use aisc_core::calculations::{Beam, EffectiveLengthFactors};
//! use aisc_core::materials::{builtin_rolled_shapes, IsotropicMaterial, SteelGrade};
//! use aisc_core::section::DoublySymmetricIUserDefined;
//! use aisc_core::units::{Quantity, KILONEWTON, METER};
//!
//! let steel = Arc::new(IsotropicMaterial::from_grade(SteelGrade::S355));
//! let shape = builtin_rolled_shapes().lookup("127X76X13").unwrap().clone();
//! let profile = Arc::new(DoublySymmetricIUserDefined::from_catalog(&shape, steel).unwrap());
//!
//! let beam = Beam::new(profile, Quantity::new(1.0, METER), EffectiveLengthFactors::default()).unwrap();
//! let pn = beam.compression().unwrap().nominal_strength().unwrap();
//! println!("Pn = {:.1} kN", pn.value_in(KILONEWTON).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Dimensioned quantities and unit constants
//! - [`materials`] - Steel grades and the rolled-shape catalog
//! - [`section`] - Dimensions, area properties, slenderness and profiles
//! - [`equations`] - Closed-form AISC equations on plain numbers
//! - [`calculations`] - Compression, flexure and interaction of members
//! - [`criteria`] - Safety factors and demand/capacity checks
//! - [`settings`] - Design method and resistance factors
//! - [`report`] - Tabular projections for external presentation
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod criteria;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod report;
pub mod section;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{Beam, MemberCheck, MemberDemand};
pub use criteria::{Criteria, SafetyFactor, SafetyFactorType};
pub use errors::{CalcError, CalcResult};
pub use settings::DesignSettings;
pub use units::Quantity;
