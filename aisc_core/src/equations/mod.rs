//! # Structural Steel Equations
//!
//! Closed-form AISC 360-16 equations used by the section and member
//! calculations. Keeping every formula in one place makes each one easy to
//! verify against its code reference.
//!
//! All functions take and return plain `f64` values in any consistent unit
//! system. Dimension checking happens one layer up, where
//! [`Quantity`](crate::units::Quantity) inputs are validated and unwrapped
//! to base units before calling in here.
//!
//! ## Modules
//!
//! - [`section`] - Rectangle and doubly-symmetric I-shape properties
//! - [`local_buckling`] - Table B4.1 width-to-thickness limits
//! - [`compression`] - Chapter E flexural and torsional buckling
//! - [`flexure`] - Chapter F yielding, LTB and flange local buckling
//! - [`interaction`] - Chapter H combined axial and flexure
//!
//! ## References
//!
//! - AISC 360-16: Specification for Structural Steel Buildings
//! - AISC Design Guide 9: Torsional Analysis of Structural Steel Members
//! - Roark's Formulas for Stress and Strain, 8th Edition

pub mod compression;
pub mod flexure;
pub mod interaction;
pub mod local_buckling;
pub mod section;

pub use compression::{
    critical_stress,
    elastic_buckling_stress,
    equivalent_slenderness,
    inelastic_slenderness_limit,
    torsional_elastic_buckling_stress,
};

pub use flexure::{
    effective_radius_of_gyration,
    lateral_torsional_critical_stress,
    lateral_torsional_inelastic_moment,
    limiting_length_lateral_torsional,
    limiting_length_yield,
    moment_gradient_factor,
};

pub use local_buckling::kc_coefficient;

pub use section::{
    rectangular_area,
    rectangular_moment_of_inertia,
    radius_of_gyration,
};
