//! # Compression Member Formulas (AISC 360-16 Chapter E)
//!
//! Elastic buckling stresses and the critical-stress curve shared by flexural
//! buckling (E3) and torsional buckling (E4) of doubly-symmetric members
//! without slender elements.
//!
//! ## Critical Stress Curve (E3-2, E3-3)
//!
//! ```text
//!   Fcr
//!    │ Fy ──╮
//!    │       ╲  Fy·0.658^(Fy/Fe)      (inelastic)
//!    │        ╲
//!    │         ╲___
//!    │             ╲____ 0.877·Fe     (elastic)
//!    └──────────┼────────────────→ KL/r
//!            4.71√(E/Fy)
//! ```
//!
//! The two branches meet at KL/r = 4.71√(E/Fy) (where Fe ≈ 0.44·Fy) to within
//! 0.1%, so the curve has no practical jump at the threshold.

use std::f64::consts::PI;

/// Slenderness separating inelastic and elastic buckling, 4.71√(E/Fy)
pub fn inelastic_slenderness_limit(e: f64, fy: f64) -> f64 {
    4.71 * (e / fy).sqrt()
}

/// Elastic flexural buckling stress
///
/// # Formula (E3-4)
/// Fe = π²E / (Lc/r)²
pub fn elastic_buckling_stress(e: f64, slenderness: f64) -> f64 {
    PI.powi(2) * e / slenderness.powi(2)
}

/// Elastic torsional buckling stress of a doubly-symmetric member
///
/// # Formula (E4-2)
/// Fe = (π²E·Cw/Lcz² + G·J) · 1/(Ix + Iy)
///
/// # Arguments
/// * `effective_length` - Lcz = Kz·L about the longitudinal axis
pub fn torsional_elastic_buckling_stress(
    e: f64,
    g: f64,
    warping_constant: f64,
    torsional_constant: f64,
    effective_length: f64,
    major_inertia: f64,
    minor_inertia: f64,
) -> f64 {
    let warping = PI.powi(2) * e * warping_constant / effective_length.powi(2);
    (warping + g * torsional_constant) / (major_inertia + minor_inertia)
}

/// Slenderness whose E3-4 elastic stress equals `fe`, π√(E/Fe)
///
/// Used to place a torsional buckling stress on the E3 curve.
pub fn equivalent_slenderness(e: f64, fe: f64) -> f64 {
    PI * (e / fe).sqrt()
}

/// E3-2: Fcr = 0.658^(Fy/Fe) · Fy
pub fn critical_stress_inelastic(fy: f64, fe: f64) -> f64 {
    0.658_f64.powf(fy / fe) * fy
}

/// E3-3: Fcr = 0.877 · Fe
pub fn critical_stress_elastic(fe: f64) -> f64 {
    0.877 * fe
}

/// Whether a member of the given slenderness buckles inelastically
///
/// The threshold itself belongs to the inelastic branch.
pub fn is_inelastic(slenderness: f64, e: f64, fy: f64) -> bool {
    slenderness <= inelastic_slenderness_limit(e, fy)
}

/// Critical stress Fcr for a member of slenderness `slenderness` whose
/// elastic buckling stress is `fe`
pub fn critical_stress(slenderness: f64, fe: f64, e: f64, fy: f64) -> f64 {
    if is_inelastic(slenderness, e, fy) {
        critical_stress_inelastic(fy, fe)
    } else {
        critical_stress_elastic(fe)
    }
}
