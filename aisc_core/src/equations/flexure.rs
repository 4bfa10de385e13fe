//! # Flexural Member Formulas (AISC 360-16 Chapter F)
//!
//! Yielding, lateral-torsional buckling (LTB) and flange local buckling (FLB)
//! of doubly-symmetric I-shapes bent about either principal axis.
//!
//! ## Lateral-Torsional Buckling Zones (F2)
//!
//! ```text
//!   Mn
//!    │ Mp ───────╮
//!    │           │╲  (B) linear to 0.7·Fy·Sx
//!    │           │  ╲______
//!    │           │         ╲___ (C) Fcr·Sx
//!    └───────────┼──────┼──────────→ Lb
//!               Lp      Lr
//! ```
//!
//! ## Notation
//!
//! - `Lb`  = Unbraced length of the compression flange
//! - `rts` = Effective radius of gyration for LTB
//! - `c`   = 1.0 for doubly-symmetric I-shapes
//! - `ho`  = Distance between flange centroids

use std::f64::consts::PI;

/// F2-8a: c = 1 for doubly-symmetric I-shapes
pub const DOUBLY_SYMMETRIC_C: f64 = 1.0;

// =============================================================================
// YIELDING
// =============================================================================

/// Plastic moment Mp = Fy·Z (F2-1, F6-1)
#[inline]
pub fn plastic_moment(fy: f64, plastic_modulus: f64) -> f64 {
    fy * plastic_modulus
}

/// Minor-axis yielding moment
///
/// # Formula (F6-1)
/// Mn = Mp = Fy·Zy ≤ 1.6·Fy·Sy
pub fn minor_axis_yield_moment(fy: f64, plastic_modulus: f64, elastic_modulus: f64) -> f64 {
    plastic_moment(fy, plastic_modulus).min(1.6 * fy * elastic_modulus)
}

// =============================================================================
// LATERAL-TORSIONAL BUCKLING
// =============================================================================

/// Effective radius of gyration
///
/// # Formula (F2-7)
/// rts² = √(Iy·Cw) / Sx
pub fn effective_radius_of_gyration(minor_inertia: f64, warping_constant: f64, major_elastic_modulus: f64) -> f64 {
    ((minor_inertia * warping_constant).sqrt() / major_elastic_modulus).sqrt()
}

/// Limiting unbraced length for the limit state of yielding
///
/// # Formula (F2-5)
/// Lp = 1.76·ry·√(E/Fy)
pub fn limiting_length_yield(minor_radius: f64, e: f64, fy: f64) -> f64 {
    1.76 * minor_radius * (e / fy).sqrt()
}

/// Limiting unbraced length for inelastic lateral-torsional buckling
///
/// # Formula (F2-6)
/// Lr = 1.95·rts·(E/0.7Fy)·√( J·c/(Sx·ho) + √((J·c/(Sx·ho))² + 6.76·(0.7Fy/E)²) )
pub fn limiting_length_lateral_torsional(
    rts: f64,
    e: f64,
    fy: f64,
    torsional_constant: f64,
    c: f64,
    major_elastic_modulus: f64,
    ho: f64,
) -> f64 {
    let jc = torsional_constant * c / (major_elastic_modulus * ho);
    let stress_ratio = 0.7 * fy / e;
    1.95 * rts * (e / (0.7 * fy)) * (jc + (jc.powi(2) + 6.76 * stress_ratio.powi(2)).sqrt()).sqrt()
}

/// Inelastic lateral-torsional buckling moment, Lp < Lb ≤ Lr
///
/// # Formula (F2-2)
/// Mn = Cb·[Mp − (Mp − 0.7·Fy·Sx)·(Lb − Lp)/(Lr − Lp)] ≤ Mp
pub fn lateral_torsional_inelastic_moment(
    cb: f64,
    mp: f64,
    fy: f64,
    major_elastic_modulus: f64,
    lb: f64,
    lp: f64,
    lr: f64,
) -> f64 {
    let reduced = mp - (mp - 0.7 * fy * major_elastic_modulus) * (lb - lp) / (lr - lp);
    (cb * reduced).min(mp)
}

/// Elastic lateral-torsional buckling critical stress, Lb > Lr
///
/// # Formula (F2-4)
/// Fcr = Cb·π²E/(Lb/rts)² · √(1 + 0.078·J·c/(Sx·ho)·(Lb/rts)²)
#[allow(clippy::too_many_arguments)]
pub fn lateral_torsional_critical_stress(
    cb: f64,
    e: f64,
    lb: f64,
    rts: f64,
    torsional_constant: f64,
    c: f64,
    major_elastic_modulus: f64,
    ho: f64,
) -> f64 {
    let slenderness_sq = (lb / rts).powi(2);
    let jc = torsional_constant * c / (major_elastic_modulus * ho);
    cb * PI.powi(2) * e / slenderness_sq * (1.0 + 0.078 * jc * slenderness_sq).sqrt()
}

/// Lateral-torsional buckling modification factor
///
/// # Formula (F1-1)
/// Cb = 12.5·Mmax / (2.5·Mmax + 3·MA + 4·MB + 3·MC)
///
/// Moments are taken as absolute values at the quarter (MA), centre (MB)
/// and three-quarter (MC) points of the unbraced segment.
pub fn moment_gradient_factor(m_max: f64, m_a: f64, m_b: f64, m_c: f64) -> f64 {
    let m_max = m_max.abs();
    12.5 * m_max / (2.5 * m_max + 3.0 * m_a.abs() + 4.0 * m_b.abs() + 3.0 * m_c.abs())
}

// =============================================================================
// FLANGE LOCAL BUCKLING
// =============================================================================

/// Flange local buckling moment of a section with noncompact flanges
///
/// # Formula (F3-1, F6-2)
/// Mn = Mp − (Mp − 0.7·Fy·S)·(λ − λpf)/(λrf − λpf)
pub fn flange_local_buckling_noncompact(
    mp: f64,
    fy: f64,
    elastic_modulus: f64,
    ratio: f64,
    compact_limit: f64,
    slender_limit: f64,
) -> f64 {
    mp - (mp - 0.7 * fy * elastic_modulus) * (ratio - compact_limit) / (slender_limit - compact_limit)
}
