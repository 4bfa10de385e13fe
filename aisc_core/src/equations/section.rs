//! # Cross-Section Property Formulas
//!
//! Closed-form geometric properties of rectangles and of the doubly-symmetric
//! I-shape built from them (two flange plates plus one web plate).
//!
//! ## Notation
//!
//! - `bf` = Flange width
//! - `tf` = Flange thickness
//! - `tw` = Web thickness
//! - `h`  = Web height (clear distance between flanges)
//! - `d`  = Total height
//! - `ho` = Distance between flange centroids (d − tf)
//!
//! All functions are unit-agnostic: feed consistent units and read the result
//! in the corresponding power of that unit.
//!
//! ## References
//!
//! - AISC Steel Construction Manual, Part 1: Dimensions and Properties
//! - AISC Design Guide 9: Torsional Analysis of Structural Steel Members
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 3

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Cross-sectional area of a rectangle
///
/// # Formula
/// A = b × h
///
/// # Example
/// ```rust
/// use aisc_core::equations::section::rectangular_area;
///
/// let flange = rectangular_area(76.0, 7.6);
/// assert!((flange - 577.6).abs() < 1e-9);
/// ```
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Moment of inertia of a rectangle about its own centroidal axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ════════│ ← axis at h/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bh³/12
///
/// Swap the arguments for the orthogonal axis: I = hb³/12.
///
/// # Reference
/// - Roark's Formulas, Table 3.1
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

// =============================================================================
// DOUBLY-SYMMETRIC I-SHAPE
// =============================================================================

/// Major-axis moment of inertia of a doubly-symmetric I-shape
///
/// # Formula (parallel-axis theorem)
/// Ix = 2 × (bf·tf³/12 + Af·(ho/2)²) + tw·h³/12
pub fn i_major_axis_inertia(bf: f64, tf: f64, tw: f64, h: f64, ho: f64) -> f64 {
    let flange_area = rectangular_area(bf, tf);
    let flange = rectangular_moment_of_inertia(bf, tf) + flange_area * (ho / 2.0).powi(2);
    2.0 * flange + rectangular_moment_of_inertia(tw, h)
}

/// Minor-axis moment of inertia of a doubly-symmetric I-shape
///
/// # Formula
/// Iy = 2 × tf·bf³/12 + h·tw³/12
pub fn i_minor_axis_inertia(bf: f64, tf: f64, tw: f64, h: f64) -> f64 {
    2.0 * rectangular_moment_of_inertia(tf, bf) + rectangular_moment_of_inertia(h, tw)
}

/// Major-axis plastic section modulus
///
/// Half-section (one flange + half the web) area times its centroid
/// distance, doubled:
///
/// # Formula
/// Zx = 2 × (Af·ho/2 + (Aw/2)·(h/4))
pub fn i_major_axis_plastic_modulus(bf: f64, tf: f64, tw: f64, h: f64, ho: f64) -> f64 {
    let flange_area = rectangular_area(bf, tf);
    let half_web_area = rectangular_area(tw, h) / 2.0;
    2.0 * (flange_area * ho / 2.0 + half_web_area * h / 4.0)
}

/// Minor-axis plastic section modulus
///
/// # Formula
/// Zy = 2 × (Af·bf/4 + (Aw/2)·(tw/4))
pub fn i_minor_axis_plastic_modulus(bf: f64, tf: f64, tw: f64, h: f64) -> f64 {
    let flange_area = rectangular_area(bf, tf);
    let half_web_area = rectangular_area(tw, h) / 2.0;
    2.0 * (flange_area * bf / 4.0 + half_web_area * tw / 4.0)
}

/// Warping constant of a doubly-symmetric I-shape
///
/// # Formula
/// Cw = Iy·ho²/4
///
/// # Reference
/// - AISC 360-16 Commentary, Eq. C-F2-4 context; Design Guide 9, Eq. 3.5
pub fn i_warping_constant(minor_axis_inertia: f64, ho: f64) -> f64 {
    minor_axis_inertia * ho.powi(2) / 4.0
}

/// Torsional constant of a doubly-symmetric I-shape (thin-walled open section)
///
/// # Formula
/// J = (2·bf·tf³ + ho·tw³) / 3
///
/// # Reference
/// - AISC Design Guide 9, Eq. 3.4
pub fn i_torsional_constant(bf: f64, tf: f64, tw: f64, ho: f64) -> f64 {
    (2.0 * bf * tf.powi(3) + ho * tw.powi(3)) / 3.0
}

/// Radius of gyration r = √(I/A)
#[inline]
pub fn radius_of_gyration(inertia: f64, area: f64) -> f64 {
    (inertia / area).sqrt()
}

/// Polar radius of gyration about the shear center of a doubly-symmetric
/// section, r̄o = √((Ix + Iy)/A)
///
/// # Reference
/// - AISC 360-16 Eq. E4-9 with xo = yo = 0
#[inline]
pub fn polar_radius_of_gyration(major_inertia: f64, minor_inertia: f64, area: f64) -> f64 {
    ((major_inertia + minor_inertia) / area).sqrt()
}

// =============================================================================
// UNIT TESTS
// =============================================================================
