//! # Width-to-Thickness Limits (AISC 360-16 Table B4.1)
//!
//! Limiting width-to-thickness ratios for the flange and web plates of
//! doubly-symmetric I-shapes. Every limit scales with √(E/Fy); the
//! coefficient depends on the element, the stress state and, for flanges,
//! on whether the shape is rolled or built-up.
//!
//! ## Notation
//!
//! - `E`  = Modulus of elasticity
//! - `Fy` = Specified minimum yield stress
//! - `kc` = Built-up flange coefficient, 4/√(h/tw) clamped to [0.35, 0.76]
//!
//! ```text
//! Table B4.1a (compression)           λr
//!   Case 1  rolled flange             0.56 √(E/Fy)
//!   Case 2  built-up flange           0.64 √(kc·E/Fy)
//!   Case 5  web                       1.49 √(E/Fy)
//!
//! Table B4.1b (flexure)               λp               λr
//!   Case 10 rolled flange             0.38 √(E/Fy)     1.0 √(E/Fy)
//!   Case 11 built-up flange           0.38 √(E/Fy)     0.95 √(kc·E/FL)
//!   Case 15 web                       3.76 √(E/Fy)     5.70 √(E/Fy)
//! ```
//!
//! FL is taken as 0.7·Fy (AISC 360-16 Eq. F4-6a, Sxt/Sxc ≥ 0.7).

/// Lower bound of the built-up flange coefficient kc
pub const KC_MIN: f64 = 0.35;
/// Upper bound of the built-up flange coefficient kc
pub const KC_MAX: f64 = 0.76;

/// √(E/Fy), the scale of every width-to-thickness limit
#[inline]
pub fn modulus_ratio_root(e: f64, fy: f64) -> f64 {
    (e / fy).sqrt()
}

/// Built-up flange coefficient (Table B4.1 note [a])
///
/// # Formula
/// kc = 4/√(h/tw), 0.35 ≤ kc ≤ 0.76
pub fn kc_coefficient(web_height: f64, web_thickness: f64) -> f64 {
    (4.0 / (web_height / web_thickness).sqrt()).clamp(KC_MIN, KC_MAX)
}

// =============================================================================
// AXIAL COMPRESSION (Table B4.1a)
// =============================================================================

/// Case 1: flange of a rolled I-shape in uniform compression
pub fn flange_axial_limit_rolled(e: f64, fy: f64) -> f64 {
    0.56 * modulus_ratio_root(e, fy)
}

/// Case 2: flange of a built-up I-shape in uniform compression
pub fn flange_axial_limit_built_up(e: f64, fy: f64, kc: f64) -> f64 {
    0.64 * (kc * e / fy).sqrt()
}

/// Case 5: web of a doubly-symmetric I-shape in uniform compression
pub fn web_axial_limit(e: f64, fy: f64) -> f64 {
    1.49 * modulus_ratio_root(e, fy)
}

// =============================================================================
// FLEXURE (Table B4.1b)
// =============================================================================

/// Cases 10 and 11: compact limit λpf of a flange in flexure
pub fn flange_flexural_compact_limit(e: f64, fy: f64) -> f64 {
    0.38 * modulus_ratio_root(e, fy)
}

/// Case 10: noncompact limit λrf of a rolled flange in flexure
pub fn flange_flexural_slender_limit_rolled(e: f64, fy: f64) -> f64 {
    modulus_ratio_root(e, fy)
}

/// Case 11: noncompact limit λrf of a built-up flange in flexure
///
/// # Formula
/// λrf = 0.95 √(kc·E/FL), FL = 0.7·Fy
pub fn flange_flexural_slender_limit_built_up(e: f64, fy: f64, kc: f64) -> f64 {
    0.95 * (kc * e / (0.7 * fy)).sqrt()
}

/// Case 15: compact limit λpw of a doubly-symmetric I-shape web in flexure
pub fn web_flexural_compact_limit(e: f64, fy: f64) -> f64 {
    3.76 * modulus_ratio_root(e, fy)
}

/// Case 15: noncompact limit λrw of a doubly-symmetric I-shape web in flexure
pub fn web_flexural_slender_limit(e: f64, fy: f64) -> f64 {
    5.70 * modulus_ratio_root(e, fy)
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: f64 = 200_000.0;
    const FY: f64 = 355.0;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_kc_clamped() {
        // h/tw = 96.6/4 = 24.15 → 4/√24.15 = 0.814 → clamped
        assert_eq!(kc_coefficient(96.6, 4.0), KC_MAX);
        // h/tw = 400 → 0.2 → clamped up
        assert_eq!(kc_coefficient(400.0, 1.0), KC_MIN);
        // h/tw = 64 → 0.5 inside the band
        assert!(approx_eq(kc_coefficient(64.0, 1.0), 0.5, 1e-12));
    }

    #[test]
    fn test_flange_axial_limits() {
        assert!(approx_eq(flange_axial_limit_rolled(E, FY), 13.292, 1e-3));
        assert!(approx_eq(flange_axial_limit_built_up(E, FY, 0.76), 13.243, 1e-3));
    }

    #[test]
    fn test_flexural_limits_ordered() {
        assert!(flange_flexural_compact_limit(E, FY) < flange_flexural_slender_limit_rolled(E, FY));
        assert!(flange_flexural_compact_limit(E, FY) < flange_flexural_slender_limit_built_up(E, FY, 0.76));
        assert!(web_flexural_compact_limit(E, FY) < web_flexural_slender_limit(E, FY));
        assert!(approx_eq(web_axial_limit(E, FY), 35.366, 1e-3));
    }
}
