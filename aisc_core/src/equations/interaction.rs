//! # Combined Axial Force and Flexure (AISC 360-16 H1.1)
//!
//! Interaction of axial compression with biaxial bending for doubly- and
//! singly-symmetric members.
//!
//! ```text
//! Pr/Pc ≥ 0.2:  Pr/Pc      + 8/9·(Mrx/Mcx + Mry/Mcy) ≤ 1.0    (H1-1a)
//! Pr/Pc < 0.2:  Pr/(2·Pc)  +     (Mrx/Mcx + Mry/Mcy) ≤ 1.0    (H1-1b)
//! ```

/// Axial ratio at which H1-1a takes over from H1-1b
pub const AXIAL_RATIO_THRESHOLD: f64 = 0.2;

/// H1-1a, for Pr/Pc ≥ 0.2
pub fn interaction_h1_1a(axial_ratio: f64, major_ratio: f64, minor_ratio: f64) -> f64 {
    axial_ratio + 8.0 / 9.0 * (major_ratio + minor_ratio)
}

/// H1-1b, for Pr/Pc < 0.2
pub fn interaction_h1_1b(axial_ratio: f64, major_ratio: f64, minor_ratio: f64) -> f64 {
    axial_ratio / 2.0 + (major_ratio + minor_ratio)
}
