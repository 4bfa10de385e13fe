//! Rolled I-Shape Catalog
//!
//! Dimensions and tabulated section properties for a set of common hot-rolled
//! doubly-symmetric I-shapes, for building profiles without entering every
//! property by hand.
//!
//! ## Data Source
//!
//! - UB shapes: BS 4-1:2005 / SCI P363 (Blue Book)
//! - IPE shapes: EN 10365:2017
//!
//! Values are stored in the units the tables are printed in (mm, cm², cm³,
//! cm⁴, dm⁶). `web_height_mm` is the depth of the web between fillets.
//!
//! ## Example
//!
//! ```rust
//! use aisc_core::materials::builtin_rolled_shapes;
//!
//! let catalog = builtin_rolled_shapes();
//! let shape = catalog.lookup("127x76x13").unwrap();
//! assert_eq!(shape.depth_mm, 127.0);
//! assert!(catalog.lookup("W14X90").is_err());
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::section::{DoublySymmetricIDimensions, GenericAreaProperties};
use crate::units::{
    Quantity, CENTIMETER_4, CUBIC_CENTIMETER, DECIMETER_6, MILLIMETER, SQUARE_CENTIMETER,
};

/// Rolled I-shape series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeFamily {
    /// Universal beam (BS 4-1)
    UB,
    /// European I-beam (EN 10365)
    IPE,
}

impl ShapeFamily {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeFamily::UB => "Universal Beam (UB)",
            ShapeFamily::IPE => "European I-Beam (IPE)",
        }
    }
}

impl fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Rolled I-shape with tabulated properties.
///
/// Major axis is x-x, minor axis is y-y.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolledShape {
    pub family: ShapeFamily,

    /// Designation, e.g. "127X76X13", "IPE200"
    pub label: String,

    // === Dimensions ===
    pub depth_mm: f64,
    pub flange_width_mm: f64,
    pub web_thickness_mm: f64,
    pub flange_thickness_mm: f64,
    /// Depth between fillets
    pub web_height_mm: f64,

    // === Section Properties ===
    pub area_cm2: f64,
    pub ix_cm4: f64,
    pub iy_cm4: f64,
    pub sx_cm3: f64,
    pub sy_cm3: f64,
    pub zx_cm3: f64,
    pub zy_cm3: f64,

    // === Torsional Properties ===
    pub j_cm4: f64,
    pub cw_dm6: f64,
}

impl RolledShape {
    pub fn dimensions(&self) -> CalcResult<DoublySymmetricIDimensions> {
        DoublySymmetricIDimensions::new(
            Quantity::new(self.flange_width_mm, MILLIMETER),
            Quantity::new(self.flange_thickness_mm, MILLIMETER),
            Quantity::new(self.web_thickness_mm, MILLIMETER),
            Quantity::new(self.depth_mm, MILLIMETER),
            Some(Quantity::new(self.web_height_mm, MILLIMETER)),
        )
    }

    /// Tabulated properties; radii of gyration are back-filled
    pub fn area_properties(&self) -> CalcResult<GenericAreaProperties> {
        GenericAreaProperties::builder()
            .area(Quantity::new(self.area_cm2, SQUARE_CENTIMETER))
            .major_axis_inertia(Quantity::new(self.ix_cm4, CENTIMETER_4))
            .minor_axis_inertia(Quantity::new(self.iy_cm4, CENTIMETER_4))
            .major_axis_elastic_section_modulus(Quantity::new(self.sx_cm3, CUBIC_CENTIMETER))
            .minor_axis_elastic_section_modulus(Quantity::new(self.sy_cm3, CUBIC_CENTIMETER))
            .major_axis_plastic_section_modulus(Quantity::new(self.zx_cm3, CUBIC_CENTIMETER))
            .minor_axis_plastic_section_modulus(Quantity::new(self.zy_cm3, CUBIC_CENTIMETER))
            .torsional_constant(Quantity::new(self.j_cm4, CENTIMETER_4))
            .warping_constant(Quantity::new(self.cw_dm6, DECIMETER_6))
            .build()
    }
}

impl fmt::Display for RolledShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (A={:.1} cm², Ix={:.0} cm⁴, Sx={:.1} cm³)",
            self.label, self.area_cm2, self.ix_cm4, self.sx_cm3
        )
    }
}

/// Shapes indexed by normalized label.
#[derive(Debug, Clone, Default)]
pub struct ShapeCatalog {
    shapes: HashMap<String, RolledShape>,
}

/// Upper-case, no spaces, "×" written as "X"
fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_uppercase()
        .replace('×', "X")
        .replace(' ', "")
}

impl ShapeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, shape: RolledShape) {
        self.shapes.insert(normalize_label(&shape.label), shape);
    }

    /// Look up a shape by designation.
    ///
    /// Matching ignores case, spaces and the "×"/"X" spelling.
    pub fn lookup(&self, label: &str) -> CalcResult<&RolledShape> {
        self.shapes
            .get(&normalize_label(label))
            .ok_or_else(|| CalcError::missing_table_key("rolled shapes", label))
    }

    pub fn shapes_of_family(&self, family: ShapeFamily) -> Vec<&RolledShape> {
        self.shapes.values().filter(|s| s.family == family).collect()
    }

    /// Shapes whose designation starts with `pattern`
    pub fn search(&self, pattern: &str) -> Vec<&RolledShape> {
        let prefix = normalize_label(pattern);
        self.shapes
            .iter()
            .filter(|(k, _)| k.starts_with(&prefix))
            .map(|(_, v)| v)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

// ============================================================================
// Built-in Shapes
// ============================================================================

/// Catalog pre-loaded with common UB and IPE shapes
pub fn builtin_rolled_shapes() -> ShapeCatalog {
    let mut catalog = ShapeCatalog::new();

    #[rustfmt::skip]
    let shapes = [
        // label, family, d, bf, tw, tf, h, A, Ix, Iy, Sx, Sy, Zx, Zy, J, Cw
        ("127X76X13", ShapeFamily::UB, 127.0, 76.0, 4.0, 7.6, 96.6, 16.5, 473.0, 56.0, 75.0, 14.7, 84.0, 22.6, 2.85, 0.002),
        ("152X89X16", ShapeFamily::UB, 152.4, 88.7, 4.5, 7.7, 121.8, 20.3, 834.0, 89.8, 109.0, 20.2, 123.0, 31.2, 3.56, 0.0047),
        ("203X133X25", ShapeFamily::UB, 203.2, 133.2, 5.7, 7.8, 172.4, 32.0, 2340.0, 308.0, 230.0, 46.2, 258.0, 70.9, 5.96, 0.0294),
        ("254X102X22", ShapeFamily::UB, 254.0, 101.6, 5.7, 6.8, 225.2, 28.0, 2840.0, 119.0, 224.0, 23.5, 259.0, 37.3, 4.15, 0.0182),
        ("305X165X40", ShapeFamily::UB, 303.4, 165.0, 6.0, 10.2, 265.2, 51.3, 8500.0, 764.0, 560.0, 92.6, 623.0, 142.0, 14.7, 0.164),
        ("IPE200", ShapeFamily::IPE, 200.0, 100.0, 5.6, 8.5, 159.0, 28.5, 1943.0, 142.4, 194.3, 28.47, 220.6, 44.61, 6.98, 0.01299),
        ("IPE300", ShapeFamily::IPE, 300.0, 150.0, 7.1, 10.7, 248.6, 53.8, 8356.0, 603.8, 557.1, 80.5, 628.4, 125.2, 20.12, 0.1259),
    ];

    for (label, family, d, bf, tw, tf, h, a, ix, iy, sx, sy, zx, zy, j, cw) in shapes {
        catalog.insert(RolledShape {
            family,
            label: label.to_string(),
            depth_mm: d,
            flange_width_mm: bf,
            web_thickness_mm: tw,
            flange_thickness_mm: tf,
            web_height_mm: h,
            area_cm2: a,
            ix_cm4: ix,
            iy_cm4: iy,
            sx_cm3: sx,
            sy_cm3: sy,
            zx_cm3: zx,
            zy_cm3: zy,
            j_cm4: j,
            cw_dm6: cw,
        });
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::AreaProperties;
    use crate::units::{MILLIMETER, MILLIMETER_6};

    #[test]
    fn test_builtin_shapes() {
        let catalog = builtin_rolled_shapes();
        assert_eq!(catalog.len(), 7);
        assert!(!catalog.is_empty());

        let shape = catalog.lookup("127X76X13").unwrap();
        assert_eq!(shape.area_cm2, 16.5);

        let same = catalog.lookup(" 127 × 76 × 13 ").unwrap();
        assert_eq!(shape.label, same.label);
        assert_eq!(catalog.lookup("ipe200").unwrap().family, ShapeFamily::IPE);
    }

    #[test]
    fn test_unknown_shape() {
        let err = builtin_rolled_shapes().lookup("W14X90").unwrap_err();
        assert_eq!(err.error_code(), "MISSING_TABLE_KEY");
    }

    #[test]
    fn test_family_and_search() {
        let catalog = builtin_rolled_shapes();
        assert_eq!(catalog.shapes_of_family(ShapeFamily::IPE).len(), 2);
        let found = catalog.search("ipe");
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|s| s.label.starts_with("IPE")));
    }

    #[test]
    fn test_every_shape_builds() {
        let catalog = builtin_rolled_shapes();
        for shape in catalog.search("") {
            let dims = shape.dimensions().unwrap();
            assert!(dims.web_height().value() < dims.total_height().value());
            let props = shape.area_properties().unwrap();
            assert!(props.major_axis_inertia().value() > props.minor_axis_inertia().value());
        }
    }

    #[test]
    fn test_fixture_properties() {
        let shape = builtin_rolled_shapes().lookup("127X76X13").unwrap().clone();
        let props = shape.area_properties().unwrap();
        let ry = props.minor_axis_radius_of_gyration().value_in(MILLIMETER).unwrap();
        assert!((ry - 18.4226).abs() < 1e-3);
        let cw = props.warping_constant().value_in(MILLIMETER_6).unwrap();
        assert!((cw - 2.0e9).abs() / 2.0e9 < 1e-9);
        assert!(shape.to_string().starts_with("127X76X13"));
    }
}
