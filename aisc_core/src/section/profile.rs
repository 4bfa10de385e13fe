//! # Section Profiles
//!
//! A profile ties together the dimensions, material, area properties and
//! construction type of a member cross-section, and derives the quantities
//! the member strength checks need: the LTB radius of gyration rts, the
//! limiting unbraced lengths Lp and Lr, and the slenderness classification.
//!
//! Everything a profile derives is a pure function of its inputs, computed
//! once on first use.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use aisc_core::materials::{builtin_rolled_shapes, IsotropicMaterial, SteelGrade};
//! use aisc_core::section::{DoublySymmetricIUserDefined, SectionProfile};
//! use aisc_core::units::MILLIMETER;
//!
//! let steel = Arc::new(IsotropicMaterial::from_grade(SteelGrade::S355));
//! let shape = builtin_rolled_shapes().lookup("127X76X13").unwrap().clone();
//! let profile = DoublySymmetricIUserDefined::from_catalog(&shape, steel).unwrap();
//!
//! let lp = profile.limit_length_yield().value_in(MILLIMETER).unwrap();
//! assert!((lp - 769.60).abs() < 0.01);
//! ```

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::trace;

use crate::equations::flexure::{
    effective_radius_of_gyration, limiting_length_lateral_torsional, limiting_length_yield, DOUBLY_SYMMETRIC_C,
};
use crate::errors::CalcResult;
use crate::materials::{Material, RolledShape};
use crate::report::{row, TableRow, Tabular};
use crate::section::area_properties::{AreaProperties, DoublySymmetricIAreaProperties};
use crate::section::dimensions::DoublySymmetricIDimensions;
use crate::section::slenderness::{ConstructionType, SectionSlenderness};
use crate::units::{Dimension, Quantity};

/// Contract a cross-section offers to the member strength calculations.
pub trait SectionProfile: fmt::Debug + Send + Sync {
    fn label(&self) -> &str;
    fn material(&self) -> &dyn Material;
    fn dimensions(&self) -> &DoublySymmetricIDimensions;
    fn area_properties(&self) -> &dyn AreaProperties;
    fn construction(&self) -> ConstructionType;
    fn slenderness(&self) -> &SectionSlenderness;

    /// rts (F2-7)
    fn effective_radius_of_gyration(&self) -> Quantity;
    /// Lp (F2-5)
    fn limit_length_yield(&self) -> Quantity;
    /// Lr (F2-6)
    fn limit_length_torsional_buckling(&self) -> Quantity;
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LimitingLengths {
    effective_radius_of_gyration: Quantity,
    yield_length: Quantity,
    torsional_buckling_length: Quantity,
}

/// Doubly-symmetric I-shape defined by its plate dimensions.
#[derive(Debug)]
pub struct DoublySymmetricIUserDefined {
    label: String,
    dimensions: DoublySymmetricIDimensions,
    material: Arc<dyn Material>,
    area_properties: Box<dyn AreaProperties>,
    construction: ConstructionType,
    slenderness: OnceCell<SectionSlenderness>,
    lengths: OnceCell<LimitingLengths>,
}

impl DoublySymmetricIUserDefined {
    /// Profile whose area properties are derived from `dimensions`
    pub fn new(
        label: impl Into<String>,
        dimensions: DoublySymmetricIDimensions,
        material: Arc<dyn Material>,
        construction: ConstructionType,
    ) -> Self {
        let area_properties = DoublySymmetricIAreaProperties::new(dimensions.clone());
        Self::with_area_properties(label, dimensions, material, construction, area_properties)
    }

    /// Profile with area properties supplied by the caller
    pub fn with_area_properties(
        label: impl Into<String>,
        dimensions: DoublySymmetricIDimensions,
        material: Arc<dyn Material>,
        construction: ConstructionType,
        area_properties: impl AreaProperties + 'static,
    ) -> Self {
        DoublySymmetricIUserDefined {
            label: label.into(),
            dimensions,
            material,
            area_properties: Box::new(area_properties),
            construction,
            slenderness: OnceCell::new(),
            lengths: OnceCell::new(),
        }
    }

    /// Rolled profile from a catalog shape and its tabulated properties
    pub fn from_catalog(shape: &RolledShape, material: Arc<dyn Material>) -> CalcResult<Self> {
        Ok(Self::with_area_properties(
            shape.label.clone(),
            shape.dimensions()?,
            material,
            ConstructionType::Rolled,
            shape.area_properties()?,
        ))
    }

    /// Built-up flange coefficient for this geometry
    pub fn kc_coefficient(&self) -> f64 {
        self.slenderness().kc
    }

    fn lengths(&self) -> &LimitingLengths {
        self.lengths.get_or_init(|| {
            let props = self.area_properties.as_ref();
            let e = self.material.modulus_linear().value();
            let fy = self.material.yield_stress().value();
            let sx = props.major_axis_elastic_section_modulus().value();

            let rts = effective_radius_of_gyration(
                props.minor_axis_inertia().value(),
                props.warping_constant().value(),
                sx,
            );
            let lp = limiting_length_yield(props.minor_axis_radius_of_gyration().value(), e, fy);
            let lr = limiting_length_lateral_torsional(
                rts,
                e,
                fy,
                props.torsional_constant().value(),
                DOUBLY_SYMMETRIC_C,
                sx,
                self.dimensions.distance_between_centroids().value(),
            );
            trace!(profile = %self.label, rts, lp, lr, "computed limiting lengths");

            LimitingLengths {
                effective_radius_of_gyration: Quantity::from_base(rts, Dimension::LENGTH),
                yield_length: Quantity::from_base(lp, Dimension::LENGTH),
                torsional_buckling_length: Quantity::from_base(lr, Dimension::LENGTH),
            }
        })
    }
}

impl SectionProfile for DoublySymmetricIUserDefined {
    fn label(&self) -> &str {
        &self.label
    }

    fn material(&self) -> &dyn Material {
        self.material.as_ref()
    }

    fn dimensions(&self) -> &DoublySymmetricIDimensions {
        &self.dimensions
    }

    fn area_properties(&self) -> &dyn AreaProperties {
        self.area_properties.as_ref()
    }

    fn construction(&self) -> ConstructionType {
        self.construction
    }

    fn slenderness(&self) -> &SectionSlenderness {
        self.slenderness.get_or_init(|| {
            SectionSlenderness::evaluate(&self.dimensions, self.material.as_ref(), self.construction)
        })
    }

    fn effective_radius_of_gyration(&self) -> Quantity {
        self.lengths().effective_radius_of_gyration
    }

    fn limit_length_yield(&self) -> Quantity {
        self.lengths().yield_length
    }

    fn limit_length_torsional_buckling(&self) -> Quantity {
        self.lengths().torsional_buckling_length
    }
}

impl Tabular for DoublySymmetricIUserDefined {
    fn table(&self) -> Vec<TableRow> {
        let slenderness = self.slenderness();
        vec![
            row("label", self.label.as_str()),
            row("material", self.material.name()),
            row("construction", self.construction.code()),
            row("effective_radius_of_gyration", self.effective_radius_of_gyration()),
            row("limit_length_yield", self.limit_length_yield()),
            row("limit_length_torsional_buckling", self.limit_length_torsional_buckling()),
            row("kc_coefficient", slenderness.kc),
            row("slenderness_axial", slenderness.axial().code()),
            row("slenderness_flexural_major_axis", slenderness.flexural_major_axis().code()),
            row("slenderness_flexural_minor_axis", slenderness.flexural_minor_axis().code()),
        ]
    }
}

impl fmt::Display for DoublySymmetricIUserDefined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.label, self.construction, self.material.name())
    }
}
