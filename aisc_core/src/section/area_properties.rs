//! # Area Properties
//!
//! Geometric properties of a cross-section, either derived from the plate
//! dimensions of a doubly-symmetric I-shape or supplied directly from a
//! section table.
//!
//! Derived properties are computed once, on first access, and cached for the
//! lifetime of the owning value. Supplied properties are complete at
//! construction: any omitted radius of gyration, plastic modulus or
//! torsional radius is back-filled by [`GenericAreaPropertiesBuilder::build`].

use std::fmt;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::equations::section::{
    i_major_axis_inertia, i_major_axis_plastic_modulus, i_minor_axis_inertia, i_minor_axis_plastic_modulus,
    i_torsional_constant, i_warping_constant, polar_radius_of_gyration, radius_of_gyration, rectangular_area,
};
use crate::errors::{CalcError, CalcResult};
use crate::report::{row, TableRow, Tabular};
use crate::section::dimensions::DoublySymmetricIDimensions;
use crate::units::{Dimension, Quantity};

/// Complete set of area properties, in base units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaPropertyValues {
    pub area: Quantity,
    pub major_axis_inertia: Quantity,
    pub major_axis_elastic_section_modulus: Quantity,
    pub major_axis_plastic_section_modulus: Quantity,
    pub major_axis_radius_of_gyration: Quantity,
    pub minor_axis_inertia: Quantity,
    pub minor_axis_elastic_section_modulus: Quantity,
    pub minor_axis_plastic_section_modulus: Quantity,
    pub minor_axis_radius_of_gyration: Quantity,
    pub torsional_constant: Quantity,
    pub warping_constant: Quantity,
    pub torsional_radius_of_gyration: Quantity,
}

impl Tabular for AreaPropertyValues {
    fn table(&self) -> Vec<TableRow> {
        vec![
            row("area", self.area),
            row("major_axis_inertia", self.major_axis_inertia),
            row("major_axis_elastic_section_modulus", self.major_axis_elastic_section_modulus),
            row("major_axis_plastic_section_modulus", self.major_axis_plastic_section_modulus),
            row("major_axis_radius_of_gyration", self.major_axis_radius_of_gyration),
            row("minor_axis_inertia", self.minor_axis_inertia),
            row("minor_axis_elastic_section_modulus", self.minor_axis_elastic_section_modulus),
            row("minor_axis_plastic_section_modulus", self.minor_axis_plastic_section_modulus),
            row("minor_axis_radius_of_gyration", self.minor_axis_radius_of_gyration),
            row("torsional_constant", self.torsional_constant),
            row("warping_constant", self.warping_constant),
            row("torsional_radius_of_gyration", self.torsional_radius_of_gyration),
        ]
    }
}

/// Read access to a section's area properties.
///
/// Implementors only provide [`values`](AreaProperties::values); the named
/// accessors are shared.
pub trait AreaProperties: fmt::Debug + Send + Sync {
    fn values(&self) -> &AreaPropertyValues;

    fn area(&self) -> Quantity {
        self.values().area
    }

    fn major_axis_inertia(&self) -> Quantity {
        self.values().major_axis_inertia
    }

    fn major_axis_elastic_section_modulus(&self) -> Quantity {
        self.values().major_axis_elastic_section_modulus
    }

    fn major_axis_plastic_section_modulus(&self) -> Quantity {
        self.values().major_axis_plastic_section_modulus
    }

    fn major_axis_radius_of_gyration(&self) -> Quantity {
        self.values().major_axis_radius_of_gyration
    }

    fn minor_axis_inertia(&self) -> Quantity {
        self.values().minor_axis_inertia
    }

    fn minor_axis_elastic_section_modulus(&self) -> Quantity {
        self.values().minor_axis_elastic_section_modulus
    }

    fn minor_axis_plastic_section_modulus(&self) -> Quantity {
        self.values().minor_axis_plastic_section_modulus
    }

    fn minor_axis_radius_of_gyration(&self) -> Quantity {
        self.values().minor_axis_radius_of_gyration
    }

    fn torsional_constant(&self) -> Quantity {
        self.values().torsional_constant
    }

    fn warping_constant(&self) -> Quantity {
        self.values().warping_constant
    }

    fn torsional_radius_of_gyration(&self) -> Quantity {
        self.values().torsional_radius_of_gyration
    }
}

// ============================================================================
// Derived from dimensions
// ============================================================================

/// Area properties of a doubly-symmetric I-shape computed from its plates:
/// two flange rectangles and one web rectangle.
#[derive(Debug, Clone)]
pub struct DoublySymmetricIAreaProperties {
    dimensions: DoublySymmetricIDimensions,
    values: OnceCell<AreaPropertyValues>,
}

impl DoublySymmetricIAreaProperties {
    pub fn new(dimensions: DoublySymmetricIDimensions) -> Self {
        DoublySymmetricIAreaProperties {
            dimensions,
            values: OnceCell::new(),
        }
    }

    pub fn dimensions(&self) -> &DoublySymmetricIDimensions {
        &self.dimensions
    }

    /// Af = bf·tf
    pub fn flange_area(&self) -> Quantity {
        self.dimensions.flange_width() * self.dimensions.flange_thickness()
    }

    /// Aw = h·tw
    pub fn web_area(&self) -> Quantity {
        self.dimensions.web_height() * self.dimensions.web_thickness()
    }

    fn compute(&self) -> AreaPropertyValues {
        let d = &self.dimensions;
        let bf = d.flange_width().value();
        let tf = d.flange_thickness().value();
        let tw = d.web_thickness().value();
        let h = d.web_height().value();
        let total = d.total_height().value();
        let ho = d.distance_between_centroids().value();

        let area = 2.0 * rectangular_area(bf, tf) + rectangular_area(tw, h);
        let ix = i_major_axis_inertia(bf, tf, tw, h, ho);
        let iy = i_minor_axis_inertia(bf, tf, tw, h);

        let values = AreaPropertyValues {
            area: Quantity::from_base(area, Dimension::AREA),
            major_axis_inertia: Quantity::from_base(ix, Dimension::INERTIA),
            major_axis_elastic_section_modulus: Quantity::from_base(ix / (total / 2.0), Dimension::SECTION_MODULUS),
            major_axis_plastic_section_modulus: Quantity::from_base(
                i_major_axis_plastic_modulus(bf, tf, tw, h, ho),
                Dimension::SECTION_MODULUS,
            ),
            major_axis_radius_of_gyration: Quantity::from_base(radius_of_gyration(ix, area), Dimension::LENGTH),
            minor_axis_inertia: Quantity::from_base(iy, Dimension::INERTIA),
            minor_axis_elastic_section_modulus: Quantity::from_base(iy / (bf / 2.0), Dimension::SECTION_MODULUS),
            minor_axis_plastic_section_modulus: Quantity::from_base(
                i_minor_axis_plastic_modulus(bf, tf, tw, h),
                Dimension::SECTION_MODULUS,
            ),
            minor_axis_radius_of_gyration: Quantity::from_base(radius_of_gyration(iy, area), Dimension::LENGTH),
            torsional_constant: Quantity::from_base(i_torsional_constant(bf, tf, tw, ho), Dimension::INERTIA),
            warping_constant: Quantity::from_base(i_warping_constant(iy, ho), Dimension::WARPING),
            torsional_radius_of_gyration: Quantity::from_base(
                polar_radius_of_gyration(ix, iy, area),
                Dimension::LENGTH,
            ),
        };
        trace!(area = values.area.value(), ix, iy, "computed I-shape area properties");
        values
    }
}

impl AreaProperties for DoublySymmetricIAreaProperties {
    fn values(&self) -> &AreaPropertyValues {
        self.values.get_or_init(|| self.compute())
    }
}

impl Tabular for DoublySymmetricIAreaProperties {
    fn table(&self) -> Vec<TableRow> {
        self.values().table()
    }
}

// ============================================================================
// Supplied values
// ============================================================================

/// Area properties taken as given, e.g. from a rolled-shape table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericAreaProperties {
    values: AreaPropertyValues,
}

impl GenericAreaProperties {
    pub fn builder() -> GenericAreaPropertiesBuilder {
        GenericAreaPropertiesBuilder::default()
    }
}

impl AreaProperties for GenericAreaProperties {
    fn values(&self) -> &AreaPropertyValues {
        &self.values
    }
}

impl Tabular for GenericAreaProperties {
    fn table(&self) -> Vec<TableRow> {
        self.values.table()
    }
}

/// Collects supplied properties and back-fills the optional ones.
///
/// Required: area, both inertias, both elastic moduli, torsional and warping
/// constants. Omitted optional fields are filled in this order:
///
/// 1. radii of gyration, r = √(I/A)
/// 2. plastic moduli, Z = S (conservative where Z is unknown)
/// 3. torsional radius of gyration, √((Ix + Iy)/A)
#[derive(Debug, Clone, Default)]
pub struct GenericAreaPropertiesBuilder {
    area: Option<Quantity>,
    major_axis_inertia: Option<Quantity>,
    major_axis_elastic_section_modulus: Option<Quantity>,
    major_axis_plastic_section_modulus: Option<Quantity>,
    major_axis_radius_of_gyration: Option<Quantity>,
    minor_axis_inertia: Option<Quantity>,
    minor_axis_elastic_section_modulus: Option<Quantity>,
    minor_axis_plastic_section_modulus: Option<Quantity>,
    minor_axis_radius_of_gyration: Option<Quantity>,
    torsional_constant: Option<Quantity>,
    warping_constant: Option<Quantity>,
    torsional_radius_of_gyration: Option<Quantity>,
}

macro_rules! builder_setters {
    ($($field:ident),* $(,)?) => {
        $(
            pub fn $field(mut self, value: Quantity) -> Self {
                self.$field = Some(value);
                self
            }
        )*
    };
}

impl GenericAreaPropertiesBuilder {
    builder_setters!(
        area,
        major_axis_inertia,
        major_axis_elastic_section_modulus,
        major_axis_plastic_section_modulus,
        major_axis_radius_of_gyration,
        minor_axis_inertia,
        minor_axis_elastic_section_modulus,
        minor_axis_plastic_section_modulus,
        minor_axis_radius_of_gyration,
        torsional_constant,
        warping_constant,
        torsional_radius_of_gyration,
    );

    pub fn build(self) -> CalcResult<GenericAreaProperties> {
        let area = required("area", self.area, Dimension::AREA)?;
        let ix = required("major_axis_inertia", self.major_axis_inertia, Dimension::INERTIA)?;
        let iy = required("minor_axis_inertia", self.minor_axis_inertia, Dimension::INERTIA)?;
        let sx = required(
            "major_axis_elastic_section_modulus",
            self.major_axis_elastic_section_modulus,
            Dimension::SECTION_MODULUS,
        )?;
        let sy = required(
            "minor_axis_elastic_section_modulus",
            self.minor_axis_elastic_section_modulus,
            Dimension::SECTION_MODULUS,
        )?;
        let j = required("torsional_constant", self.torsional_constant, Dimension::INERTIA)?;
        let cw = required("warping_constant", self.warping_constant, Dimension::WARPING)?;

        let rx = optional("major_axis_radius_of_gyration", self.major_axis_radius_of_gyration, Dimension::LENGTH)?
            .map_or_else(|| (ix / area).sqrt(), Ok)?;
        let ry = optional("minor_axis_radius_of_gyration", self.minor_axis_radius_of_gyration, Dimension::LENGTH)?
            .map_or_else(|| (iy / area).sqrt(), Ok)?;

        let zx = optional(
            "major_axis_plastic_section_modulus",
            self.major_axis_plastic_section_modulus,
            Dimension::SECTION_MODULUS,
        )?
        .unwrap_or(sx);
        let zy = optional(
            "minor_axis_plastic_section_modulus",
            self.minor_axis_plastic_section_modulus,
            Dimension::SECTION_MODULUS,
        )?
        .unwrap_or(sy);

        let r0 = optional("torsional_radius_of_gyration", self.torsional_radius_of_gyration, Dimension::LENGTH)?
            .map_or_else(|| (ix.try_add(iy)? / area).sqrt(), Ok)?;

        Ok(GenericAreaProperties {
            values: AreaPropertyValues {
                area,
                major_axis_inertia: ix,
                major_axis_elastic_section_modulus: sx,
                major_axis_plastic_section_modulus: zx,
                major_axis_radius_of_gyration: rx,
                minor_axis_inertia: iy,
                minor_axis_elastic_section_modulus: sy,
                minor_axis_plastic_section_modulus: zy,
                minor_axis_radius_of_gyration: ry,
                torsional_constant: j,
                warping_constant: cw,
                torsional_radius_of_gyration: r0,
            },
        })
    }
}

fn required(field: &str, value: Option<Quantity>, dimension: Dimension) -> CalcResult<Quantity> {
    let value = value.ok_or_else(|| CalcError::invalid_input(field, "none", "Required area property missing"))?;
    validate(field, value, dimension)
}

fn optional(field: &str, value: Option<Quantity>, dimension: Dimension) -> CalcResult<Option<Quantity>> {
    value.map(|v| validate(field, v, dimension)).transpose()
}

fn validate(field: &str, value: Quantity, dimension: Dimension) -> CalcResult<Quantity> {
    value.ensure_dimension(dimension, field)?;
    if !value.is_positive() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"));
    }
    Ok(value)
}
