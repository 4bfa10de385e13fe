//! Plate dimensions of a doubly-symmetric I-shape.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::report::{row, TableRow, Tabular};
use crate::units::{Dimension, Quantity};

/// Relative slack allowed when checking a supplied web height against the
/// clear distance between flanges.
const WEB_HEIGHT_TOLERANCE: f64 = 1e-9;

/// Flange and web plate dimensions.
///
/// ```text
///        ◄──── bf ────►
///        ┌────────────┐ ▲        ▲
///        └────┐  ┌────┘ tf       │
///             │  │               │
///             │  │ ◄─ tw     h   d
///             │  │               │
///        ┌────┘  └────┐          │
///        └────────────┘          ▼
/// ```
///
/// `web_height` defaults to the clear distance d − 2·tf. A smaller value may
/// be supplied for rolled shapes whose web is measured between fillets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoublySymmetricIDimensions {
    flange_width: Quantity,
    flange_thickness: Quantity,
    web_thickness: Quantity,
    total_height: Quantity,
    web_height: Quantity,
}

impl DoublySymmetricIDimensions {
    pub fn new(
        flange_width: Quantity,
        flange_thickness: Quantity,
        web_thickness: Quantity,
        total_height: Quantity,
        web_height: Option<Quantity>,
    ) -> CalcResult<Self> {
        for (field, value) in [
            ("flange_width", flange_width),
            ("flange_thickness", flange_thickness),
            ("web_thickness", web_thickness),
            ("total_height", total_height),
        ] {
            ensure_positive_length(field, value)?;
        }

        let clear_height = total_height.try_sub(flange_thickness * 2.0)?;
        if !clear_height.is_positive() {
            return Err(CalcError::invalid_input(
                "total_height",
                total_height.to_string(),
                "Total height must exceed twice the flange thickness",
            ));
        }
        if web_thickness.try_cmp(&flange_width)?.is_ge() {
            return Err(CalcError::invalid_input(
                "web_thickness",
                web_thickness.to_string(),
                "Web thickness must be smaller than the flange width",
            ));
        }

        let web_height = match web_height {
            None => clear_height,
            Some(h) => {
                ensure_positive_length("web_height", h)?;
                if h.value() > clear_height.value() * (1.0 + WEB_HEIGHT_TOLERANCE) {
                    return Err(CalcError::invalid_input(
                        "web_height",
                        h.to_string(),
                        "Web height cannot exceed total_height - 2 * flange_thickness",
                    ));
                }
                h
            }
        };

        Ok(DoublySymmetricIDimensions {
            flange_width,
            flange_thickness,
            web_thickness,
            total_height,
            web_height,
        })
    }

    pub fn flange_width(&self) -> Quantity {
        self.flange_width
    }

    pub fn flange_thickness(&self) -> Quantity {
        self.flange_thickness
    }

    pub fn web_thickness(&self) -> Quantity {
        self.web_thickness
    }

    pub fn total_height(&self) -> Quantity {
        self.total_height
    }

    pub fn web_height(&self) -> Quantity {
        self.web_height
    }

    /// ho = d − tf
    pub fn distance_between_centroids(&self) -> Quantity {
        Quantity::from_base(
            self.total_height.value() - self.flange_thickness.value(),
            Dimension::LENGTH,
        )
    }

    /// Flange slenderness bf/(2·tf)
    pub fn flange_ratio(&self) -> f64 {
        self.flange_width.value() / (2.0 * self.flange_thickness.value())
    }

    /// Web slenderness h/tw
    pub fn web_ratio(&self) -> f64 {
        self.web_height.value() / self.web_thickness.value()
    }
}

fn ensure_positive_length(field: &str, value: Quantity) -> CalcResult<()> {
    value.ensure_dimension(Dimension::LENGTH, field)?;
    if !value.is_positive() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"));
    }
    Ok(())
}

impl Tabular for DoublySymmetricIDimensions {
    fn table(&self) -> Vec<TableRow> {
        vec![
            row("flange_width", self.flange_width),
            row("flange_thickness", self.flange_thickness),
            row("web_thickness", self.web_thickness),
            row("total_height", self.total_height),
            row("web_height", self.web_height),
            row("distance_between_centroids", self.distance_between_centroids()),
        ]
    }
}
