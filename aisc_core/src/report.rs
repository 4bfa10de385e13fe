//! # Tabular Projections
//!
//! Every entity (material, dimensions, area properties, profile) exposes its
//! fields as an ordered list of named values for an external tabular or
//! typesetting layer. Field names are stable identifiers matching the entity's
//! accessors.
//!
//! Strength calculators produce [`StrengthTable`]s: one nominal (or, after
//! [`StrengthTable::allowable`], available) strength per limit state.

use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::settings::{DesignSettings, LimitStateKind};
use crate::units::Quantity;

/// A single cell value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TableValue {
    Quantity(Quantity),
    Number(f64),
    Text(String),
}

impl From<Quantity> for TableValue {
    fn from(q: Quantity) -> Self {
        TableValue::Quantity(q)
    }
}

impl From<f64> for TableValue {
    fn from(v: f64) -> Self {
        TableValue::Number(v)
    }
}

impl From<&str> for TableValue {
    fn from(s: &str) -> Self {
        TableValue::Text(s.to_string())
    }
}

impl From<String> for TableValue {
    fn from(s: String) -> Self {
        TableValue::Text(s)
    }
}

/// Named value in a tabular projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub name: &'static str,
    pub value: TableValue,
}

pub fn row(name: &'static str, value: impl Into<TableValue>) -> TableRow {
    TableRow {
        name,
        value: value.into(),
    }
}

/// Mapping from field name to current value.
pub trait Tabular {
    fn table(&self) -> Vec<TableRow>;

    /// Projection without the named fields
    fn table_excluding(&self, exclude: &[&str]) -> Vec<TableRow> {
        self.table()
            .into_iter()
            .filter(|r| !exclude.contains(&r.name))
            .collect()
    }

    fn table_json(&self, exclude: &[&str]) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(&self.table_excluding(exclude))?)
    }
}

// ============================================================================
// Strength Tables
// ============================================================================

/// One limit-state strength
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthEntry {
    pub name: &'static str,
    pub value: Quantity,
}

/// Named strengths of one member behaviour (e.g. major-axis flexure).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthTable {
    pub title: String,
    pub entries: Vec<StrengthEntry>,
}

impl StrengthTable {
    pub fn new(title: impl Into<String>) -> Self {
        StrengthTable {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Add a strength; unavailable limit states (`None`) are left out.
    pub fn with(mut self, name: &'static str, value: Option<Quantity>) -> Self {
        if let Some(value) = value {
            self.entries.push(StrengthEntry { name, value });
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<Quantity> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.value)
    }

    /// Lowest strength in the table
    pub fn governing(&self) -> CalcResult<&StrengthEntry> {
        let mut entries = self.entries.iter();
        let mut lowest = entries
            .next()
            .ok_or_else(|| CalcError::invalid_input("strength table", self.title.clone(), "Table is empty"))?;
        for entry in entries {
            if entry.value.try_cmp(&lowest.value)?.is_lt() {
                lowest = entry;
            }
        }
        Ok(lowest)
    }

    /// Same table with each nominal strength replaced by its available strength
    pub fn allowable(&self, settings: &DesignSettings, kind: LimitStateKind) -> CalcResult<StrengthTable> {
        let entries = self
            .entries
            .iter()
            .map(|e| {
                let factor = settings.safety_factor(e.value, kind)?;
                Ok(StrengthEntry {
                    name: e.name,
                    value: factor.allowable_value(),
                })
            })
            .collect::<CalcResult<Vec<_>>>()?;
        Ok(StrengthTable {
            title: format!("{} ({})", self.title, settings.design_method),
            entries,
        })
    }
}

impl Tabular for StrengthTable {
    fn table(&self) -> Vec<TableRow> {
        self.entries.iter().map(|e| row(e.name, e.value)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{KILONEWTON, MEGAPASCAL};

    fn sample() -> StrengthTable {
        StrengthTable::new("compression")
            .with("strength flexural buckling", Some(Quantity::new(469.0, KILONEWTON)))
            .with("strength torsional buckling", Some(Quantity::new(506.0, KILONEWTON)))
            .with("strength yield", None)
    }

    #[test]
    fn test_unavailable_entries_skipped() {
        let table = sample();
        assert_eq!(table.entries.len(), 2);
        assert!(table.get("strength yield").is_none());
    }

    #[test]
    fn test_governing_is_minimum() {
        let table = sample();
        assert_eq!(table.governing().unwrap().name, "strength flexural buckling");
        assert!(StrengthTable::new("empty").governing().is_err());
    }

    #[test]
    fn test_governing_rejects_mixed_dimensions() {
        let table = sample().with("strength yield", Some(Quantity::new(1.0, MEGAPASCAL)));
        assert_eq!(table.governing().unwrap_err().error_code(), "DIMENSION_MISMATCH");
    }

    #[test]
    fn test_allowable_asd() {
        let table = sample().allowable(&DesignSettings::asd(), LimitStateKind::Compression).unwrap();
        let value = table.get("strength flexural buckling").unwrap();
        assert!((value.value_in(KILONEWTON).unwrap() - 469.0 / 1.67).abs() < 1e-9);
        assert_eq!(table.title, "compression (ASD)");
    }

    #[test]
    fn test_table_projection() {
        let table = sample();
        let rows = table.table_excluding(&["strength torsional buckling"]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "strength flexural buckling");
        let json = table.table_json(&[]).unwrap();
        assert!(json.contains("strength torsional buckling"));
    }
}
