//! Single-phase property grid keyed by (T, P).

use crate::axis::{Axis, Bracket, bracket};
use crate::error::{TableError, TableResult};
use crate::schema::{ColumnId, Schema};
use sg_core::{Real, ensure_finite};
use std::ops::Range;

/// One tabulated state point.
///
/// `values` are aligned with the owning table's [`Schema`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyRow {
    /// Temperature [K]
    pub t: Real,
    /// Pressure [bar]
    pub p: Real,
    pub values: Vec<Real>,
}

impl PropertyRow {
    pub fn new(t: Real, p: Real, values: impl Into<Vec<Real>>) -> Self {
        Self {
            t,
            p,
            values: values.into(),
        }
    }

    /// Value of a resolved column.
    ///
    /// Rows inside a [`PropertyTable`] always have one value per schema column,
    /// so a `ColumnId` from that table's schema is always in bounds.
    #[inline]
    pub fn get(&self, column: ColumnId) -> Real {
        self.values[column.index()]
    }
}

/// All rows sharing one temperature, ordered by pressure.
#[derive(Debug, Clone, PartialEq)]
pub struct Isotherm {
    t: Real,
    rows: Range<usize>,
    pressures: Vec<Real>,
}

impl Isotherm {
    pub fn temperature(&self) -> Real {
        self.t
    }

    /// Sorted pressure axis of this isotherm.
    pub fn pressures(&self) -> &[Real] {
        &self.pressures
    }
}

/// Immutable property grid.
///
/// Rows are stored sorted by (T, P) in a single arena; each unique temperature
/// owns a contiguous [`Isotherm`] slice with its own pressure axis, so pressure
/// grids may differ between temperatures.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PropertyTableRecord", into = "PropertyTableRecord")
)]
pub struct PropertyTable {
    schema: Schema,
    rows: Vec<PropertyRow>,
    temperatures: Vec<Real>,
    isotherms: Vec<Isotherm>,
}

impl PropertyTable {
    /// Build a table from rows in any order.
    ///
    /// Rejects empty input, rows whose value count differs from the schema,
    /// non-finite keys or values, and duplicate (T, P) keys.
    pub fn new(schema: Schema, mut rows: Vec<PropertyRow>) -> TableResult<Self> {
        if rows.is_empty() {
            return Err(TableError::Empty);
        }
        for row in &rows {
            ensure_finite(row.t, "row temperature")?;
            ensure_finite(row.p, "row pressure")?;
            if row.values.len() != schema.len() {
                return Err(TableError::RowArity {
                    t: row.t,
                    expected: schema.len(),
                    found: row.values.len(),
                });
            }
            for &v in &row.values {
                ensure_finite(v, "row value")?;
            }
        }

        rows.sort_by(|a, b| a.t.total_cmp(&b.t).then(a.p.total_cmp(&b.p)));

        let mut temperatures = Vec::new();
        let mut isotherms: Vec<Isotherm> = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            match isotherms.last_mut() {
                Some(iso) if iso.t == row.t => {
                    if iso.pressures.last() == Some(&row.p) {
                        return Err(TableError::DuplicateKey {
                            t: row.t,
                            p: Some(row.p),
                        });
                    }
                    iso.rows.end = i + 1;
                    iso.pressures.push(row.p);
                }
                _ => {
                    temperatures.push(row.t);
                    isotherms.push(Isotherm {
                        t: row.t,
                        rows: i..i + 1,
                        pressures: vec![row.p],
                    });
                }
            }
        }

        Ok(Self {
            schema,
            rows,
            temperatures,
            isotherms,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Resolve a column name against this table's schema.
    pub fn column(&self, name: &str) -> TableResult<ColumnId> {
        self.schema.column(name)
    }

    /// All rows, sorted by (T, P).
    pub fn rows(&self) -> &[PropertyRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted unique temperature axis.
    pub fn temperatures(&self) -> &[Real] {
        &self.temperatures
    }

    pub fn isotherms(&self) -> &[Isotherm] {
        &self.isotherms
    }

    /// Isotherm at an index of the temperature axis.
    pub fn isotherm(&self, index: usize) -> Option<&Isotherm> {
        self.isotherms.get(index)
    }

    /// Rows of an isotherm, ordered by pressure.
    pub fn isotherm_rows(&self, isotherm: &Isotherm) -> &[PropertyRow] {
        &self.rows[isotherm.rows.clone()]
    }

    /// Bracket a temperature on the table's temperature axis.
    pub fn temperature_bracket(&self, t: Real) -> TableResult<Bracket> {
        bracket(&self.temperatures, t, Axis::Temperature)
    }

    /// Bracket a pressure on one isotherm and return the two enclosing rows
    /// (the same row twice on an exact match).
    pub fn pressure_bracket(
        &self,
        isotherm: &Isotherm,
        p: Real,
    ) -> TableResult<(&PropertyRow, &PropertyRow)> {
        let b = bracket(&isotherm.pressures, p, Axis::Pressure)?;
        let rows = self.isotherm_rows(isotherm);
        Ok((&rows[b.lo], &rows[b.hi]))
    }

    /// Row stored exactly at (T, P), if any.
    pub fn row_at(&self, t: Real, p: Real) -> Option<&PropertyRow> {
        let iso = self
            .temperatures
            .binary_search_by(|v| v.total_cmp(&t))
            .ok()
            .and_then(|i| self.isotherms.get(i))?;
        let j = iso
            .pressures
            .binary_search_by(|v| v.total_cmp(&p))
            .ok()?;
        self.isotherm_rows(iso).get(j)
    }

    /// Smallest and largest tabulated temperature.
    pub fn temperature_range(&self) -> (Real, Real) {
        (
            self.temperatures[0],
            self.temperatures[self.temperatures.len() - 1],
        )
    }
}

/// Plain (columns, rows) form used for serialization.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PropertyTableRecord {
    columns: Vec<String>,
    rows: Vec<PropertyRow>,
}

#[cfg(feature = "serde")]
impl TryFrom<PropertyTableRecord> for PropertyTable {
    type Error = TableError;

    fn try_from(record: PropertyTableRecord) -> TableResult<Self> {
        PropertyTable::new(Schema::new(record.columns)?, record.rows)
    }
}

#[cfg(feature = "serde")]
impl From<PropertyTable> for PropertyTableRecord {
    fn from(table: PropertyTable) -> Self {
        Self {
            columns: table.schema.names().to_vec(),
            rows: table.rows,
        }
    }
}
