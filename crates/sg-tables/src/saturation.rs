//! Saturation curve keyed by temperature.

use crate::axis::{Axis, Bracket, bracket};
use crate::error::{TableError, TableResult};
use crate::schema::{ColumnId, Schema};
use sg_core::{Real, ensure_finite};

/// One point on the saturation curve.
///
/// `values` hold the phase-boundary properties at `t`, aligned with the
/// owning table's [`Schema`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaturationRow {
    /// Temperature [K]
    pub t: Real,
    /// Saturation pressure [bar]
    pub p_sat: Real,
    #[cfg_attr(feature = "serde", serde(default))]
    pub values: Vec<Real>,
}

impl SaturationRow {
    pub fn new(t: Real, p_sat: Real, values: impl Into<Vec<Real>>) -> Self {
        Self {
            t,
            p_sat,
            values: values.into(),
        }
    }

    #[inline]
    pub fn get(&self, column: ColumnId) -> Real {
        self.values[column.index()]
    }
}

/// Immutable saturation curve sorted by temperature.
///
/// The boundary columns are optional: a table with an empty schema carries
/// saturation pressure only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SaturationTableRecord", into = "SaturationTableRecord")
)]
pub struct SaturationTable {
    schema: Option<Schema>,
    rows: Vec<SaturationRow>,
    temperatures: Vec<Real>,
}

impl SaturationTable {
    /// Build a curve that carries saturation pressure only.
    pub fn pressures_only(rows: Vec<SaturationRow>) -> TableResult<Self> {
        Self::build(None, rows)
    }

    /// Build a curve with boundary property columns.
    ///
    /// Rejects empty input, arity mismatches, non-finite entries, and
    /// repeated temperatures.
    pub fn new(schema: Schema, rows: Vec<SaturationRow>) -> TableResult<Self> {
        Self::build(Some(schema), rows)
    }

    fn build(schema: Option<Schema>, mut rows: Vec<SaturationRow>) -> TableResult<Self> {
        if rows.is_empty() {
            return Err(TableError::Empty);
        }
        let width = schema.as_ref().map_or(0, Schema::len);
        for row in &rows {
            ensure_finite(row.t, "saturation temperature")?;
            ensure_finite(row.p_sat, "saturation pressure")?;
            if row.values.len() != width {
                return Err(TableError::RowArity {
                    t: row.t,
                    expected: width,
                    found: row.values.len(),
                });
            }
            for &v in &row.values {
                ensure_finite(v, "saturation value")?;
            }
        }

        rows.sort_by(|a, b| a.t.total_cmp(&b.t));
        if let Some(pair) = rows.windows(2).find(|w| w[0].t == w[1].t) {
            return Err(TableError::DuplicateKey {
                t: pair[0].t,
                p: None,
            });
        }
        let temperatures = rows.iter().map(|r| r.t).collect();

        Ok(Self {
            schema,
            rows,
            temperatures,
        })
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// Resolve a boundary column name.
    pub fn column(&self, name: &str) -> TableResult<ColumnId> {
        match &self.schema {
            Some(schema) => schema.column(name),
            None => Err(TableError::UnknownColumn {
                name: name.to_string(),
            }),
        }
    }

    /// All rows, sorted by temperature.
    pub fn rows(&self) -> &[SaturationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn temperatures(&self) -> &[Real] {
        &self.temperatures
    }

    /// Bracket a temperature and return the two enclosing rows
    /// (the same row twice on an exact match).
    pub fn bracket(&self, t: Real) -> TableResult<(&SaturationRow, &SaturationRow)> {
        let Bracket { lo, hi } = bracket(&self.temperatures, t, Axis::Temperature)?;
        Ok((&self.rows[lo], &self.rows[hi]))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SaturationTableRecord {
    #[serde(default)]
    columns: Vec<String>,
    rows: Vec<SaturationRow>,
}

#[cfg(feature = "serde")]
impl TryFrom<SaturationTableRecord> for SaturationTable {
    type Error = TableError;

    fn try_from(record: SaturationTableRecord) -> TableResult<Self> {
        if record.columns.is_empty() {
            SaturationTable::pressures_only(record.rows)
        } else {
            SaturationTable::new(Schema::new(record.columns)?, record.rows)
        }
    }
}

#[cfg(feature = "serde")]
impl From<SaturationTable> for SaturationTableRecord {
    fn from(table: SaturationTable) -> Self {
        Self {
            columns: table
                .schema
                .map(|s| s.names().to_vec())
                .unwrap_or_default(),
            rows: table.rows,
        }
    }
}
