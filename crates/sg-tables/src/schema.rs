//! Column schema shared by all rows of a table.

use crate::error::{TableError, TableResult};

/// Well-known column names of the reference water dataset.
pub mod columns {
    /// Specific enthalpy of the liquid phase [kJ/kg].
    pub const H_LIQUID: &str = "h_liq";
    /// Specific enthalpy of the vapor phase [kJ/kg].
    pub const H_VAPOR: &str = "h_vap";
    /// Specific entropy of the liquid phase [kJ/(kg·K)].
    pub const S_LIQUID: &str = "s_liq";
    /// Specific entropy of the vapor phase [kJ/(kg·K)].
    pub const S_VAPOR: &str = "s_vap";
}

/// Resolved position of a column within a [`Schema`].
///
/// Only meaningful for the table whose schema produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnId(usize);

impl ColumnId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered list of value column names (keys are not columns).
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    names: Vec<String>,
}

impl Schema {
    /// Build a schema, rejecting empty, blank, or duplicate names.
    pub fn new<I, S>(names: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(TableError::InvalidSchema {
                what: "at least one column is required",
            });
        }
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(TableError::InvalidSchema {
                    what: "column names must not be blank",
                });
            }
            if names[..i].contains(name) {
                return Err(TableError::DuplicateColumn { name: name.clone() });
            }
        }
        Ok(Self { names })
    }

    /// Resolve a column name to its handle.
    pub fn column(&self, name: &str) -> TableResult<ColumnId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(ColumnId)
            .ok_or_else(|| TableError::UnknownColumn {
                name: name.to_string(),
            })
    }

    pub fn name(&self, id: ColumnId) -> Option<&str> {
        self.names.get(id.0).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
