//! Liquid/vapor column pairs and property-name dispatch.

use crate::error::{StateError, StateResult};
use sg_tables::{ColumnId, PropertyTable, columns};
use std::borrow::Cow;

/// A property tabulated as one liquid column and one vapor column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPair {
    pub liquid: Cow<'static, str>,
    pub vapor: Cow<'static, str>,
}

impl PropertyPair {
    pub fn new(liquid: impl Into<Cow<'static, str>>, vapor: impl Into<Cow<'static, str>>) -> Self {
        Self {
            liquid: liquid.into(),
            vapor: vapor.into(),
        }
    }

    /// Specific enthalpy [kJ/kg].
    pub fn enthalpy() -> Self {
        Self::new(columns::H_LIQUID, columns::H_VAPOR)
    }

    /// Specific entropy [kJ/(kg·K)].
    pub fn entropy() -> Self {
        Self::new(columns::S_LIQUID, columns::S_VAPOR)
    }

    /// Look up a named property.
    ///
    /// Accepts `enthalpy`/`h` and `entropy`/`s`, trimmed and ASCII
    /// case-insensitive.
    pub fn from_name(name: &str) -> StateResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "enthalpy" | "h" => Ok(Self::enthalpy()),
            "entropy" | "s" => Ok(Self::entropy()),
            _ => Err(StateError::UnknownProperty {
                name: name.to_string(),
            }),
        }
    }

    /// Resolve both columns against a table's schema.
    pub fn resolve(&self, table: &PropertyTable) -> StateResult<ResolvedPair> {
        Ok(ResolvedPair {
            liquid: table.column(&self.liquid)?,
            vapor: table.column(&self.vapor)?,
        })
    }
}

/// Column handles of a [`PropertyPair`] within one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPair {
    pub liquid: ColumnId,
    pub vapor: ColumnId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::property_table;

    #[test]
    fn name_dispatch() {
        assert_eq!(PropertyPair::from_name("enthalpy").unwrap(), PropertyPair::enthalpy());
        assert_eq!(PropertyPair::from_name("  H ").unwrap(), PropertyPair::enthalpy());
        assert_eq!(PropertyPair::from_name("Entropy").unwrap(), PropertyPair::entropy());
        assert_eq!(PropertyPair::from_name("s").unwrap(), PropertyPair::entropy());
        assert_eq!(
            PropertyPair::from_name("exergy"),
            Err(StateError::UnknownProperty {
                name: "exergy".into()
            })
        );
    }

    #[test]
    fn resolves_against_schema() {
        let table = property_table();
        let pair = PropertyPair::entropy().resolve(&table).unwrap();
        assert_eq!(pair.liquid, table.column("s_liq").unwrap());
        assert_eq!(pair.vapor, table.column("s_vap").unwrap());
    }

    #[test]
    fn custom_pair_with_missing_column() {
        let table = property_table();
        let pair = PropertyPair::new("u_liq", String::from("u_vap"));
        assert!(matches!(pair.resolve(&table), Err(StateError::Table(_))));
    }
}
