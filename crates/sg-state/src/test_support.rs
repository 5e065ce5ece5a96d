//! Small synthetic tables for unit tests.
//!
//! Property columns are linear in (T, P), so bilinear interpolation must
//! reproduce them exactly anywhere inside the grid.

use sg_core::Real;
use sg_tables::{PropertyRow, PropertyTable, SaturationRow, SaturationTable, Schema, columns};

const TEMPERATURES: [Real; 7] = [290.0, 300.0, 350.0, 355.0, 360.0, 400.0, 700.0];
const PRESSURES: [Real; 12] = [0.01, 0.02, 0.05, 0.1, 0.2, 0.4, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0];

pub fn h_liq_exact(t: Real, p: Real) -> Real {
    4.18 * (t - 273.15) + 0.1 * p
}

pub fn h_vap_exact(t: Real, p: Real) -> Real {
    2500.0 + 1.9 * (t - 273.15) - 2.0 * p
}

pub fn s_liq_exact(t: Real, p: Real) -> Real {
    0.0135 * (t - 273.15) + 1.0e-4 * p
}

pub fn s_vap_exact(t: Real, p: Real) -> Real {
    9.2 - 0.004 * (t - 273.15) - 0.1 * p
}

pub fn property_table() -> PropertyTable {
    let schema = Schema::new([
        columns::H_LIQUID,
        columns::H_VAPOR,
        columns::S_LIQUID,
        columns::S_VAPOR,
    ])
    .unwrap();
    let rows = TEMPERATURES
        .iter()
        .flat_map(|&t| {
            PRESSURES.iter().map(move |&p| {
                PropertyRow::new(
                    t,
                    p,
                    [
                        h_liq_exact(t, p),
                        h_vap_exact(t, p),
                        s_liq_exact(t, p),
                        s_vap_exact(t, p),
                    ],
                )
            })
        })
        .collect();
    PropertyTable::new(schema, rows).unwrap()
}

/// Saturation curve from 290 K to 360 K with boundary enthalpies.
pub fn saturation_table() -> SaturationTable {
    let schema = Schema::new([columns::H_LIQUID, columns::H_VAPOR]).unwrap();
    SaturationTable::new(
        schema,
        vec![
            SaturationRow::new(290.0, 0.0192, [71.4, 2532.9]),
            SaturationRow::new(300.0, 0.0354, [112.6, 2550.9]),
            SaturationRow::new(350.0, 0.4168, [322.9, 2636.5]),
            SaturationRow::new(355.0, 0.5139, [343.9, 2642.5]),
            SaturationRow::new(360.0, 0.6209, [364.9, 2648.5]),
        ],
    )
    .unwrap()
}
