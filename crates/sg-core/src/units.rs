// sg-core/src/units.rs

use crate::numeric::Real;
use uom::si::f64::{Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

/// Specific enthalpy [kJ/kg].
///
/// Tables carry it in kJ/kg, which uom has no dedicated quantity for,
/// so we use f64 with clear documentation.
pub type SpecEnthalpy = Real;

/// Specific entropy [kJ/(kg·K)].
pub type SpecEntropy = Real;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

/// Pressure in bar, the table's pressure unit.
#[inline]
pub fn bar_of(p: Pressure) -> Real {
    p.get::<uom::si::pressure::bar>()
}

/// Temperature in kelvin, the table's temperature unit.
#[inline]
pub fn kelvin_of(t: Temperature) -> Real {
    t.get::<uom::si::thermodynamic_temperature::kelvin>()
}
