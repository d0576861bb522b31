// tf-core/src/units.rs

use uom::si::f64::{
    DynamicViscosity as UomDynamicViscosity,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type DynVisc = UomDynamicViscosity;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

/// Temperature as a bare kelvin value, the form transport fits are written in.
#[inline]
pub fn kelvin(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

/// Dynamic viscosity as a bare Pa·s value.
#[inline]
pub fn pascal_seconds(mu: DynVisc) -> f64 {
    use uom::si::dynamic_viscosity::pascal_second;
    mu.get::<pascal_second>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _t = k(300.0);
        let _mu = pa_s(1.8e-5);
    }

    #[test]
    fn bare_values_round_trip() {
        assert_eq!(kelvin(k(300.0)), 300.0);
        assert_eq!(pascal_seconds(pa_s(1.8e-5)), 1.8e-5);
    }

    #[test]
    fn celsius_converts_to_kelvin() {
        use uom::si::thermodynamic_temperature::degree_celsius;
        let t = Temperature::new::<degree_celsius>(26.85);
        assert!((kelvin(t) - 300.0).abs() < 1e-9);
    }
}
