//! Sutherland viscosity.
//!
//! ```text
//! mu(T) = mu_ref * T^(3/2) / (T + T_ref)
//! ```

use crate::error::TransportResult;
use crate::law::{TransportLaw, TransportProperty, ViscosityLaw, check_coeffs, fmt_coeffs};
use core::fmt;
use tf_core::numeric::ModelReal;

/// Sutherland viscosity law with coefficients `[mu_ref, t_ref]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SutherlandViscosity<C = f64> {
    coeffs: [C; 2],
}

impl<C: ModelReal> SutherlandViscosity<C> {
    /// Reference viscosity [Pa·s/K^(1/2)].
    pub fn mu_ref(&self) -> C {
        self.coeffs[0]
    }

    /// Sutherland temperature [K].
    pub fn t_ref(&self) -> C {
        self.coeffs[1]
    }
}

impl<C: ModelReal> TransportLaw for SutherlandViscosity<C> {
    type Coeff = C;

    const NAME: &'static str = "Sutherland";
    const ARITY: usize = 2;
    const PROPERTY: TransportProperty = TransportProperty::Viscosity;

    fn new(coeffs: &[C]) -> TransportResult<Self> {
        check_coeffs(Self::NAME, Self::ARITY, coeffs)?;
        Ok(Self {
            coeffs: [coeffs[0], coeffs[1]],
        })
    }

    #[inline]
    fn eval_element(&self, t: C) -> C {
        let [mu_ref, t_ref] = self.coeffs;
        mu_ref * t * t.sqrt() / (t + t_ref)
    }

    fn coeffs(&self) -> &[C] {
        &self.coeffs
    }
}

impl<C: ModelReal> ViscosityLaw for SutherlandViscosity<C> {}

impl<C: ModelReal> fmt::Display for SutherlandViscosity<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", Self::NAME)?;
        fmt_coeffs(f, &self.coeffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tf_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn air_at_reference_conditions() {
        let mu = SutherlandViscosity::new(&[1.458e-6, 110.4]).unwrap();
        assert_eq!(mu.mu_ref(), 1.458e-6);
        assert_eq!(mu.t_ref(), 110.4);

        // Air at 300 K is about 1.85e-5 Pa·s
        let v = mu.evaluate(&300.0_f64);
        let tol = Tolerances {
            abs: 0.0,
            rel: 1e-2,
        };
        assert!(nearly_equal(v, 1.85e-5, tol), "mu = {v}");
    }

    #[test]
    fn increases_with_temperature() {
        let mu = SutherlandViscosity::new(&[1.458e-6, 110.4]).unwrap();
        let [a, b, c] = mu.evaluate(&[200.0_f64, 300.0, 400.0]);
        assert!(a < b && b < c);
    }

    #[test]
    fn wrong_arity_rejected() {
        assert!(SutherlandViscosity::new(&[1.0_f64]).is_err());
        assert!(SutherlandViscosity::new(&[1.0_f64, 2.0, 3.0]).is_err());
    }
}
