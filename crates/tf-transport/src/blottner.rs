//! Blottner curve-fit viscosity.
//!
//! ```text
//! mu(T) = 0.1 * exp((a ln T + b) ln T + c)      [Pa·s]
//! ```
//!
//! Tabulated Blottner fits return poise; the factor 0.1 converts to SI.

use crate::error::TransportResult;
use crate::law::{TransportLaw, TransportProperty, ViscosityLaw, check_coeffs, fmt_coeffs};
use core::fmt;
use tf_core::numeric::ModelReal;

/// Blottner viscosity law with coefficients `[a, b, c]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlottnerViscosity<C = f64> {
    coeffs: [C; 3],
    /// Poise to Pa·s.
    scale: C,
}

impl<C: ModelReal> TransportLaw for BlottnerViscosity<C> {
    type Coeff = C;

    const NAME: &'static str = "Blottner";
    const ARITY: usize = 3;
    const PROPERTY: TransportProperty = TransportProperty::Viscosity;

    fn new(coeffs: &[C]) -> TransportResult<Self> {
        check_coeffs(Self::NAME, Self::ARITY, coeffs)?;
        Ok(Self {
            coeffs: [coeffs[0], coeffs[1], coeffs[2]],
            scale: C::from_real(0.1),
        })
    }

    #[inline]
    fn eval_element(&self, t: C) -> C {
        let [a, b, c] = self.coeffs;
        let ln_t = t.ln();
        self.scale * ((a * ln_t + b) * ln_t + c).exp()
    }

    fn coeffs(&self) -> &[C] {
        &self.coeffs
    }
}

impl<C: ModelReal> ViscosityLaw for BlottnerViscosity<C> {}

impl<C: ModelReal> fmt::Display for BlottnerViscosity<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", Self::NAME)?;
        fmt_coeffs(f, &self.coeffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoeffDefect, TransportError};
    use tf_core::numeric::{Tolerances, nearly_equal};

    const N2: [f64; 3] = [2.68e-02, 3.177838e-01, -1.13155513e+01];

    #[test]
    fn nitrogen_at_300k() {
        let mu = BlottnerViscosity::new(&N2).unwrap();
        let t: f64 = 300.0;
        let expected = 0.1 * ((N2[0] * t.ln() + N2[1]) * t.ln() + N2[2]).exp();
        assert_eq!(mu.evaluate(&t), expected);

        // N2 at room temperature is about 1.78e-5 Pa·s
        let tol = Tolerances {
            abs: 0.0,
            rel: 1e-2,
        };
        assert!(nearly_equal(expected, 1.78e-5, tol), "mu = {expected}");
    }

    #[test]
    fn wrong_arity_rejected() {
        let err = BlottnerViscosity::new(&[1.0_f64, 2.0]).unwrap_err();
        assert_eq!(
            err,
            TransportError::InvalidCoefficients {
                law: "Blottner",
                defect: CoeffDefect::Arity {
                    expected: 3,
                    found: 2
                }
            }
        );
        assert!(BlottnerViscosity::new(&[1.0_f64, 2.0, 3.0, 4.0]).is_err());
    }

    #[test]
    fn reset_is_all_or_nothing() {
        let mut mu = BlottnerViscosity::new(&N2).unwrap();
        assert!(mu.reset_coeffs(&[1.0]).is_err());
        assert_eq!(mu.coeffs(), &N2);

        mu.reset_coeffs(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(mu.coeffs(), &[0.0, 0.0, 0.0]);
        assert_eq!(mu.evaluate(&1234.0_f64), 0.1);
    }

    #[test]
    fn single_precision() {
        let mu = BlottnerViscosity::<f32>::new(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(mu.evaluate(&300.0_f32), 0.1_f32);
    }

    #[test]
    fn display_lists_coefficients() {
        let mu = BlottnerViscosity::new(&[1.0_f64, -2.5, 3.0]).unwrap();
        assert_eq!(mu.to_string(), "Blottner {1,-2.5,3}");
    }
}
