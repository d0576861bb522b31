//! Transport law trait: one fitted functional form per species.

use crate::error::{CoeffDefect, TransportError, TransportResult};
use core::fmt;
use tf_core::numeric::{ModelReal, StateValue};

/// Physical property a transport law describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportProperty {
    /// Dynamic viscosity [Pa·s]
    Viscosity,
    /// Thermal conductivity [W/(m·K)]
    ThermalConductivity,
    /// Mass diffusivity [m²/s]
    Diffusivity,
}

impl TransportProperty {
    /// Short symbol used in diagnostic output, e.g. `mu(N2) = ...`.
    pub fn symbol(&self) -> &'static str {
        match self {
            TransportProperty::Viscosity => "mu",
            TransportProperty::ThermalConductivity => "k",
            TransportProperty::Diffusivity => "D",
        }
    }
}

/// A per-species transport law with fitted coefficients.
///
/// Implementations are pure functions of state once constructed: `evaluate`
/// never mutates and may be called from many threads at once. All instances
/// held by one [`MixtureTransport`](crate::MixtureTransport) share the same
/// implementing type.
pub trait TransportLaw: Sized + Send + Sync + fmt::Debug + fmt::Display {
    /// Scalar type the coefficients are stored in.
    type Coeff: ModelReal;

    /// Name of the functional form, used in errors and printing.
    const NAME: &'static str;

    /// Number of coefficients the functional form takes.
    const ARITY: usize;

    /// Property this law computes.
    const PROPERTY: TransportProperty;

    /// Build a law from an ordered coefficient list.
    ///
    /// Fails with [`TransportError::InvalidCoefficients`] when the count does
    /// not match [`Self::ARITY`] or an entry is NaN/inf; the
    /// [`CoeffDefect`] says which.
    fn new(coeffs: &[Self::Coeff]) -> TransportResult<Self>;

    /// Evaluate the law at a single temperature.
    fn eval_element(&self, t: Self::Coeff) -> Self::Coeff;

    /// Currently stored coefficients, in fit order.
    fn coeffs(&self) -> &[Self::Coeff];

    /// Evaluate at a scalar or batched state.
    ///
    /// Batches are evaluated element by element with [`Self::eval_element`],
    /// so each element of the result equals the scalar result for that
    /// element.
    #[inline]
    fn evaluate<S>(&self, state: &S) -> S
    where
        S: StateValue<Element = Self::Coeff>,
    {
        state.map_elements(|t| self.eval_element(t))
    }

    /// Replace the coefficients.
    ///
    /// The replacement is built before anything is overwritten, so on error
    /// the previous coefficients are left untouched.
    fn reset_coeffs(&mut self, coeffs: &[Self::Coeff]) -> TransportResult<()> {
        let fresh = Self::new(coeffs)?;
        *self = fresh;
        Ok(())
    }
}

/// Check a coefficient list against a functional form's arity, then check
/// that every entry is finite.
pub fn check_coeffs<C: ModelReal>(
    law: &'static str,
    arity: usize,
    coeffs: &[C],
) -> TransportResult<()> {
    if coeffs.len() != arity {
        return Err(TransportError::InvalidCoefficients {
            law,
            defect: CoeffDefect::Arity {
                expected: arity,
                found: coeffs.len(),
            },
        });
    }
    if let Some(position) = coeffs.iter().position(|c| !c.is_finite()) {
        return Err(TransportError::InvalidCoefficients {
            law,
            defect: CoeffDefect::NonFinite { position },
        });
    }
    Ok(())
}

/// Write a coefficient list as `{a,b,c}`.
pub(crate) fn fmt_coeffs<C: fmt::Display>(f: &mut fmt::Formatter<'_>, coeffs: &[C]) -> fmt::Result {
    f.write_str("{")?;
    for (i, c) in coeffs.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("}")
}

/// Marker for laws that produce dynamic viscosity.
pub trait ViscosityLaw: TransportLaw {}
