//! Coefficient records as delivered by a data-file parser.

/// One species' fitted coefficients for a single transport property.
///
/// Coefficient order is the fit order of the functional form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoefficientRecord<C = f64> {
    pub species: String,
    pub coeffs: Vec<C>,
}

impl<C> CoefficientRecord<C> {
    /// Record for `species` with coefficients in fit order.
    pub fn new(species: impl Into<String>, coeffs: Vec<C>) -> Self {
        Self {
            species: species.into(),
            coeffs,
        }
    }
}
