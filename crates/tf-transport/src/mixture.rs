//! Species-indexed container of transport laws.

use crate::error::{TransportError, TransportResult};
use crate::law::{TransportLaw, ViscosityLaw};
use crate::records::CoefficientRecord;
use crate::registry::{SpeciesList, SpeciesRegistry};
use core::fmt;
use tf_core::numeric::StateValue;
use tf_core::units::{DynVisc, Temperature, kelvin, pa_s};
use tracing::{debug, trace, warn};

/// One transport law slot per species, in mixture order.
///
/// The slot count is fixed by the registry at construction. Slots start
/// empty and are populated once each through [`MixtureTransport::add`];
/// populated laws are owned by the container and dropped with it.
///
/// Mixing rules read the per-species values through
/// [`MixtureTransport::evaluate`] or [`MixtureTransport::species_laws`];
/// the container itself never combines species.
///
/// Evaluation takes `&self` and laws are `Send + Sync`, so a populated
/// container can be evaluated from many threads at once. Population and
/// resets take `&mut self`.
pub struct MixtureTransport<'m, L, R: ?Sized = SpeciesList> {
    registry: &'m R,
    laws: Vec<Option<L>>,
}

/// Container specialised to viscosity laws.
pub type MixtureViscosity<'m, L, R = SpeciesList> = MixtureTransport<'m, L, R>;

impl<'m, L, R> MixtureTransport<'m, L, R>
where
    L: TransportLaw,
    R: SpeciesRegistry + ?Sized,
{
    /// Create a container with one empty slot per registered species.
    pub fn new(registry: &'m R) -> Self {
        let n = registry.species_count();
        let mut laws = Vec::with_capacity(n);
        laws.resize_with(n, || None);
        Self { registry, laws }
    }

    /// Registry this container is bound to.
    pub fn registry(&self) -> &'m R {
        self.registry
    }

    /// Number of slots (equal to the mixture's species count).
    pub fn species_count(&self) -> usize {
        self.laws.len()
    }

    /// Add the transport law for `species_name`.
    ///
    /// Fails without touching any slot when the name is unknown, when the
    /// species already has a law, or when the coefficients are rejected by
    /// the law.
    pub fn add(&mut self, species_name: &str, coeffs: &[L::Coeff]) -> TransportResult<()> {
        let index = self.registry.index_of(species_name).ok_or_else(|| {
            TransportError::UnknownSpecies {
                name: species_name.to_string(),
            }
        })?;
        let len = self.laws.len();
        let slot = self
            .laws
            .get_mut(index)
            .ok_or(TransportError::IndexOutOfRange { index, len })?;
        if slot.is_some() {
            return Err(TransportError::DuplicateSpecies {
                name: species_name.to_string(),
                index,
            });
        }
        *slot = Some(L::new(coeffs)?);
        debug!(species = species_name, index, law = L::NAME, "added transport law");
        Ok(())
    }

    /// Add one parsed record.
    pub fn add_record(&mut self, record: &CoefficientRecord<L::Coeff>) -> TransportResult<()> {
        self.add(&record.species, &record.coeffs)
    }

    /// Add every record in order, stopping at the first rejected one.
    ///
    /// Returns the number of records added.
    pub fn populate<I>(&mut self, records: I) -> TransportResult<usize>
    where
        I: IntoIterator<Item = CoefficientRecord<L::Coeff>>,
    {
        let mut added = 0;
        for record in records {
            if let Err(err) = self.add_record(&record) {
                warn!(species = %record.species, error = %err, "rejected coefficient record");
                return Err(err);
            }
            added += 1;
        }
        Ok(added)
    }

    /// Replace the coefficients of the law in slot `s`.
    ///
    /// On error the slot keeps its previous coefficients.
    pub fn reset_coeffs(&mut self, s: usize, coeffs: &[L::Coeff]) -> TransportResult<()> {
        self.law_mut(s)?.reset_coeffs(coeffs)?;
        debug!(index = s, law = L::NAME, "reset transport coefficients");
        Ok(())
    }

    /// Evaluate species `s` at `state`.
    ///
    /// `state` may be a scalar or a batch; the result has the same
    /// representation.
    #[inline]
    pub fn evaluate<S>(&self, s: usize, state: &S) -> TransportResult<S>
    where
        S: StateValue<Element = L::Coeff>,
    {
        Ok(self.law(s)?.evaluate(state))
    }

    /// Law in slot `s`.
    pub fn law(&self, s: usize) -> TransportResult<&L> {
        self.laws
            .get(s)
            .ok_or(TransportError::IndexOutOfRange {
                index: s,
                len: self.laws.len(),
            })?
            .as_ref()
            .ok_or(TransportError::SlotNotPopulated { index: s })
    }

    fn law_mut(&mut self, s: usize) -> TransportResult<&mut L> {
        let len = self.laws.len();
        self.laws
            .get_mut(s)
            .ok_or(TransportError::IndexOutOfRange { index: s, len })?
            .as_mut()
            .ok_or(TransportError::SlotNotPopulated { index: s })
    }

    /// All slots in mixture order; `None` marks a species without a law.
    pub fn species_laws(&self) -> &[Option<L>] {
        &self.laws
    }

    /// Iterate `(index, law)` over all slots.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<&L>)> + '_ {
        self.laws.iter().enumerate().map(|(s, law)| (s, law.as_ref()))
    }

    /// True when every species has a law.
    pub fn is_complete(&self) -> bool {
        self.laws.iter().all(Option::is_some)
    }

    /// Names of species that still have no law.
    pub fn missing_species(&self) -> Vec<&'m str> {
        let registry = self.registry;
        self.laws
            .iter()
            .enumerate()
            .filter(|(_, law)| law.is_none())
            .filter_map(|(s, _)| registry.name_of(s))
            .collect()
    }

    /// Write `sym(name) = value` for every populated species at
    /// `reference`.
    ///
    /// Empty slots are skipped rather than reported as errors.
    pub fn print<W: fmt::Write>(&self, sink: &mut W, reference: L::Coeff) -> fmt::Result {
        let symbol = L::PROPERTY.symbol();
        for (s, law) in self.iter() {
            let (Some(law), Some(name)) = (law, self.registry.name_of(s)) else {
                trace!(index = s, "skipping species without transport law");
                continue;
            };
            writeln!(sink, "{symbol}({name}) = {}", law.eval_element(reference))?;
        }
        Ok(())
    }
}

impl<'m, L, R> MixtureTransport<'m, L, R>
where
    L: ViscosityLaw<Coeff = f64>,
    R: SpeciesRegistry + ?Sized,
{
    /// Dynamic viscosity of species `s` at temperature `t`.
    pub fn viscosity(&self, s: usize, t: Temperature) -> TransportResult<DynVisc> {
        self.evaluate(s, &kelvin(t)).map(pa_s)
    }
}

impl<L, R> fmt::Display for MixtureTransport<'_, L, R>
where
    L: TransportLaw,
    R: SpeciesRegistry + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = L::PROPERTY.symbol();
        for (s, law) in self.iter() {
            if let (Some(law), Some(name)) = (law, self.registry.name_of(s)) {
                writeln!(f, "{symbol}({name}) = {law}")?;
            }
        }
        Ok(())
    }
}

impl<L: fmt::Debug, R: ?Sized> fmt::Debug for MixtureTransport<'_, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MixtureTransport")
            .field("laws", &self.laws)
            .finish_non_exhaustive()
    }
}
