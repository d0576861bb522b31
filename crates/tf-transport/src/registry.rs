//! Species name registry.
//!
//! The mixture owns the mapping between species names and their dense
//! indices. Transport containers only read it.

use crate::error::{TransportError, TransportResult};
use std::collections::HashMap;

/// Read-only lookup between species names and mixture indices.
pub trait SpeciesRegistry {
    /// Index of a species, or `None` if the mixture does not contain it.
    fn index_of(&self, name: &str) -> Option<usize>;

    /// Name of the species at `index`.
    fn name_of(&self, index: usize) -> Option<&str>;

    /// Number of species in the mixture.
    fn species_count(&self) -> usize;
}

/// Ordered list of species names with O(1) reverse lookup.
///
/// Index `i` is the position of the name in the list given at construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct SpeciesList {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl SpeciesList {
    /// Build a registry from species names in mixture order.
    ///
    /// Names must be unique.
    pub fn new<I, S>(names: I) -> TransportResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(TransportError::DuplicateSpecies {
                    name: name.clone(),
                    index: i,
                });
            }
        }
        Ok(Self { names, index })
    }

    /// Names in mixture order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// True for a mixture with no species.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl SpeciesRegistry for SpeciesList {
    fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    fn name_of(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    fn species_count(&self) -> usize {
        self.names.len()
    }
}

impl TryFrom<Vec<String>> for SpeciesList {
    type Error = TransportError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<SpeciesList> for Vec<String> {
    fn from(list: SpeciesList) -> Self {
        list.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_both_ways() {
        let list = SpeciesList::new(["N2", "O2", "N"]).unwrap();
        assert_eq!(list.species_count(), 3);
        assert_eq!(list.index_of("O2"), Some(1));
        assert_eq!(list.name_of(2), Some("N"));
        assert_eq!(list.index_of("NO"), None);
        assert_eq!(list.name_of(3), None);
    }

    #[test]
    fn names_are_case_sensitive() {
        let list = SpeciesList::new(["N", "n"]).unwrap();
        assert_eq!(list.index_of("N"), Some(0));
        assert_eq!(list.index_of("n"), Some(1));
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = SpeciesList::new(["N2", "O2", "N2"]).unwrap_err();
        assert_eq!(
            err,
            TransportError::DuplicateSpecies {
                name: "N2".into(),
                index: 2
            }
        );
    }

    #[test]
    fn empty_registry() {
        let list = SpeciesList::new(Vec::<String>::new()).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.species_count(), 0);
    }
}
