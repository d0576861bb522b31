//! tf-transport: per-species transport properties for gas mixtures.
//!
//! Provides:
//! - `TransportLaw` trait for fitted functional forms (viscosity, conductivity, diffusivity)
//! - Blottner and Sutherland viscosity laws
//! - `SpeciesRegistry` lookup and the `SpeciesList` implementation
//! - `MixtureTransport`, one law per species in mixture order
//!
//! # Architecture
//!
//! A mixing rule (Wilke etc.) lives outside this crate. It asks the container
//! for each species' value at a shared state and combines them; the container
//! only stores, populates and evaluates the per-species laws. States may be a
//! single temperature or a batch (see `tf_core::numeric::StateValue`).
//!
//! # Example
//!
//! ```
//! use tf_transport::{BlottnerViscosity, MixtureViscosity, SpeciesList, SpeciesRegistry};
//!
//! let species = SpeciesList::new(["N2", "O2", "N"]).unwrap();
//! let mut mu: MixtureViscosity<BlottnerViscosity> = MixtureViscosity::new(&species);
//! mu.add("O2", &[4.49e-02, -8.26158e-02, -9.20194656]).unwrap();
//!
//! let o2 = species.index_of("O2").unwrap();
//! let scalar = mu.evaluate(o2, &300.0).unwrap();
//! let batch = mu.evaluate(o2, &vec![300.0; 4]).unwrap();
//! assert!(batch.iter().all(|&v| v == scalar));
//! ```

pub mod blottner;
pub mod error;
pub mod law;
pub mod mixture;
pub mod records;
pub mod registry;
pub mod sutherland;

// Re-exports for ergonomics
pub use blottner::BlottnerViscosity;
pub use error::{CoeffDefect, TransportError, TransportResult};
pub use law::{TransportLaw, TransportProperty, ViscosityLaw};
pub use mixture::{MixtureTransport, MixtureViscosity};
pub use records::CoefficientRecord;
pub use registry::{SpeciesList, SpeciesRegistry};
pub use sutherland::SutherlandViscosity;
