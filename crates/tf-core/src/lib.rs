//! tf-core: stable foundation for thermoflow transport.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real, tolerances, and the `StateValue` adapter for scalar/batch states)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TfError, TfResult};
pub use numeric::*;
pub use units::*;
