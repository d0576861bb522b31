//! Transport-property errors.

use core::fmt;
use tf_core::TfError;
use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors raised while populating or evaluating species transport laws.
///
/// Every variant is a defect in the input data or in the caller's use of
/// the container; none of them are transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// Species name not known to the mixture registry.
    #[error("Unknown species '{name}'")]
    UnknownSpecies { name: String },

    /// Species already has a transport law.
    #[error("Duplicate species '{name}' (index={index})")]
    DuplicateSpecies { name: String, index: usize },

    /// Coefficients rejected by the functional form.
    #[error("Invalid coefficients for {law}: {defect}")]
    InvalidCoefficients {
        law: &'static str,
        defect: CoeffDefect,
    },

    /// Species index outside `[0, N)`.
    #[error("Species index out of range (index={index}, len={len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// No transport law has been added for this species yet.
    #[error("No transport law for species index {index}")]
    SlotNotPopulated { index: usize },
}

/// Why a coefficient list was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoeffDefect {
    /// Count does not match the law's arity.
    Arity { expected: usize, found: usize },
    /// NaN or infinite entry.
    NonFinite { position: usize },
}

impl fmt::Display for CoeffDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoeffDefect::Arity { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            CoeffDefect::NonFinite { position } => {
                write!(f, "non-finite value at position {position}")
            }
        }
    }
}

impl From<TransportError> for TfError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::UnknownSpecies { name } => TfError::InvalidArg {
                what: format!("unknown species '{name}'"),
            },
            TransportError::DuplicateSpecies { name, index } => TfError::Invariant {
                what: format!("species '{name}' (index {index}) populated twice"),
            },
            err @ TransportError::InvalidCoefficients { .. } => TfError::InvalidArg {
                what: err.to_string(),
            },
            TransportError::IndexOutOfRange { index, len } => TfError::IndexOob {
                what: "species slot",
                index,
                len,
            },
            TransportError::SlotNotPopulated { index } => TfError::Missing {
                what: format!("transport law for species index {index}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TransportError::UnknownSpecies { name: "Xe".into() };
        assert!(err.to_string().contains("Xe"));

        let err = TransportError::InvalidCoefficients {
            law: "Blottner",
            defect: CoeffDefect::Arity {
                expected: 3,
                found: 2,
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("Blottner"));
        assert!(msg.contains("expected 3"));

        let err = TransportError::InvalidCoefficients {
            law: "Sutherland",
            defect: CoeffDefect::NonFinite { position: 1 },
        };
        assert!(err.to_string().contains("non-finite value at position 1"));
    }

    #[test]
    fn error_to_tf_error() {
        let tf_err: TfError = TransportError::IndexOutOfRange { index: 3, len: 3 }.into();
        assert_eq!(
            tf_err,
            TfError::IndexOob {
                what: "species slot",
                index: 3,
                len: 3
            }
        );

        let tf_err: TfError = TransportError::SlotNotPopulated { index: 1 }.into();
        assert!(matches!(tf_err, TfError::Missing { .. }));

        let tf_err: TfError = TransportError::DuplicateSpecies {
            name: "O2".into(),
            index: 1,
        }
        .into();
        assert!(matches!(tf_err, TfError::Invariant { .. }));

        let tf_err: TfError = TransportError::InvalidCoefficients {
            law: "Blottner",
            defect: CoeffDefect::NonFinite { position: 0 },
        }
        .into();
        assert!(matches!(tf_err, TfError::InvalidArg { .. }));
    }
}
