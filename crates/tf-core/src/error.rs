use thiserror::Error;

pub type TfResult<T> = Result<T, TfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TfError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Missing data: {what}")]
    Missing { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
