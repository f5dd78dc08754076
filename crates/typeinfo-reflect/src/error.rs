use thiserror::Error;
use typeinfo_core::{CoreError, QualifiedNameError};

#[derive(Error, Debug)]
pub enum ReflectError {
    #[error("Unsupported {shape} type: {context}")]
    UnsupportedShape {
        shape: &'static str,
        context: String,
    },

    #[error("Type '{name}' declares {expected} type parameter(s) but {found} argument(s) were supplied")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid declaration name: {0}")]
    InvalidName(#[from] QualifiedNameError),

    #[error(transparent)]
    Core(#[from] CoreError),
}
