//! Error types for the IR crate.

use crate::qubit::GridQubit;
use thiserror::Error;

/// Errors that can occur when constructing IR values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Two operations in one moment address the same qubit.
    #[error("Qubit {qubit} addressed by more than one operation in a moment")]
    QubitConflict {
        /// The doubly-addressed qubit.
        qubit: GridQubit,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
