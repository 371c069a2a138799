//! Error types for device validation.

use lattica_ir::GridQubit;
use thiserror::Error;

/// Constraint violations surfaced by device validation.
///
/// All variants are synchronous precondition failures on caller-supplied
/// data: validation either succeeds or fails deterministically on identical
/// input, and nothing is retried or recovered internally.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeviceError {
    /// Operation carries no gate the device can reason about.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Gate kind outside the device's allowed set, or without a timing rule.
    #[error("Unsupported gate type: {0}")]
    UnsupportedGate(String),

    /// Operand references a qubit outside the device's topology.
    #[error("Qubit not on device: {0}")]
    QubitNotOnDevice(GridQubit),

    /// Two-operand operation whose operands are not grid-adjacent.
    #[error("Non-local interaction: {0}")]
    NonLocalInteraction(String),

    /// Two concurrently-active interactions on mutually adjacent qubits.
    #[error("Adjacent interactions: {first} and {second}")]
    AdjacentInteraction {
        /// The interaction being validated.
        first: String,
        /// The concurrently-active operation it conflicts with.
        second: String,
    },

    /// The same measurement key appears twice in one validation scope.
    #[error("Measurement key '{0}' repeated")]
    DuplicateMeasurementKey(String),

    /// Acquaintance size queried on a circuit not built as a strategy.
    #[error("Circuit '{0}' is not an acquaintance strategy")]
    NotAcquaintanceStrategy(String),

    /// A capability this device variant does not provide.
    #[error("{0} is not supported by this device")]
    NotSupported(&'static str),
}

/// Result type for device validation.
pub type DeviceResult<T> = Result<T, DeviceError>;
